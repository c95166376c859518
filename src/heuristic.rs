// Uncovered-risk estimate used as h(n) by the placement search.
// Pure arithmetic over the catalog; no allocation beyond the zone set.

use crate::{
    catalog::Catalog,
    config::COVERAGE_RADIUS,
    profile::ShotProfile,
    zone::{round_to, Point},
    zoneset::ZoneSet,
};

/// Estimate the scoring risk left uncovered by fielders standing at
/// `positions`, using the default coverage radius.
///
/// Each fielder guards the profiled zone whose centre is nearest to it, but
/// only when strictly closer than the coverage radius. The result is the sum
/// of `probability × risk` over profiled zones nobody guards, rounded to four
/// decimals. Zero means every profiled zone is covered.
pub fn heuristic(catalog: &Catalog, positions: &[Point], profile: &ShotProfile) -> f64 {
    heuristic_with_radius(catalog, positions, profile, COVERAGE_RADIUS)
}

/// [`heuristic`] with an explicit coverage radius.
pub fn heuristic_with_radius(
    catalog: &Catalog,
    positions: &[Point],
    profile: &ShotProfile,
    coverage_radius: f64,
) -> f64 {
    let covered = covered_zones(catalog, positions, profile, coverage_radius);
    let uncovered_risk: f64 = profile
        .entries()
        .iter()
        .filter(|(id, _)| !covered.contains(*id))
        .map(|&(id, p)| p * catalog.risk(id))
        .sum();
    round_to(uncovered_risk, 4)
}

/// Zones of `profile` guarded by at least one of `positions`.
pub fn covered_zones(
    catalog: &Catalog,
    positions: &[Point],
    profile: &ShotProfile,
    coverage_radius: f64,
) -> ZoneSet {
    let mut covered = ZoneSet::new();
    for pos in positions {
        let mut best_zone = None;
        let mut best_dist = f64::INFINITY;
        // Entries are in catalog order, so the first minimum wins ties.
        for &(id, _) in profile.entries() {
            let d = pos.distance(&catalog.center(id));
            if d < best_dist {
                best_dist = d;
                best_zone = Some(id);
            }
        }
        if let Some(id) = best_zone {
            if best_dist < coverage_radius {
                covered.insert_unchecked(id);
            }
        }
    }
    covered
}

/// Heuristic for a search state: fielders stand on the centres of `state`.
pub fn state_heuristic(
    catalog: &Catalog,
    state: &ZoneSet,
    profile: &ShotProfile,
    coverage_radius: f64,
) -> f64 {
    let positions = catalog.centers_of(state);
    heuristic_with_radius(catalog, &positions, profile, coverage_radius)
}
