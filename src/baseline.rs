// Random-placement baseline for judging how much the search buys over chance.

use rand::seq::index;
use rand::Rng;

use crate::{
    catalog::Catalog, heuristic::state_heuristic, profile::ShotProfile, zoneset::ZoneSet,
};

/// Pick `fielders` distinct catalog zones uniformly at random. Asking for
/// more zones than the catalog holds returns the whole catalog.
pub fn random_zone_set<R: Rng + ?Sized>(catalog: &Catalog, fielders: usize, rng: &mut R) -> ZoneSet {
    let amount = fielders.min(catalog.len());
    let mut set = ZoneSet::new();
    for id in index::sample(rng, catalog.len(), amount) {
        set.insert_unchecked(id);
    }
    set
}

/// Mean uncovered risk of `samples` random assignments of `fielders` zones.
/// Returns the empty-field risk when `samples` is zero.
pub fn random_baseline_cost<R: Rng + ?Sized>(
    catalog: &Catalog,
    profile: &ShotProfile,
    fielders: usize,
    samples: usize,
    coverage_radius: f64,
    rng: &mut R,
) -> f64 {
    if samples == 0 {
        return state_heuristic(catalog, &ZoneSet::new(), profile, coverage_radius);
    }
    let total: f64 = (0..samples)
        .map(|_| {
            let set = random_zone_set(catalog, fielders, rng);
            state_heuristic(catalog, &set, profile, coverage_radius)
        })
        .sum();
    total / samples as f64
}
