#![cfg(feature = "std")]

use crate::{catalog::Catalog, placement::Placement, profile::ShotProfile};

/// Print a placement the way the demo driver reports it: summary line plus
/// the `top` highest-coverage fielders.
pub fn print_placement(placement: &Placement, top: usize) {
    std::println!("\n[A* Field] Delivery: {}", placement.delivery.to_uppercase());
    if placement.fallback_profile {
        std::println!("  (unknown delivery, fallback profile)");
    }
    std::println!("  Efficiency : {}%", placement.efficiency);
    match placement.best_cost {
        Some(cost) => std::println!(
            "  f(n) score : {}  |  iterations: {}",
            cost, placement.iterations
        ),
        None => std::println!(
            "  f(n) score : n/a  |  iterations: {}",
            placement.iterations
        ),
    }
    std::println!(
        "  fielders   : {}  |  final h(n): {}",
        placement.assigned, placement.final_cost
    );
    for f in placement.fielders.iter().take(top) {
        std::println!(
            "  → {:20}  coverage={}  {}",
            f.zone,
            f.coverage,
            if f.is_key { "★ KEY" } else { "" }
        );
    }
}

/// Print every fielder of a placement with its label and position.
pub fn print_assignments(placement: &Placement) {
    std::println!("{:16} {:16} {:>16} {:>9}  key", "position", "zone", "point", "coverage");
    for f in &placement.fielders {
        std::println!(
            "{:16} {:16} {:>16} {:>9}  {}",
            f.name,
            f.zone,
            f.position.to_string(),
            f.coverage,
            if f.is_key { "yes" } else { "" }
        );
    }
}

/// Print the zone catalog: angles, risk and derived centre.
pub fn print_zone_table(catalog: &Catalog) {
    std::println!("{:16} {:>7} {:>7} {:>5} {:>16}", "zone", "start", "end", "risk", "centre");
    for (id, zone) in catalog.zones().iter().enumerate() {
        let (start, end) = zone.angle();
        std::println!(
            "{:16} {:>7} {:>7} {:>5} {:>16}",
            zone.name(),
            start,
            end,
            zone.risk(),
            catalog.center(id).to_string()
        );
    }
}

/// Print a delivery's shot profile.
pub fn print_profile(catalog: &Catalog, profile: &ShotProfile) {
    std::println!("{}:", profile.delivery());
    for &(id, p) in profile.entries() {
        std::println!("  {:16} p={:<5} risk={}", catalog.name(id), p, catalog.risk(id));
    }
}
