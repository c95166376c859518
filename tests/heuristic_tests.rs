use fieldplan::{
    covered_zones, heuristic, heuristic_with_radius, state_heuristic, Catalog, DeliveryDef,
    FieldPlanner, Point, ShotProfile, ZoneDef, ZoneSet, COVERAGE_RADIUS, DELIVERIES,
};

const STRAIGHT: [ZoneDef; 1] = [ZoneDef::new("Straight", -10.0, 10.0, 0.5)];
const STRAIGHT_SHOTS: [DeliveryDef; 1] = [DeliveryDef::new("drive", &[("Straight", 1.0)])];

fn yorker() -> (Catalog, ShotProfile) {
    let catalog = Catalog::standard();
    let profile = ShotProfile::resolve(&DELIVERIES[0], &catalog).unwrap();
    (catalog, profile)
}

#[test]
fn test_empty_positions_is_full_risk() {
    for def in DELIVERIES.iter() {
        let catalog = Catalog::standard();
        let profile = ShotProfile::resolve(def, &catalog).unwrap();
        let expected: f64 = profile
            .entries()
            .iter()
            .map(|&(id, p)| p * catalog.risk(id))
            .sum();
        let h = heuristic(&catalog, &[], &profile);
        assert!((h - expected).abs() < 1e-4, "{}: {} vs {}", def.name(), h, expected);
    }
}

#[test]
fn test_fielder_on_center_covers_zone() {
    let (catalog, profile) = yorker();
    let fine_leg = catalog.index_of("Fine Leg").unwrap();
    let h = heuristic(&catalog, &[catalog.center(fine_leg)], &profile);
    assert_eq!(h, 0.585);
}

#[test]
fn test_all_profile_zones_covered_is_zero() {
    let (catalog, profile) = yorker();
    let h = state_heuristic(&catalog, &profile.zones(), &profile, COVERAGE_RADIUS);
    assert_eq!(h, 0.0);
}

#[test]
fn test_non_profile_position_covers_nothing_far_away() {
    let (catalog, profile) = yorker();
    // Point sits opposite the yorker zones
    let point = catalog.index_of("Point").unwrap();
    assert_eq!(heuristic(&catalog, &[catalog.center(point)], &profile), 0.825);
}

#[test]
fn test_coverage_radius_is_strict() {
    let planner = FieldPlanner::new(&STRAIGHT, &STRAIGHT_SHOTS).unwrap();
    let catalog = planner.catalog();
    let profile = planner.profile("drive");
    assert_eq!(catalog.center(0), Point::new(0.65, 0.0));

    let on_edge = Point::new(0.65, COVERAGE_RADIUS);
    assert_eq!(heuristic(catalog, &[on_edge], &profile), 0.5);

    let inside = Point::new(0.65, 0.3499);
    assert_eq!(heuristic(catalog, &[inside], &profile), 0.0);

    // a wider radius picks up the edge position
    assert_eq!(heuristic_with_radius(catalog, &[on_edge], &profile, 0.36), 0.0);
}

#[test]
fn test_nearest_zone_tie_goes_to_first_in_catalog() {
    let zones = [
        ZoneDef::new("First", 0.0, 20.0, 0.4),
        ZoneDef::new("Second", 0.0, 20.0, 0.6),
    ];
    let deliveries = [DeliveryDef::new("flat", &[("Second", 1.0), ("First", 1.0)])];
    let planner = FieldPlanner::new(&zones, &deliveries).unwrap();
    let catalog = planner.catalog();
    let profile = planner.profile("flat");

    let covered = covered_zones(catalog, &[catalog.center(1)], &profile, COVERAGE_RADIUS);
    assert_eq!(covered, ZoneSet::from_iter([0]).unwrap());
    assert_eq!(heuristic(catalog, &[catalog.center(1)], &profile), 0.6);
}

#[test]
fn test_one_fielder_covers_one_zone() {
    let (catalog, profile) = yorker();
    let fine_leg = catalog.center(catalog.index_of("Fine Leg").unwrap());
    // Two fielders on the same spot still guard a single zone
    let h = heuristic(&catalog, &[fine_leg, fine_leg], &profile);
    assert_eq!(h, 0.585);
}

#[test]
fn test_full_coverage_is_positive_zero() {
    let (catalog, profile) = yorker();
    let h = state_heuristic(&catalog, &catalog.all(), &profile, COVERAGE_RADIUS);
    assert_eq!(h, 0.0);
    assert!(!h.is_sign_negative());
}
