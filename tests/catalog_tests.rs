use fieldplan::{
    Catalog, CatalogError, DeliveryDef, FieldPlanner, Point, ShotProfile, ZoneDef, DELIVERIES,
    FALLBACK_ZONES, NUM_ZONES, PLACEMENT_RADIUS, ZONES,
};

#[test]
fn test_builtin_tables_are_valid() {
    let catalog = Catalog::new(&ZONES, PLACEMENT_RADIUS).unwrap();
    assert_eq!(catalog, Catalog::standard());
    assert_eq!(catalog.len(), NUM_ZONES);
    assert!(FieldPlanner::new(&ZONES, &DELIVERIES).is_ok());
    for def in DELIVERIES.iter() {
        ShotProfile::resolve(def, &catalog).unwrap();
    }
}

#[test]
fn test_zone_centers() {
    let catalog = Catalog::standard();
    let fine_leg = catalog.index_of("Fine Leg").unwrap();
    assert_eq!(catalog.center(fine_leg), Point::new(-0.64, 0.113));
    let mid_off = catalog.index_of("Mid Off").unwrap();
    assert_eq!(catalog.center(mid_off), Point::new(0.65, 0.0));
    let point = catalog.index_of("Point").unwrap();
    assert_eq!(catalog.center(point), Point::new(0.141, -0.635));
    let slip = catalog.index_of("Slip").unwrap();
    assert_eq!(catalog.center(slip), Point::new(-0.65, 0.0));
}

#[test]
fn test_wrapping_interval_is_not_normalized() {
    // -200..-160 has midpoint -180, which projects to the same point as 180
    let zone = ZoneDef::new("Slip", -200.0, -160.0, 0.75);
    assert_eq!(zone.mid_angle(), -180.0);
    assert_eq!(zone.center(0.65), Point::new(-0.65, 0.0));
}

#[test]
fn test_catalog_validation_errors() {
    assert_eq!(Catalog::new(&[], 0.65).unwrap_err(), CatalogError::Empty);

    let dup = [
        ZoneDef::new("A", 0.0, 10.0, 0.5),
        ZoneDef::new("A", 20.0, 30.0, 0.5),
    ];
    assert_eq!(
        Catalog::new(&dup, 0.65).unwrap_err(),
        CatalogError::DuplicateZone("A")
    );

    let bad_risk = [ZoneDef::new("A", 0.0, 10.0, 0.0)];
    assert!(matches!(
        Catalog::new(&bad_risk, 0.65),
        Err(CatalogError::InvalidRisk { zone: "A", .. })
    ));

    let non_finite = [ZoneDef::new("A", f64::INFINITY, 10.0, 0.5)];
    assert_eq!(
        Catalog::new(&non_finite, 0.65).unwrap_err(),
        CatalogError::NonFiniteCenter("A")
    );

    let too_many = vec![ZoneDef::new("A", 0.0, 10.0, 0.5); 65];
    assert_eq!(
        Catalog::new(&too_many, 0.65).unwrap_err(),
        CatalogError::TooManyZones { len: 65, capacity: 64 }
    );
}

#[test]
fn test_profile_validation_errors() {
    let zones = [ZoneDef::new("A", 0.0, 10.0, 0.5)];
    let unknown = [DeliveryDef::new("googly", &[("B", 0.5)])];
    assert_eq!(
        FieldPlanner::new(&zones, &unknown).unwrap_err(),
        CatalogError::UnknownProfileZone { delivery: "googly", zone: "B" }
    );

    let bad_prob = [DeliveryDef::new("googly", &[("A", 1.5)])];
    assert!(matches!(
        FieldPlanner::new(&zones, &bad_prob),
        Err(CatalogError::InvalidProbability { .. })
    ));
}

#[test]
fn test_profile_entries_follow_catalog_order() {
    let catalog = Catalog::standard();
    let profile = ShotProfile::resolve(&DELIVERIES[0], &catalog).unwrap();
    assert_eq!(profile.delivery(), "yorker");
    let names: Vec<_> = profile.entries().iter().map(|&(id, _)| catalog.name(id)).collect();
    assert_eq!(names, vec!["Fine Leg", "Square Leg", "Mid Wicket", "Mid On", "Cover"]);
    assert_eq!(profile.probability(catalog.index_of("Fine Leg").unwrap()), Some(0.4));
    assert_eq!(profile.probability(catalog.index_of("Slip").unwrap()), None);
    assert!((profile.total_risk(&catalog) - 0.825).abs() < 1e-9);
}

#[test]
fn test_fallback_profile() {
    let catalog = Catalog::standard();
    let profile = ShotProfile::fallback("doosra", &catalog);
    assert!(profile.is_fallback());
    assert_eq!(profile.len(), FALLBACK_ZONES);
    for (id, &(zone, p)) in profile.entries().iter().enumerate() {
        assert_eq!(zone, id);
        assert_eq!(p, ZONES[id].risk());
    }
}

#[test]
fn test_unknown_delivery_uses_fallback() {
    let planner = FieldPlanner::standard();
    assert!(planner.profile("unknown-delivery-xyz").is_fallback());
    assert!(!planner.profile("yorker").is_fallback());
    // lookups are exact
    assert!(planner.profile("Yorker").is_fallback());
    assert_eq!(planner.deliveries().count(), DELIVERIES.len());
}

#[test]
#[should_panic]
fn test_foreign_zone_id_panics() {
    let catalog = Catalog::standard();
    catalog.center(NUM_ZONES);
}
