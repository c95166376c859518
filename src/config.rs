use crate::profile::DeliveryDef;
use crate::zone::ZoneDef;

/// Boundary radius; all geometry is expressed relative to it.
pub const BOUNDARY_RADIUS: f64 = 1.0;
/// Zone centres sit at 65% of the boundary.
pub const PLACEMENT_RADIUS: f64 = 0.65 * BOUNDARY_RADIUS;
/// A fielder guards a zone when strictly closer than this to its centre.
pub const COVERAGE_RADIUS: f64 = 0.35;
pub const DEFAULT_FIELDERS: usize = 9;
/// Hard cap on frontier pops per search.
pub const MAX_ITERATIONS: usize = 500;
/// Zones used to build the profile of an unknown delivery.
pub const FALLBACK_ZONES: usize = 6;
/// Shot probability above which a fielder is flagged as key.
pub const KEY_FIELDER_THRESHOLD: f64 = 0.4;
/// Shot probability assumed for zones missing from the profile.
pub const UNPROFILED_PROBABILITY: f64 = 0.1;
/// Floor for the total profile risk when computing efficiency.
pub const MIN_TOTAL_RISK: f64 = 0.01;

/// Largest catalog a [`ZoneSet`](crate::ZoneSet) can index.
pub const MAX_ZONES: usize = 64;

pub const NUM_ZONES: usize = 12;
pub const ZONES: [ZoneDef; NUM_ZONES] = [
    ZoneDef::new("Fine Leg", 150.0, 190.0, 0.6),
    ZoneDef::new("Square Leg", 100.0, 150.0, 0.8),
    ZoneDef::new("Mid Wicket", 55.0, 100.0, 0.9),
    ZoneDef::new("Mid On", 25.0, 55.0, 0.7),
    ZoneDef::new("Mid Off", -25.0, 25.0, 0.7),
    ZoneDef::new("Cover", -55.0, -25.0, 0.95),
    ZoneDef::new("Point", -100.0, -55.0, 0.85),
    ZoneDef::new("Third Man", -190.0, -150.0, 0.6),
    ZoneDef::new("Long On", 10.0, 40.0, 0.5),
    ZoneDef::new("Long Off", -40.0, -10.0, 0.5),
    ZoneDef::new("Deep Mid Wicket", 70.0, 110.0, 0.55),
    ZoneDef::new("Slip", -200.0, -160.0, 0.75),
];

pub const NUM_DELIVERIES: usize = 6;
pub const DELIVERIES: [DeliveryDef; NUM_DELIVERIES] = [
    DeliveryDef::new(
        "yorker",
        &[
            ("Fine Leg", 0.4),
            ("Square Leg", 0.3),
            ("Mid Wicket", 0.2),
            ("Mid On", 0.1),
            ("Cover", 0.1),
        ],
    ),
    DeliveryDef::new(
        "bouncer",
        &[
            ("Square Leg", 0.5),
            ("Point", 0.4),
            ("Fine Leg", 0.3),
            ("Third Man", 0.3),
        ],
    ),
    DeliveryDef::new(
        "full toss",
        &[
            ("Mid On", 0.4),
            ("Mid Off", 0.4),
            ("Cover", 0.5),
            ("Mid Wicket", 0.3),
        ],
    ),
    DeliveryDef::new(
        "off spin",
        &[
            ("Cover", 0.6),
            ("Point", 0.5),
            ("Mid Wicket", 0.4),
            ("Mid Off", 0.3),
        ],
    ),
    DeliveryDef::new(
        "leg spin",
        &[
            ("Fine Leg", 0.5),
            ("Square Leg", 0.5),
            ("Mid Wicket", 0.4),
            ("Cover", 0.3),
        ],
    ),
    DeliveryDef::new(
        "outswing",
        &[
            ("Slip", 0.7),
            ("Cover", 0.5),
            ("Point", 0.4),
            ("Third Man", 0.3),
        ],
    ),
];

/// Traditional fielding position names handed out in assignment order.
pub const POSITION_NAMES: [&str; 13] = [
    "Wicket Keeper",
    "Slip",
    "Gully",
    "Point",
    "Cover",
    "Mid Off",
    "Mid On",
    "Mid Wicket",
    "Square Leg",
    "Fine Leg",
    "Long On",
    "Long Off",
    "Deep Mid Wicket",
];

/// Tunable search parameters. `Default` matches the constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub coverage_radius: f64,
    pub placement_radius: f64,
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            coverage_radius: COVERAGE_RADIUS,
            placement_radius: PLACEMENT_RADIUS,
            max_iterations: MAX_ITERATIONS,
        }
    }
}
