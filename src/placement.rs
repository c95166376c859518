//! Field placement: runs the search for a delivery and turns the chosen zone
//! set into named fielder assignments.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    catalog::Catalog,
    common::CatalogError,
    config::{
        SearchConfig, DELIVERIES, KEY_FIELDER_THRESHOLD, MIN_TOTAL_RISK, POSITION_NAMES, ZONES,
        UNPROFILED_PROBABILITY,
    },
    heuristic::heuristic_with_radius,
    profile::{DeliveryDef, ShotProfile},
    search::{astar_search, pad_assignment, SearchOutcome},
    zone::{round_to, Point, ZoneDef},
    zoneset::ZoneSet,
};

pub const ALGORITHM: &str = "A* Search";

/// One fielder placed in a zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FielderAssignment {
    /// Traditional position label, or `Fielder N` once the names run out.
    pub name: String,
    pub zone: String,
    pub position: Point,
    /// Shot probability × zone risk, rounded to three decimals.
    pub coverage: f64,
    /// Shot probability for the zone exceeds the key-fielder threshold.
    pub is_key: bool,
}

/// Result of placing a field for one delivery.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub delivery: String,
    /// Assignments sorted by coverage, highest first.
    pub fielders: Vec<FielderAssignment>,
    /// Share of the profile's risk the fielders cover, in percent.
    pub efficiency: f64,
    /// Best `f` the search found, rounded to three decimals. `None` when the
    /// iteration budget ran out before any state was selected.
    pub best_cost: Option<f64>,
    pub iterations: usize,
    /// Number of fielders actually assigned.
    pub assigned: usize,
    /// Heuristic recomputed over the final positions, padding included.
    pub final_cost: f64,
    pub algorithm: String,
    /// The delivery was unknown and the fallback profile was used.
    pub fallback_profile: bool,
    /// The search stopped on its iteration cap.
    pub budget_exhausted: bool,
}

impl Placement {
    /// Names of the assigned zones, in output order.
    pub fn zones(&self) -> impl Iterator<Item = &str> {
        self.fielders.iter().map(|f| f.zone.as_str())
    }

    /// Assignment for the zone called `zone`, if it has a fielder.
    pub fn fielder_in(&self, zone: &str) -> Option<&FielderAssignment> {
        self.fielders.iter().find(|f| f.zone == zone)
    }
}

/// Label for the `index`-th assigned fielder (zero based).
pub fn position_name(index: usize) -> String {
    match POSITION_NAMES.get(index) {
        Some(name) => name.to_string(),
        None => format!("Fielder {}", index + 1),
    }
}

/// Placement planner over a validated zone catalog and delivery table.
#[derive(Debug, Clone)]
pub struct FieldPlanner {
    catalog: Catalog,
    profiles: Vec<ShotProfile>,
    config: SearchConfig,
}

impl FieldPlanner {
    /// Planner over custom tables with the default search configuration.
    pub fn new(zones: &[ZoneDef], deliveries: &[DeliveryDef]) -> Result<Self, CatalogError> {
        Self::with_config(zones, deliveries, SearchConfig::default())
    }

    /// Planner over custom tables with an explicit configuration.
    pub fn with_config(
        zones: &[ZoneDef],
        deliveries: &[DeliveryDef],
        config: SearchConfig,
    ) -> Result<Self, CatalogError> {
        let catalog = Catalog::new(zones, config.placement_radius)?;
        let profiles = deliveries
            .iter()
            .map(|d| ShotProfile::resolve(d, &catalog))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            catalog,
            profiles,
            config,
        })
    }

    /// Planner over the built-in zone and delivery tables.
    pub fn standard() -> Self {
        Self::standard_with_config(SearchConfig::default())
    }

    /// Built-in tables with an explicit configuration.
    pub fn standard_with_config(config: SearchConfig) -> Self {
        let catalog = Catalog::from_trusted(&ZONES, config.placement_radius);
        let profiles = DELIVERIES
            .iter()
            .filter_map(|d| match ShotProfile::resolve(d, &catalog) {
                Ok(p) => Some(p),
                Err(e) => {
                    log::error!("built-in delivery table is malformed: {}", e);
                    None
                }
            })
            .collect();
        Self {
            catalog,
            profiles,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Names of the known delivery types, in table order.
    pub fn deliveries(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.delivery())
    }

    /// Shot profile for `delivery`; unknown names get the fallback profile.
    pub fn profile(&self, delivery: &str) -> ShotProfile {
        match self.profiles.iter().find(|p| p.delivery() == delivery) {
            Some(p) => p.clone(),
            None => {
                log::info!("unknown delivery '{}', using fallback profile", delivery);
                ShotProfile::fallback(delivery, &self.catalog)
            }
        }
    }

    /// Run the raw search for `delivery` without building a placement.
    pub fn search(&self, delivery: &str, fielders: usize) -> SearchOutcome {
        let profile = self.profile(delivery);
        astar_search(&self.catalog, &profile, fielders, &self.config)
    }

    /// Place `fielders` fielders for `delivery`.
    pub fn place(&self, delivery: &str, fielders: usize) -> Placement {
        let profile = self.profile(delivery);
        let outcome = astar_search(&self.catalog, &profile, fielders, &self.config);
        let assigned = pad_assignment(&self.catalog, outcome.best, fielders);
        build_placement(&self.catalog, &profile, &outcome, assigned, fielders, &self.config)
    }
}

/// Turn the final zone set into a [`Placement`].
pub fn build_placement(
    catalog: &Catalog,
    profile: &ShotProfile,
    outcome: &SearchOutcome,
    assigned: ZoneSet,
    fielders: usize,
    config: &SearchConfig,
) -> Placement {
    let mut assignments: Vec<FielderAssignment> = assigned
        .iter()
        .take(fielders)
        .enumerate()
        .map(|(i, id)| {
            let probability = profile.probability(id).unwrap_or(UNPROFILED_PROBABILITY);
            FielderAssignment {
                name: position_name(i),
                zone: catalog.name(id).to_string(),
                position: catalog.center(id),
                coverage: round_to(probability * catalog.risk(id), 3),
                is_key: probability > KEY_FIELDER_THRESHOLD,
            }
        })
        .collect();

    // Stable: equal coverage keeps set order.
    assignments.sort_by(|a, b| b.coverage.total_cmp(&a.coverage));

    let total_risk = profile.total_risk(catalog);
    let covered_risk: f64 = assignments.iter().map(|f| f.coverage).sum();
    let efficiency = round_to(covered_risk / total_risk.max(MIN_TOTAL_RISK) * 100.0, 1).min(100.0);

    let positions: Vec<Point> = assignments.iter().map(|f| f.position).collect();
    let final_cost = heuristic_with_radius(catalog, &positions, profile, config.coverage_radius);

    Placement {
        delivery: profile.delivery().to_string(),
        assigned: assignments.len(),
        fielders: assignments,
        efficiency,
        best_cost: outcome
            .best_cost
            .is_finite()
            .then(|| round_to(outcome.best_cost, 3)),
        iterations: outcome.iterations,
        final_cost: round_to(final_cost, 3),
        algorithm: ALGORITHM.to_string(),
        fallback_profile: profile.is_fallback(),
        budget_exhausted: outcome.exhausted,
    }
}

/// Place `fielders` fielders for `delivery` using the built-in tables.
///
/// Unknown deliveries use the fallback profile; asking for more fielders
/// than the catalog has zones returns as many as the catalog offers.
pub fn place_field(delivery: &str, fielders: usize) -> Placement {
    #[cfg(feature = "std")]
    let placement = standard_planner().place(delivery, fielders);
    #[cfg(not(feature = "std"))]
    let placement = FieldPlanner::standard().place(delivery, fielders);
    placement
}

/// Shared planner over the built-in tables, built on first use.
#[cfg(feature = "std")]
fn standard_planner() -> &'static FieldPlanner {
    static PLANNER: std::sync::OnceLock<FieldPlanner> = std::sync::OnceLock::new();
    PLANNER.get_or_init(FieldPlanner::standard)
}

/// [`place_field`] with an explicit search configuration.
pub fn place_field_with(delivery: &str, fielders: usize, config: SearchConfig) -> Placement {
    FieldPlanner::standard_with_config(config).place(delivery, fielders)
}
