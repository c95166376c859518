//! Commonly used types and utilities for ease of import.

pub use crate::heuristic::heuristic;
pub use crate::{
    place_field, Catalog, FieldPlanner, FielderAssignment, Placement, Point, SearchConfig,
    ShotProfile, ZoneSet,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_placement};
