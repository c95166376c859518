//! Common types: catalog validation errors.

use core::fmt;

use crate::zoneset::ZoneSetError;

/// Errors returned when building a catalog or planner from zone and delivery
/// tables.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Underlying zone-set error (e.g., too many zones for the mask).
    ZoneSet(ZoneSetError),
    /// Catalog holds no zones.
    Empty,
    /// More zones than the zone set can index.
    TooManyZones { len: usize, capacity: usize },
    /// Two zones share a name.
    DuplicateZone(&'static str),
    /// Risk weight outside (0, 1].
    InvalidRisk { zone: &'static str, risk: f64 },
    /// Zone centre has a non-finite coordinate.
    NonFiniteCenter(&'static str),
    /// A delivery profile references a zone missing from the catalog.
    UnknownProfileZone {
        delivery: &'static str,
        zone: &'static str,
    },
    /// Shot probability outside [0, 1].
    InvalidProbability {
        delivery: &'static str,
        zone: &'static str,
        probability: f64,
    },
}

impl From<ZoneSetError> for CatalogError {
    fn from(err: ZoneSetError) -> Self {
        CatalogError::ZoneSet(err)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::ZoneSet(e) => write!(f, "Zone set error: {}", e),
            CatalogError::Empty => write!(f, "Zone catalog is empty"),
            CatalogError::TooManyZones { len, capacity } => {
                write!(f, "Catalog has {} zones but at most {} are supported", len, capacity)
            }
            CatalogError::DuplicateZone(name) => write!(f, "Zone '{}' is defined twice", name),
            CatalogError::InvalidRisk { zone, risk } => {
                write!(f, "Zone '{}' has risk {} outside (0, 1]", zone, risk)
            }
            CatalogError::NonFiniteCenter(name) => {
                write!(f, "Zone '{}' has a non-finite centre", name)
            }
            CatalogError::UnknownProfileZone { delivery, zone } => {
                write!(f, "Delivery '{}' references unknown zone '{}'", delivery, zone)
            }
            CatalogError::InvalidProbability {
                delivery,
                zone,
                probability,
            } => write!(
                f,
                "Delivery '{}' gives zone '{}' probability {} outside [0, 1]",
                delivery, zone, probability
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CatalogError {}

#[cfg(feature = "std")]
impl std::error::Error for ZoneSetError {}
