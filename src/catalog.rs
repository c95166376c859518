//! Validated zone catalog with precomputed zone centres.

use alloc::vec::Vec;

use crate::{
    common::CatalogError,
    config::{PLACEMENT_RADIUS, ZONES},
    zone::{Point, ZoneDef, ZoneId},
    zoneset::ZoneSet,
};

/// Ordered collection of zones. Declaration order is significant: it breaks
/// nearest-zone ties in the heuristic and drives padding of short
/// assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    zones: Vec<ZoneDef>,
    centers: Vec<Point>,
}

impl Catalog {
    /// Build a catalog from `zones`, placing centres at `placement_radius`.
    pub fn new(zones: &[ZoneDef], placement_radius: f64) -> Result<Self, CatalogError> {
        if zones.is_empty() {
            return Err(CatalogError::Empty);
        }
        if zones.len() > ZoneSet::capacity() {
            return Err(CatalogError::TooManyZones {
                len: zones.len(),
                capacity: ZoneSet::capacity(),
            });
        }
        for (i, zone) in zones.iter().enumerate() {
            if zones[..i].iter().any(|z| z.name() == zone.name()) {
                return Err(CatalogError::DuplicateZone(zone.name()));
            }
            // Negated form so NaN is rejected too.
            if !(zone.risk() > 0.0 && zone.risk() <= 1.0) {
                return Err(CatalogError::InvalidRisk {
                    zone: zone.name(),
                    risk: zone.risk(),
                });
            }
            if !zone.center(placement_radius).is_finite() {
                return Err(CatalogError::NonFiniteCenter(zone.name()));
            }
        }
        Ok(Self::from_trusted(zones, placement_radius))
    }

    /// Build a catalog from static tables that are known to be well formed.
    pub(crate) fn from_trusted(zones: &[ZoneDef], placement_radius: f64) -> Self {
        let centers: Vec<Point> = zones.iter().map(|z| z.center(placement_radius)).collect();
        debug_assert!(centers.iter().all(Point::is_finite));
        Self {
            zones: zones.to_vec(),
            centers,
        }
    }

    /// The built-in twelve-zone catalog.
    pub fn standard() -> Self {
        Self::from_trusted(&ZONES, PLACEMENT_RADIUS)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zone definition at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an index into this catalog. The same holds for
    /// [`center`](Self::center), [`risk`](Self::risk) and [`name`](Self::name).
    pub fn zone(&self, id: ZoneId) -> &ZoneDef {
        &self.zones[id]
    }

    pub fn zones(&self) -> &[ZoneDef] {
        &self.zones
    }

    /// Representative point of zone `id`. Panics on a foreign `id`.
    pub fn center(&self, id: ZoneId) -> Point {
        self.centers[id]
    }

    /// Risk weight of zone `id`. Panics on a foreign `id`.
    pub fn risk(&self, id: ZoneId) -> f64 {
        self.zones[id].risk()
    }

    /// Name of zone `id`. Panics on a foreign `id`.
    pub fn name(&self, id: ZoneId) -> &'static str {
        self.zones[id].name()
    }

    /// Index of the zone called `name`, if any.
    pub fn index_of(&self, name: &str) -> Option<ZoneId> {
        self.zones.iter().position(|z| z.name() == name)
    }

    /// Set holding every zone in the catalog.
    pub fn all(&self) -> ZoneSet {
        ZoneSet::first(self.zones.len())
    }

    /// Centres of every zone in `set`, in index order.
    pub fn centers_of(&self, set: &ZoneSet) -> Vec<Point> {
        set.iter().map(|id| self.centers[id]).collect()
    }
}
