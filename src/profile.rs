//! Delivery profiles: per-delivery shot probabilities over catalog zones.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    catalog::Catalog,
    common::CatalogError,
    config::FALLBACK_ZONES,
    zone::ZoneId,
    zoneset::ZoneSet,
};

/// Static description of a delivery type: its name and the probability of a
/// ball scoring through each listed zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryDef {
    name: &'static str,
    shots: &'static [(&'static str, f64)],
}

impl DeliveryDef {
    pub const fn new(name: &'static str, shots: &'static [(&'static str, f64)]) -> Self {
        Self { name, shots }
    }

    /// Delivery's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `(zone name, probability)` pairs as declared.
    pub fn shots(&self) -> &'static [(&'static str, f64)] {
        self.shots
    }
}

/// Shot probabilities for one delivery, resolved against a catalog.
///
/// Entries are kept in catalog order, and every zone appears at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotProfile {
    delivery: String,
    entries: Vec<(ZoneId, f64)>,
    zones: ZoneSet,
    fallback: bool,
}

impl ShotProfile {
    /// Resolve `def` against `catalog`. A zone listed twice keeps its last
    /// probability.
    pub fn resolve(def: &DeliveryDef, catalog: &Catalog) -> Result<Self, CatalogError> {
        let mut entries: Vec<(ZoneId, f64)> = Vec::with_capacity(def.shots().len());
        let mut zones = ZoneSet::new();
        for &(zone, probability) in def.shots() {
            let id = catalog
                .index_of(zone)
                .ok_or(CatalogError::UnknownProfileZone {
                    delivery: def.name(),
                    zone,
                })?;
            if !(0.0..=1.0).contains(&probability) {
                return Err(CatalogError::InvalidProbability {
                    delivery: def.name(),
                    zone,
                    probability,
                });
            }
            match entries.iter_mut().find(|(z, _)| *z == id) {
                Some(entry) => entry.1 = probability,
                None => entries.push((id, probability)),
            }
            zones.insert(id)?;
        }
        entries.sort_by_key(|&(id, _)| id);
        Ok(Self {
            delivery: def.name().to_string(),
            entries,
            zones,
            fallback: false,
        })
    }

    /// Profile used for unknown deliveries: the first catalog zones, each
    /// scored with its own risk weight.
    pub fn fallback(delivery: &str, catalog: &Catalog) -> Self {
        let entries: Vec<(ZoneId, f64)> = (0..catalog.len().min(FALLBACK_ZONES))
            .map(|id| (id, catalog.risk(id)))
            .collect();
        Self {
            delivery: delivery.to_string(),
            zones: ZoneSet::first(entries.len()),
            entries,
            fallback: true,
        }
    }

    /// Delivery name the profile was built for.
    pub fn delivery(&self) -> &str {
        &self.delivery
    }

    /// Whether this is the fallback profile for an unknown delivery.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// `(zone, probability)` pairs in catalog order.
    pub fn entries(&self) -> &[(ZoneId, f64)] {
        &self.entries
    }

    /// Set of zones with a listed probability.
    pub fn zones(&self) -> ZoneSet {
        self.zones
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Probability for `zone`, or `None` when the profile does not list it.
    pub fn probability(&self, zone: ZoneId) -> Option<f64> {
        self.entries
            .iter()
            .find(|(id, _)| *id == zone)
            .map(|&(_, p)| p)
    }

    /// Sum of `probability × risk` over the whole profile.
    pub fn total_risk(&self, catalog: &Catalog) -> f64 {
        self.entries
            .iter()
            .map(|&(id, p)| p * catalog.risk(id))
            .sum()
    }
}
