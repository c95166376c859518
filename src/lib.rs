#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod baseline;
mod catalog;
mod common;
mod config;
mod heuristic;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod profile;
mod search;
#[cfg(feature = "std")]
mod ui;
mod zone;
mod zoneset;

pub use baseline::*;
pub use catalog::Catalog;
pub use common::*;
pub use config::*;
pub use heuristic::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use profile::{DeliveryDef, ShotProfile};
pub use search::*;
#[cfg(feature = "std")]
pub use ui::*;
pub use zone::*;
pub use zoneset::{Members, ZoneMask, ZoneSet, ZoneSetError};
