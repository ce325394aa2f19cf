//! Circular sectors as validated values.
//!
//! A `Sector` is a radius plus a central angle in degrees. Every value that
//! exists satisfies `radius > 0` and `0 < angle <= 360`; the only way in is a
//! validating constructor.
//!
//! Layout
//! - `sector`: the value type, comparisons, plane geometry, random draws.
//! - `cfg`: fixed tolerances shared by equality and ordering.
//! - `api`: curated re-exports for callers (CLI, benches).

pub mod api;
pub mod cfg;
pub mod sector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use sector::{Sector, SectorError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{AREA_EPS, CONTAINS_EPS, EQ_EPS};
    pub use crate::sector::rand::{draw_sector, ReplayToken, SectorBounds};
    pub use crate::sector::{ordering_sign, Sector, SectorError};
    pub use nalgebra::Vector2 as Vec2;
}
