//! The `Sector` value type.
//!
//! Purpose
//! - One validated record (radius, angle in degrees) with pure derived values.
//! - Immutable: "setters" return a new, re-validated value.
//!
//! Conventions
//! - Equality is field-wise within `cfg::EQ_EPS`; ordering is by area within a
//!   caller-chosen tolerance (`cfg::AREA_EPS` by default). The two relations
//!   intentionally look at different things, so `PartialOrd` is not provided.
//! - Plane geometry places the apex at the origin, first edge along +x,
//!   opening counter-clockwise.

mod ordering;
pub mod rand;
mod shape;
mod types;

pub use ordering::ordering_sign;
pub use types::{Sector, SectorError};
