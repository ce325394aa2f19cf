//! Curated API surface for the CLI and benches.
//!
//! Prefer these re-exports over reaching into submodules so call sites stay
//! stable when the internal layout moves.

pub use crate::cfg::{AREA_EPS, CONTAINS_EPS, EQ_EPS};
pub use crate::sector::rand::{draw_sector, ReplayToken as SectorReplay, SectorBounds};
pub use crate::sector::{ordering_sign, Sector, SectorError};
