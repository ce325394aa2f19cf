//! Equality, hashing and area ordering.
//!
//! - `PartialEq`: field-wise within `EQ_EPS`. Not transitive, hence no `Eq`.
//! - `Hash`: raw bit patterns of both fields. Sectors equal within tolerance
//!   but not bit-identical may hash differently.
//! - Area order: `cmp_area_eps` / `compare_by_area` / `cmp_by_area`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::types::{Sector, SectorError};
use crate::cfg::{AREA_EPS, EQ_EPS};

/// Ordering as the `-1 / 0 / +1` integer convention.
#[inline]
pub fn ordering_sign(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl Sector {
    /// Compare areas: `Equal` when `|Δarea| < tolerance`.
    ///
    /// Huge radii overflow `area()` to `+inf`; two infinite areas compare
    /// `Equal` and an infinite area is `Greater` than any finite one.
    pub fn cmp_area_eps(&self, other: &Sector, tolerance: f64) -> Ordering {
        let (a, b) = (self.area(), other.area());
        // Areas are never NaN, so after this check `diff` is not NaN either.
        if a == b {
            return Ordering::Equal;
        }
        let diff = a - b;
        if diff.abs() < tolerance {
            Ordering::Equal
        } else if diff > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    /// Area comparison with the default tolerance `AREA_EPS`.
    #[inline]
    pub fn compare_by_area(&self, other: &Sector) -> Ordering {
        self.cmp_area_eps(other, AREA_EPS)
    }

    /// Area comparison against an optional operand; `None` is an error.
    pub fn try_compare_by_area(
        &self,
        other: Option<&Sector>,
        tolerance: f64,
    ) -> Result<Ordering, SectorError> {
        let other = other.ok_or(SectorError::MissingOperand)?;
        Ok(self.cmp_area_eps(other, tolerance))
    }

    /// Natural sector order (by area, default tolerance), shaped for `sort_by`.
    #[inline]
    pub fn cmp_by_area(a: &Sector, b: &Sector) -> Ordering {
        a.compare_by_area(b)
    }
}

impl PartialEq for Sector {
    fn eq(&self, other: &Self) -> bool {
        (self.radius() - other.radius()).abs() < EQ_EPS
            && (self.angle_degrees() - other.angle_degrees()).abs() < EQ_EPS
    }
}

impl Hash for Sector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radius().to_bits().hash(state);
        self.angle_degrees().to_bits().hash(state);
    }
}
