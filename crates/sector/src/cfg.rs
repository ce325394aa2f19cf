//! Tolerance defaults for sector comparisons.
//!
//! Policy
//! - Fixed constants, no runtime configuration. Callers that need a different
//!   ordering tolerance pass it explicitly to `Sector::cmp_area_eps`.

/// Field-wise equality threshold: `|Δradius| < EQ_EPS` and `|Δangle| < EQ_EPS`.
pub const EQ_EPS: f64 = 1e-9;
/// Default area tolerance for `Sector::compare_by_area`.
pub const AREA_EPS: f64 = 1e-9;
/// Slack used by point-membership checks in `Sector::contains_point`.
pub const CONTAINS_EPS: f64 = 1e-9;
