//! Core sector type, validation and error reporting.

use std::f64::consts::PI;
use std::fmt;

/// Largest admissible central angle, in degrees.
pub(crate) const FULL_TURN_DEG: f64 = 360.0;

/// Errors surfaced when building or comparing sectors.
///
/// Every variant is a caller mistake (an invalid argument); none are transient.
#[derive(Clone, Debug, PartialEq)]
pub enum SectorError {
    /// Radius must be finite and `> 0`.
    InvalidRadius { radius: f64 },
    /// Angle must be finite and in `(0, 360]` degrees.
    InvalidAngle { angle_degrees: f64 },
    /// A comparison needed a second sector but got none.
    MissingOperand,
    /// Sampler bounds are inconsistent.
    InvalidBounds { reason: String },
}

impl SectorError {
    pub(crate) fn bounds(reason: impl Into<String>) -> Self {
        Self::InvalidBounds {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius } => write!(f, "radius must be > 0 (got {radius})"),
            Self::InvalidAngle { angle_degrees } => write!(
                f,
                "angle must be > 0 and ≤ 360 degrees (got {angle_degrees})"
            ),
            Self::MissingOperand => write!(f, "comparison requires a second sector"),
            Self::InvalidBounds { reason } => write!(f, "invalid sampler bounds: {reason}"),
        }
    }
}

impl std::error::Error for SectorError {}

/// Circular sector: radius plus central angle in degrees.
///
/// Invariants:
/// - `radius` is finite and `> 0`.
/// - `angle_degrees` is finite and in `(0, 360]`.
#[derive(Clone, Copy, Debug)]
pub struct Sector {
    radius: f64,
    angle_degrees: f64,
}

impl Sector {
    /// Validate and build. Fields keep the exact values passed in.
    pub fn new(radius: f64, angle_degrees: f64) -> Result<Self, SectorError> {
        Ok(Self {
            radius: check_radius(radius)?,
            angle_degrees: check_angle(angle_degrees)?,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Same angle, new radius. `self` is untouched on failure.
    pub fn with_radius(self, radius: f64) -> Result<Self, SectorError> {
        Ok(Self {
            radius: check_radius(radius)?,
            ..self
        })
    }

    /// Same radius, new angle. `self` is untouched on failure.
    pub fn with_angle_degrees(self, angle_degrees: f64) -> Result<Self, SectorError> {
        Ok(Self {
            angle_degrees: check_angle(angle_degrees)?,
            ..self
        })
    }

    /// `π r² a / 360`
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius * self.angle_degrees / FULL_TURN_DEG
    }

    /// `2 π r a / 360`
    #[inline]
    pub fn arc_length(&self) -> f64 {
        2.0 * PI * self.radius * self.angle_degrees / FULL_TURN_DEG
    }
}

impl Default for Sector {
    /// Unit radius, quarter turn.
    fn default() -> Self {
        Self {
            radius: 1.0,
            angle_degrees: 90.0,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sector(Radius = {}, Angle = {}°)",
            self.radius, self.angle_degrees
        )
    }
}

fn check_radius(radius: f64) -> Result<f64, SectorError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(SectorError::InvalidRadius { radius })
    }
}

fn check_angle(angle_degrees: f64) -> Result<f64, SectorError> {
    if angle_degrees.is_finite() && angle_degrees > 0.0 && angle_degrees <= FULL_TURN_DEG {
        Ok(angle_degrees)
    } else {
        Err(SectorError::InvalidAngle { angle_degrees })
    }
}
