//! Reproducible random sectors (uniform radius and angle + replay tokens).
//!
//! Model
//! - Radius and angle are drawn independently and uniformly from closed ranges.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   draw `index` of stream `seed` can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Sector, SectorError, FULL_TURN_DEG};

/// Closed sampling ranges for radius and angle (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorBounds {
    pub radius_min: f64,
    pub radius_max: f64,
    pub angle_min: f64,
    pub angle_max: f64,
}

impl Default for SectorBounds {
    fn default() -> Self {
        Self {
            radius_min: 0.1,
            radius_max: 10.0,
            angle_min: 1.0,
            angle_max: FULL_TURN_DEG,
        }
    }
}

impl SectorBounds {
    pub fn validate(&self) -> Result<(), SectorError> {
        let all_finite = [
            self.radius_min,
            self.radius_max,
            self.angle_min,
            self.angle_max,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(SectorError::bounds("bounds must be finite"));
        }
        if self.radius_min <= 0.0 {
            return Err(SectorError::bounds("radius_min must be > 0"));
        }
        if self.radius_min > self.radius_max {
            return Err(SectorError::bounds("radius_min <= radius_max required"));
        }
        if self.angle_min <= 0.0 || self.angle_max > FULL_TURN_DEG {
            return Err(SectorError::bounds("angles must lie in (0, 360]"));
        }
        if self.angle_min > self.angle_max {
            return Err(SectorError::bounds("angle_min <= angle_max required"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Next token in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one sector inside `bounds`; identical tokens give identical sectors.
pub fn draw_sector(bounds: SectorBounds, tok: ReplayToken) -> Result<Sector, SectorError> {
    bounds.validate()?;
    let mut rng = tok.to_std_rng();
    let radius = rng.gen_range(bounds.radius_min..=bounds.radius_max);
    let angle = rng.gen_range(bounds.angle_min..=bounds.angle_max);
    Sector::new(radius, angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_sector() {
        let b = SectorBounds::default();
        let tok = ReplayToken::new(7, 3);
        let s1 = draw_sector(b, tok).unwrap();
        let s2 = draw_sector(b, tok).unwrap();
        assert_eq!(s1.radius().to_bits(), s2.radius().to_bits());
        assert_eq!(s1.angle_degrees().to_bits(), s2.angle_degrees().to_bits());
    }

    #[test]
    fn stream_stays_inside_bounds() {
        let b = SectorBounds {
            radius_min: 2.0,
            radius_max: 3.0,
            angle_min: 10.0,
            angle_max: 20.0,
        };
        let mut tok = ReplayToken::new(42, 0);
        for _ in 0..200 {
            let s = draw_sector(b, tok).unwrap();
            assert!((2.0..=3.0).contains(&s.radius()));
            assert!((10.0..=20.0).contains(&s.angle_degrees()));
            tok = tok.next();
        }
    }

    #[test]
    fn degenerate_ranges_are_allowed() {
        let b = SectorBounds {
            radius_min: 1.5,
            radius_max: 1.5,
            angle_min: 360.0,
            angle_max: 360.0,
        };
        let s = draw_sector(b, ReplayToken::new(0, 0)).unwrap();
        assert_eq!(s.radius(), 1.5);
        assert_eq!(s.angle_degrees(), 360.0);
    }

    #[test]
    fn bad_bounds_rejected() {
        let tok = ReplayToken::new(1, 1);
        let cases = [
            SectorBounds {
                radius_min: 0.0,
                ..SectorBounds::default()
            },
            SectorBounds {
                radius_min: 5.0,
                radius_max: 1.0,
                ..SectorBounds::default()
            },
            SectorBounds {
                angle_max: 361.0,
                ..SectorBounds::default()
            },
            SectorBounds {
                angle_min: 90.0,
                angle_max: 45.0,
                ..SectorBounds::default()
            },
            SectorBounds {
                radius_max: f64::INFINITY,
                ..SectorBounds::default()
            },
        ];
        for b in cases {
            assert!(matches!(
                draw_sector(b, tok),
                Err(SectorError::InvalidBounds { .. })
            ));
        }
    }
}
