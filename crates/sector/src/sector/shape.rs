//! Plane geometry of a sector placed at the origin.
//!
//! Placement: apex at the origin, first edge along +x, arc swept
//! counter-clockwise by `angle_radians()`.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::types::Sector;

impl Sector {
    #[inline]
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees().to_radians()
    }

    /// Straight-line distance between the arc endpoints: `2 r sin(θ/2)`.
    #[inline]
    pub fn chord_length(&self) -> f64 {
        2.0 * self.radius() * (0.5 * self.angle_radians()).sin()
    }

    /// Start and end of the arc: `(r, 0)` and `r (cos θ, sin θ)`.
    pub fn arc_endpoints(&self) -> (Vector2<f64>, Vector2<f64>) {
        let r = self.radius();
        let th = self.angle_radians();
        (Vector2::new(r, 0.0), Vector2::new(r * th.cos(), r * th.sin()))
    }

    /// Area centroid: on the bisector at distance `4 r sin(θ/2) / (3θ)`.
    pub fn centroid(&self) -> Vector2<f64> {
        let th = self.angle_radians();
        let half = 0.5 * th;
        let dist = 4.0 * self.radius() * half.sin() / (3.0 * th);
        Vector2::new(half.cos(), half.sin()) * dist
    }

    /// Closed membership with a length slack `eps`.
    ///
    /// `eps` is a distance: it widens the arc radially, and the bounding rays by
    /// the angle `eps / |p|` that subtends that distance at the point.
    pub fn contains_point(&self, p: Vector2<f64>, eps: f64) -> bool {
        let norm = p.norm();
        if norm > self.radius() + eps {
            return false;
        }
        if norm <= eps {
            return true;
        }
        let th = self.angle_radians();
        let slack = eps / norm;
        if th >= TAU - slack {
            return true;
        }
        let phi = p.y.atan2(p.x).rem_euclid(TAU);
        phi <= th + slack || phi >= TAU - slack
    }
}
