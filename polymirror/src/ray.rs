use super::*;

use nalgebra::Unit;

/// A light ray, represented as a half-line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// The starting point of the half-line
    pub origin: Point,
    /// The direction of the half-line
    pub direction: Unit<Vector>,
}

impl Ray {
    /// The ray leaving `from` towards `to`.
    ///
    /// Returns `None` if both points are (nearly) equal, or not finite.
    #[inline]
    #[must_use]
    pub fn try_between(from: &Point, to: &Point) -> Option<Self> {
        Unit::try_new(to - from, Float::EPSILON)
            .filter(|direction| direction.iter().all(|c| c.is_finite()))
            .map(|direction| Self {
                origin: *from,
                direction,
            })
    }

    /// Reflect the ray's direction with respect to the given tangent
    #[inline]
    pub fn reflect_dir(&mut self, tangent: &Tangent) {
        tangent.reflect(self.direction.as_mut_unchecked());
    }

    /// Move the ray's position forward (or backward if t < 0.0) by `t`
    #[inline]
    pub fn advance(&mut self, t: Float) {
        self.origin += self.direction.as_ref() * t;
    }

    /// Get the point at distance `t` (can be negative) from the ray's origin
    #[inline]
    #[must_use]
    pub fn at(&self, t: Float) -> Point {
        self.origin + self.direction.as_ref() * t
    }
}

/// The tangent line of a mirror at some point, stored as a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tangent {
    direction: Unit<Vector>,
}

impl Tangent {
    /// The tangent of `mirror` at abscissa `x`, directed by `(1, f'(x))`.
    ///
    /// Returns `None` if the slope isn't finite.
    #[inline]
    #[must_use]
    pub fn of(mirror: &Polynomial, x: Float) -> Option<Self> {
        let slope = mirror.slope_at(x);

        slope
            .is_finite()
            .then(|| Unit::new_normalize(Vector::new(1., slope)))
            .map(|direction| Self { direction })
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> &Unit<Vector> {
        &self.direction
    }

    /// Reflect a vector w.r.t this tangent line (orthogonal symmetry), then normalize it
    #[inline]
    pub fn reflect(&self, v: &mut Vector) {
        let t = self.direction.as_ref();
        let c = v.dot(t);
        *v = t * (c + c) - &*v;
        v.normalize_mut();
    }
}
