use super::*;

/// The outcome of a reflection search.
#[derive(Clone, Debug, PartialEq)]
pub struct Reflection {
    /// `(x, f(x))` for the last abscissa computed.
    pub point: Point,
    /// Every `(x, g(x))` pair evaluated along the way, seeds included.
    pub history: SecantHistory,
}

impl Reflection {
    /// Whether the search broke down (`NaN` or infinite coordinates).
    ///
    /// A non-degenerate point is not necessarily a reflection point,
    /// see [`reflection_error`].
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.point.x.is_finite() && self.point.y.is_finite())
    }
}

/// Finds a point on `mirror` where the angle of incidence of light coming from
/// `source` equals the angle of reflection towards `camera`.
///
/// This runs exactly [`SECANT_ITERATIONS`] secant updates on [`angle_difference`],
/// seeded at `initial_guess` and `initial_guess + `[`SEED_OFFSET`], and returns
/// `(x, f(x))` for the last abscissa, converged or not.
///
/// There is no tolerance check: if the secant line ever becomes vertical,
/// the result is `NaN`. Callers should validate the point, e.g. with
/// [`reflection_error`], and retry with another guess if needed.
#[inline]
#[must_use]
pub fn locate_reflection(
    source: &Point,
    camera: &Point,
    mirror: &Polynomial,
    initial_guess: Float,
) -> Point {
    locate_reflection_with_history(source, camera, mirror, initial_guess).point
}

/// Same as [`locate_reflection`], but also returns the search's history.
#[must_use]
pub fn locate_reflection_with_history(
    source: &Point,
    camera: &Point,
    mirror: &Polynomial,
    initial_guess: Float,
) -> Reflection {
    let g = |x| angle_difference(source, camera, mirror, x);

    let mut history = SecantHistory::new();

    for x in [initial_guess, initial_guess + SEED_OFFSET] {
        history.push(x, g(x));
    }

    for _ in 0..SECANT_ITERATIONS {
        // the history holds at least the two seeds here
        let x = history.next_x().unwrap_or(Float::NAN);
        history.push(x, g(x));
    }

    let x = history.last().map_or(Float::NAN, |(x, _)| x);

    Reflection {
        point: mirror.point_at(x),
        history,
    }
}

/// How far `point` is from being a reflection point between `source` and `camera`.
///
/// A ray leaving `source` is moved up to `point` and reflected off `mirror`'s tangent
/// at `point.x`, the result is the distance between where it is one unit later and
/// the point one unit from `point` towards `camera`: `0` for a perfect reflection,
/// up to `2`.
///
/// Returns `None` if `point` isn't finite, or coincides with `source` or `camera`.
#[must_use]
pub fn reflection_error(
    source: &Point,
    camera: &Point,
    mirror: &Polynomial,
    point: &Point,
) -> Option<Float> {
    let tangent = Tangent::of(mirror, point.x)?;

    let mut ray = Ray::try_between(source, point)?;
    let outgoing = Ray::try_between(point, camera)?;

    ray.advance(nalgebra::distance(source, point));
    ray.reflect_dir(&tangent);

    Some(nalgebra::distance(&ray.at(1.), &outgoing.at(1.)))
}

/// The inputs of one reflection search.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub source: Point,
    pub camera: Point,
    pub mirror: Polynomial,
    /// Abscissa the search starts from.
    pub guess: Float,
}

impl Scene {
    #[inline]
    #[must_use]
    pub fn new(
        source: impl Into<Point>,
        camera: impl Into<Point>,
        mirror: Polynomial,
        guess: Float,
    ) -> Self {
        Self {
            source: source.into(),
            camera: camera.into(),
            mirror,
            guess,
        }
    }

    #[inline]
    #[must_use]
    pub fn locate(&self) -> Reflection {
        locate_reflection_with_history(&self.source, &self.camera, &self.mirror, self.guess)
    }

    /// See [`reflection_error`]
    #[inline]
    #[must_use]
    pub fn check(&self, reflection: &Reflection) -> Option<Float> {
        reflection_error(&self.source, &self.camera, &self.mirror, &reflection.point)
    }
}
