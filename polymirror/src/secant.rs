use super::*;

use arrayvec::ArrayVec;

/// Number of secant updates performed by a search, after seeding.
pub const SECANT_ITERATIONS: usize = 5;

/// Offset between the two seed abscissae of a search.
pub const SEED_OFFSET: Float = 0.1;

/// Two seed pairs, then one pair per secant update.
pub const HISTORY_CAPACITY: usize = 2 + SECANT_ITERATIONS;

/// The x-intercept of the line through `(x0, g0)` and `(x1, g1)`.
///
/// - If `g1` is exactly zero, `x1` already is a root and is returned as is.
/// - If `x0 == x1` the line is vertical and `NaN` is returned.
/// - If `g0 == g1` (horizontal line) the result is infinite.
///
/// `NaN` inputs produce a `NaN` output.
#[inline]
#[must_use]
pub fn secant_step(x0: Float, g0: Float, x1: Float, g1: Float) -> Float {
    if g1 == 0. {
        return x1;
    }

    if x0 == x1 {
        return Float::NAN;
    }

    let slope = (g0 - g1) / (x0 - x1);
    x1 - g1 / slope
}

/// Every `(x, g(x))` pair evaluated during one search, in order.
///
/// Holds at most [`HISTORY_CAPACITY`] pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecantHistory {
    pairs: ArrayVec<(Float, Float), HISTORY_CAPACITY>,
}

impl SecantHistory {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// if the history is full
    #[inline]
    pub fn push(&mut self, x: Float, g: Float) {
        self.pairs.push((x, g));
    }

    /// The secant update from the two most recent pairs, `None` with fewer than two.
    #[inline]
    #[must_use]
    pub fn next_x(&self) -> Option<Float> {
        let [.., (x0, g0), (x1, g1)] = self.pairs.as_slice() else {
            return None;
        };

        Some(secant_step(*x0, *g0, *x1, *g1))
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<(Float, Float)> {
        self.pairs.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[(Float, Float)] {
        &self.pairs
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pairs.is_full()
    }

    #[inline]
    pub fn xs(&self) -> impl Iterator<Item = Float> + '_ {
        self.pairs.iter().map(|&(x, _)| x)
    }

    #[inline]
    pub fn residuals(&self) -> impl Iterator<Item = Float> + '_ {
        self.pairs.iter().map(|&(_, g)| g)
    }
}
