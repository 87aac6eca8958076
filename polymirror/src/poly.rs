use super::*;

use alloc::vec::Vec;

/// A mirror profile `y = f(x)`, stored as its coefficients, highest degree first.
///
/// `[a_n, ..., a_1, a_0]` represents `a_n * x^n + ... + a_1 * x + a_0`.
///
/// The only way to obtain an empty coefficient list is [`Self::zero`] (or
/// differentiating a constant), which represents the identically zero polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<Float>,
}

impl Polynomial {
    /// Returns an error if `coeffs` is empty.
    #[inline]
    pub fn try_new(coeffs: impl Into<Vec<Float>>) -> Result<Self, PolynomialError> {
        let coeffs = coeffs.into();

        if coeffs.is_empty() {
            return Err(PolynomialError::Empty);
        }

        Ok(Self { coeffs })
    }

    /// `leading * x^n + ...`, followed by the `n` remaining coefficients, can't fail.
    #[inline]
    #[must_use]
    pub fn with_leading(leading: Float, rest: impl IntoIterator<Item = Float>) -> Self {
        let mut coeffs = Vec::from([leading]);
        coeffs.extend(rest);
        Self { coeffs }
    }

    /// The identically zero polynomial, with no coefficients.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The coefficients, highest degree first.
    #[inline]
    #[must_use]
    pub fn coefficients(&self) -> &[Float] {
        &self.coeffs
    }

    /// `None` for the zero polynomial.
    #[inline]
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluates `f(x)`.
    ///
    /// Coefficients are consumed from the constant term upwards, each one
    /// multiplied by the matching power of `x`. Non-finite inputs propagate.
    #[inline]
    #[must_use]
    pub fn eval(&self, x: Float) -> Float {
        self.coeffs
            .iter()
            .rev()
            .fold((0., 1.), |(total, pow), &c| (total + pow * c, pow * x))
            .0
    }

    /// The point `(x, f(x))` on the mirror.
    #[inline]
    #[must_use]
    pub fn point_at(&self, x: Float) -> Point {
        Point::new(x, self.eval(x))
    }

    /// Returns `f'`, leaving `self` untouched.
    ///
    /// The result has one coefficient less than `self`: the derivative
    /// of a constant is [`Self::zero`], which is its own derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let Some(n) = self.degree() else {
            return Self::zero();
        };

        Self {
            coeffs: self.coeffs[..n]
                .iter()
                .enumerate()
                // the `i`th coefficient multiplies `x^(n - i)`
                .map(|(i, &c)| c * (n - i) as Float)
                .collect(),
        }
    }

    /// The slope `f'(x)` of the mirror.
    #[inline]
    #[must_use]
    pub fn slope_at(&self, x: Float) -> Float {
        self.derivative().eval(x)
    }
}

impl TryFrom<Vec<Float>> for Polynomial {
    type Error = PolynomialError;

    #[inline]
    fn try_from(coeffs: Vec<Float>) -> Result<Self, Self::Error> {
        Self::try_new(coeffs)
    }
}

impl TryFrom<&[Float]> for Polynomial {
    type Error = PolynomialError;

    #[inline]
    fn try_from(coeffs: &[Float]) -> Result<Self, Self::Error> {
        Self::try_new(coeffs)
    }
}

impl<const N: usize> TryFrom<[Float; N]> for Polynomial {
    type Error = PolynomialError;

    #[inline]
    fn try_from(coeffs: [Float; N]) -> Result<Self, Self::Error> {
        Self::try_new(coeffs)
    }
}
