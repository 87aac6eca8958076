use thiserror::Error;

/// Error when building a [`Polynomial`](crate::Polynomial) from raw coefficients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolynomialError {
    /// A mirror profile needs at least a constant term.
    #[error("a polynomial needs at least one coefficient")]
    Empty,
}
