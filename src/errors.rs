use thiserror::Error;

/// Errors raised by the curve solvers.
///
/// Both variants are raised synchronously, before any derived value is
/// produced; a failed solve yields no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// An input parameter is outside its admissible range.
    #[error("invalid parameter: {0}")]
    Validation(String),
    /// The parameters are formally valid but sit too close to a
    /// trigonometric singularity to evaluate without blowing up.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),
}
