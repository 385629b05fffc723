pub mod compound_curve;
pub mod curve_direction;
pub mod reverse_curve;
pub mod simple_curve;

pub use compound_curve::*;
pub use curve_direction::*;
pub use reverse_curve::*;
pub use simple_curve::*;

use num_traits::ToPrimitive;

use crate::errors::CurveError;
use crate::misc::FloatingPoint;


fn as_f64<T: FloatingPoint>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

pub(crate) fn validate_radius<T: FloatingPoint>(name: &str, radius: T) -> Result<(), CurveError> {
    if radius <= T::zero() {
        return Err(CurveError::Validation(format!(
            "{} must be positive (got {})",
            name,
            as_f64(radius)
        )));
    }
    Ok(())
}

pub(crate) fn validate_angle<T: FloatingPoint>(name: &str, degrees: T) -> Result<(), CurveError> {
    if degrees <= T::zero() || degrees >= T::from_f64(180.0).unwrap() {
        return Err(CurveError::Validation(format!(
            "{} must lie strictly between 0 and 180 degrees (got {})",
            name,
            as_f64(degrees)
        )));
    }
    Ok(())
}

pub(crate) fn validate_max_arc<T: FloatingPoint>(max_arc: T) -> Result<(), CurveError> {
    if max_arc <= T::zero() {
        return Err(CurveError::Validation(format!(
            "max arc length must be positive (got {})",
            as_f64(max_arc)
        )));
    }
    Ok(())
}

/// Rejects trigonometric terms too small to divide by, which would
/// otherwise turn tangent or external-distance formulas into infinities.
pub(crate) fn guard_divisor<T: FloatingPoint>(name: &str, value: T) -> Result<(), CurveError> {
    if value.abs() <= T::from_f64(1e-9).unwrap() {
        return Err(CurveError::NumericDegeneracy(format!(
            "{} is too close to zero to divide by ({:e})",
            name,
            as_f64(value)
        )));
    }
    Ok(())
}
