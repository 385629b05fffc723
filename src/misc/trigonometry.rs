use super::FloatingPoint;

/// Converts an angle in degrees to radians.
pub fn deg_to_rad<T: FloatingPoint>(degrees: T) -> T {
    degrees * T::pi() / T::from_f64(180.0).unwrap()
}

/// Converts an angle in radians to degrees.
pub fn rad_to_deg<T: FloatingPoint>(radians: T) -> T {
    radians * T::from_f64(180.0).unwrap() / T::pi()
}
