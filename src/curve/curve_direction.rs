use crate::misc::FloatingPoint;

/// Turning direction of a curve relative to the incoming tangent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveDirection {
    Right,
    Left,
}

impl CurveDirection {
    /// +1 for right-hand turns (clockwise in plan view), -1 for left-hand.
    pub fn turn_sign<T: FloatingPoint>(&self) -> T {
        match self {
            CurveDirection::Right => T::one(),
            CurveDirection::Left => -T::one(),
        }
    }
}
