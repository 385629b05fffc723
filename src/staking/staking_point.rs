use std::fmt;

use crate::misc::FloatingPoint;

/// Identifies which arc of a curve a staking point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArcId {
    First,
    Second,
}

impl fmt::Display for ArcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcId::First => write!(f, "Curve 1"),
            ArcId::Second => write!(f, "Curve 2"),
        }
    }
}

/// Named boundary stations of the supported curve types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryStation {
    /// Point of curve, start of a simple curve.
    Pc,
    /// Point of tangent, end of a simple curve.
    Pt,
    /// Start of the first arc of a compound curve.
    Pc1,
    /// Shared junction of a compound curve, end of arc 1 and start of arc 2.
    Pt1Pc2,
    /// End of the second arc of a compound curve.
    Pt2,
    /// First tangent point of a reverse curve.
    T1,
    /// Junction of a reverse curve.
    E,
    /// Second tangent point of a reverse curve.
    T2,
}

impl fmt::Display for BoundaryStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryStation::Pc => "PC",
            BoundaryStation::Pt => "PT",
            BoundaryStation::Pc1 => "PC1",
            BoundaryStation::Pt1Pc2 => "PT1/PC2",
            BoundaryStation::Pt2 => "PT2",
            BoundaryStation::T1 => "T1",
            BoundaryStation::E => "E",
            BoundaryStation::T2 => "T2",
        };
        write!(f, "{}", name)
    }
}

/// Label of a staking point: a named boundary station, or a numbered
/// interior setting-out point (1-based within its arc).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StakingLabel {
    Boundary(BoundaryStation),
    Point(usize),
}

impl StakingLabel {
    pub fn is_boundary(&self) -> bool {
        matches!(self, StakingLabel::Boundary(_))
    }
}

impl fmt::Display for StakingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StakingLabel::Boundary(station) => write!(f, "{}", station),
            StakingLabel::Point(index) => write!(f, "P{}", index),
        }
    }
}

/// One row of a staking table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StakingPoint<T: FloatingPoint> {
    pub label: StakingLabel,
    pub arc: ArcId,
    /// Chainage of the point in meters.
    pub station: T,
    /// Arc length since the previous point in meters.
    pub arc_length: T,
    /// Incremental deflection angle in degrees.
    pub deflection: T,
    /// Cumulative deflection from the arc start in degrees.
    pub total_deflection: T,
    /// Chord length of the increment in meters.
    pub chord: T,
}
