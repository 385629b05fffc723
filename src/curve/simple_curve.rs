use log::debug;
use nalgebra::Point2;

use crate::errors::CurveError;
use crate::misc::{deg_to_rad, FloatingPoint};
use crate::plan::PlanArc;
use crate::staking::{ArcId, BoundaryStation, StakingTable};

use super::{as_f64, guard_divisor, validate_angle, validate_max_arc, validate_radius};
use super::CurveDirection;

/// Input parameters of a simple circular curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleCurve<T: FloatingPoint> {
    /// Curve radius in meters.
    pub radius: T,
    /// Central angle Δ in degrees.
    pub central_angle: T,
    /// Chainage of the point of intersection in meters.
    pub pi_station: T,
    /// Maximum staking segment length in meters.
    pub max_arc_length: T,
    /// Azimuth of the incoming tangent in degrees.
    pub azimuth: T,
    pub direction: CurveDirection,
}

/// Geometric elements derived from a [`SimpleCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleCurveElements<T: FloatingPoint> {
    pub radius: T,
    /// Central angle in degrees.
    pub central_angle: T,
    /// Tangent length T = R·tan(Δ/2).
    pub tangent: T,
    /// Arc length L = R·Δ.
    pub curve_length: T,
    /// Long chord C = 2R·sin(Δ/2).
    pub chord: T,
    /// External distance E = R·(1/cos(Δ/2) − 1).
    pub external: T,
    /// Middle ordinate M = R·(1 − cos(Δ/2)).
    pub middle_ordinate: T,
    pub pc_station: T,
    pub pt_station: T,
}

/// Immutable result of a simple-curve solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleCurveSolution<T: FloatingPoint> {
    elements: SimpleCurveElements<T>,
    staking: StakingTable<T>,
    azimuth: T,
    direction: CurveDirection,
}

impl<T: FloatingPoint> SimpleCurve<T> {
    pub fn new(
        radius: T,
        central_angle: T,
        pi_station: T,
        max_arc_length: T,
        azimuth: T,
        direction: CurveDirection,
    ) -> Self {
        Self {
            radius,
            central_angle,
            pi_station,
            max_arc_length,
            azimuth,
            direction,
        }
    }

    /// Derives the curve elements and the staking table.
    pub fn solve(&self) -> Result<SimpleCurveSolution<T>, CurveError> {
        validate_radius("radius", self.radius)?;
        validate_angle("central angle", self.central_angle)?;
        validate_max_arc(self.max_arc_length)?;

        let two = T::from_f64(2.0).unwrap();
        let delta = deg_to_rad(self.central_angle);
        let half = delta / two;
        guard_divisor("cos(Δ/2)", half.cos())?;

        let tangent = self.radius * half.tan();
        let curve_length = self.radius * delta;
        let chord = two * self.radius * half.sin();
        let external = self.radius * (T::one() / half.cos() - T::one());
        let middle_ordinate = self.radius * (T::one() - half.cos());

        // PC is used exactly as computed, never snapped to an increment.
        let pc_station = self.pi_station - tangent;
        let pt_station = pc_station + curve_length;

        debug!(
            "simple curve: T={:.3} L={:.3} PC={:.3} PT={:.3}",
            as_f64(tangent),
            as_f64(curve_length),
            as_f64(pc_station),
            as_f64(pt_station)
        );

        let staking = StakingTable::stake(
            ArcId::First,
            self.radius,
            pc_station,
            BoundaryStation::Pc,
            pt_station,
            BoundaryStation::Pt,
            self.max_arc_length,
        );

        Ok(SimpleCurveSolution {
            elements: SimpleCurveElements {
                radius: self.radius,
                central_angle: self.central_angle,
                tangent,
                curve_length,
                chord,
                external,
                middle_ordinate,
                pc_station,
                pt_station,
            },
            staking,
            azimuth: self.azimuth,
            direction: self.direction,
        })
    }
}

impl<T: FloatingPoint> SimpleCurveSolution<T> {
    pub fn elements(&self) -> &SimpleCurveElements<T> {
        &self.elements
    }

    pub fn staking(&self) -> &StakingTable<T> {
        &self.staking
    }

    /// Plan-view arc for diagramming, in a local frame with PC at the
    /// origin and the incoming tangent along the input azimuth.
    pub fn plan_arcs(&self) -> Vec<PlanArc<T>> {
        vec![PlanArc::from_tangent(
            Point2::origin(),
            deg_to_rad(self.azimuth),
            self.elements.radius,
            deg_to_rad(self.elements.central_angle),
            self.direction,
        )]
    }
}
