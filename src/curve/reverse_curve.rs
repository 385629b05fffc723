use log::debug;
use nalgebra::Point2;

use crate::errors::CurveError;
use crate::misc::{deg_to_rad, FloatingPoint};
use crate::plan::PlanArc;
use crate::staking::{ArcId, BoundaryStation, StakingTable};

use super::{as_f64, guard_divisor, validate_angle, validate_max_arc, validate_radius};
use super::CurveDirection;

/// Input parameters of an equal-radius reverse curve: two arcs of the same
/// radius and deflection turning in opposite directions, set out from the
/// first tangent point rather than a point of intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReverseCurve<T: FloatingPoint> {
    /// Shared radius of both arcs in meters.
    pub radius: T,
    /// Deflection angle Δ of each arc in degrees.
    pub deflection: T,
    /// Chainage of the first tangent point T1 in meters, taken as given.
    pub t1_station: T,
    /// Maximum staking segment length in meters.
    pub max_arc_length: T,
    /// Azimuth of the incoming tangent in degrees.
    pub azimuth: T,
}

/// Geometric elements derived from a [`ReverseCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReverseCurveElements<T: FloatingPoint> {
    pub radius: T,
    pub deflection: T,
    /// Tangent length R·tan(Δ/2) of each arc.
    pub tangent: T,
    /// Arc length of the first arc.
    pub length1: T,
    /// Arc length of the second arc (equal to the first).
    pub length2: T,
    pub total_length: T,
    /// Perpendicular offset P = 2R·(1 − cos Δ) between the two parallel
    /// tangent lines.
    pub tangent_separation: T,
    pub t1_station: T,
    /// Junction of the two arcs.
    pub e_station: T,
    pub t2_station: T,
}

/// Immutable result of a reverse-curve solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReverseCurveSolution<T: FloatingPoint> {
    elements: ReverseCurveElements<T>,
    staking1: StakingTable<T>,
    staking2: StakingTable<T>,
    azimuth: T,
}

impl<T: FloatingPoint> ReverseCurve<T> {
    pub fn new(radius: T, deflection: T, t1_station: T, max_arc_length: T, azimuth: T) -> Self {
        Self {
            radius,
            deflection,
            t1_station,
            max_arc_length,
            azimuth,
        }
    }

    /// Derives the curve elements and one staking table per arc.
    pub fn solve(&self) -> Result<ReverseCurveSolution<T>, CurveError> {
        validate_radius("radius", self.radius)?;
        validate_angle("deflection angle", self.deflection)?;
        validate_max_arc(self.max_arc_length)?;

        let two = T::from_f64(2.0).unwrap();
        let delta = deg_to_rad(self.deflection);
        let half = delta / two;
        guard_divisor("cos(Δ/2)", half.cos())?;

        let tangent = self.radius * half.tan();
        let length1 = self.radius * delta;
        let length2 = self.radius * delta;
        let total_length = length1 + length2;
        let tangent_separation = two * self.radius * (T::one() - delta.cos());

        // T1 is the defining station and is never snapped.
        let e_station = self.t1_station + length1;
        let t2_station = e_station + length2;

        debug!(
            "reverse curve: L={:.3} P={:.3} T1={:.3} E={:.3} T2={:.3}",
            as_f64(total_length),
            as_f64(tangent_separation),
            as_f64(self.t1_station),
            as_f64(e_station),
            as_f64(t2_station)
        );

        let staking1 = StakingTable::stake(
            ArcId::First,
            self.radius,
            self.t1_station,
            BoundaryStation::T1,
            e_station,
            BoundaryStation::E,
            self.max_arc_length,
        );
        let staking2 = StakingTable::stake(
            ArcId::Second,
            self.radius,
            e_station,
            BoundaryStation::E,
            t2_station,
            BoundaryStation::T2,
            self.max_arc_length,
        );

        Ok(ReverseCurveSolution {
            elements: ReverseCurveElements {
                radius: self.radius,
                deflection: self.deflection,
                tangent,
                length1,
                length2,
                total_length,
                tangent_separation,
                t1_station: self.t1_station,
                e_station,
                t2_station,
            },
            staking1,
            staking2,
            azimuth: self.azimuth,
        })
    }
}

impl<T: FloatingPoint> ReverseCurveSolution<T> {
    pub fn elements(&self) -> &ReverseCurveElements<T> {
        &self.elements
    }

    /// Staking table of the first arc.
    pub fn staking1(&self) -> &StakingTable<T> {
        &self.staking1
    }

    /// Staking table of the second arc.
    pub fn staking2(&self) -> &StakingTable<T> {
        &self.staking2
    }

    /// Plan-view arcs in a local frame with T1 at the origin: the first arc
    /// turns right, the second turns left off the first arc's end tangent.
    pub fn plan_arcs(&self) -> Vec<PlanArc<T>> {
        let delta = deg_to_rad(self.elements.deflection);
        let first = PlanArc::from_tangent(
            Point2::origin(),
            deg_to_rad(self.azimuth),
            self.elements.radius,
            delta,
            CurveDirection::Right,
        );
        let second = PlanArc::from_tangent(
            first.end_point(),
            first.end_azimuth(),
            self.elements.radius,
            delta,
            CurveDirection::Left,
        );
        vec![first, second]
    }
}
