use log::debug;
use nalgebra::Point2;

use crate::errors::CurveError;
use crate::misc::{deg_to_rad, FloatingPoint};
use crate::plan::PlanArc;
use crate::staking::{ArcId, BoundaryStation, StakingTable};

use super::{as_f64, guard_divisor, validate_angle, validate_max_arc, validate_radius};
use super::CurveDirection;

/// Input parameters of a compound curve: two tangent circular arcs of
/// possibly different radii joined at a common tangent point, set out from
/// a shared point of intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundCurve<T: FloatingPoint> {
    /// Radius of the first arc in meters.
    pub radius1: T,
    /// Central angle Δ1 of the first arc in degrees.
    pub angle1: T,
    /// Radius of the second arc in meters.
    pub radius2: T,
    /// Central angle Δ2 of the second arc in degrees.
    pub angle2: T,
    /// Chainage of the shared point of intersection in meters.
    pub pi_station: T,
    /// Maximum staking segment length in meters.
    pub max_arc_length: T,
    /// Azimuth of the incoming tangent in degrees.
    pub azimuth: T,
    pub direction: CurveDirection,
}

/// Geometric elements derived from a [`CompoundCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundCurveElements<T: FloatingPoint> {
    pub radius1: T,
    pub angle1: T,
    pub radius2: T,
    pub angle2: T,
    /// Tangent length of the first arc, R1·tan(Δ1/2).
    pub tangent1: T,
    /// Tangent length of the second arc, R2·tan(Δ2/2).
    pub tangent2: T,
    /// Arc length of the first arc.
    pub length1: T,
    /// Arc length of the second arc.
    pub length2: T,
    pub total_length: T,
    /// Common tangent between the two arc tangent points.
    pub common_tangent: T,
    /// Sine-rule share of the common tangent on the incoming side.
    pub tangent1_pi: T,
    /// Sine-rule share of the common tangent on the outgoing side.
    pub tangent2_pi: T,
    /// Full tangent from the PI back to the curve start.
    pub total_tangent1: T,
    /// Full tangent from the PI forward to the curve end.
    pub total_tangent2: T,
    /// Start of the first arc, snapped to a max-arc increment.
    pub pc1_station: T,
    /// Shared junction PT1/PC2.
    pub junction_station: T,
    /// End of the second arc.
    pub pt2_station: T,
}

/// Immutable result of a compound-curve solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundCurveSolution<T: FloatingPoint> {
    elements: CompoundCurveElements<T>,
    staking1: StakingTable<T>,
    staking2: StakingTable<T>,
    azimuth: T,
    direction: CurveDirection,
}

impl<T: FloatingPoint> CompoundCurve<T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        radius1: T,
        angle1: T,
        radius2: T,
        angle2: T,
        pi_station: T,
        max_arc_length: T,
        azimuth: T,
        direction: CurveDirection,
    ) -> Self {
        Self {
            radius1,
            angle1,
            radius2,
            angle2,
            pi_station,
            max_arc_length,
            azimuth,
            direction,
        }
    }

    /// Derives the curve elements and one staking table per arc.
    pub fn solve(&self) -> Result<CompoundCurveSolution<T>, CurveError> {
        validate_radius("radius 1", self.radius1)?;
        validate_radius("radius 2", self.radius2)?;
        validate_angle("angle 1", self.angle1)?;
        validate_angle("angle 2", self.angle2)?;
        validate_max_arc(self.max_arc_length)?;

        let total_angle = self.angle1 + self.angle2;
        if total_angle > T::from_f64(180.0).unwrap() {
            return Err(CurveError::Validation(format!(
                "Δ1 + Δ2 must not exceed 180 degrees (got {})",
                as_f64(total_angle)
            )));
        }

        let two = T::from_f64(2.0).unwrap();
        let delta1 = deg_to_rad(self.angle1);
        let delta2 = deg_to_rad(self.angle2);
        let total = delta1 + delta2;
        // Δ1 + Δ2 = 180° passes validation but leaves the sine-rule split
        // undefined.
        guard_divisor("sin(Δ1+Δ2)", total.sin())?;

        let tangent1 = self.radius1 * (delta1 / two).tan();
        let tangent2 = self.radius2 * (delta2 / two).tan();
        let length1 = self.radius1 * delta1;
        let length2 = self.radius2 * delta2;
        let total_length = length1 + length2;

        // Sine rule on the triangle spanned by the two tangent intersection
        // points and the shared PI.
        let common_tangent = tangent1 + tangent2;
        let tangent1_pi = common_tangent * delta2.sin() / total.sin();
        let tangent2_pi = common_tangent * delta1.sin() / total.sin();
        let total_tangent1 = tangent1 + tangent1_pi;
        let total_tangent2 = tangent2 + tangent2_pi;

        // Staking starts on a round station: floor PC1 to the nearest lower
        // max-arc multiple, then advance one increment when the remainder
        // exceeds half an increment. The simple solver deliberately does
        // not do this.
        let pc1_raw = self.pi_station - total_tangent1;
        let mut pc1_station = (pc1_raw / self.max_arc_length).floor() * self.max_arc_length;
        if pc1_raw - pc1_station > self.max_arc_length / two {
            pc1_station += self.max_arc_length;
        }

        let junction_station = pc1_station + length1;
        let pt2_station = junction_station + length2;

        debug!(
            "compound curve: L1={:.3} L2={:.3} PC1={:.3} PT1/PC2={:.3} PT2={:.3}",
            as_f64(length1),
            as_f64(length2),
            as_f64(pc1_station),
            as_f64(junction_station),
            as_f64(pt2_station)
        );

        let staking1 = StakingTable::stake(
            ArcId::First,
            self.radius1,
            pc1_station,
            BoundaryStation::Pc1,
            junction_station,
            BoundaryStation::Pt1Pc2,
            self.max_arc_length,
        );
        let staking2 = StakingTable::stake(
            ArcId::Second,
            self.radius2,
            junction_station,
            BoundaryStation::Pt1Pc2,
            pt2_station,
            BoundaryStation::Pt2,
            self.max_arc_length,
        );

        Ok(CompoundCurveSolution {
            elements: CompoundCurveElements {
                radius1: self.radius1,
                angle1: self.angle1,
                radius2: self.radius2,
                angle2: self.angle2,
                tangent1,
                tangent2,
                length1,
                length2,
                total_length,
                common_tangent,
                tangent1_pi,
                tangent2_pi,
                total_tangent1,
                total_tangent2,
                pc1_station,
                junction_station,
                pt2_station,
            },
            staking1,
            staking2,
            azimuth: self.azimuth,
            direction: self.direction,
        })
    }
}

impl<T: FloatingPoint> CompoundCurveSolution<T> {
    pub fn elements(&self) -> &CompoundCurveElements<T> {
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

    /// Plan-view arcs chained tangent-to-tangent, in a local frame with the
    /// curve start at the origin and the incoming tangent along the input
    /// azimuth.
    pub fn plan_arcs(&self) -> Vec<PlanArc<T>> {
        let first = PlanArc::from_tangent(
            Point2::origin(),
            deg_to_rad(self.azimuth),
            self.elements.radius1,
            deg_to_rad(self.elements.angle1),
            self.direction,
        );
        let second = PlanArc::from_tangent(
            first.end_point(),
            first.end_azimuth(),
            self.elements.radius2,
            deg_to_rad(self.elements.angle2),
            self.direction,
        );
        vec![first, second]
    }
}
