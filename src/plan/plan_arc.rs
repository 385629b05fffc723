use nalgebra::{Point2, Vector2};

use crate::curve::CurveDirection;
use crate::misc::FloatingPoint;

/// Unit direction of a surveying azimuth: clockwise from north, with x
/// pointing east and y pointing north.
fn bearing_vector<T: FloatingPoint>(azimuth: T) -> Vector2<T> {
    Vector2::new(azimuth.sin(), azimuth.cos())
}

/// Plan-view description of one circular arc: the quantities a diagramming
/// or export layer needs to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanArc<T: FloatingPoint> {
    center: Point2<T>,
    radius: T,
    /// Azimuth of the tangent at the arc start, in radians.
    start_azimuth: T,
    /// Signed sweep in radians; positive turns right (clockwise in plan).
    sweep: T,
}

impl<T: FloatingPoint> PlanArc<T> {
    /// Builds the arc leaving `start` along `start_azimuth` and turning
    /// through the central angle `delta` (radians) in the given direction.
    /// The center sits one radius from `start`, perpendicular to the
    /// tangent on the turning side.
    pub fn from_tangent(
        start: Point2<T>,
        start_azimuth: T,
        radius: T,
        delta: T,
        direction: CurveDirection,
    ) -> Self {
        let sign = direction.turn_sign::<T>();
        let center = start + bearing_vector(start_azimuth + sign * T::frac_pi_2()) * radius;
        Self {
            center,
            radius,
            start_azimuth,
            sweep: sign * delta,
        }
    }

    pub fn center(&self) -> Point2<T> {
        self.center
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    /// Azimuth of the tangent at the arc start, in radians.
    pub fn start_azimuth(&self) -> T {
        self.start_azimuth
    }

    /// Signed sweep in radians; positive turns right.
    pub fn sweep(&self) -> T {
        self.sweep
    }

    fn turn_sign(&self) -> T {
        if self.sweep >= T::zero() {
            T::one()
        } else {
            -T::one()
        }
    }

    /// Point on the arc at the unsigned central angle `theta` from its
    /// start (`theta = 0` is the arc start).
    pub fn point_at(&self, theta: T) -> Point2<T> {
        let sign = self.turn_sign();
        let radial = self.start_azimuth - sign * T::frac_pi_2() + sign * theta;
        self.center + bearing_vector(radial) * self.radius
    }

    /// Point at a chainage along the arc, given the station of the arc
    /// start.
    pub fn point_at_station(&self, station: T, start_station: T) -> Point2<T> {
        self.point_at((station - start_station) / self.radius)
    }

    pub fn start_point(&self) -> Point2<T> {
        self.point_at(T::zero())
    }

    pub fn end_point(&self) -> Point2<T> {
        self.point_at(self.sweep.abs())
    }

    /// Azimuth of the tangent at the arc end, in radians.
    pub fn end_azimuth(&self) -> T {
        self.start_azimuth + self.sweep
    }
}
