use itertools::Itertools;

use crate::misc::{rad_to_deg, FloatingPoint};

use super::station_sequence::station_sequence;
use super::{ArcId, BoundaryStation, StakingLabel, StakingPoint};

/// Ordered setting-out rows for a single arc, bracketed by its boundary
/// stations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StakingTable<T: FloatingPoint> {
    points: Vec<StakingPoint<T>>,
}

impl<T: FloatingPoint> StakingTable<T> {
    /// Discretizes one arc into setting-out rows.
    ///
    /// The arc-start boundary row carries zero increments. One interior row
    /// is produced per station of [`station_sequence`], applying the
    /// deflection-angle theorem (the deflection to a chord equals half the
    /// central angle its arc subtends) to each segment; zero-length segments
    /// are skipped. The terminal row keeps its computed increments but is
    /// relabeled with the arc-end boundary name. Cumulative deflection
    /// starts at zero for every arc.
    pub(crate) fn stake(
        arc: ArcId,
        radius: T,
        start: T,
        start_label: BoundaryStation,
        end: T,
        end_label: BoundaryStation,
        max_arc: T,
    ) -> Self {
        let two = T::from_f64(2.0).unwrap();

        let mut points = vec![StakingPoint {
            label: StakingLabel::Boundary(start_label),
            arc,
            station: start,
            arc_length: T::zero(),
            deflection: T::zero(),
            total_deflection: T::zero(),
            chord: T::zero(),
        }];

        let mut total_deflection = T::zero();
        let mut index = 0;
        let stations = station_sequence(start, end, max_arc);
        for (previous, station) in std::iter::once(start).chain(stations).tuple_windows() {
            let arc_length = station - previous;
            if arc_length <= T::zero() {
                continue;
            }
            let deflection_rad = arc_length / (two * radius);
            let deflection = rad_to_deg(deflection_rad);
            total_deflection += deflection;
            index += 1;
            points.push(StakingPoint {
                label: StakingLabel::Point(index),
                arc,
                station,
                arc_length,
                deflection,
                total_deflection,
                chord: two * radius * deflection_rad.sin(),
            });
        }

        // The last sequenced station is always the arc end.
        if let Some(last) = points.last_mut() {
            if last.station == end {
                last.label = StakingLabel::Boundary(end_label);
            }
        }

        Self { points }
    }

    /// All rows in staking order, boundary rows included.
    pub fn points(&self) -> &[StakingPoint<T>] {
        &self.points
    }

    /// Interior rows only, without the bracketing boundary stations.
    pub fn interior_points(&self) -> impl Iterator<Item = &StakingPoint<T>> {
        self.points.iter().filter(|p| !p.label.is_boundary())
    }

    /// Cumulative deflection at the arc end in degrees.
    pub fn final_deflection(&self) -> T {
        self.points
            .last()
            .map(|p| p.total_deflection)
            .unwrap_or_else(T::zero)
    }

    /// Sum of all staked segment lengths in meters.
    pub fn staked_length(&self) -> T {
        self.points
            .iter()
            .fold(T::zero(), |sum, p| sum + p.arc_length)
    }
}
