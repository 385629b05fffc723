use approx::assert_relative_eq;

use super::*;

#[test]
fn sequence_snaps_first_station_up_to_an_increment() {
    let stations = station_sequence(9927.2057, 10066.832, 50.0);
    assert_eq!(stations.len(), 4);
    assert_relative_eq!(stations[0], 9950.0);
    assert_relative_eq!(stations[1], 10000.0);
    assert_relative_eq!(stations[2], 10050.0);
    assert_eq!(stations[3], 10066.832);
}

#[test]
fn sequence_includes_start_when_it_falls_on_an_increment() {
    let stations = station_sequence(100.0, 250.0, 50.0);
    assert_eq!(stations, vec![100.0, 150.0, 200.0, 250.0]);
}

#[test]
fn sequence_with_short_span_is_just_the_end() {
    // First candidate (150) is not below the end.
    let stations = station_sequence(101.0, 149.0, 50.0);
    assert_eq!(stations, vec![149.0]);
}

#[test]
fn sequence_always_terminates_exactly_at_end() {
    let cases = [
        (0.0, 1.0, 0.3),
        (-125.4, 87.9, 10.0),
        (1500.0, 1709.4395102393195, 50.0),
        (3.2, 3.3, 100.0),
        (9900.0, 10074.532925, 25.0),
    ];
    for &(start, end, max_step) in &cases {
        let stations = station_sequence(start, end, max_step);
        assert_eq!(*stations.last().unwrap(), end);
        assert!(stations[0] >= start);
        for pair in stations.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[1] - pair[0] <= max_step * (1.0 + 1e-12));
        }
        let mut previous = start;
        for &station in &stations {
            assert!(station - previous <= max_step * (1.0 + 1e-12));
            previous = station;
        }
    }
}

#[test]
fn stake_brackets_the_arc_with_boundary_rows() {
    let table = StakingTable::stake(
        ArcId::First,
        200.0,
        9927.2057,
        BoundaryStation::Pc,
        10066.832,
        BoundaryStation::Pt,
        50.0,
    );
    let points = table.points();

    let first = &points[0];
    assert_eq!(first.label, StakingLabel::Boundary(BoundaryStation::Pc));
    assert_eq!(first.arc_length, 0.0);
    assert_eq!(first.deflection, 0.0);
    assert_eq!(first.chord, 0.0);

    let last = points.last().unwrap();
    assert_eq!(last.label, StakingLabel::Boundary(BoundaryStation::Pt));
    assert_eq!(last.station, 10066.832);
    // Terminal row keeps the real increments of its short final segment.
    assert_relative_eq!(last.arc_length, 16.832, epsilon = 1e-3);
    assert!(last.arc_length > 0.0);

    // Interior rows are numbered from 1 within the arc.
    let interior: Vec<_> = table.interior_points().collect();
    assert_eq!(interior.len(), 3);
    for (i, point) in interior.iter().enumerate() {
        assert_eq!(point.label, StakingLabel::Point(i + 1));
    }
}

#[test]
fn stake_skips_zero_length_segment_at_a_round_start() {
    // Start sits exactly on an increment; the sequencer returns it but no
    // zero-length row may appear.
    let table = StakingTable::stake(
        ArcId::First,
        300.0,
        100.0,
        BoundaryStation::T1,
        250.0,
        BoundaryStation::E,
        50.0,
    );
    for point in table.interior_points() {
        assert!(point.arc_length > 0.0);
    }
    assert_eq!(table.points().len(), 4); // T1, P1, P2, E
    assert_relative_eq!(table.staked_length(), 150.0, epsilon = 1e-12);
}

#[test]
fn stake_accumulates_half_the_central_angle() {
    let radius = 200.0_f64;
    let arc_length = 139.6263401595464; // R * 40°
    let table = StakingTable::stake(
        ArcId::First,
        radius,
        9927.2057,
        BoundaryStation::Pc,
        9927.2057 + arc_length,
        BoundaryStation::Pt,
        50.0,
    );
    assert_relative_eq!(table.final_deflection(), 20.0, epsilon = 1e-6);
    assert_relative_eq!(table.staked_length(), arc_length, epsilon = 1e-9);

    // Cumulative deflection is strictly increasing across rows.
    let points = table.points();
    for pair in points.windows(2) {
        assert!(pair[0].total_deflection < pair[1].total_deflection);
    }
}

#[test]
fn labels_render_with_surveying_names() {
    assert_eq!(StakingLabel::Boundary(BoundaryStation::Pc).to_string(), "PC");
    assert_eq!(
        StakingLabel::Boundary(BoundaryStation::Pt1Pc2).to_string(),
        "PT1/PC2"
    );
    assert_eq!(StakingLabel::Point(3).to_string(), "P3");
    assert_eq!(ArcId::Second.to_string(), "Curve 2");
}
