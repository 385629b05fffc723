use approx::assert_relative_eq;
use stakeout::prelude::*;

#[test]
fn simple_curve_properties_hold_across_parameter_sweep() {
    let radii = [50.0, 120.0, 200.0, 450.0, 1000.0];
    let angles = [5.0, 17.5, 40.0, 90.0, 135.0, 175.0];

    for &radius in &radii {
        for &angle in &angles {
            let solution = SimpleCurve::new(radius, angle, 10000.0, 25.0, 45.0, CurveDirection::Right)
                .solve()
                .unwrap();
            let e = solution.elements();

            // Chord never exceeds the arc, which never exceeds a semicircle.
            assert!(e.chord <= e.curve_length);
            assert!(e.curve_length <= std::f64::consts::PI * radius);
            assert_relative_eq!(e.pt_station - e.pc_station, e.curve_length, epsilon = 1e-9);

            // Incremental deflections accumulate to half the central angle.
            assert_relative_eq!(solution.staking().final_deflection(), angle / 2.0, epsilon = 1e-6);
            assert_relative_eq!(solution.staking().staked_length(), e.curve_length, epsilon = 1e-8);

            // Stations are strictly increasing and no segment exceeds the
            // maximum arc length.
            let points = solution.staking().points();
            for pair in points.windows(2) {
                assert!(pair[0].station < pair[1].station);
                assert!(pair[1].arc_length <= 25.0 * (1.0 + 1e-12));
                assert!(pair[1].total_deflection > pair[0].total_deflection);
            }
            assert!(points.last().unwrap().total_deflection <= angle / 2.0 + 1e-9);
        }
    }
}

#[test]
fn chord_approaches_arc_length_for_small_angles() {
    let mut previous_gap = f64::MAX;
    for &angle in &[40.0, 10.0, 2.0, 0.5, 0.05] {
        let e = SimpleCurve::new(300.0, angle, 5000.0, 10.0, 0.0, CurveDirection::Left)
            .solve()
            .unwrap()
            .elements()
            .clone();
        let gap = e.curve_length - e.chord;
        assert!(gap >= 0.0);
        assert!(gap < previous_gap);
        previous_gap = gap;
    }
}

#[test]
fn compound_curve_junction_arithmetic_across_parameter_sweep() {
    let cases = [
        (200.0, 20.0, 300.0, 20.0),
        (150.0, 35.0, 90.0, 60.0),
        (500.0, 8.0, 420.0, 12.0),
        (80.0, 85.0, 100.0, 85.0),
    ];
    for &(radius1, angle1, radius2, angle2) in &cases {
        let solution = CompoundCurve::new(
            radius1,
            angle1,
            radius2,
            angle2,
            10000.0,
            50.0,
            120.0,
            CurveDirection::Left,
        )
        .solve()
        .unwrap();
        let e = solution.elements();

        assert_relative_eq!(e.junction_station, e.pc1_station + e.length1, epsilon = 1e-12);
        assert_relative_eq!(
            e.pt2_station - e.pc1_station,
            e.length1 + e.length2,
            epsilon = 1e-9
        );
        // PC1 lands on a staking increment.
        assert_relative_eq!(e.pc1_station % 50.0, 0.0, epsilon = 1e-9);

        assert_relative_eq!(solution.staking1().final_deflection(), angle1 / 2.0, epsilon = 1e-6);
        assert_relative_eq!(solution.staking2().final_deflection(), angle2 / 2.0, epsilon = 1e-6);
        assert_relative_eq!(solution.staking1().staked_length(), e.length1, epsilon = 1e-8);
        assert_relative_eq!(solution.staking2().staked_length(), e.length2, epsilon = 1e-8);
    }
}

#[test]
fn reverse_curve_offset_matches_plan_geometry() {
    for &(radius, deflection) in &[(300.0, 40.0), (150.0, 25.0), (600.0, 70.0)] {
        let solution = ReverseCurve::new(radius, deflection, 1500.0, 50.0, 0.0)
            .solve()
            .unwrap();
        let arcs = solution.plan_arcs();
        let t2 = arcs[1].end_point();

        // With the incoming tangent due north the perpendicular offset
        // between the parallel tangents is the x displacement of T2.
        assert_relative_eq!(t2.x, solution.elements().tangent_separation, epsilon = 1e-9);
        assert_relative_eq!(arcs[1].end_azimuth(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn plan_arcs_follow_the_staking_tables() {
    let solution = CompoundCurve::new(
        200.0,
        20.0,
        300.0,
        20.0,
        10000.0,
        50.0,
        45.0,
        CurveDirection::Right,
    )
    .solve()
    .unwrap();
    let e = solution.elements();
    let arcs = solution.plan_arcs();

    // Every staked station of arc 1 lies on the first plan arc.
    for point in solution.staking1().points() {
        let position = arcs[0].point_at_station(point.station, e.pc1_station);
        assert_relative_eq!((position - arcs[0].center()).norm(), 200.0, epsilon = 1e-9);
    }
    // The junction station maps onto the start of the second arc.
    let junction = arcs[0].point_at_station(e.junction_station, e.pc1_station);
    let second_start = arcs[1].start_point();
    assert_relative_eq!(junction.x, second_start.x, epsilon = 1e-9);
    assert_relative_eq!(junction.y, second_start.y, epsilon = 1e-9);
}

#[test]
fn staking_tables_expose_read_only_rows_for_export() {
    // An export layer flattens rows; make sure every row renders a label
    // and carries finite values.
    let solution = ReverseCurve::<f64>::new(300.0, 40.0, 1500.0, 50.0, 50.0)
        .solve()
        .unwrap();
    for table in [solution.staking1(), solution.staking2()] {
        for point in table.points() {
            assert!(!point.label.to_string().is_empty());
            assert!(point.station.is_finite());
            assert!(point.chord.is_finite());
            assert!(point.chord <= point.arc_length + 1e-12);
        }
    }
}
