// File: crates/align-core/tests/align.rs
// Purpose: Validate alignment properties: determinism, matched intervals, non-clipping.

use align_core::{align, AlignError, AxisSide};

const TOL: f64 = 1e-9;

fn assert_close(got: f64, want: f64, what: &str) {
    assert!(
        (got - want).abs() < 1e-6,
        "{what}: got {got}, want {want}"
    );
}

#[test]
fn worked_scenario_mixed_sign() {
    let a = [-10.0, 5.0, 20.0, 50.0];
    let b = [0.0, 100.0, 300.0, 437.0];
    let r = align(&a, &b).expect("valid input");

    // span_a = 60 (min < 0), leading digit 6 at magnitude 10
    assert_close(r.left.dtick, 60.0, "left dtick");
    // span_b = 437, leading digit 4 at magnitude 100
    assert_close(r.right.dtick, 400.0, "right dtick");

    // series_a forced a negative extent onto both axes
    assert_close(r.left.range_min, -16.925, "left range_min");
    assert_close(r.right.range_min, -112.833333333, "right range_min");
    assert_close(r.left.range_max, 71.55, "left range_max");
    assert_close(r.right.range_max, 477.0, "right range_max");
}

#[test]
fn determinism() {
    let a = [3.4, -1.2, 9.9, 0.0];
    let b = [120.0, 88.5, 401.0];
    let r1 = align(&a, &b).unwrap();
    let r2 = align(&a, &b).unwrap();
    // Pure computation: bit-identical output on identical input.
    assert_eq!(r1, r2);
}

#[test]
fn interval_counts_match_on_both_axes() {
    let cases: &[(&[f64], &[f64])] = &[
        (&[-10.0, 5.0, 20.0, 50.0], &[0.0, 100.0, 300.0, 437.0]),
        (&[1.0, 2.0, 3.0], &[0.5, 0.7, 0.9]),
        (&[-3.0, -1.0], &[10.0, 250.0]),
        (&[0.001, 0.004], &[-8.0, 12.0]),
    ];
    for (a, b) in cases {
        let r = align(a, b).unwrap();
        let pos_a = r.left.range_max / r.left.dtick;
        let pos_b = r.right.range_max / r.right.dtick;
        assert!((pos_a - pos_b).abs() < TOL, "positive intervals differ: {pos_a} vs {pos_b}");
        let neg_a = r.left.range_min.abs() / r.left.dtick;
        let neg_b = r.right.range_min.abs() / r.right.dtick;
        assert!((neg_a - neg_b).abs() < TOL, "negative intervals differ: {neg_a} vs {neg_b}");
        assert!((r.left.intervals() - r.right.intervals()).abs() < TOL);
    }
}

#[test]
fn no_data_point_is_clipped() {
    let cases: &[(&[f64], &[f64])] = &[
        (&[-10.0, 5.0, 20.0, 50.0], &[0.0, 100.0, 300.0, 437.0]),
        (&[-0.5, 0.25], &[9999.0, 3.0]),
        (&[-100.0, -20.0], &[-7.0, 42.0]),
        (&[5.0, 5.0, 5.0], &[1.0, 2.0]),
    ];
    for (a, b) in cases {
        let r = align(a, b).unwrap();
        for &v in *a {
            assert!(r.left.range_min <= v && v <= r.left.range_max, "left clips {v}");
        }
        for &v in *b {
            assert!(r.right.range_min <= v && v <= r.right.range_max, "right clips {v}");
        }
    }
}

#[test]
fn zero_floor_when_both_non_negative() {
    let r = align(&[0.0, 3.0, 7.5], &[12.0, 88.0]).unwrap();
    // Exactly zero, not merely close: no negative excursion exists.
    assert_eq!(r.left.range_min, 0.0);
    assert_eq!(r.right.range_min, 0.0);
}

#[test]
fn one_negative_series_forces_negative_extent_on_both() {
    let r = align(&[-10.0, 50.0], &[100.0, 437.0]).unwrap();
    assert!(r.left.range_min < 0.0);
    // The right series has no negative values but still gets the extent.
    assert!(r.right.range_min < 0.0);
}

#[test]
fn all_equal_positive_values_are_not_degenerate() {
    // Span falls back to max (5), so dtick = 5 and alignment proceeds.
    let r = align(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap();
    assert_close(r.left.dtick, 5.0, "left dtick");
}

#[test]
fn all_zero_series_is_rejected() {
    let err = align(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, AlignError::DegenerateSpan { side: AxisSide::Left });
}

#[test]
fn empty_series_is_rejected() {
    let err = align(&[], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, AlignError::EmptyInput { side: AxisSide::Left });

    let err = align(&[1.0, 2.0], &[]).unwrap_err();
    assert_eq!(err, AlignError::EmptyInput { side: AxisSide::Right });
}

#[test]
fn non_finite_values_are_rejected() {
    let err = align(&[1.0, f64::NAN], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, AlignError::NonFiniteInput { side: AxisSide::Left, .. }));

    let err = align(&[1.0, 2.0], &[f64::INFINITY]).unwrap_err();
    assert!(matches!(err, AlignError::NonFiniteInput { side: AxisSide::Right, .. }));
}

#[test]
fn fractional_spans_get_fractional_dticks() {
    // span = 0.437 -> magnitude 0.1, leading digit 4 -> dtick 0.4
    let r = align(&[0.1, 0.437], &[0.2, 0.9]).unwrap();
    assert_close(r.left.dtick, 0.4, "left dtick");
    assert_close(r.right.dtick, 0.9, "right dtick");
}
