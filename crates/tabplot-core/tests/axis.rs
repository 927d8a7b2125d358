// File: crates/tabplot-core/tests/axis.rs
// Purpose: Validate tick value generation and tick placement on both scale kinds.

use tabplot_core::axis::{band_ticks, linear_ticks, tick_values};
use tabplot_core::{AxisOrient, BandScale, DrawPrimitive, LinearScale};

#[test]
fn linear_ticks_use_round_steps() {
    let values = tick_values((0.0, 100.0), 10);
    assert_eq!(values.first().copied(), Some(0.0));
    assert_eq!(values.last().copied(), Some(100.0));
    assert_eq!(values.len(), 11);
    for w in values.windows(2) {
        assert_eq!(w[1] - w[0], 10.0);
    }
}

#[test]
fn linear_ticks_stay_inside_domain() {
    for v in tick_values((0.3, 9.7), 10) {
        assert!(v >= 0.3 && v <= 9.7, "tick {v} escaped the domain");
    }
}

#[test]
fn degenerate_domain_gets_one_tick() {
    assert_eq!(tick_values((5.0, 5.0), 10), vec![5.0]);
}

#[test]
fn band_ticks_sit_at_band_centers() {
    let scale = BandScale::new(
        vec!["a".to_string(), "b".to_string()],
        (0.0, 100.0),
        0.5,
    )
    .unwrap();
    let ticks = band_ticks(&scale, AxisOrient::Bottom, -25.0);
    assert_eq!(ticks.len(), 2);
    match &ticks[0] {
        DrawPrimitive::AxisTick { orient, position, label, rotation_deg } => {
            assert_eq!(*orient, AxisOrient::Bottom);
            assert_eq!(*position, 25.0);
            assert_eq!(label, "a");
            assert_eq!(*rotation_deg, -25.0);
        }
        other => panic!("expected an axis tick, got {other:?}"),
    }
    match &ticks[1] {
        DrawPrimitive::AxisTick { position, label, .. } => {
            assert_eq!(*position, 75.0);
            assert_eq!(label, "b");
        }
        other => panic!("expected an axis tick, got {other:?}"),
    }
}

#[test]
fn linear_tick_positions_follow_the_scale() {
    let scale = LinearScale::new((0.0, 100.0), (350.0, 50.0));
    let ticks = linear_ticks(&scale, AxisOrient::Left, 10);
    let mut last = f32::INFINITY;
    for t in &ticks {
        match t {
            DrawPrimitive::AxisTick { orient, position, .. } => {
                assert_eq!(*orient, AxisOrient::Left);
                // increasing values climb the screen
                assert!(*position < last);
                last = *position;
            }
            other => panic!("expected an axis tick, got {other:?}"),
        }
    }
    match &ticks[0] {
        DrawPrimitive::AxisTick { position, label, .. } => {
            assert_eq!(*position, 350.0);
            assert_eq!(label, "0");
        }
        other => panic!("expected an axis tick, got {other:?}"),
    }
}
