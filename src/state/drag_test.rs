use super::*;

// =============================================================
// DragState
// =============================================================

#[test]
fn default_is_idle() {
    let d = DragState::default();
    assert!(!d.dragging);
    assert!(d.pending_frame.is_none());
    assert!(d.pending_target.is_none());
}

#[test]
fn begin_records_origin() {
    let mut d = DragState::default();
    d.begin(100.0, 40.0);
    assert!(d.dragging);
    assert_eq!(d.start_pointer_x, 100.0);
    assert_eq!(d.start_scroll_offset, 40.0);
}

#[test]
fn target_amplifies_pointer_travel() {
    let mut d = DragState::default();
    d.begin(100.0, 0.0);
    assert_eq!(d.target_for(60.0), 80.0);
    assert_eq!(d.target_for(100.0), 0.0);
    assert_eq!(d.target_for(150.0), -100.0);
}

#[test]
fn target_is_relative_to_start_offset() {
    let mut d = DragState::default();
    d.begin(20.0, 500.0);
    assert_eq!(d.target_for(45.0), 450.0);
}

#[test]
fn take_pending_clears_both_fields() {
    let mut d = DragState {
        pending_frame: Some(FrameHandle(7)),
        pending_target: Some(12.0),
        ..Default::default()
    };
    assert_eq!(d.take_pending(), Some(FrameHandle(7)));
    assert!(d.pending_frame.is_none());
    assert!(d.pending_target.is_none());
    assert_eq!(d.take_pending(), None);
}

// =============================================================
// Snapping
// =============================================================

#[test]
fn snap_rounds_to_nearest_item() {
    assert_eq!(snap_target(130.0, 240.0), Some(240.0));
    assert_eq!(snap_target(100.0, 240.0), Some(0.0));
    assert_eq!(snap_target(80.0, 240.0), Some(0.0));
    assert_eq!(snap_target(590.0, 240.0), Some(480.0));
}

#[test]
fn snap_ties_round_up() {
    assert_eq!(snap_target(120.0, 240.0), Some(240.0));
    assert_eq!(snap_target(360.0, 240.0), Some(480.0));
}

#[test]
fn snap_rejects_unusable_width() {
    assert_eq!(snap_target(130.0, 0.0), None);
    assert_eq!(snap_target(130.0, -10.0), None);
    assert_eq!(snap_target(130.0, f64::NAN), None);
}

#[test]
fn round_half_up_matches_math_round() {
    assert_eq!(round_half_up(0.5), 1.0);
    assert_eq!(round_half_up(-0.5), 0.0);
    assert_eq!(round_half_up(-1.5), -1.0);
    assert_eq!(round_half_up(2.4), 2.0);
}
