use super::*;

#[test]
fn at_start_only_right_is_available() {
    let e = ScrollEdges::measure(0.0, 1200.0, 400.0);
    assert!(!e.can_scroll_left);
    assert!(e.can_scroll_right);
}

#[test]
fn in_middle_both_are_available() {
    let e = ScrollEdges::measure(300.0, 1200.0, 400.0);
    assert!(e.can_scroll_left);
    assert!(e.can_scroll_right);
}

#[test]
fn at_end_only_left_is_available() {
    let e = ScrollEdges::measure(800.0, 1200.0, 400.0);
    assert!(e.can_scroll_left);
    assert!(!e.can_scroll_right);
}

#[test]
fn content_narrower_than_viewport_hides_both() {
    let e = ScrollEdges::measure(0.0, 300.0, 400.0);
    assert_eq!(e, ScrollEdges::default());
}

#[test]
fn opacity_follows_availability() {
    let e = ScrollEdges::measure(0.0, 1200.0, 400.0);
    assert_eq!(e.opacity(Direction::Left), "0");
    assert_eq!(e.opacity(Direction::Right), "1");
}

#[test]
fn step_sign_follows_direction() {
    assert_eq!(Direction::Left.step(240.0), -240.0);
    assert_eq!(Direction::Right.step(240.0), 240.0);
}
