use super::*;

#[test]
fn default_snaps_with_standard_step() {
    let c = CarouselConfig::default();
    assert!(c.snap);
    assert_eq!(c.button_step, 240.0);
}

#[test]
fn free_scrolling_grids_do_not_snap() {
    assert!(!CarouselConfig::for_grid(GridKind::Team).snap);
    assert!(!CarouselConfig::for_grid(GridKind::Portfolio).snap);
}

#[test]
fn snapping_grids() {
    for kind in [
        GridKind::Services,
        GridKind::Reviews,
        GridKind::Certifications,
        GridKind::Recognition,
    ] {
        assert!(CarouselConfig::for_grid(kind).snap, "{kind:?} should snap");
    }
}

#[test]
fn button_steps_per_grid() {
    assert_eq!(CarouselConfig::for_grid(GridKind::Team).button_step, 220.0);
    assert_eq!(CarouselConfig::for_grid(GridKind::Portfolio).button_step, 300.0);
    assert_eq!(CarouselConfig::for_grid(GridKind::Services).button_step, 300.0);
    assert_eq!(CarouselConfig::for_grid(GridKind::Reviews).button_step, 240.0);
}

#[test]
fn partial_json_keeps_defaults() {
    let c: CarouselConfig = serde_json::from_str(r#"{ "snap": false }"#).unwrap();
    assert!(!c.snap);
    assert_eq!(c.button_step, 240.0);
}

#[test]
fn empty_json_is_default() {
    let c: CarouselConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(c, CarouselConfig::default());
}
