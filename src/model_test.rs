use super::*;

fn section(site: &SiteContent, kind: GridKind) -> Option<&Section> {
    site.sections.iter().find(|s| s.kind == kind)
}

#[test]
fn bundled_content_parses() {
    let site = SiteContent::bundled().unwrap();
    assert_eq!(site.sections.len(), 6);
    for s in &site.sections {
        assert!(!s.items.is_empty(), "{} has no items", s.id);
    }
}

#[test]
fn bundled_content_covers_every_grid() {
    let site = SiteContent::bundled().unwrap();
    for kind in [
        GridKind::Team,
        GridKind::Portfolio,
        GridKind::Services,
        GridKind::Reviews,
        GridKind::Certifications,
        GridKind::Recognition,
    ] {
        assert!(section(&site, kind).is_some(), "missing {kind:?}");
    }
}

#[test]
fn section_without_override_uses_grid_defaults() {
    let raw = r#"{ "sections": [ { "id": "team", "kind": "team", "title": "Team" } ] }"#;
    let site = SiteContent::from_json(raw).unwrap();
    let team = section(&site, GridKind::Team).unwrap();
    assert!(team.items.is_empty());
    assert_eq!(team.config(), CarouselConfig::for_grid(GridKind::Team));
}

#[test]
fn section_override_replaces_defaults() {
    let raw = r#"{ "sections": [
        { "id": "team", "kind": "team", "title": "Team", "carousel": { "snap": true } }
    ] }"#;
    let site = SiteContent::from_json(raw).unwrap();
    let cfg = site.sections[0].config();
    assert!(cfg.snap);
    assert_eq!(cfg.button_step, 240.0);
}

#[test]
fn unknown_grid_kind_is_a_content_error() {
    let raw = r#"{ "sections": [ { "id": "x", "kind": "gallery", "title": "X" } ] }"#;
    let err = SiteContent::from_json(raw).unwrap_err();
    assert!(matches!(err, SiteError::Content(_)));
}

#[test]
fn grid_classes_match_stylesheet() {
    assert_eq!(GridKind::Reviews.grid_class(), "review-grid");
    assert_eq!(GridKind::Certifications.grid_class(), "cert-grid");
    assert_eq!(GridKind::Team.container_class(), "team-container");
    assert_eq!(GridKind::Reviews.item_class(), "review-card");
}
