// Host-side tests for point-to-zone resolution and its rule priority.

use bioscan_core::*;
use glam::Vec3;

fn resolve(p: Vec3) -> Option<ZoneName> {
    SpatialResolver::default().resolve(&ZoneRegistry::new(), p)
}

fn rule(p: Vec3) -> Option<Rule> {
    SpatialResolver::default()
        .resolve_detailed(&ZoneRegistry::new(), p)
        .map(|r| r.rule)
}

#[test]
fn arm_override_picks_side_by_x() {
    let p = Vec3::new(-0.8, 1.8, 0.1);
    assert_eq!(resolve(p), Some(ZoneName::LeftArm));
    assert_eq!(rule(p), Some(Rule::ArmOverride));
    assert_eq!(resolve(Vec3::new(0.8, 1.8, 0.1)), Some(ZoneName::RightArm));
}

#[test]
fn arm_override_beats_earlier_zones() {
    // Inside the expanded chest box, which precedes the arms in registry order.
    let p = Vec3::new(-0.6, 2.0, 0.0);
    assert!(ZoneRegistry::new()
        .lookup(ZoneName::Chest)
        .bounds
        .expanded(ZONE_TOLERANCE)
        .contains(p));
    assert_eq!(resolve(p), Some(ZoneName::LeftArm));
}

#[test]
fn arm_override_ignores_depth() {
    assert_eq!(resolve(Vec3::new(-0.9, 2.0, 25.0)), Some(ZoneName::LeftArm));
}

#[test]
fn arm_override_y_range_is_open() {
    // y == 2.6 is outside the override, so the head box claims it.
    let p = Vec3::new(-0.7, 2.6, 0.0);
    assert_eq!(resolve(p), Some(ZoneName::Head));
    assert_eq!(rule(p), Some(Rule::Containment));
}

#[test]
fn abdomen_override() {
    let p = Vec3::new(0.0, 1.4, 0.0);
    assert_eq!(resolve(p), Some(ZoneName::Abdomen));
    assert_eq!(rule(p), Some(Rule::AbdomenOverride));
    // Also inside the expanded chest box; the override still wins.
    assert_eq!(resolve(Vec3::new(0.3, 1.7, 0.0)), Some(ZoneName::Abdomen));
}

#[test]
fn containment_in_registry_order() {
    let head = Vec3::new(0.0, 3.0, 0.0);
    assert_eq!(resolve(head), Some(ZoneName::Head));
    assert_eq!(rule(head), Some(Rule::Containment));
    assert_eq!(resolve(Vec3::new(0.0, 2.2, 0.0)), Some(ZoneName::Chest));
    assert_eq!(resolve(Vec3::new(-0.3, 0.5, 0.0)), Some(ZoneName::LeftLeg));
    assert_eq!(resolve(Vec3::new(0.3, 0.5, 0.0)), Some(ZoneName::RightLeg));
}

#[test]
fn containment_uses_tolerance() {
    // Above the head box but within the 0.3 margin.
    let p = Vec3::new(0.0, 3.7, 0.0);
    assert_eq!(resolve(p), Some(ZoneName::Head));
    assert_eq!(rule(p), Some(Rule::Containment));
}

#[test]
fn nearest_centre_fallback() {
    let p = Vec3::new(0.0, 4.0, 0.0);
    let r = SpatialResolver::default()
        .resolve_detailed(&ZoneRegistry::new(), p)
        .expect("within range of the head centre");
    assert_eq!(r.zone, ZoneName::Head);
    match r.rule {
        Rule::Nearest { distance } => assert!((distance - 0.95).abs() < 1e-4, "{distance}"),
        other => panic!("expected nearest rule, got {other:?}"),
    }
}

#[test]
fn nearest_centre_tie_goes_to_earlier_zone() {
    // Equidistant from both leg centres, outside every expanded box.
    let p = Vec3::new(0.0, -1.0, 0.0);
    assert_eq!(resolve(p), Some(ZoneName::LeftLeg));
    assert!(matches!(rule(p), Some(Rule::Nearest { .. })));
}

#[test]
fn far_points_resolve_to_none() {
    assert_eq!(resolve(Vec3::new(10.0, 10.0, 10.0)), None);
    assert_eq!(resolve(Vec3::new(0.0, 4.6, 0.0)), None);
}

#[test]
fn non_finite_points_resolve_to_none() {
    assert_eq!(resolve(Vec3::new(f32::NAN, 1.5, 0.0)), None);
    assert_eq!(resolve(Vec3::new(0.0, f32::INFINITY, 0.0)), None);
    assert_eq!(resolve(Vec3::new(0.0, 1.5, f32::NEG_INFINITY)), None);
}

#[test]
fn any_point_inside_an_expanded_zone_resolves() {
    let reg = ZoneRegistry::new();
    let resolver = SpatialResolver::default();
    let mut checked = 0;
    for ix in -8..=8 {
        for iy in -4..=16 {
            for iz in -4..=4 {
                let p = Vec3::new(ix as f32 * 0.25, iy as f32 * 0.25, iz as f32 * 0.25);
                let inside = reg
                    .all()
                    .iter()
                    .any(|z| z.bounds.expanded(ZONE_TOLERANCE).contains(p));
                if inside {
                    checked += 1;
                    assert!(resolver.resolve(&reg, p).is_some(), "{p:?} should resolve");
                }
            }
        }
    }
    assert!(checked > 100);
}

#[test]
fn translated_registry_moves_containment_but_not_overrides() {
    let mut reg = ZoneRegistry::new();
    reg.translate(Vec3::new(0.0, 10.0, 0.0));
    let resolver = SpatialResolver::default();
    assert_eq!(
        resolver.resolve(&reg, Vec3::new(0.0, 13.0, 0.0)),
        Some(ZoneName::Head)
    );
    // Overrides are fixed world-frame rules.
    assert_eq!(
        resolver.resolve(&reg, Vec3::new(-0.8, 1.8, 0.0)),
        Some(ZoneName::LeftArm)
    );
}
