// Host-side tests for the zone table and its one-time translation.

use bioscan_core::*;
use glam::Vec3;

#[test]
fn registry_lists_seven_zones_in_fixed_order() {
    let reg = ZoneRegistry::new();
    let ids: Vec<&str> = reg.all().iter().map(|z| z.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "head", "chest", "abdomen", "leftArm", "rightArm", "leftLeg", "rightLeg"
        ]
    );
    for (zone, name) in reg.all().iter().zip(ZoneName::ALL) {
        assert_eq!(zone.id, name);
        assert_eq!(reg.lookup(name).id, name);
    }
}

#[test]
fn lookup_by_string_id() {
    let reg = ZoneRegistry::new();
    let arm = reg.lookup_id("leftArm").expect("leftArm is a known id");
    assert_eq!(arm.display_name, "Reaction Assessment");
    assert_eq!(arm.system_label, "Neural Responsiveness");
    assert_eq!(arm.bounds.min, Vec3::new(-1.5, 1.2, -0.6));
    assert_eq!(arm.bounds.max, Vec3::new(-0.5, 2.6, 0.6));
    assert!(reg.lookup_id("LeftArm").is_none(), "ids are case sensitive");
    assert!(reg.lookup_id("tail").is_none());
    assert!(reg.lookup_id("").is_none());
}

#[test]
fn parsing_unknown_id_is_an_error_not_a_panic() {
    assert_eq!("rightLeg".parse::<ZoneName>(), Ok(ZoneName::RightLeg));
    assert_eq!(
        "spleen".parse::<ZoneName>(),
        Err(SceneError::UnknownZone("spleen".to_string()))
    );
}

#[test]
fn names_round_trip_through_display() {
    for name in ZoneName::ALL {
        assert_eq!(name.to_string().parse::<ZoneName>(), Ok(name));
    }
}

#[test]
fn families_and_mirrors() {
    assert_eq!(ZoneName::LeftArm.family(), ZoneFamily::Arm(Side::Left));
    assert_eq!(ZoneName::RightLeg.family(), ZoneFamily::Leg(Side::Right));
    assert_eq!(ZoneName::Abdomen.family(), ZoneFamily::Abdomen);
    assert_eq!(ZoneName::LeftArm.mirror(), ZoneName::RightArm);
    assert_eq!(ZoneName::RightLeg.mirror(), ZoneName::LeftLeg);
    assert_eq!(ZoneName::Head.mirror(), ZoneName::Head);
    for name in ZoneName::ALL {
        assert_eq!(name.mirror().mirror(), name);
    }
}

#[test]
fn translate_shifts_bounds_without_rescaling() {
    let mut reg = ZoneRegistry::new();
    let before = reg.lookup(ZoneName::Chest).bounds;
    let offset = Vec3::new(0.25, -0.5, 1.0);
    reg.translate(offset);
    let after = reg.lookup(ZoneName::Chest).bounds;
    assert_eq!(after.min, before.min + offset);
    assert_eq!(after.max, before.max + offset);
    assert_eq!(after.size(), before.size());
    assert_eq!(reg.offset(), offset);
}

#[test]
fn translating_twice_does_not_accumulate() {
    let mut reg = ZoneRegistry::new();
    let offset = Vec3::new(0.0, 2.0, 0.0);
    reg.translate(offset);
    reg.translate(offset);
    let head = reg.lookup(ZoneName::Head).bounds;
    assert_eq!(head.min, Vec3::new(-0.5, 4.6, -0.5));
    assert_eq!(head.max, Vec3::new(0.5, 5.5, 0.5));
}

#[test]
fn aabb_containment_is_inclusive() {
    let b = Aabb::new(Vec3::ZERO, Vec3::ONE);
    assert!(b.contains(Vec3::ZERO));
    assert!(b.contains(Vec3::ONE));
    assert!(b.contains(Vec3::splat(0.5)));
    assert!(!b.contains(Vec3::new(1.0001, 0.5, 0.5)));
    let e = b.expanded(0.3);
    assert!(e.contains(Vec3::new(1.29, -0.29, 0.5)));
    assert_eq!(e.center(), b.center());
}
