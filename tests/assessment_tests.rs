// Host-side tests for mapping zones and page ids onto mini-game panels.

use bioscan_core::*;

#[test]
fn every_zone_maps_to_a_test() {
    assert_eq!(ActiveTest::from(ZoneName::Head), ActiveTest::Cognitive);
    assert_eq!(ActiveTest::from(ZoneName::Chest), ActiveTest::Cardiovascular);
    assert_eq!(ActiveTest::from(ZoneName::Abdomen), ActiveTest::BodyComposition);
    assert_eq!(ActiveTest::from(ZoneName::LeftArm), ActiveTest::Reaction);
    assert_eq!(ActiveTest::from(ZoneName::RightArm), ActiveTest::Reaction);
    assert_eq!(ActiveTest::from(ZoneName::LeftLeg), ActiveTest::Stability);
    assert_eq!(ActiveTest::from(ZoneName::RightLeg), ActiveTest::Stability);
}

#[test]
fn mirrored_zones_share_a_test() {
    for z in ZoneName::ALL {
        assert_eq!(ActiveTest::from(z), ActiveTest::from(z.mirror()), "{z}");
    }
}

#[test]
fn page_ids_parse_and_unknown_ids_fall_back_to_welcome() {
    assert_eq!(ActiveTest::from_id("rightLeg"), ActiveTest::Stability);
    assert_eq!(ActiveTest::from_id("chest"), ActiveTest::Cardiovascular);
    assert_eq!(ActiveTest::from_id("elbow"), ActiveTest::Welcome);
    assert_eq!(ActiveTest::from_id(""), ActiveTest::Welcome);
    assert_eq!(ActiveTest::default(), ActiveTest::Welcome);
}

#[test]
fn panel_ids_are_distinct() {
    let mut ids: Vec<&str> = ActiveTest::ALL.iter().map(|t| t.panel_id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), ActiveTest::ALL.len());
    assert_eq!(ActiveTest::Welcome.panel_id(), "test-welcome");
}
