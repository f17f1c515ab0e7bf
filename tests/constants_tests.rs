// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so the front-end constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use bioscan_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn resolver_windows_are_ordered() {
    assert!(RESOLVER_ARM_Y_MIN < RESOLVER_ARM_Y_MAX);
    assert!(RESOLVER_ABDOMEN_Y_MIN < RESOLVER_ABDOMEN_Y_MAX);
    assert!(RESOLVER_ABDOMEN_X_MAX < RESOLVER_ARM_X_MIN);
    assert!(ZONE_TOLERANCE > 0.0);
    assert!(NEAREST_ZONE_MAX_DISTANCE > ZONE_TOLERANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn classifier_windows_are_wider_than_resolver_windows() {
    assert!(CLASSIFIER_ARM_Y_MAX > RESOLVER_ARM_Y_MAX);
    assert!(CLASSIFIER_ABDOMEN_X_MAX > RESOLVER_ABDOMEN_X_MAX);
    assert!(CLASSIFIER_LEG_Y_MIN < CLASSIFIER_LEG_Y_MAX);
    assert_eq!(CLASSIFIER_SIDE_SPLIT_X, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_limits_are_sane() {
    assert!(CAMERA_MIN_DISTANCE < CAMERA_MAX_DISTANCE);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_DAMPING > 0.0 && CAMERA_DAMPING <= 1.0);
    let start = CAMERA_START_EYE.distance(CAMERA_START_TARGET);
    assert!(start > CAMERA_MIN_DISTANCE && start < CAMERA_MAX_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn feedback_values_are_fractions() {
    for v in [
        HOVER_CUE_CHANCE,
        CLICK_CUE_VOLUME,
        RESET_CUE_VOLUME,
        HOVER_CUE_VOLUME,
        SCAN_CUE_VOLUME,
        BODY_OPACITY,
    ] {
        assert!((0.0..=1.0).contains(&v), "{v}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scan_progress_reaches_the_cap_before_the_messages_run_out() {
    assert!(SCAN_PROGRESS_START < SCAN_PROGRESS_CAP);
    assert!(SCAN_PROGRESS_START + 10.0 * SCAN_PROGRESS_STEP <= SCAN_PROGRESS_CAP);
    assert!(OVERLAY_FADE_MS <= SCAN_ANIMATION_DELAY_MS);
    assert!(VIEW_RESET_STATUS_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_tuning_is_positive() {
    assert!(ORBIT_RADIANS_PER_PX > 0.0);
    assert!(WHEEL_ZOOM_PER_UNIT > 0.0);
    assert!(DRAG_CLICK_SLOP_PX >= 0.0);
    for c in [
        ZONE_COLOR_HEAD,
        ZONE_COLOR_CHEST,
        ZONE_COLOR_ABDOMEN,
        ZONE_COLOR_ARM,
        ZONE_COLOR_LEG,
    ] {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
