//! Tunable parameters with defaults drawn from `constants`.

use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct ResolverParams {
    pub arm_y_min: f32,
    pub arm_y_max: f32,
    pub arm_x_min: f32,
    pub abdomen_x_max: f32,
    pub abdomen_y_min: f32,
    pub abdomen_y_max: f32,
    pub tolerance: f32,
    pub nearest_max_distance: f32,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            arm_y_min: RESOLVER_ARM_Y_MIN,
            arm_y_max: RESOLVER_ARM_Y_MAX,
            arm_x_min: RESOLVER_ARM_X_MIN,
            abdomen_x_max: RESOLVER_ABDOMEN_X_MAX,
            abdomen_y_min: RESOLVER_ABDOMEN_Y_MIN,
            abdomen_y_max: RESOLVER_ABDOMEN_Y_MAX,
            tolerance: ZONE_TOLERANCE,
            nearest_max_distance: NEAREST_ZONE_MAX_DISTANCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassifierParams {
    pub arm_y_min: f32,
    pub arm_y_max: f32,
    pub abdomen_x_max: f32,
    pub abdomen_y_min: f32,
    pub abdomen_y_max: f32,
    pub leg_y_min: f32,
    pub leg_y_max: f32,
    pub side_split_x: f32,
    pub tolerance: f32,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            arm_y_min: CLASSIFIER_ARM_Y_MIN,
            arm_y_max: CLASSIFIER_ARM_Y_MAX,
            abdomen_x_max: CLASSIFIER_ABDOMEN_X_MAX,
            abdomen_y_min: CLASSIFIER_ABDOMEN_Y_MIN,
            abdomen_y_max: CLASSIFIER_ABDOMEN_Y_MAX,
            leg_y_min: CLASSIFIER_LEG_Y_MIN,
            leg_y_max: CLASSIFIER_LEG_Y_MAX,
            side_split_x: CLASSIFIER_SIDE_SPLIT_X,
            tolerance: CLASSIFIER_TOLERANCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraParams {
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub start_eye: Vec3,
    pub start_target: Vec3,
    pub target_lift: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub auto_rotate_speed: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            start_eye: CAMERA_START_EYE,
            start_target: CAMERA_START_TARGET,
            target_lift: CAMERA_TARGET_LIFT,
            min_distance: CAMERA_MIN_DISTANCE,
            max_distance: CAMERA_MAX_DISTANCE,
            damping: CAMERA_DAMPING,
            auto_rotate_speed: CAMERA_AUTO_ROTATE_RAD_PER_SEC,
        }
    }
}

/// Everything the interaction controller needs to be built.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub resolver: ResolverParams,
    pub classifier: ClassifierParams,
    pub camera: CameraParams,
    pub hover_cue_chance: f32,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverParams::default(),
            classifier: ClassifierParams::default(),
            camera: CameraParams::default(),
            hover_cue_chance: HOVER_CUE_CHANCE,
            seed: 42,
        }
    }
}
