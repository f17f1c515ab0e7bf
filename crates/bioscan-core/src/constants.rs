use glam::Vec3;

// Shared zone/picking tuning constants used by the core and the web frontend.

// Model normalisation
pub const MODEL_TARGET_HEIGHT: f32 = 3.0; // largest model extent after scaling

// Resolver: override rules, evaluated before any containment test
pub const RESOLVER_ARM_Y_MIN: f32 = 1.2;
pub const RESOLVER_ARM_Y_MAX: f32 = 2.6;
pub const RESOLVER_ARM_X_MIN: f32 = 0.5; // |x| beyond this inside the arm band is an arm
pub const RESOLVER_ABDOMEN_X_MAX: f32 = 0.4;
pub const RESOLVER_ABDOMEN_Y_MIN: f32 = 1.0;
pub const RESOLVER_ABDOMEN_Y_MAX: f32 = 1.8;

// Resolver: containment and fallback
pub const ZONE_TOLERANCE: f32 = 0.3; // uniform growth of zone bounds before containment
pub const NEAREST_ZONE_MAX_DISTANCE: f32 = 1.5; // exclusive acceptance radius for the fallback

// Classifier: mesh-origin predicates (independent of the resolver's)
pub const CLASSIFIER_ARM_Y_MIN: f32 = 1.2;
pub const CLASSIFIER_ARM_Y_MAX: f32 = 2.7;
pub const CLASSIFIER_ABDOMEN_X_MAX: f32 = 0.5;
pub const CLASSIFIER_ABDOMEN_Y_MIN: f32 = 1.0;
pub const CLASSIFIER_ABDOMEN_Y_MAX: f32 = 1.8;
pub const CLASSIFIER_LEG_Y_MIN: f32 = -0.2;
pub const CLASSIFIER_LEG_Y_MAX: f32 = 1.0;
pub const CLASSIFIER_SIDE_SPLIT_X: f32 = 0.0; // x below is left, at or above is right
pub const CLASSIFIER_TOLERANCE: f32 = 0.3;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START_EYE: Vec3 = Vec3::new(0.0, 1.2, 5.0);
pub const CAMERA_START_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const CAMERA_TARGET_LIFT: f32 = 1.0; // orbit target height above the model origin
pub const CAMERA_MIN_DISTANCE: f32 = 1.0;
pub const CAMERA_MAX_DISTANCE: f32 = 20.0;
pub const CAMERA_DAMPING: f32 = 0.05; // fraction of pending orbit applied per frame
pub const CAMERA_AUTO_ROTATE_RAD_PER_SEC: f32 = 0.105; // ~0.5 turns/min

// Interaction feedback
pub const HOVER_CUE_CHANCE: f32 = 0.05;
pub const CLICK_CUE_VOLUME: f32 = 0.3;
pub const RESET_CUE_VOLUME: f32 = 0.2;
pub const HOVER_CUE_VOLUME: f32 = 0.1;
pub const SCAN_CUE_VOLUME: f32 = 0.3;

// Scan timeline (milliseconds)
pub const SCAN_PROGRESS_START: f32 = 5.0;
pub const SCAN_PROGRESS_STEP: f32 = 8.0;
pub const SCAN_PROGRESS_CAP: f32 = 95.0;
pub const SCAN_PHASE_INTERVAL_MS: u64 = 800;
pub const QUEUED_MODEL_DELAY_MS: u64 = 4000; // queued model opens the gate after this
pub const LOAD_COMPLETE_DELAY_MS: u64 = 1500;
pub const OVERLAY_FADE_MS: u64 = 1000;
pub const SCAN_ANIMATION_DELAY_MS: u64 = 1000;
pub const AUTO_ROTATE_MS: u64 = 5000;
pub const STATUS_READY_DELAY_MS: u64 = 3000;
pub const VIEW_RESET_STATUS_MS: u64 = 2000;
