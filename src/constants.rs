// Front-end tuning constants: pointer mapping, render colours, DOM ids.

// Orbit drag (radians per canvas pixel) and wheel zoom (factor per wheel unit)
pub const ORBIT_RADIANS_PER_PX: f32 = 0.008;
pub const WHEEL_ZOOM_PER_UNIT: f32 = 0.0015;
pub const DRAG_CLICK_SLOP_PX: f32 = 4.0; // movement beyond this turns a press into a drag

// Scene colours (linear-ish RGB)
pub const CLEAR_COLOR: [f64; 3] = [0.059, 0.090, 0.165]; // 0x0f172a
pub const BODY_COLOR: [f32; 3] = [0.376, 0.565, 1.0]; // 0x6090ff
pub const BODY_EMISSIVE: [f32; 3] = [0.125, 0.314, 0.753]; // 0x2050c0
pub const OUTLINE_COLOR: [f32; 3] = [0.231, 0.510, 0.965]; // 0x3b82f6
pub const BODY_OPACITY: f32 = 0.9;
pub const OUTLINE_PULSE_PERIOD_SEC: f32 = 2.0;

// Zone debug box colours by family
pub const ZONE_COLOR_HEAD: [f32; 3] = [1.0, 1.0, 0.0];
pub const ZONE_COLOR_CHEST: [f32; 3] = [1.0, 0.0, 0.0];
pub const ZONE_COLOR_ABDOMEN: [f32; 3] = [1.0, 0.0, 1.0];
pub const ZONE_COLOR_ARM: [f32; 3] = [0.0, 1.0, 0.0];
pub const ZONE_COLOR_LEG: [f32; 3] = [0.0, 0.0, 1.0];

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const STATUS_ID: &str = "system-status";
pub const TRACKER_ID: &str = "body-tracker";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const LOADING_TEXT_ID: &str = "loading-text";
pub const PANEL_TOGGLE_ID: &str = "panel-toggle";
pub const INFO_PANEL_ID: &str = "info-panel";
pub const INFO_CONTENT_ID: &str = "info-content";
pub const SOUND_CLICK_ID: &str = "sound-click";
pub const SOUND_HOVER_ID: &str = "sound-hover";
pub const SOUND_SCAN_ID: &str = "sound-scan";
