//! Outbound calls from the core into the presentation layer.
//!
//! Every hook is fire-and-forget. Implementations swallow their own failures
//! (blocked autoplay, missing DOM nodes); nothing flows back into the core.

use crate::mesh::MeshId;
use crate::zone::ZoneName;
use fnv::FnvHashSet;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Click,
    Hover,
    Scan,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Ok,
    Warning,
    Error,
}

/// Floating labels revealed during the scan animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanLabel {
    Head,
    Torso,
    Arm,
    Leg,
    Abdomen,
}

impl ScanLabel {
    pub fn element_id(self) -> &'static str {
        match self {
            ScanLabel::Head => "head-label",
            ScanLabel::Torso => "torso-label",
            ScanLabel::Arm => "arm-label",
            ScanLabel::Leg => "leg-label",
            ScanLabel::Abdomen => "abdomen-label",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Fading,
    Hidden,
}

pub trait SceneHooks {
    /// Outline exactly these meshes.
    fn highlight(&mut self, meshes: &FnvHashSet<MeshId>);
    /// Drop the current outline.
    fn highlight_cleared(&mut self);
    fn selection_cleared(&mut self);
    /// A new zone was selected; the test launcher listens here.
    fn zone_selected(&mut self, zone: ZoneName);
    /// Tracker overlay follows the hover point, in canvas pixels.
    fn tracker_moved(&mut self, screen: Vec2);
    fn tracker_hidden(&mut self);
    fn play_cue(&mut self, cue: AudioCue);
    fn set_status(&mut self, level: StatusLevel, text: &str);

    fn set_progress(&mut self, _percent: f32, _message: Option<&str>) {}
    fn reveal_label(&mut self, _label: ScanLabel) {}
    fn loading_overlay(&mut self, _phase: OverlayPhase) {}
}
