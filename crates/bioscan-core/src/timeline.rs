//! Explicitly sequenced delayed actions.
//!
//! Replaces chained timers: each step has an absolute due time on the
//! timeline's own clock and fires at most once. Steps belong to a track so a
//! whole sequence can be cancelled (load progress when the model arrives) or
//! replaced (the status reset after a view reset).

use crate::constants::*;
use crate::hooks::{AudioCue, OverlayPhase, ScanLabel, StatusLevel};
use smallvec::SmallVec;
use std::time::Duration;

pub const STATUS_ANALYZING: &str = "ANALYZING";
pub const STATUS_READY: &str = "ASSESSMENT READY";
pub const STATUS_INITIALIZING_TEST: &str = "INITIALIZING TEST";
pub const STATUS_VIEW_RESET: &str = "VIEW RESET";
pub const STATUS_LOAD_FAILED: &str = "SCAN ERROR";

pub const SCAN_START_MESSAGE: &str = "Initializing biometric scanner...";
pub const SCAN_DONE_MESSAGE: &str = "Biometric scan complete. Preparing results...";
pub const SCAN_MESSAGES: [&str; 10] = [
    "Calibrating sensors...",
    "Initializing body composition scan...",
    "Mapping skeletal structure...",
    "Analyzing muscle tissue density...",
    "Evaluating cardiovascular metrics...",
    "Measuring neural response patterns...",
    "Assessing cognitive parameters...",
    "Compiling biometric profile...",
    "Identifying assessment requirements...",
    "Finalizing diagnostic recommendations...",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimelineAction {
    SetProgress {
        percent: f32,
        message: Option<&'static str>,
    },
    SetStatus(StatusLevel, &'static str),
    LoadingOverlay(OverlayPhase),
    PlayCue(AudioCue),
    RevealLabel(ScanLabel),
    SetAutoRotate(bool),
    LoadQueuedModel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Track {
    LoadProgress,
    ModelLoad,
    Reveal,
    ViewReset,
}

#[derive(Clone, Debug)]
struct Step {
    due: Duration,
    seq: u64,
    track: Track,
    action: TimelineAction,
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_seq: u64,
    steps: Vec<Step>,
}

pub type DueActions = SmallVec<[TimelineAction; 4]>;

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.steps.len()
    }

    pub fn pending_on(&self, track: Track) -> usize {
        self.steps.iter().filter(|s| s.track == track).count()
    }

    pub fn schedule(&mut self, delay: Duration, track: Track, action: TimelineAction) {
        self.steps.push(Step {
            due: self.now + delay,
            seq: self.next_seq,
            track,
            action,
        });
        self.next_seq += 1;
    }

    pub fn schedule_ms(&mut self, delay_ms: u64, track: Track, action: TimelineAction) {
        self.schedule(Duration::from_millis(delay_ms), track, action);
    }

    pub fn cancel(&mut self, track: Track) {
        self.steps.retain(|s| s.track != track);
    }

    /// Move the clock forward and drain every step now due, ordered by due
    /// time and then by scheduling order.
    pub fn advance(&mut self, dt: Duration) -> DueActions {
        self.now += dt;
        let now = self.now;
        let mut due: SmallVec<[Step; 4]> = SmallVec::new();
        self.steps.retain(|s| {
            if s.due <= now {
                due.push(s.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.action).collect()
    }
}

/// Progress percentage shown at scan phase `phase` (0 is the initial state).
pub fn scan_progress_percent(phase: usize) -> f32 {
    (SCAN_PROGRESS_START + phase as f32 * SCAN_PROGRESS_STEP).min(SCAN_PROGRESS_CAP)
}

/// Cosmetic progress shown while the model is still loading. Phase `k`
/// shows `SCAN_MESSAGES[k]`; the first message stays unseen behind the start
/// message and the last phase only moves the bar.
pub fn schedule_scan_progress(t: &mut Timeline) {
    t.cancel(Track::LoadProgress);
    t.schedule(
        Duration::ZERO,
        Track::LoadProgress,
        TimelineAction::SetProgress {
            percent: scan_progress_percent(0),
            message: Some(SCAN_START_MESSAGE),
        },
    );
    for phase in 1..=SCAN_MESSAGES.len() {
        t.schedule_ms(
            SCAN_PHASE_INTERVAL_MS * phase as u64,
            Track::LoadProgress,
            TimelineAction::SetProgress {
                percent: scan_progress_percent(phase),
                message: SCAN_MESSAGES.get(phase).copied(),
            },
        );
    }
}

/// Finish the loading screen and run the reveal animation.
pub fn schedule_load_complete(t: &mut Timeline) {
    use TimelineAction::*;

    t.cancel(Track::LoadProgress);
    t.cancel(Track::Reveal);
    let r = Track::Reveal;
    t.schedule_ms(
        0,
        r,
        SetProgress {
            percent: 100.0,
            message: Some(SCAN_DONE_MESSAGE),
        },
    );

    let done = LOAD_COMPLETE_DELAY_MS;
    t.schedule_ms(done, r, LoadingOverlay(OverlayPhase::Fading));
    t.schedule_ms(done, r, SetStatus(StatusLevel::Ok, STATUS_ANALYZING));
    t.schedule_ms(done + OVERLAY_FADE_MS, r, LoadingOverlay(OverlayPhase::Hidden));

    let scan = done + SCAN_ANIMATION_DELAY_MS;
    t.schedule_ms(scan, r, PlayCue(AudioCue::Scan));
    t.schedule_ms(scan, r, SetAutoRotate(true));
    t.schedule_ms(scan + AUTO_ROTATE_MS, r, SetAutoRotate(false));
    t.schedule_ms(scan + 500, r, RevealLabel(ScanLabel::Head));
    t.schedule_ms(scan + 1000, r, RevealLabel(ScanLabel::Torso));
    t.schedule_ms(scan + 1300, r, RevealLabel(ScanLabel::Abdomen));
    t.schedule_ms(scan + 1500, r, RevealLabel(ScanLabel::Arm));
    t.schedule_ms(scan + 2000, r, RevealLabel(ScanLabel::Leg));
    t.schedule_ms(
        scan + STATUS_READY_DELAY_MS,
        r,
        SetStatus(StatusLevel::Ok, STATUS_READY),
    );
}

/// Restore the ready status after a view reset, replacing any pending one.
pub fn schedule_view_reset_status(t: &mut Timeline) {
    t.cancel(Track::ViewReset);
    t.schedule_ms(
        VIEW_RESET_STATUS_MS,
        Track::ViewReset,
        TimelineAction::SetStatus(StatusLevel::Ok, STATUS_READY),
    );
}
