// Host-side tests for the delayed-action timeline and the scan sequences.

use bioscan_core::timeline::*;
use bioscan_core::{AudioCue, OverlayPhase, ScanLabel, StatusLevel};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn steps_fire_once_in_due_then_schedule_order() {
    let mut t = Timeline::new();
    t.schedule_ms(20, Track::Reveal, TimelineAction::SetAutoRotate(false));
    t.schedule_ms(10, Track::Reveal, TimelineAction::PlayCue(AudioCue::Scan));
    t.schedule_ms(10, Track::Reveal, TimelineAction::SetAutoRotate(true));
    assert!(t.advance(ms(9)).is_empty());
    let due = t.advance(ms(15));
    assert_eq!(
        due.as_slice(),
        [
            TimelineAction::PlayCue(AudioCue::Scan),
            TimelineAction::SetAutoRotate(true),
            TimelineAction::SetAutoRotate(false),
        ]
    );
    assert_eq!(t.pending(), 0);
    assert!(t.advance(ms(100)).is_empty());
    assert_eq!(t.now(), ms(124));
}

#[test]
fn delays_are_relative_to_the_current_clock() {
    let mut t = Timeline::new();
    t.advance(ms(500));
    t.schedule_ms(100, Track::ViewReset, TimelineAction::SetAutoRotate(true));
    assert!(t.advance(ms(99)).is_empty());
    assert_eq!(t.advance(ms(1)).len(), 1);
}

#[test]
fn cancel_drops_only_its_track() {
    let mut t = Timeline::new();
    t.schedule_ms(10, Track::LoadProgress, TimelineAction::SetAutoRotate(true));
    t.schedule_ms(10, Track::Reveal, TimelineAction::SetAutoRotate(false));
    t.cancel(Track::LoadProgress);
    assert_eq!(t.pending_on(Track::LoadProgress), 0);
    assert_eq!(t.pending_on(Track::Reveal), 1);
}

#[test]
fn scan_progress_steps_and_caps() {
    assert_eq!(scan_progress_percent(0), 5.0);
    assert_eq!(scan_progress_percent(1), 13.0);
    assert_eq!(scan_progress_percent(11), 93.0);
    assert_eq!(scan_progress_percent(12), 95.0);
    assert_eq!(scan_progress_percent(40), 95.0);
}

#[test]
fn scan_progress_schedule_shows_each_message_in_turn() {
    let mut t = Timeline::new();
    schedule_scan_progress(&mut t);
    assert_eq!(t.pending_on(Track::LoadProgress), SCAN_MESSAGES.len() + 1);
    assert_eq!(
        t.advance(Duration::ZERO).as_slice(),
        [TimelineAction::SetProgress {
            percent: 5.0,
            message: Some(SCAN_START_MESSAGE),
        }]
    );
    let mut shown = Vec::new();
    for phase in 1..=SCAN_MESSAGES.len() {
        let due = t.advance(ms(800));
        let [TimelineAction::SetProgress { percent, message }] = due.as_slice() else {
            panic!("phase {phase}: {due:?}");
        };
        assert_eq!(*percent, scan_progress_percent(phase), "phase {phase}");
        shown.push(*message);
    }
    assert_eq!(shown[0], Some(SCAN_MESSAGES[1]));
    assert_eq!(shown[8], Some(SCAN_MESSAGES[9]));
    assert_eq!(shown[9], None);
    assert!(!shown.contains(&Some(SCAN_MESSAGES[0])));
    assert_eq!(scan_progress_percent(SCAN_MESSAGES.len()), 85.0);
    assert!(t.advance(ms(10_000)).is_empty());
}

#[test]
fn rescheduling_scan_progress_replaces_it() {
    let mut t = Timeline::new();
    schedule_scan_progress(&mut t);
    schedule_scan_progress(&mut t);
    assert_eq!(t.pending_on(Track::LoadProgress), SCAN_MESSAGES.len() + 1);
}

#[test]
fn load_complete_cancels_progress_and_orders_the_reveal() {
    let mut t = Timeline::new();
    schedule_scan_progress(&mut t);
    t.advance(ms(1000));
    schedule_load_complete(&mut t);
    assert_eq!(t.pending_on(Track::LoadProgress), 0);

    let mut fired = Vec::new();
    for _ in 0..100 {
        fired.extend(t.advance(ms(100)));
    }
    assert_eq!(t.pending(), 0);
    assert_eq!(
        fired.first(),
        Some(&TimelineAction::SetProgress {
            percent: 100.0,
            message: Some(SCAN_DONE_MESSAGE),
        })
    );
    let labels: Vec<ScanLabel> = fired
        .iter()
        .filter_map(|a| match a {
            TimelineAction::RevealLabel(l) => Some(*l),
            _ => None,
        })
        .collect();
    assert_eq!(
        labels,
        [
            ScanLabel::Head,
            ScanLabel::Torso,
            ScanLabel::Abdomen,
            ScanLabel::Arm,
            ScanLabel::Leg
        ]
    );
    let pos = |a: TimelineAction| fired.iter().position(|f| *f == a).expect("fired");
    assert!(
        pos(TimelineAction::LoadingOverlay(OverlayPhase::Fading))
            < pos(TimelineAction::LoadingOverlay(OverlayPhase::Hidden))
    );
    assert!(
        pos(TimelineAction::SetAutoRotate(true)) < pos(TimelineAction::SetAutoRotate(false))
    );
    assert_eq!(
        fired.last(),
        Some(&TimelineAction::SetAutoRotate(false)),
        "auto-rotate stops last"
    );
    assert!(fired.contains(&TimelineAction::SetStatus(StatusLevel::Ok, STATUS_READY)));
}

#[test]
fn view_reset_status_is_replaced_not_stacked() {
    let mut t = Timeline::new();
    schedule_view_reset_status(&mut t);
    t.advance(ms(1500));
    schedule_view_reset_status(&mut t);
    assert_eq!(t.pending_on(Track::ViewReset), 1);
    assert!(t.advance(ms(1999)).is_empty());
    assert_eq!(
        t.advance(ms(1)).as_slice(),
        [TimelineAction::SetStatus(StatusLevel::Ok, STATUS_READY)]
    );
}
