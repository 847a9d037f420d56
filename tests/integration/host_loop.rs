// =====
// TESTS: 8
// =====
//
// Host loop behavior: strategies, lifecycle and layout changes.

use chat_scroll_lock::config::LockPolicy;
use chat_scroll_lock::host::{ChatPanel, Host, HostEvent};
use chat_scroll_lock::lock::{LockStatus, SkipReason, Transition};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

use crate::helpers::{distance, host_with_panel, message, metrics, tick};

fn windowed_host(offset: i32) -> Host {
    Host::new(LockPolicy::with_restore_window(Duration::from_millis(100)), true)
        .with_panel(ChatPanel::with_content(200, 1000, offset))
}

#[test]
fn restore_window_undoes_auto_scroll_on_next_frame() {
    let mut host = windowed_host(750);
    let t0 = Instant::now();
    assert_eq!(
        host.dispatch_at(t0, HostEvent::PreRender),
        vec![Transition::Locked { anchor: 50 }]
    );

    // No deferred write under this strategy: the host's jump stays until the next frame.
    assert_eq!(host.dispatch_at(t0, message(20)), vec![Transition::Unchanged]);
    assert_eq!(distance(&host), 0);

    let frame = t0 + Duration::from_millis(16);
    assert_eq!(
        host.dispatch_at(frame, HostEvent::PreRender),
        vec![Transition::Reasserted { from: 820, to: 770 }]
    );
    assert_eq!(distance(&host), 50);
}

#[test]
fn restore_window_treats_late_move_as_user_scroll() {
    let mut host = windowed_host(750);
    let t0 = Instant::now();
    host.dispatch_at(t0, HostEvent::PreRender);
    host.dispatch_at(t0, message(20));

    let late = t0 + Duration::from_millis(400);
    assert_eq!(host.dispatch_at(late, HostEvent::PreRender), vec![Transition::Unlocked]);
    assert_eq!(host.status(), LockStatus::Unlocked);
}

#[test]
fn stop_event_drops_lock_and_start_resumes_clean() {
    let mut host = host_with_panel(200, 1000, 750);
    tick(&mut host);

    host.dispatch(HostEvent::Stop);
    assert_eq!(host.status(), LockStatus::Unlocked);
    assert_eq!(tick(&mut host), Transition::Skipped { reason: SkipReason::Stopped });
    assert_eq!(
        host.dispatch(message(20)),
        vec![Transition::Skipped { reason: SkipReason::Stopped }]
    );
    assert_eq!(distance(&host), 0);

    host.dispatch(HostEvent::Start);
    host.dispatch(HostEvent::ScrollBy(-60));
    assert_eq!(tick(&mut host), Transition::Locked { anchor: 60 });
}

#[test]
fn resize_while_locked_moves_anchor_to_new_distance() {
    let mut host = host_with_panel(200, 1000, 700);
    assert_eq!(tick(&mut host), Transition::Locked { anchor: 100 });

    // Shorter viewport at the same offset sits further from the bottom.
    host.dispatch(HostEvent::Resize(150));
    assert_eq!(tick(&mut host), Transition::AnchorMoved { from: 100, to: 150 });

    host.dispatch(message(20));
    assert_eq!(distance(&host), 150);
}

#[test]
fn scroll_to_bottom_then_message_follows_content() {
    let mut host = host_with_panel(200, 1000, 750);
    assert_eq!(tick(&mut host), Transition::Locked { anchor: 50 });

    // No observation between the scroll and the line.
    host.dispatch(HostEvent::ScrollToBottom);
    assert_eq!(host.dispatch(message(20)), vec![Transition::Unlocked, Transition::Unchanged]);
    assert_eq!(host.status(), LockStatus::Unlocked);
    assert_eq!(distance(&host), 0);
}

#[test]
fn scroll_up_then_message_keeps_position() {
    let mut host = host_with_panel(200, 1000, 800);
    assert_eq!(tick(&mut host), Transition::Unchanged);

    host.dispatch(HostEvent::ScrollBy(-100));
    assert_eq!(
        host.dispatch(message(20)),
        vec![
            Transition::Locked { anchor: 100 },
            Transition::Scheduled,
            Transition::Reasserted { from: 820, to: 720 },
        ]
    );
    assert_eq!(host.status(), LockStatus::Locked { anchor: 100 });
    assert_eq!(distance(&host), 100);
}

#[test]
fn content_too_short_for_anchor_skips_write() {
    let mut host = host_with_panel(200, 260, 0);
    assert_eq!(tick(&mut host), Transition::Locked { anchor: 60 });
    host.dispatch(message(1));
    assert_eq!(metrics(&host).offset, 1);

    // A taller viewport right after our write leaves only 11 rows to scroll.
    host.dispatch(HostEvent::Resize(250));
    let transitions = host.dispatch(message(1));
    assert_eq!(
        transitions,
        vec![Transition::Scheduled, Transition::Skipped { reason: SkipReason::InvalidTarget }]
    );
    assert_eq!(metrics(&host).offset, 12);
}

#[test]
fn closing_panel_before_drain_drops_write() {
    let mut host = host_with_panel(200, 1000, 750);
    tick(&mut host);
    assert!(host.dispatch(HostEvent::PanelClosed).is_empty());
    assert_eq!(
        host.dispatch(message(20)),
        vec![Transition::Scheduled, Transition::Skipped { reason: SkipReason::NoViewport }]
    );
    assert_eq!(host.status(), LockStatus::Locked { anchor: 50 });
}
