// =====
// TESTS: 7
// =====
//
// End-to-end lock scenarios through the simulated host.

use chat_scroll_lock::host::HostEvent;
use chat_scroll_lock::lock::{LockStatus, SkipReason, Transition};
use pretty_assertions::assert_eq;

use crate::helpers::{distance, host_with_panel, message, metrics, tick};

// --- Scenario A: re-assertion after auto-scroll ---

#[test]
fn appended_line_is_undone_to_anchor_distance() {
    let mut host = host_with_panel(200, 1000, 750);
    assert_eq!(tick(&mut host), Transition::Locked { anchor: 50 });

    let transitions = host.dispatch(message(20));
    assert_eq!(
        transitions,
        vec![Transition::Scheduled, Transition::Reasserted { from: 820, to: 770 }]
    );
    assert_eq!(metrics(&host).offset, 770);
    assert_eq!(distance(&host), 50);

    // The first observation after the write is ignored, then normal service resumes.
    assert_eq!(tick(&mut host), Transition::Skipped { reason: SkipReason::Suppressed });
    assert_eq!(tick(&mut host), Transition::Unchanged);
    assert_eq!(host.status(), LockStatus::Locked { anchor: 50 });
}

#[test]
fn burst_of_lines_keeps_anchor() {
    let mut host = host_with_panel(200, 1000, 700);
    tick(&mut host);
    for _ in 0..25 {
        host.dispatch(message(14));
        host.dispatch(HostEvent::PreRender);
    }
    assert_eq!(distance(&host), 100);
    assert_eq!(metrics(&host).extent, 1350);
}

// --- Scenario B: user scrolls to the bottom ---

#[test]
fn scrolling_to_bottom_unlocks() {
    let mut host = host_with_panel(200, 1000, 750);
    tick(&mut host);
    host.dispatch(HostEvent::ScrollTo(850));
    assert_eq!(tick(&mut host), Transition::Unlocked);
    assert_eq!(host.status(), LockStatus::Unlocked);

    // Unlocked again: the next line is followed, not undone.
    assert_eq!(host.dispatch(message(20)), vec![Transition::Unchanged]);
    assert_eq!(distance(&host), 0);
}

// --- Scenario C: disable while locked ---

#[test]
fn disabling_clears_anchor_and_reenabling_starts_clean() {
    let mut host = host_with_panel(200, 1000, 770);
    assert_eq!(tick(&mut host), Transition::Locked { anchor: 30 });

    host.dispatch(HostEvent::SetEnabled(false));
    assert_eq!(tick(&mut host), Transition::Reset);
    assert_eq!(host.status(), LockStatus::Unlocked);

    // While off, the host is free to move the panel.
    host.dispatch(message(20));
    assert_eq!(distance(&host), 0);
    host.dispatch(HostEvent::ScrollBy(-80));

    host.dispatch(HostEvent::SetEnabled(true));
    assert_eq!(host.status(), LockStatus::Unlocked);
    assert_eq!(tick(&mut host), Transition::Locked { anchor: 80 });
}

// --- Scenario D: viewport missing for a while ---

#[test]
fn missing_panel_keeps_lock_until_it_returns() {
    let mut host = host_with_panel(200, 1000, 750);
    tick(&mut host);
    let panel = host.panel().cloned().expect("panel open");

    host.dispatch(HostEvent::PanelClosed);
    for _ in 0..5 {
        assert_eq!(tick(&mut host), Transition::Skipped { reason: SkipReason::NoViewport });
    }
    assert_eq!(host.status(), LockStatus::Locked { anchor: 50 });

    host.dispatch(HostEvent::PanelOpened(panel));
    assert_eq!(tick(&mut host), Transition::Unchanged);
    assert_eq!(host.status(), LockStatus::Locked { anchor: 50 });
}

// --- Anchor follows deliberate scrolling ---

#[test]
fn user_scroll_down_short_of_bottom_moves_anchor() {
    let mut host = host_with_panel(200, 1000, 600);
    assert_eq!(tick(&mut host), Transition::Locked { anchor: 200 });
    host.dispatch(HostEvent::ScrollBy(160));
    assert_eq!(tick(&mut host), Transition::AnchorMoved { from: 200, to: 40 });

    host.dispatch(message(20));
    assert_eq!(distance(&host), 40);
}

#[test]
fn upward_scroll_right_after_write_is_accepted_at_once() {
    let mut host = host_with_panel(200, 1000, 750);
    tick(&mut host);
    host.dispatch(message(20));
    host.dispatch(HostEvent::ScrollBy(-100));

    // Suppression after our own write never holds back an upward move.
    assert_eq!(tick(&mut host), Transition::AnchorMoved { from: 50, to: 150 });
}
