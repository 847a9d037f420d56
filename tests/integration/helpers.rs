use chat_scroll_lock::config::LockPolicy;
use chat_scroll_lock::host::{ChatLine, ChatPanel, Host, HostEvent};
use chat_scroll_lock::lock::{Transition, Viewport, ViewportMetrics};

/// Build a host whose chat panel already holds `extent` rows of history.
/// No terminal, no clock -- just state.
pub fn host_with_panel(visible_height: i32, extent: i32, offset: i32) -> Host {
    Host::new(LockPolicy::default(), true)
        .with_panel(ChatPanel::with_content(visible_height, extent, offset))
}

/// One chat line of the given height, delivered as a host notification.
pub fn message(height: i32) -> HostEvent {
    HostEvent::Message(ChatLine { height, ..ChatLine::new("tester", "hello") })
}

pub fn metrics(host: &Host) -> ViewportMetrics {
    host.panel().map(Viewport::metrics).expect("panel should be open")
}

pub fn distance(host: &Host) -> i32 {
    metrics(host).distance_from_bottom()
}

/// Send a tick and return the controller's single transition for it.
pub fn tick(host: &mut Host) -> Transition {
    let transitions = host.dispatch(HostEvent::Tick);
    assert_eq!(transitions.len(), 1, "tick should report exactly one transition");
    transitions[0]
}
