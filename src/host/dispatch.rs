// chat-scroll-lock - Keeps a chat panel where you scrolled it
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Notification dispatcher standing in for the host application.
//!
//! One call to [`Host::dispatch`] is one turn of the host's callback loop:
//! deliver the notification, let the host react to it (append, auto-scroll,
//! user scroll), then drain the controller's deferred slot.

use super::panel::{ChatLine, ChatPanel};
use crate::config::LockPolicy;
use crate::lock::{LockStatus, Observation, ScrollLockController, Transition, Viewport};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Tick,
    PreRender,
    Message(ChatLine),
    ScrollBy(i32),
    ScrollTo(i32),
    ScrollToTop,
    ScrollToBottom,
    Resize(i32),
    PanelOpened(ChatPanel),
    PanelClosed,
    SetEnabled(bool),
    Start,
    Stop,
}

#[derive(Debug)]
pub struct Host {
    controller: ScrollLockController,
    panel: Option<ChatPanel>,
    enabled: bool,
}

impl Host {
    /// A host whose chat panel has not been built yet.
    pub fn new(policy: LockPolicy, enabled: bool) -> Self {
        Self { controller: ScrollLockController::new(policy), panel: None, enabled }
    }

    #[must_use]
    pub fn with_panel(mut self, panel: ChatPanel) -> Self {
        self.panel = Some(panel);
        self
    }

    #[must_use]
    pub fn controller(&self) -> &ScrollLockController {
        &self.controller
    }

    #[must_use]
    pub fn panel(&self) -> Option<&ChatPanel> {
        self.panel.as_ref()
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn status(&self) -> LockStatus {
        self.controller.status()
    }

    pub fn dispatch(&mut self, event: HostEvent) -> Vec<Transition> {
        self.dispatch_at(Instant::now(), event)
    }

    /// Run one loop turn at the given clock reading. Returns every transition
    /// the controller reported during the turn, in order.
    pub fn dispatch_at(&mut self, now: Instant, event: HostEvent) -> Vec<Transition> {
        let mut transitions = Vec::with_capacity(2);
        match event {
            HostEvent::Tick => transitions.push(self.controller.observe_at(
                now,
                Observation::Tick,
                self.enabled,
                self.panel.as_mut(),
            )),
            HostEvent::PreRender => transitions.push(self.controller.observe_at(
                now,
                Observation::PreRender,
                self.enabled,
                self.panel.as_mut(),
            )),
            HostEvent::Message(line) => {
                // Subscribers hear about the line before the renderer lays it
                // out, so the panel still shows where the user left it.
                transitions.extend(self.controller.on_content_appended_at(
                    now,
                    self.enabled,
                    self.panel.as_mut(),
                ));
                if let Some(panel) = self.panel.as_mut() {
                    panel.append(line);
                }
            }
            HostEvent::ScrollBy(delta) => self.with_panel_mut(|p| p.scroll_by(delta)),
            HostEvent::ScrollTo(offset) => self.with_panel_mut(|p| p.set_offset(offset)),
            HostEvent::ScrollToTop => self.with_panel_mut(ChatPanel::scroll_to_top),
            HostEvent::ScrollToBottom => self.with_panel_mut(ChatPanel::scroll_to_bottom),
            HostEvent::Resize(height) => self.with_panel_mut(|p| p.resize(height)),
            HostEvent::PanelOpened(panel) => {
                tracing::debug!(visible_height = panel.visible_height(), "chat panel opened");
                self.panel = Some(panel);
            }
            HostEvent::PanelClosed => {
                tracing::debug!("chat panel closed");
                self.panel = None;
            }
            // Picked up by the controller on its next call.
            HostEvent::SetEnabled(enabled) => self.enabled = enabled,
            HostEvent::Start => self.controller.start(),
            HostEvent::Stop => self.controller.stop(),
        }

        if let Some(transition) = self.controller.run_deferred(self.enabled, self.panel.as_mut()) {
            transitions.push(transition);
        }
        transitions
    }

    fn with_panel_mut(&mut self, f: impl FnOnce(&mut ChatPanel)) {
        if let Some(panel) = self.panel.as_mut() {
            f(panel);
        }
    }
}
