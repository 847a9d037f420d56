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

//! Scroll lock decision engine.
//!
//! The host renderer jumps to the newest line whenever content is appended.
//! While the user has scrolled up, the controller holds the viewport at the
//! distance from the bottom the user chose and undoes those jumps. Deliberate
//! user scrolling is followed, never fought.
//!
//! The controller is driven by three notifications, all delivered on one
//! thread:
//!
//! - [`Observation::Tick`] / [`Observation::PreRender`]: read the viewport and
//!   lock, unlock or move the anchor.
//! - [`ScrollLockController::on_content_appended`]: new chat line arrived. The
//!   viewport is read first, since it still shows where the user left it.
//! - [`ScrollLockController::run_deferred`]: end of the host loop turn, after
//!   the host has reacted to the notifications of that turn.

use super::deferred::DeferredSlot;
use super::state::{LockState, LockStatus};
use super::viewport::Viewport;
use crate::config::{LockPolicy, ReassertStrategy};
use serde::Serialize;
use std::time::Instant;

/// Which notification an observation came from. All are handled the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Observation {
    Tick,
    PreRender,
    ContentAppended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Stopped,
    Disabled,
    NoViewport,
    WritePending,
    Suppressed,
    InvalidTarget,
}

/// Outcome of one controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Skipped { reason: SkipReason },
    Locked { anchor: i32 },
    Unlocked,
    AnchorMoved { from: i32, to: i32 },
    Reasserted { from: i32, to: i32 },
    Scheduled,
    Unchanged,
    Reset,
}

impl Transition {
    const fn skipped(reason: SkipReason) -> Self {
        Self::Skipped { reason }
    }

    /// Whether the lock or the viewport changed.
    const fn is_effective(self) -> bool {
        matches!(
            self,
            Self::Locked { .. }
                | Self::Unlocked
                | Self::AnchorMoved { .. }
                | Self::Reasserted { .. }
                | Self::Reset
        )
    }
}

/// Queued re-assertion, drained by [`ScrollLockController::run_deferred`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingWrite;

#[derive(Debug)]
pub struct ScrollLockController {
    policy: LockPolicy,
    state: LockState,
    pending: DeferredSlot<PendingWrite>,
    running: bool,
}

impl ScrollLockController {
    /// Create a started controller. The policy is normalized first.
    pub fn new(policy: LockPolicy) -> Self {
        Self {
            policy: policy.normalized(),
            state: LockState::default(),
            pending: DeferredSlot::new(),
            running: true,
        }
    }

    #[must_use]
    pub fn state(&self) -> &LockState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> LockStatus {
        self.state.status()
    }

    #[must_use]
    pub fn has_pending_write(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn start(&mut self) {
        self.running = true;
        self.reset();
        tracing::debug!("scroll lock started");
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.reset();
        tracing::debug!("scroll lock stopped");
    }

    /// Forget the anchor and drop any queued write.
    pub fn reset(&mut self) {
        self.state = LockState::default();
        self.pending.clear();
    }

    pub fn observe<V: Viewport + ?Sized>(
        &mut self,
        kind: Observation,
        enabled: bool,
        viewport: Option<&mut V>,
    ) -> Transition {
        self.observe_at(Instant::now(), kind, enabled, viewport)
    }

    /// [`observe`](Self::observe) with an explicit clock reading.
    pub fn observe_at<V: Viewport + ?Sized>(
        &mut self,
        now: Instant,
        kind: Observation,
        enabled: bool,
        viewport: Option<&mut V>,
    ) -> Transition {
        if let Some(skip) = self.gate(enabled) {
            return skip;
        }
        let Some(viewport) = viewport else {
            tracing::trace!(?kind, "no viewport, keeping state");
            return Transition::skipped(SkipReason::NoViewport);
        };
        self.settle(now, kind, viewport)
    }

    /// Lock, unlock or move the anchor from the viewport as it is now.
    fn settle<V: Viewport + ?Sized>(
        &mut self,
        now: Instant,
        kind: Observation,
        viewport: &mut V,
    ) -> Transition {
        // The host has not finished reacting to new content yet; whatever it
        // did to the offset is about to be overwritten.
        if self.pending.is_pending() {
            return Transition::skipped(SkipReason::WritePending);
        }
        let suppressed = std::mem::take(&mut self.state.suppress_next_observation);

        let distance = viewport.metrics().distance_from_bottom();
        let Some(anchor) = self.state.anchor else {
            if distance > self.policy.lock_threshold {
                self.state.anchor = Some(distance);
                tracing::debug!(?kind, anchor = distance, "scroll locked");
                return Transition::Locked { anchor: distance };
            }
            return Transition::Unchanged;
        };

        // Host auto-scroll only ever pushes toward the bottom.
        if distance < anchor && self.within_restore_window(now) {
            return self.reassert(viewport);
        }
        if distance <= self.policy.unlock_threshold {
            self.state.anchor = None;
            tracing::debug!(?kind, distance, "scroll unlocked at bottom");
            return Transition::Unlocked;
        }
        // Right after our own write, only a move up is unambiguous.
        if suppressed && distance <= anchor {
            return Transition::skipped(SkipReason::Suppressed);
        }
        if distance != anchor {
            self.state.anchor = Some(distance);
            tracing::debug!(?kind, from = anchor, to = distance, "scroll anchor moved");
            return Transition::AnchorMoved { from: anchor, to: distance };
        }
        Transition::Unchanged
    }

    pub fn on_content_appended<V: Viewport + ?Sized>(
        &mut self,
        enabled: bool,
        viewport: Option<&mut V>,
    ) -> Vec<Transition> {
        self.on_content_appended_at(Instant::now(), enabled, viewport)
    }

    /// Record a new-content event, before the host lays the content out.
    ///
    /// A scroll the user made since the last observation is settled first.
    /// Then, while locked under the deferred strategy, a re-assertion is
    /// queued for the end of the host loop turn. The result holds the
    /// settling transition when it had an effect, followed by the
    /// scheduling outcome.
    pub fn on_content_appended_at<V: Viewport + ?Sized>(
        &mut self,
        now: Instant,
        enabled: bool,
        viewport: Option<&mut V>,
    ) -> Vec<Transition> {
        if let Some(skip) = self.gate(enabled) {
            return vec![skip];
        }
        let mut transitions = Vec::with_capacity(2);
        if let Some(viewport) = viewport {
            let settled = self.settle(now, Observation::ContentAppended, viewport);
            if settled.is_effective() {
                transitions.push(settled);
            }
        }
        self.state.last_content_event = Some(now);
        if self.state.locked() && self.policy.strategy == ReassertStrategy::Deferred {
            if self.pending.schedule(PendingWrite).is_none() {
                tracing::trace!("re-assertion queued");
            }
            transitions.push(Transition::Scheduled);
        } else {
            transitions.push(Transition::Unchanged);
        }
        transitions
    }

    /// Drain the deferred slot. Returns `None` when nothing was queued.
    pub fn run_deferred<V: Viewport + ?Sized>(
        &mut self,
        enabled: bool,
        viewport: Option<&mut V>,
    ) -> Option<Transition> {
        let PendingWrite = self.pending.take()?;
        if let Some(skip) = self.gate(enabled) {
            return Some(skip);
        }
        let Some(viewport) = viewport else {
            tracing::trace!("viewport gone, dropping queued re-assertion");
            return Some(Transition::skipped(SkipReason::NoViewport));
        };
        Some(self.reassert(viewport))
    }

    /// Put the viewport back at the anchor distance, measured against the
    /// content as it is right now.
    ///
    /// No-op while unlocked, when the content is too short for the anchor, or
    /// when the viewport already sits at the target. Does not consult the
    /// enabled flag; the notification entry points do that.
    pub fn reassert<V: Viewport + ?Sized>(&mut self, viewport: &mut V) -> Transition {
        let Some(anchor) = self.state.anchor else {
            return Transition::Unchanged;
        };
        let metrics = viewport.metrics();
        let Some(target) = metrics.offset_for_distance(anchor) else {
            tracing::trace!(anchor, extent = metrics.extent, "re-assertion target out of range");
            return Transition::skipped(SkipReason::InvalidTarget);
        };
        if target == metrics.offset {
            return Transition::Unchanged;
        }
        viewport.set_offset(target);
        self.state.suppress_next_observation = true;
        tracing::trace!(from = metrics.offset, to = target, anchor, "scroll re-asserted");
        Transition::Reasserted { from: metrics.offset, to: target }
    }

    /// Common entry checks. While disabled the state is cleared on every
    /// call; only dropping a lock or a queued write reports a reset.
    fn gate(&mut self, enabled: bool) -> Option<Transition> {
        if !self.running {
            return Some(Transition::skipped(SkipReason::Stopped));
        }
        if enabled {
            return None;
        }
        let active = self.state.locked() || self.pending.is_pending();
        self.reset();
        if !active {
            return Some(Transition::skipped(SkipReason::Disabled));
        }
        tracing::debug!("scroll lock disabled, state cleared");
        Some(Transition::Reset)
    }

    fn within_restore_window(&self, now: Instant) -> bool {
        let ReassertStrategy::RestoreWindow(window) = self.policy.strategy else {
            return false;
        };
        self.state
            .last_content_event
            .is_some_and(|at| now.saturating_duration_since(at) <= window)
    }
}

impl Default for ScrollLockController {
    fn default() -> Self {
        Self::new(LockPolicy::default())
    }
}
