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

//! Deterministic replay of host events from a JSON-lines script.
//!
//! Each non-blank line that does not start with `#` is one event:
//!
//! ```text
//! {"event":"open","visible_height":200,"extent":1000,"offset":750}
//! {"event":"tick"}
//! {"at_ms":40,"event":"append","height":20}
//! ```
//!
//! `at_ms` sets the logical clock (milliseconds since the script started) and
//! must never go backwards. Every event produces one JSON record on output.

use crate::config::LockPolicy;
use crate::error::AppError;
use crate::host::{ChatLine, ChatPanel, Host, HostEvent};
use crate::lock::{LockStatus, Transition, Viewport, ViewportMetrics};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Open {
        visible_height: i32,
        extent: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<i32>,
    },
    Close,
    Tick,
    PreRender,
    Append {
        #[serde(default = "default_line_height")]
        height: i32,
    },
    ScrollTo {
        offset: i32,
    },
    ScrollBy {
        delta: i32,
    },
    Resize {
        visible_height: i32,
    },
    SetEnabled {
        enabled: bool,
    },
    Start,
    Stop,
}

fn default_line_height() -> i32 {
    1
}

impl ScriptEvent {
    fn into_host_event(self, step: usize) -> HostEvent {
        match self {
            Self::Open { visible_height, extent, offset } => HostEvent::PanelOpened(
                ChatPanel::with_content(visible_height, extent, offset.unwrap_or(i32::MAX)),
            ),
            Self::Close => HostEvent::PanelClosed,
            Self::Tick => HostEvent::Tick,
            Self::PreRender => HostEvent::PreRender,
            Self::Append { height } => HostEvent::Message(ChatLine {
                height,
                ..ChatLine::new("replay", format!("line {step}"))
            }),
            Self::ScrollTo { offset } => HostEvent::ScrollTo(offset),
            Self::ScrollBy { delta } => HostEvent::ScrollBy(delta),
            Self::Resize { visible_height } => HostEvent::Resize(visible_height),
            Self::SetEnabled { enabled } => HostEvent::SetEnabled(enabled),
            Self::Start => HostEvent::Start,
            Self::Stop => HostEvent::Stop,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScriptLine {
    #[serde(default)]
    at_ms: Option<u64>,
    #[serde(flatten)]
    event: ScriptEvent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    /// 1-based line number in the source.
    pub line: usize,
    pub at_ms: u64,
    pub event: ScriptEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewportReport {
    #[serde(flatten)]
    pub metrics: ViewportMetrics,
    pub distance: i32,
}

impl From<ViewportMetrics> for ViewportReport {
    fn from(metrics: ViewportMetrics) -> Self {
        Self { metrics, distance: metrics.distance_from_bottom() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: ScriptEvent,
    pub transitions: Vec<Transition>,
    pub status: LockStatus,
    pub viewport: Option<ViewportReport>,
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, AppError> {
    let mut steps = Vec::new();
    let mut clock_ms = 0u64;
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parsed: ScriptLine = serde_json::from_str(trimmed).map_err(|err| {
            tracing::debug!(line, "replay parse failed: {err}");
            AppError::ScriptInvalid { line }
        })?;
        if let Some(at_ms) = parsed.at_ms {
            if at_ms < clock_ms {
                tracing::debug!(line, at_ms, clock_ms, "replay clock went backwards");
                return Err(AppError::ScriptInvalid { line });
            }
            clock_ms = at_ms;
        }
        steps.push(ScriptStep { line, at_ms: clock_ms, event: parsed.event });
    }
    Ok(steps)
}

/// Feed `steps` through a fresh host and record the outcome of each one.
pub fn run_script(steps: &[ScriptStep], policy: LockPolicy, enabled: bool) -> Vec<StepRecord> {
    let origin = Instant::now();
    let mut host = Host::new(policy, enabled);
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| {
            let now = origin + Duration::from_millis(step.at_ms);
            let transitions = host.dispatch_at(now, step.event.clone().into_host_event(idx + 1));
            StepRecord {
                step: idx + 1,
                at_ms: step.at_ms,
                event: step.event.clone(),
                transitions,
                status: host.status(),
                viewport: host.panel().map(|panel| panel.metrics().into()),
            }
        })
        .collect()
}

/// Read a script file, run it, and write one JSON record per line to `out`.
pub fn replay_file(
    path: &Path,
    policy: LockPolicy,
    enabled: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path).map_err(|err| {
        tracing::debug!(path = %path.display(), "replay read failed: {err}");
        AppError::ScriptUnreadable
    })?;
    let steps = parse_script(&source)?;
    tracing::info!(path = %path.display(), steps = steps.len(), "replaying script");
    for record in run_script(&steps, policy, enabled) {
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
