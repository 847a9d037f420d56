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

//! Lock tuning and the persisted on/off switch.
//!
//! Thresholds are compile-time defaults carried in [`LockPolicy`]. The only
//! user-facing setting is the `enabled` flag, stored as JSON in the user's
//! config directory.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Distance from the bottom beyond which an unlocked viewport locks.
pub const DEFAULT_LOCK_THRESHOLD: i32 = 10;
/// Distance from the bottom at or below which a locked viewport unlocks.
/// Kept smaller than the lock threshold so the boundary does not flicker.
pub const DEFAULT_UNLOCK_THRESHOLD: i32 = 5;
/// How long after new content a move toward the bottom counts as host auto-scroll.
pub const DEFAULT_RESTORE_WINDOW: Duration = Duration::from_millis(100);

const SETTINGS_DIR_NAME: &str = "chat-scroll-lock";
const SETTINGS_FILE: &str = "settings.json";

/// How the controller tells host auto-scroll apart from user scrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReassertStrategy {
    /// Re-assert from a deferred write queued by the content notification,
    /// then ignore the next observation.
    #[default]
    Deferred,
    /// Re-assert during observation when the viewport moved toward the bottom
    /// within this long after the last content notification.
    RestoreWindow(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockPolicy {
    pub lock_threshold: i32,
    pub unlock_threshold: i32,
    pub strategy: ReassertStrategy,
}

impl Default for LockPolicy {
    fn default() -> Self {
        Self {
            lock_threshold: DEFAULT_LOCK_THRESHOLD,
            unlock_threshold: DEFAULT_UNLOCK_THRESHOLD,
            strategy: ReassertStrategy::Deferred,
        }
    }
}

impl LockPolicy {
    #[must_use]
    pub fn with_restore_window(window: Duration) -> Self {
        Self { strategy: ReassertStrategy::RestoreWindow(window), ..Self::default() }
    }

    /// Clamp thresholds to non-negative values with `unlock <= lock`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let unlock_threshold = self.unlock_threshold.max(0);
        let lock_threshold = self.lock_threshold.max(unlock_threshold);
        Self { lock_threshold, unlock_threshold, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self { enabled: default_enabled() }
    }
}

/// Location of the settings file plus load/save.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `explicit` when given, otherwise the per-user config directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }
        default_settings_path().map(Self::new).ok_or(AppError::NoConfigDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, AppError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "settings read failed: {err}");
                return Err(AppError::SettingsUnreadable);
            }
        };
        serde_json::from_str(&content).map_err(|err| {
            tracing::warn!(path = %self.path.display(), "settings parse failed: {err}");
            AppError::SettingsInvalid
        })
    }

    pub fn save(&self, settings: Settings) -> Result<(), AppError> {
        let write = || -> anyhow::Result<()> {
            if let Some(parent) = self.path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_vec_pretty(&settings)?;
            std::fs::write(&self.path, content)?;
            Ok(())
        };
        write().map_err(|err| {
            tracing::warn!(path = %self.path.display(), "settings write failed: {err}");
            AppError::SettingsWriteFailed
        })?;
        tracing::info!(path = %self.path.display(), enabled = settings.enabled, "settings saved");
        Ok(())
    }
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE))
}
