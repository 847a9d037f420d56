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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("No configuration directory available")]
    NoConfigDir,
    #[error("Settings file could not be read")]
    SettingsUnreadable,
    #[error("Settings file is not valid JSON")]
    SettingsInvalid,
    #[error("Settings file could not be written")]
    SettingsWriteFailed,
    #[error("Replay script could not be read")]
    ScriptUnreadable,
    #[error("Replay script line {line} is invalid")]
    ScriptInvalid { line: usize },
}

impl AppError {
    pub const NO_CONFIG_DIR_EXIT_CODE: i32 = 20;
    pub const SETTINGS_UNREADABLE_EXIT_CODE: i32 = 21;
    pub const SETTINGS_INVALID_EXIT_CODE: i32 = 22;
    pub const SETTINGS_WRITE_FAILED_EXIT_CODE: i32 = 23;
    pub const SCRIPT_UNREADABLE_EXIT_CODE: i32 = 24;
    pub const SCRIPT_INVALID_EXIT_CODE: i32 = 25;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoConfigDir => Self::NO_CONFIG_DIR_EXIT_CODE,
            Self::SettingsUnreadable => Self::SETTINGS_UNREADABLE_EXIT_CODE,
            Self::SettingsInvalid => Self::SETTINGS_INVALID_EXIT_CODE,
            Self::SettingsWriteFailed => Self::SETTINGS_WRITE_FAILED_EXIT_CODE,
            Self::ScriptUnreadable => Self::SCRIPT_UNREADABLE_EXIT_CODE,
            Self::ScriptInvalid { .. } => Self::SCRIPT_INVALID_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoConfigDir => {
                "No user configuration directory found. Pass `--config <PATH>` explicitly."
                    .to_owned()
            }
            Self::SettingsUnreadable => {
                "The settings file exists but could not be read. Check its permissions.".to_owned()
            }
            Self::SettingsInvalid => {
                "The settings file is malformed. Fix it or delete it to restore defaults."
                    .to_owned()
            }
            Self::SettingsWriteFailed => "Failed to save the settings file.".to_owned(),
            Self::ScriptUnreadable => "The replay script could not be read.".to_owned(),
            Self::ScriptInvalid { line } => {
                format!("Replay script line {line} is not a valid event.")
            }
        }
    }
}
