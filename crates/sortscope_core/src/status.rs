//! Playback status shared by the controller and its error reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the playback controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackStatus {
    /// Trace built, cursor at zero, not advancing
    #[default]
    Idle,
    /// Cursor advances on every tick
    Playing,
    /// Cursor frozen, resumable
    Paused,
    /// Cursor reached the end of the trace
    Finished,
}

impl PlaybackStatus {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Finished => "finished",
        }
    }

    /// Whether ticks may be pending in this status
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_idle() {
        assert_eq!(PlaybackStatus::default(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&PlaybackStatus::Finished).unwrap();
        assert_eq!(json, "\"finished\"");
    }

    #[test]
    fn test_only_playing_is_running() {
        assert!(PlaybackStatus::Playing.is_running());
        assert!(!PlaybackStatus::Paused.is_running());
        assert!(!PlaybackStatus::Idle.is_running());
        assert!(!PlaybackStatus::Finished.is_running());
    }
}
