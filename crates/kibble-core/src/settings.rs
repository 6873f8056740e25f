//! Game settings: sound, parental controls, and play statistics.

use std::time::Instant;

use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from settings operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// A time string was not in HH:MM form.
    #[error("invalid time format: '{0}', expected HH:MM")]
    InvalidTimeFormat(String),
    /// A session duration was negative.
    #[error("session duration cannot be negative: {0}")]
    NegativeDuration(f32),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Parses an HH:MM time string, rejecting anything else.
fn parse_time(value: &str) -> SettingsResult<NaiveTime> {
    // chrono accepts unpadded hours, so pin the length too
    if value.len() != 5 {
        return Err(SettingsError::InvalidTimeFormat(value.to_string()));
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| SettingsError::InvalidTimeFormat(value.to_string()))
}

/// The daily window in which play is allowed.
///
/// Stored as HH:MM strings. A window whose start is not before its end
/// crosses midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowedPlayHours {
    /// Window opening time, HH:MM.
    start: String,
    /// Window closing time, HH:MM.
    end: String,
}

impl Default for AllowedPlayHours {
    fn default() -> Self {
        Self {
            start: "08:00".to_string(),
            end: "20:00".to_string(),
        }
    }
}

impl AllowedPlayHours {
    /// Returns the window opening time string.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the window closing time string.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Sets the opening time, rejecting malformed input unchanged.
    pub fn set_start(&mut self, start: impl Into<String>) -> SettingsResult<()> {
        let start = start.into();
        parse_time(&start)?;
        self.start = start;
        Ok(())
    }

    /// Sets the closing time, rejecting malformed input unchanged.
    pub fn set_end(&mut self, end: impl Into<String>) -> SettingsResult<()> {
        let end = end.into();
        parse_time(&end)?;
        self.end = end;
        Ok(())
    }

    /// Checks if the given time falls inside the window.
    ///
    /// Both boundaries are exclusive. Errors if either stored string is
    /// malformed, which can happen with a hand-edited settings file.
    pub fn allows(&self, current: NaiveTime) -> SettingsResult<bool> {
        let start = parse_time(&self.start)?;
        let end = parse_time(&self.end)?;
        if start < end {
            Ok(current > start && current < end)
        } else {
            Ok(current > start || current < end)
        }
    }
}

/// Parental controls restricting when the game may be played.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentalControls {
    /// Enforcement on or off.
    pub enabled: bool,
    /// The daily window when play is allowed.
    pub allowed_play_hours: AllowedPlayHours,
}

impl ParentalControls {
    /// Checks if play is allowed at the given time of day.
    ///
    /// Always allowed while controls are disabled.
    pub fn is_play_allowed(&self, current: NaiveTime) -> SettingsResult<bool> {
        if !self.enabled {
            return Ok(true);
        }
        self.allowed_play_hours.allows(current)
    }

    /// Checks if play is allowed right now, by local wall time.
    pub fn is_play_allowed_now(&self) -> SettingsResult<bool> {
        self.is_play_allowed(Local::now().time())
    }
}

/// Lifetime play statistics, in minutes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayStatistics {
    /// Minutes played across all sessions.
    total_play_time: f32,
    /// Mean session length.
    average_session_time: f32,
    /// When the current session began, if one is running.
    session_start_time: Option<String>,
    /// Every recorded session length.
    session_durations: Vec<f32>,
}

impl PlayStatistics {
    /// Returns total minutes played.
    #[must_use]
    pub fn total_play_time(&self) -> f32 {
        self.total_play_time
    }

    /// Returns the mean session length in minutes.
    #[must_use]
    pub fn average_session_time(&self) -> f32 {
        self.average_session_time
    }

    /// Returns when the current session began, if marked.
    #[must_use]
    pub fn session_start_time(&self) -> Option<&str> {
        self.session_start_time.as_deref()
    }

    /// Returns every recorded session length.
    #[must_use]
    pub fn session_durations(&self) -> &[f32] {
        &self.session_durations
    }

    /// Marks the start of a play session.
    pub fn mark_session_start(&mut self, timestamp: impl Into<String>) {
        self.session_start_time = Some(timestamp.into());
    }

    /// Records a finished session and refreshes the running average.
    pub fn record_session(&mut self, minutes: f32) -> SettingsResult<()> {
        if minutes < 0.0 {
            return Err(SettingsError::NegativeDuration(minutes));
        }
        self.session_durations.push(minutes);
        self.total_play_time += minutes;
        self.average_session_time = self.total_play_time / self.session_durations.len() as f32;
        Ok(())
    }

    /// Clears all statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// All persisted game settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    /// Sound effects on or off.
    pub sound: bool,
    /// Parental controls.
    pub parental_controls: ParentalControls,
    /// Lifetime play statistics.
    pub play_statistics: PlayStatistics,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sound: true,
            parental_controls: ParentalControls::default(),
            play_statistics: PlayStatistics::default(),
        }
    }
}

/// Measures one play session's length in wall-clock minutes.
#[derive(Debug, Clone, Copy)]
pub struct SessionTimer {
    /// When the session began.
    started: Instant,
}

impl SessionTimer {
    /// Starts timing now.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Returns minutes elapsed since the session began.
    #[must_use]
    pub fn elapsed_minutes(&self) -> f32 {
        self.started.elapsed().as_secs_f32() / 60.0
    }
}
