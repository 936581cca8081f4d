//! Session model
//!
//! A session is one recorded pomodoro interval. `SessionData` is the
//! envelope every list query returns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded work session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Sequential identifier assigned by the store
    pub id: i64,
    pub name: String,
    /// Calendar date the session was recorded on
    pub date: NaiveDate,
    #[serde(alias = "durationInMinutes")]
    pub duration_in_minutes: i32,
}

/// Input for recording a session
///
/// Any `id` or `date` sent by a client is ignored; the store assigns both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionInput {
    pub name: String,
    #[serde(alias = "durationInMinutes")]
    pub duration_in_minutes: i32,
}

impl CreateSessionInput {
    pub fn new(name: impl Into<String>, duration_in_minutes: i32) -> Self {
        Self {
            name: name.into(),
            duration_in_minutes,
        }
    }
}

/// Sessions plus the sum of their durations
///
/// The server builds it through [`SessionData::new`], which derives
/// `total_duration` from `sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    sessions: Vec<Session>,
    #[serde(rename = "totalDuration")]
    total_duration: i64,
}

impl SessionData {
    pub fn new(sessions: Vec<Session>) -> Self {
        let total_duration = total_duration(&sessions);
        Self {
            sessions,
            total_duration,
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn total_duration(&self) -> i64 {
        self.total_duration
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Sum of `duration_in_minutes` over `sessions`
pub fn total_duration(sessions: &[Session]) -> i64 {
    sessions
        .iter()
        .map(|s| i64::from(s.duration_in_minutes))
        .sum()
}
