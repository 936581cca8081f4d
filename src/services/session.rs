//! Session service
//!
//! Business rules on top of the session repository:
//! - date-range queries wrapped in a `SessionData` envelope
//! - name lookups that report `NotFound` instead of an empty list
//! - input validation on create
//! - delete and maintenance reset

use crate::db::repositories::SessionRepository;
use crate::models::{CreateSessionInput, DateRange, Session, SessionData};
use anyhow::Context;
use std::sync::Arc;

/// Error types for session service operations
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    /// Nothing matched the lookup
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Session service holding its repository
pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self { repo }
    }

    /// All sessions inside `range`, with their total duration.
    pub async fn list(&self, range: &DateRange) -> Result<SessionData, SessionServiceError> {
        let sessions = self
            .repo
            .list_in_range(range)
            .await
            .context("Failed to list sessions")?;
        Ok(SessionData::new(sessions))
    }

    /// Sessions named `name` inside `range`.
    ///
    /// # Errors
    /// - `NotFound` when no session matches
    pub async fn list_by_name(
        &self,
        name: &str,
        range: &DateRange,
    ) -> Result<SessionData, SessionServiceError> {
        let name = name.trim();
        let sessions = self
            .repo
            .list_by_name_in_range(name, range)
            .await
            .context("Failed to list sessions by name")?;

        if sessions.is_empty() {
            return Err(SessionServiceError::NotFound(format!(
                "no sessions with name: {}",
                name
            )));
        }

        Ok(SessionData::new(sessions))
    }

    /// Record a finished session.
    ///
    /// Recording the same input twice stores two rows.
    ///
    /// # Errors
    /// - `ValidationError` if the name is blank or the duration negative
    pub async fn create(&self, input: CreateSessionInput) -> Result<Session, SessionServiceError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(SessionServiceError::ValidationError(
                "Session name cannot be empty".to_string(),
            ));
        }
        if input.duration_in_minutes < 0 {
            return Err(SessionServiceError::ValidationError(format!(
                "Duration must not be negative, got {}",
                input.duration_in_minutes
            )));
        }

        let input = CreateSessionInput::new(name, input.duration_in_minutes);
        let session = self
            .repo
            .create(&input)
            .await
            .context("Failed to create session")?;

        tracing::debug!(id = session.id, name = %session.name, "session recorded");
        Ok(session)
    }

    /// Distinct names across every session, regardless of date.
    pub async fn list_names(&self) -> Result<Vec<String>, SessionServiceError> {
        self.repo
            .list_names()
            .await
            .context("Failed to list session names")
            .map_err(Into::into)
    }

    /// Delete one session by id.
    ///
    /// # Errors
    /// - `NotFound` if no session has that id
    pub async fn delete(&self, id: i64) -> Result<(), SessionServiceError> {
        let removed = self
            .repo
            .delete(id)
            .await
            .context("Failed to delete session")?;

        if removed == 0 {
            return Err(SessionServiceError::NotFound(format!(
                "no session with id: {}",
                id
            )));
        }
        Ok(())
    }

    /// Drop every recorded session by rebuilding the table. Irreversible.
    pub async fn reset(&self) -> Result<(), SessionServiceError> {
        tracing::warn!("Resetting session store");
        self.repo
            .reset()
            .await
            .context("Failed to reset session store")
            .map_err(Into::into)
    }
}
