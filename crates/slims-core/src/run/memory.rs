//! `FlowRun` en memoria, para uso local y tests.
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FlowRun;
use crate::errors::{BoxError, SecretRejected};
use crate::status::Status;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub ts: DateTime<Utc>,
    pub text: String,
}

#[derive(Debug)]
struct RunState {
    status: Status,
    history: Vec<Status>,
    log: Vec<LogEntry>,
}

#[derive(Debug)]
pub struct InMemoryFlowRun {
    id: Uuid,
    rejected_secret: Option<String>,
    state: Mutex<RunState>,
}

impl Default for InMemoryFlowRun {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFlowRun {
    /// Run en `Pending` con secreto válido.
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(),
               rejected_secret: None,
               state: Mutex::new(RunState { status: Status::Pending, history: Vec::new(), log: Vec::new() }) }
    }

    /// Run cuyo `check_user_secret` falla con `reason`.
    pub fn with_rejected_secret(reason: impl Into<String>) -> Self {
        Self { rejected_secret: Some(reason.into()), ..Self::new() }
    }

    // Un pánico en otro hilo no invalida el registro: se sigue usando.
    fn state(&self) -> MutexGuard<'_, RunState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> Status {
        self.state().status
    }

    /// Estados escritos con `update_status`, en orden.
    pub fn status_history(&self) -> Vec<Status> {
        self.state().history.clone()
    }

    pub fn log_entries(&self) -> Vec<LogEntry> {
        self.state().log.clone()
    }

    /// Todas las entradas del log unidas por saltos de línea.
    pub fn log_text(&self) -> String {
        self.state().log.iter().map(|e| e.text.as_str()).collect::<Vec<_>>().join("\n")
    }
}

impl FlowRun for InMemoryFlowRun {
    fn check_user_secret(&self) -> Result<(), BoxError> {
        match &self.rejected_secret {
            Some(reason) => Err(Box::new(SecretRejected(reason.clone()))),
            None => Ok(()),
        }
    }

    fn log(&self, text: &str) {
        self.state().log.push(LogEntry { ts: Utc::now(), text: text.to_string() });
    }

    fn update_status(&self, status: Status) {
        let mut state = self.state();
        state.status = status;
        state.history.push(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_log_and_status_history() {
        let run = InMemoryFlowRun::new();
        assert_eq!(run.status(), Status::Pending);
        assert!(run.check_user_secret().is_ok());

        run.update_status(Status::Running);
        run.log("primera");
        run.log("segunda");
        run.update_status(Status::Done);

        assert_eq!(run.status(), Status::Done);
        assert_eq!(run.status_history(), vec![Status::Running, Status::Done]);
        assert_eq!(run.log_text(), "primera\nsegunda");
        assert_eq!(run.log_entries().len(), 2);
    }

    #[test]
    fn rejected_secret_fails_check() {
        let run = InMemoryFlowRun::with_rejected_secret("expired token");
        let err = run.check_user_secret().unwrap_err();
        assert_eq!(err.to_string(), "user secret rejected: expired token");
        assert_ne!(run.id(), InMemoryFlowRun::new().id());
    }
}
