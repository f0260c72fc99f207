//! Errores del core.
//!
//! `StepExecutionError` es el único error que devuelve `Step::execute`. Su
//! mensaje sólo nombra el step; la causa original queda en `source()` y la
//! traza formateada en el log del run.

use std::any::Any;

use thiserror::Error;

/// Error de una acción de usuario o de la verificación del secreto.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
#[error("step '{step}' failed")]
pub struct StepExecutionError {
    step: String,
    #[source]
    cause: BoxError,
}

impl StepExecutionError {
    pub fn new(step: impl Into<String>, cause: BoxError) -> Self {
        Self { step: step.into(), cause }
    }

    pub fn step(&self) -> &str {
        &self.step
    }
}

/// La acción del step entró en pánico.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("action panicked: {0}")]
pub struct ActionPanicked(pub String);

impl ActionPanicked {
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let msg = match payload.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(s) => (*s).to_string(),
                Err(_) => "non-string panic payload".to_string(),
            },
        };
        Self(msg)
    }
}

/// Secreto de usuario rechazado por un `FlowRun`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("user secret rejected: {0}")]
pub struct SecretRejected(pub String);

/// Errores al resolver una ruta dentro de un `FlowDefinition`.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("malformed route '{0}'")]
    MalformedRoute(String),
    #[error("route '{route}' does not belong to flow '{flow}'")]
    ForeignRoute { route: String, flow: String },
    #[error("no step at index {index} in flow '{flow}'")]
    UnknownStep { flow: String, index: usize },
    #[error(transparent)]
    Execution(#[from] StepExecutionError),
}
