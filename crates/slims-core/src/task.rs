//! Resultado de `Step::execute`.
//!
//! Un step asíncrono corre en un hilo dedicado y `execute` devuelve un
//! `StepTask` sin esperar. Soltar el task deja el hilo desacoplado (la
//! plataforma sólo ve el desenlace a través del estado y log del run);
//! conservarlo permite consultar o esperar el resultado.

use std::thread::JoinHandle;

use serde_json::Value;

use crate::errors::{ActionPanicked, StepExecutionError};

#[derive(Debug)]
pub struct StepTask {
    step: String,
    handle: JoinHandle<Result<Value, StepExecutionError>>,
}

impl StepTask {
    pub(crate) fn new(step: impl Into<String>, handle: JoinHandle<Result<Value, StepExecutionError>>) -> Self {
        Self { step: step.into(), handle }
    }

    pub fn step(&self) -> &str {
        &self.step
    }

    /// `true` cuando el hilo ya terminó (con éxito o no).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Bloquea hasta que la acción termine y devuelve su resultado.
    pub fn join(self) -> Result<Value, StepExecutionError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(payload) => Err(StepExecutionError::new(self.step, Box::new(ActionPanicked::from_payload(payload)))),
        }
    }

    /// Suelta el handle sin esperar.
    pub fn detach(self) {}
}

/// Lo que devuelve una ejecución aceptada.
#[derive(Debug)]
pub enum Execution {
    /// Step síncrono: valor devuelto por la acción.
    Completed(Value),
    /// Step asíncrono: la acción sigue en su propio hilo.
    Dispatched(StepTask),
}

impl Execution {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Execution::Dispatched(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Execution::Completed(v) => Some(v),
            Execution::Dispatched(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Execution::Completed(v) => Some(v),
            Execution::Dispatched(_) => None,
        }
    }

    pub fn into_task(self) -> Option<StepTask> {
        match self {
            Execution::Dispatched(t) => Some(t),
            Execution::Completed(_) => None,
        }
    }
}
