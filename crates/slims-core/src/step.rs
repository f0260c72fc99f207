//! Step de un flow SLimsGate.
//!
//! Un `Step` tiene dos caras:
//! - `to_dict(route)`: la definición que se envía a la plataforma (entradas,
//!   salidas, ruta y asincronía).
//! - `execute(run)`: ejecución local de la acción cuando la plataforma llama
//!   a la ruta del step.
//!
//! Ciclo de vida por ejecución: `no iniciado -> en curso -> DONE | FAILED`.
//! Sin reintentos ni timeouts; un fallo deja la traza en el log del run, el
//! estado en `FAILED` y se devuelve `StepExecutionError`.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use log::{error, info};
use serde_json::{json, Value};
use slims_params::ParamDescriptor;

use crate::errors::{ActionPanicked, BoxError, StepExecutionError};
use crate::run::FlowRun;
use crate::status::Status;
use crate::task::{Execution, StepTask};
use crate::trace::format_trace;

/// Acción del usuario: recibe el run y devuelve cualquier valor JSON.
pub type Action = Arc<dyn Fn(&dyn FlowRun) -> Result<Value, BoxError> + Send + Sync>;

#[derive(Clone)]
pub struct Step {
    name: String,
    action: Action,
    asynchronous: bool,
    hidden: bool,
    input: Vec<ParamDescriptor>,
    output: Vec<ParamDescriptor>,
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
         .field("name", &self.name)
         .field("asynchronous", &self.asynchronous)
         .field("hidden", &self.hidden)
         .field("input", &self.input)
         .field("output", &self.output)
         .finish_non_exhaustive()
    }
}

impl Step {
    /// Step síncrono, visible y sin entradas ni salidas.
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
        where F: Fn(&dyn FlowRun) -> Result<Value, BoxError> + Send + Sync + 'static
    {
        Self { name: name.into(),
               action: Arc::new(action),
               asynchronous: false,
               hidden: false,
               input: Vec::new(),
               output: Vec::new() }
    }

    pub fn asynchronous(mut self, asynchronous: bool) -> Self {
        self.asynchronous = asynchronous;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Reemplaza la lista de entradas.
    pub fn input(mut self, params: Vec<ParamDescriptor>) -> Self {
        self.input = params;
        self
    }

    /// Reemplaza la lista de salidas.
    pub fn output(mut self, params: Vec<ParamDescriptor>) -> Self {
        self.output = params;
        self
    }

    pub fn add_input(mut self, param: ParamDescriptor) -> Self {
        self.input.push(param);
        self
    }

    pub fn add_output(mut self, param: ParamDescriptor) -> Self {
        self.output.push(param);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_asynchronous(&self) -> bool {
        self.asynchronous
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn inputs(&self) -> &[ParamDescriptor] {
        &self.input
    }

    pub fn outputs(&self) -> &[ParamDescriptor] {
        &self.output
    }

    /// Definición del step para la plataforma. `route_id` es opaco y se copia
    /// tal cual en `process.route`.
    pub fn to_dict(&self, route_id: &str) -> Value {
        json!({
            "hidden": self.hidden,
            "name": self.name,
            "input": { "parameters": self.input },
            "process": {
                "asynchronous": self.asynchronous,
                "route": route_id,
            },
            "output": { "parameters": self.output },
        })
    }

    /// Ejecuta la acción contra `flow_run`.
    ///
    /// Primero verifica el secreto del usuario. Un step síncrono devuelve
    /// `Execution::Completed` con el valor de la acción; uno asíncrono lanza
    /// un hilo y devuelve `Execution::Dispatched` de inmediato, sin importar
    /// cuánto tarde o cómo termine la acción.
    pub fn execute(&self, flow_run: Arc<dyn FlowRun>) -> Result<Execution, StepExecutionError> {
        if let Err(err) = flow_run.check_user_secret() {
            return Err(fail(&self.name, flow_run.as_ref(), err));
        }
        if self.asynchronous {
            info!("Starting to run step {} asynchronously", self.name);
            self.spawn(flow_run).map(Execution::Dispatched)
        } else {
            info!("Starting to run step {} synchronously", self.name);
            run_action(&self.name, &self.action, flow_run.as_ref()).map(Execution::Completed)
        }
    }

    fn spawn(&self, flow_run: Arc<dyn FlowRun>) -> Result<StepTask, StepExecutionError> {
        let name = self.name.clone();
        let action = Arc::clone(&self.action);
        let worker_run = Arc::clone(&flow_run);
        thread::Builder::new().name(thread_name(&self.name))
                              .spawn(move || run_action(&name, &action, worker_run.as_ref()))
                              .map(|handle| StepTask::new(self.name.clone(), handle))
                              .map_err(|e| fail(&self.name, flow_run.as_ref(), Box::new(e)))
    }
}

// `thread::Builder::name` entra en pánico si el nombre contiene `\0`.
fn thread_name(step: &str) -> String {
    format!("step-{}", step.replace('\0', "\u{FFFD}"))
}

/// Invoca la acción; un error o un pánico terminan en `FAILED`.
fn run_action(name: &str, action: &Action, flow_run: &dyn FlowRun) -> Result<Value, StepExecutionError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| (action.as_ref())(flow_run)))
        .unwrap_or_else(|payload| Err(Box::new(ActionPanicked::from_payload(payload)) as BoxError));
    match outcome {
        Ok(value) => {
            flow_run.update_status(Status::Done);
            info!("Done running step {name}");
            Ok(value)
        }
        Err(err) => Err(fail(name, flow_run, err)),
    }
}

fn fail(name: &str, flow_run: &dyn FlowRun, cause: BoxError) -> StepExecutionError {
    flow_run.log(&format_trace(name, cause.as_ref()));
    flow_run.update_status(Status::Failed);
    error!("Failed running step {name}");
    StepExecutionError::new(name, cause)
}
