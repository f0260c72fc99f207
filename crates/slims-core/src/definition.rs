//! Definición de un flow: steps ordenados bajo un identificador.
//!
//! La ruta del step `i` es `"<flow id>/<i>"`. La plataforma remota llama a
//! esa ruta para ejecutar el step; `execute_route` hace la resolución inversa.

use std::sync::Arc;

use log::debug;
use serde_json::{json, Value};

use crate::errors::FlowError;
use crate::hashing::hash_value;
use crate::run::FlowRun;
use crate::step::Step;
use crate::task::Execution;

#[derive(Debug, Clone)]
pub struct FlowDefinition {
    id: String,
    name: String,
    usage: String,
    steps: Vec<Step>,
}

impl FlowDefinition {
    /// `usage` indica en qué contexto de SLims aparece el flow (p. ej.
    /// `CONTENT_MANAGEMENT`).
    pub fn new(id: impl Into<String>, name: impl Into<String>, usage: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), usage: usage.into(), steps: Vec::new() }
    }

    pub fn add_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn route_for(&self, index: usize) -> String {
        format!("{}/{}", self.id, index)
    }

    /// Documento completo del flow con la definición de cada step.
    pub fn to_value(&self) -> Value {
        let steps: Vec<Value> = self.steps.iter().enumerate().map(|(i, s)| s.to_dict(&self.route_for(i))).collect();
        json!({
            "id": self.id,
            "name": self.name,
            "usage": self.usage,
            "steps": steps,
        })
    }

    /// Huella determinista de `to_value`: cambia si cambia cualquier step,
    /// parámetro o ruta.
    pub fn definition_hash(&self) -> String {
        hash_value(&self.to_value())
    }

    /// Step al que apunta `route`.
    pub fn resolve(&self, route: &str) -> Result<&Step, FlowError> {
        let (flow, index) = route.rsplit_once('/').ok_or_else(|| FlowError::MalformedRoute(route.to_string()))?;
        if flow != self.id {
            return Err(FlowError::ForeignRoute { route: route.to_string(), flow: self.id.clone() });
        }
        let index: usize = index.parse().map_err(|_| FlowError::MalformedRoute(route.to_string()))?;
        self.steps.get(index).ok_or_else(|| FlowError::UnknownStep { flow: self.id.clone(), index })
    }

    /// Resuelve `route` y ejecuta su step contra `flow_run`.
    pub fn execute_route(&self, route: &str, flow_run: Arc<dyn FlowRun>) -> Result<Execution, FlowError> {
        let step = self.resolve(route)?;
        debug!("route {route} -> step {}", step.name());
        Ok(step.execute(flow_run)?)
    }
}
