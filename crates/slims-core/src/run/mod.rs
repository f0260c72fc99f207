//! Colaborador `FlowRun`: lo provee quien recibe la petición de ejecución
//! desde la plataforma remota.
mod memory;

pub use memory::{InMemoryFlowRun, LogEntry};

use crate::errors::BoxError;
use crate::status::Status;

/// Contexto de una ejecución de flow.
///
/// Se comparte con el hilo de un step asíncrono a través de un `Arc`, por lo
/// que las implementaciones gestionan su propia sincronización interna.
pub trait FlowRun: Send + Sync {
    /// Falla si el secreto/credencial del usuario no es válido. Se llama antes
    /// de cualquier acción.
    fn check_user_secret(&self) -> Result<(), BoxError>;
    /// Añade un texto de diagnóstico al registro del run.
    fn log(&self, text: &str);
    /// Cambia el estado visible del run.
    fn update_status(&self, status: Status);
}
