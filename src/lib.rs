//! slims-flow
//!
//! Librería para definir flows de SLimsGate en Rust:
//! - Re-exporta `slims_core` (steps, runs, definición de flow) y
//!   `slims_params` (descriptores de entradas/salidas).
//! - Expone `config` para leer la configuración desde el entorno (.env).
//! - Expone `demo` con un flow de ejemplo usado por el binario.

pub mod config;
pub mod demo;
pub mod errors;

pub use slims_core::{
    format_trace, Action, BoxError, Execution, FlowDefinition, FlowError, FlowRun, InMemoryFlowRun, LogEntry, Status,
    Step, StepExecutionError, StepTask,
};
pub use slims_params::*;

#[cfg(test)]
mod tests {
    use super::errors::config_error::ConfigError;

    #[test]
    fn config_error_tests() {
        let e = ConfigError::Missing("SLIMS_FLOW_ID".into()).to_string();
        assert_eq!(e, "Variable de entorno vacía: SLIMS_FLOW_ID");
    }
}
