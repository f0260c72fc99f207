//! slims-core: steps de flows SLimsGate y su ejecución.
//!
//! - `Step`: acción del usuario + entradas/salidas declaradas; se serializa
//!   con `to_dict` y se ejecuta con `execute` (en línea o en un hilo propio).
//! - `FlowRun`: colaborador externo que valida el secreto del usuario, recibe
//!   el log y el estado de la ejecución.
//! - `FlowDefinition`: agrupa steps bajo un flow y asigna sus rutas.
pub mod definition;
pub mod errors;
pub mod hashing;
pub mod run;
pub mod status;
pub mod step;
pub mod task;
mod trace;

pub use definition::FlowDefinition;
pub use errors::{ActionPanicked, BoxError, FlowError, SecretRejected, StepExecutionError};
pub use run::{FlowRun, InMemoryFlowRun, LogEntry};
pub use status::Status;
pub use step::{Action, Step};
pub use task::{Execution, StepTask};
pub use trace::format_trace;
