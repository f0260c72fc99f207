//! Errores de construcción de descriptores.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParamError {
    /// La lista de tipos es más corta que la lista de elementos: no hay tipo
    /// para el elemento `index`.
    #[error("missing field type for element {index} ({types} types for {elements} elements)")]
    MissingFieldType { index: usize, elements: usize, types: usize },
}
