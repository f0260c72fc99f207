//! Entradas escalares y de tabla.
//!
//! Todas devuelven `{name, label, type}` con la etiqueta fija del tipo; los
//! extras (`defaultValue`, ...) se añaden con `ParamDescriptor::with` o
//! `ParamDescriptor::with_extras`.

use serde_json::Value;

use crate::descriptor::ParamDescriptor;
use crate::types::ParamType;

fn simple_input(name: impl Into<String>, label: impl Into<String>, param_type: ParamType) -> ParamDescriptor {
    ParamDescriptor::new(name, label, param_type)
}

/// Texto corto (`STRING`).
pub fn text_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::String)
}

pub fn date_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::Date)
}

pub fn date_time_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::DateTime)
}

pub fn time_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::Time)
}

/// Elección sí/no.
pub fn boolean_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::Boolean)
}

/// Texto enriquecido (`TEXT`).
pub fn rich_text_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::Text)
}

pub fn integer_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::Integer)
}

pub fn float_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::Float)
}

pub fn password_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::Password)
}

/// Entrada de archivo. SLims no admite todavía un step con entrada y salida
/// de archivo a la vez.
pub fn file_input(name: impl Into<String>, label: impl Into<String>) -> ParamDescriptor {
    simple_input(name, label, ParamType::File)
}

/// Tabla cuyas columnas son `subparameters`, copiados sin modificar bajo
/// `subParameters`.
pub fn table_input(name: impl Into<String>,
                   label: impl Into<String>,
                   subparameters: Vec<ParamDescriptor>)
                   -> ParamDescriptor {
    let mut d = ParamDescriptor::new(name, label, ParamType::Table);
    d.insert("subParameters", Value::Array(subparameters.into_iter().map(Value::from).collect()));
    d
}
