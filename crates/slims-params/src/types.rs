//! Etiquetas de tipo literales del contrato de cable con SLimsGate.
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tipo de un parámetro de entrada o salida. `as_str` devuelve la etiqueta
/// exacta que viaja en el campo `type` del descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "DATE")]
    Date,
    #[serde(rename = "DATETIME")]
    DateTime,
    #[serde(rename = "TIME")]
    Time,
    #[serde(rename = "BOOLEAN")]
    Boolean,
    /// Texto enriquecido.
    #[serde(rename = "TEXT")]
    Text,
    #[serde(rename = "INTEGER")]
    Integer,
    #[serde(rename = "FLOAT")]
    Float,
    #[serde(rename = "PASSWORD")]
    Password,
    #[serde(rename = "FILE")]
    File,
    #[serde(rename = "TABLE")]
    Table,
    #[serde(rename = "SINGLE_CHOICE")]
    SingleChoice,
    #[serde(rename = "MULTIPLE_CHOICE")]
    MultipleChoice,
    /// Sólo en salidas.
    #[serde(rename = "VALUEMAP")]
    ValueMap,
}

impl ParamType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Date => "DATE",
            Self::DateTime => "DATETIME",
            Self::Time => "TIME",
            Self::Boolean => "BOOLEAN",
            Self::Text => "TEXT",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Password => "PASSWORD",
            Self::File => "FILE",
            Self::Table => "TABLE",
            Self::SingleChoice => "SINGLE_CHOICE",
            Self::MultipleChoice => "MULTIPLE_CHOICE",
            Self::ValueMap => "VALUEMAP",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ParamType> for Value {
    fn from(t: ParamType) -> Self {
        Value::String(t.as_str().to_string())
    }
}
