//! Descriptores de salida.

use serde_json::Value;

use crate::descriptor::ParamDescriptor;
use crate::types::ParamType;

/// Salida de archivo: siempre `{name: "file", type: "FILE"}`.
pub fn file_output() -> ParamDescriptor {
    ParamDescriptor::from_entries([("name", Value::from("file")), ("type", ParamType::File.into())])
}

/// Salida tipo value map, referenciable desde `ValueMap::reference` en el
/// step siguiente. `datatype` es la etiqueta de tipo de los valores.
pub fn value_map_output(name: impl Into<String>, datatype: impl Into<String>) -> ParamDescriptor {
    ParamDescriptor::from_entries([("name", Value::String(name.into())),
                                   ("datatype", Value::String(datatype.into())),
                                   ("type", ParamType::ValueMap.into())])
}
