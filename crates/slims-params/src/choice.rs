//! Entradas de elección (simple o múltiple).
//!
//! Dos fuentes de opciones:
//! - `FieldList`: lista explícita de elementos, cada uno con un tipo opcional
//!   emparejado por posición.
//! - `ValueMap`: opciones leídas de una tabla remota o de la salida value map
//!   de un step anterior.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::descriptor::ParamDescriptor;
use crate::error::ParamError;
use crate::types::ParamType;

/// Elementos de una elección sobre lista fija.
///
/// Los tipos se emparejan con los elementos por índice. El orden es
/// responsabilidad del llamador: sólo se detecta una lista de tipos más corta.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldList {
    elements: Vec<Value>,
    types: Option<Vec<Value>>,
}

impl FieldList {
    pub fn new<I, V>(elements: I) -> Self
        where I: IntoIterator<Item = V>,
              V: Into<Value>
    {
        Self { elements: elements.into_iter().map(Into::into).collect(), types: None }
    }

    pub fn with_types<I, V>(mut self, types: I) -> Self
        where I: IntoIterator<Item = V>,
              V: Into<Value>
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Entradas `{type, field}`; `type` es `null` si no se dieron tipos.
    /// Tipos sobrantes se ignoran.
    pub fn entries(&self) -> Result<Vec<Value>, ParamError> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, field)| -> Result<Value, ParamError> {
                let ty = match &self.types {
                    None => Value::Null,
                    Some(types) => types.get(index).cloned().ok_or(ParamError::MissingFieldType {
                        index,
                        elements: self.elements.len(),
                        types: types.len(),
                    })?,
                };
                Ok(json!({ "type": ty, "field": field }))
            })
            .collect()
    }
}

/// Origen remoto de las opciones de una elección. Los campos no definidos se
/// envían como `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueMap {
    /// Filtro aplicado sobre las opciones mostradas.
    pub filter: Option<Value>,
    /// Nombre de la salida value map de un step anterior.
    pub reference: Option<String>,
    /// Tabla de la que se leen las opciones.
    pub table: Option<String>,
    /// Nombre de un campo custom.
    pub fixed_choice_custom_field: Option<String>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn fixed_choice_custom_field(mut self, field: impl Into<String>) -> Self {
        self.fixed_choice_custom_field = Some(field.into());
        self
    }

    pub fn to_value(&self) -> Value {
        json!({
            "filter": self.filter,
            "reference": self.reference,
            "table": self.table,
            "fixedChoiceCustomField": self.fixed_choice_custom_field,
        })
    }
}

fn choice_with_field_list_input(name: impl Into<String>,
                                label: impl Into<String>,
                                choice: ParamType,
                                fields: &FieldList)
                                -> Result<ParamDescriptor, ParamError> {
    let entries = fields.entries()?;
    let mut d = ParamDescriptor::new(name, label, choice);
    d.insert("fieldList", json!({ "entries": entries }));
    Ok(d)
}

fn choice_with_value_map_input(name: impl Into<String>,
                               label: impl Into<String>,
                               choice: ParamType,
                               value_map: &ValueMap)
                               -> ParamDescriptor {
    let mut d = ParamDescriptor::new(name, label, choice);
    d.insert("valueMap", value_map.to_value());
    d
}

/// Elección simple sobre una lista fija.
///
/// Falla con `ParamError::MissingFieldType` si hay menos tipos que elementos.
pub fn single_choice_with_field_list_input(name: impl Into<String>,
                                           label: impl Into<String>,
                                           fields: FieldList)
                                           -> Result<ParamDescriptor, ParamError> {
    choice_with_field_list_input(name, label, ParamType::SingleChoice, &fields)
}

/// Elección múltiple sobre una lista fija.
pub fn multiple_choice_with_field_list_input(name: impl Into<String>,
                                             label: impl Into<String>,
                                             fields: FieldList)
                                             -> Result<ParamDescriptor, ParamError> {
    choice_with_field_list_input(name, label, ParamType::MultipleChoice, &fields)
}

/// Elección simple sobre una tabla o value map remoto.
pub fn single_choice_with_value_map_input(name: impl Into<String>,
                                          label: impl Into<String>,
                                          value_map: ValueMap)
                                          -> ParamDescriptor {
    choice_with_value_map_input(name, label, ParamType::SingleChoice, &value_map)
}

pub fn multiple_choice_with_value_map_input(name: impl Into<String>,
                                            label: impl Into<String>,
                                            value_map: ValueMap)
                                            -> ParamDescriptor {
    choice_with_value_map_input(name, label, ParamType::MultipleChoice, &value_map)
}
