//! Descriptor de parámetro.
//!
//! Un `ParamDescriptor` es un mapa ordenado (`IndexMap`) que se serializa tal
//! cual como objeto JSON. Las claves fijas (`name`, `label`, `type`) se
//! escriben primero; el payload específico del tipo (`fieldList`, `valueMap`,
//! `subParameters`) después, y por último los extras del llamador.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::merge::merge_extras;
use crate::types::ParamType;

/// Extras arbitrarios (p. ej. `defaultValue`) que se fusionan sobre el descriptor.
pub type Extras = IndexMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamDescriptor(IndexMap<String, Value>);

impl ParamDescriptor {
    /// Descriptor `{name, label, type}` sin payload.
    pub fn new(name: impl Into<String>, label: impl Into<String>, param_type: ParamType) -> Self {
        let mut map = IndexMap::new();
        map.insert("name".to_string(), Value::String(name.into()));
        map.insert("label".to_string(), Value::String(label.into()));
        map.insert("type".to_string(), param_type.into());
        Self(map)
    }

    /// Descriptor construido a partir de pares ya ordenados (salidas, o
    /// descriptores recibidos de fuera).
    pub fn from_entries<I, K>(entries: I) -> Self
        where I: IntoIterator<Item = (K, Value)>,
              K: Into<String>
    {
        Self(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub(crate) fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    /// Añade (o sobreescribe) un extra. Un extra con el mismo nombre que una
    /// clave fija la reemplaza.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        merge_extras(&mut self.0, [(key.into(), value.into())]);
        self
    }

    /// Fusiona un mapa completo de extras, con la misma precedencia que `with`.
    pub fn with_extras(mut self, extras: Extras) -> Self {
        merge_extras(&mut self.0, extras);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Etiqueta del campo `type`, si es un string.
    pub fn param_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.0
    }

    /// Objeto JSON equivalente, conservando el orden de claves.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect::<Map<String, Value>>())
    }
}

impl From<ParamDescriptor> for Value {
    fn from(d: ParamDescriptor) -> Self {
        Value::Object(d.0.into_iter().collect())
    }
}
