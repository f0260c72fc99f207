//! slims-params: constructores de descriptores de parámetros para steps de
//! SLimsGate.
//!
//! Cada función devuelve un `ParamDescriptor` (mapa ordenado) con la forma
//! exacta que espera el editor de steps de la plataforma remota:
//! - entradas escalares (`text_input`, `integer_input`, ...)
//! - elecciones sobre una lista fija (`*_choice_with_field_list_input`)
//! - elecciones sobre una tabla remota (`*_choice_with_value_map_input`)
//! - tablas (`table_input`) y salidas (`file_output`, `value_map_output`).
//!
//! Ninguna función valida contra el esquema remoto; un descriptor mal formado
//! sólo se detecta cuando la plataforma rechaza la definición del flow.
pub mod choice;
pub mod descriptor;
pub mod error;
pub mod input;
pub mod merge;
pub mod output;
pub mod types;

pub use choice::{
    multiple_choice_with_field_list_input, multiple_choice_with_value_map_input, single_choice_with_field_list_input,
    single_choice_with_value_map_input, FieldList, ValueMap,
};
pub use descriptor::{Extras, ParamDescriptor};
pub use error::ParamError;
pub use input::{
    boolean_input, date_input, date_time_input, file_input, float_input, integer_input, password_input, rich_text_input,
    table_input, text_input, time_input,
};
pub use merge::merge_extras;
pub use output::{file_output, value_map_output};
pub use types::ParamType;

// Re-export para el macro `extras!`.
pub use serde_json::Value;

/// Construye un mapa de extras ordenado a partir de pares `clave => valor`.
///
/// ```ignore
/// let p = integer_input("n", "N").with_extras(extras! { "defaultValue" => 5 });
/// ```
#[macro_export]
macro_rules! extras {
    () => { $crate::Extras::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Extras::new();
        $( map.insert(::std::string::String::from($key), $crate::Value::from($value)); )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extras_macro_keeps_insertion_order() {
        let e = extras! { "defaultValue" => 5, "required" => true, "hint" => "x" };
        let keys: Vec<&str> = e.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["defaultValue", "required", "hint"]);
        assert!(extras!().is_empty());
    }
}
