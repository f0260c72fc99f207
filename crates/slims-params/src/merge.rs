//! Fusión de extras sobre un descriptor.
//!
//! Merge "shallow": las claves de `extras` reemplazan a las del descriptor,
//! incluidas las fijas (`name`, `label`, `type`). Una clave que ya existía
//! conserva su posición; las nuevas se añaden al final en el orden recibido.

use indexmap::IndexMap;
use serde_json::Value;

pub fn merge_extras<I>(base: &mut IndexMap<String, Value>, extras: I)
    where I: IntoIterator<Item = (String, Value)>
{
    for (k, v) in extras {
        base.insert(k, v);
    }
}
