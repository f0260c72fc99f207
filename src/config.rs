//! Configuración de la aplicación.
//! Carga variables de entorno (.env una sola vez) y construye `FlowConfig`.
//!
//! Variables:
//! - `SLIMS_FLOW_ID` (default `rust_demo_flow`)
//! - `SLIMS_FLOW_NAME` (default `Rust demo flow`)
//! - `SLIMS_FLOW_USAGE` (default `CONTENT_MANAGEMENT`)
//! - `SLIMS_LOG_LEVEL` (default `info`; `off`, `error`, `warn`, `info`, `debug`, `trace`)
use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use log::LevelFilter;
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const FLOW_ID_VAR: &str = "SLIMS_FLOW_ID";
pub const FLOW_NAME_VAR: &str = "SLIMS_FLOW_NAME";
pub const FLOW_USAGE_VAR: &str = "SLIMS_FLOW_USAGE";
pub const LOG_LEVEL_VAR: &str = "SLIMS_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// Identificador del flow; prefijo de las rutas de sus steps.
    pub flow_id: String,
    pub flow_name: String,
    /// Contexto de SLims en el que aparece el flow.
    pub usage: String,
    pub log_level: LevelFilter,
}

impl FlowConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Igual que `from_env` pero leyendo de `lookup` (tests, otras fuentes).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let read = |var: &str, default: &str| -> Result<String, ConfigError> {
            match lookup(var) {
                None => Ok(default.to_string()),
                Some(v) if v.trim().is_empty() => Err(ConfigError::Missing(var.to_string())),
                Some(v) => Ok(v.trim().to_string()),
            }
        };
        let level = read(LOG_LEVEL_VAR, "info")?;
        let log_level = LevelFilter::from_str(&level).map_err(|_| ConfigError::InvalidLogLevel { var: LOG_LEVEL_VAR.to_string(),
                                                                                                  value: level.clone() })?;
        Ok(Self { flow_id: read(FLOW_ID_VAR, "rust_demo_flow")?,
                  flow_name: read(FLOW_NAME_VAR, "Rust demo flow")?,
                  usage: read(FLOW_USAGE_VAR, "CONTENT_MANAGEMENT")?,
                  log_level })
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
