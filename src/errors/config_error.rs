use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Variable de entorno vacía: {0}")]
    Missing(String),
    #[error("Nivel de log inválido en {var}: {value}")]
    InvalidLogLevel { var: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_log_level_format() {
        let err = ConfigError::InvalidLogLevel { var: "SLIMS_LOG_LEVEL".into(), value: "loud".into() };
        assert_eq!(err.to_string(), "Nivel de log inválido en SLIMS_LOG_LEVEL: loud");
    }
}
