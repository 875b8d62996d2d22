use dex_core::CoreEngineError;
use dex_providers::ProviderError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Errores de arranque: cualquier cosa que impide ejecutar el pipeline.
///
/// Los fallos del pipeline en sí no son `AppError`: terminan como
/// `TerminalState::Aborted`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("pipeline setup failed: {0}")]
    Pipeline(#[from] CoreEngineError),
    #[error("could not initialise logging: {0}")]
    Logging(String),
}
