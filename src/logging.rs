//! Inicialización de logs.
//!
//! Suscriptor `tracing-subscriber` a stderr; los registros `log` de los
//! crates de librería entran por el puente `tracing-log`.
use tracing_subscriber::EnvFilter;

use crate::errors::AppError;

/// `RUST_LOG` si está definido; si no, `default_filter`.
pub fn init(default_filter: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .try_init()
                             .map_err(|e| AppError::Logging(e.to_string()))
}
