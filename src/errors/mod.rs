//! Errores de la aplicación (capa binaria).
pub mod app_error;

pub use app_error::{AppError, ConfigError};
