//! pokedex-rust
//!
//! Librería de la aplicación `pokedex`:
//! - `config`: configuración desde entorno (`CONFIG`).
//! - `cli`: argumentos de línea de comandos.
//! - `app`: armado y ejecución del pipeline.
//! - `logging`: suscriptor de logs del binario.
//! - `errors`: errores de arranque.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;

pub use config::{AppConfig, CONFIG};
pub use errors::{AppError, ConfigError};
