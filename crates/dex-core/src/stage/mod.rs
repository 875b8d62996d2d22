//! Definiciones relacionadas a etapas (stages).
//!
//! Una etapa es una unidad discreta que lee y muta el contexto de la petición.
//! Este módulo define:
//! - `StageDefinition`: interfaz que ejecuta el controlador.
//! - `StageRunResult`: éxito o fallo con mensaje (corta la cadena).
//! - `StageStatus`: estado observable de cada etapa dentro de una ejecución.

pub mod definition;
mod run_result;
mod status;

pub use definition::{StageDefinition, StageKind};
pub use run_result::StageRunResult;
pub use status::StageStatus;
