//! ValidateStage (Check)
//!
//! Revisa rutas de entrada y salida antes de tocar disco o red.
use std::path::Path;

use async_trait::async_trait;
use dex_core::{StageDefinition, StageKind, StageRunResult};

use crate::context::{OutputTarget, RequestContext};

// Sufijo literal: un archivo llamado `.txt` también cuenta.
fn has_txt_extension(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".txt")
}

/// Colaborador de validación de rutas.
///
/// Devuelve el mensaje para el usuario cuando la entrada no existe o no es
/// `.txt`, o cuando la salida no es consola ni `.txt`.
pub fn validate_file_paths(input_file: Option<&Path>, output: &OutputTarget) -> Result<(), String> {
    if let Some(input) = input_file {
        if !input.is_file() {
            return Err("File does not exist at input path".to_string());
        }
        if !has_txt_extension(input) {
            return Err("Input file must be a text file".to_string());
        }
    }
    if let OutputTarget::File(path) = output {
        if !has_txt_extension(path) {
            return Err("Output file must be a text file".to_string());
        }
    }
    Ok(())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateStage;

#[async_trait]
impl StageDefinition<RequestContext> for ValidateStage {
    fn id(&self) -> &str {
        "validate"
    }

    fn kind(&self) -> StageKind {
        StageKind::Check
    }

    async fn run(&self, ctx: &mut RequestContext) -> StageRunResult {
        if ctx.input_data.is_some() && ctx.input_file.is_some() {
            return StageRunResult::failure("Input data and input file are mutually exclusive");
        }
        match validate_file_paths(ctx.input_file.as_deref(), &ctx.output) {
            Ok(()) => StageRunResult::Success,
            Err(message) => StageRunResult::failure(message),
        }
    }
}
