//! RenderStage (Sink)
//!
//! Consola siempre; además archivo cuando el destino es una ruta.
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use async_trait::async_trait;
use dex_core::{StageDefinition, StageKind, StageRunResult};

use crate::context::{ItemResult, OutputTarget, RequestContext};

/// Texto de salida: una línea en blanco inicial y un bloque por resultado,
/// cada uno seguido de salto de línea.
pub fn render_results(results: &[ItemResult]) -> String {
    let mut output = String::from("\n");
    for result in results {
        output.push_str(&result.to_string());
        output.push('\n');
    }
    output
}

/// Escribe `text` como UTF-8 en `path`, reemplazando el contenido previo.
pub fn write_output(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, text.as_bytes())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStage;

#[async_trait]
impl StageDefinition<RequestContext> for RenderStage {
    fn id(&self) -> &str {
        "render"
    }

    fn kind(&self) -> StageKind {
        StageKind::Sink
    }

    async fn run(&self, ctx: &mut RequestContext) -> StageRunResult {
        let text = render_results(&ctx.results);
        {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{text}") {
                return StageRunResult::failure(format!("Could not write to console: {e}"));
            }
        }
        if let OutputTarget::File(path) = &ctx.output {
            if let Err(e) = write_output(path, &text) {
                return StageRunResult::failure(format!("Could not write output file {}: {e}", path.display()));
            }
        }
        ctx.rendered = Some(text);
        StageRunResult::Success
    }
}
