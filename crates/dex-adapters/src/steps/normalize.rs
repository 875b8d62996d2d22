//! NormalizeStage (Transform)
//!
//! Materializa `items` desde el literal de entrada o desde el archivo.
use std::fs;

use async_trait::async_trait;
use dex_core::{StageDefinition, StageKind, StageRunResult};
use log::debug;

use crate::context::RequestContext;

/// Colaborador de materialización de entrada.
///
/// Literal: separado por espacios en blanco. Archivo: una entrada por línea.
/// Cada entrada se recorta y las vacías se descartan. Exactamente una de las
/// dos fuentes debe estar presente.
pub fn materialize_items(ctx: &RequestContext) -> Result<Vec<String>, String> {
    let raw = match (&ctx.input_data, &ctx.input_file) {
        (Some(data), None) => data.split_whitespace().map(str::to_string).collect::<Vec<_>>(),
        (None, Some(path)) => {
            let content =
                fs::read_to_string(path).map_err(|e| format!("Could not read input file {}: {e}", path.display()))?;
            content.lines().map(str::to_string).collect()
        }
        (Some(_), Some(_)) => return Err("Input data and input file are mutually exclusive".to_string()),
        (None, None) => return Err("No input data or input file was given".to_string()),
    };
    Ok(raw.into_iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeStage;

#[async_trait]
impl StageDefinition<RequestContext> for NormalizeStage {
    fn id(&self) -> &str {
        "normalize"
    }

    fn kind(&self) -> StageKind {
        StageKind::Transform
    }

    async fn run(&self, ctx: &mut RequestContext) -> StageRunResult {
        match materialize_items(ctx) {
            Ok(items) => {
                debug!("request {}: {} identifier(s)", ctx.request_id, items.len());
                ctx.items = items;
                StageRunResult::Success
            }
            Err(message) => StageRunResult::failure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use dex_domain::Mode;

    use super::*;

    #[test]
    fn literal_splits_on_any_whitespace() {
        let ctx = RequestContext::new(Mode::Creature).with_data("  pikachu \t 25\n\nbulbasaur ");
        assert_eq!(materialize_items(&ctx).unwrap(), vec!["pikachu", "25", "bulbasaur"]);
    }

    #[test]
    fn file_lines_are_trimmed_and_blank_lines_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.txt");
        std::fs::write(&path, "1\r\n  2  \n\n9999\n").unwrap();
        let ctx = RequestContext::new(Mode::Move).with_file(&path);
        assert_eq!(materialize_items(&ctx).unwrap(), vec!["1", "2", "9999"]);
    }

    #[test]
    fn neither_source_is_an_error() {
        let ctx = RequestContext::new(Mode::Move);
        assert!(materialize_items(&ctx).is_err());
    }

    #[tokio::test]
    async fn stage_fills_items() {
        let mut ctx = RequestContext::new(Mode::Ability).with_data("static overgrow");
        assert!(NormalizeStage.run(&mut ctx).await.is_success());
        assert_eq!(ctx.items, vec!["static", "overgrow"]);
    }
}
