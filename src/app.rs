//! Ensamblado de una ejecución: config + fetcher + pipeline.
use std::sync::Arc;

use dex_adapters::{build_controller, RequestContext};
use dex_core::PipelineRun;
use dex_providers::{HttpFetcher, RemoteFetcher};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Fetcher HTTP con el timeout configurado.
pub fn http_fetcher(config: &AppConfig) -> Result<Arc<dyn RemoteFetcher>, AppError> {
    Ok(Arc::new(HttpFetcher::new(Some(config.http_timeout))?))
}

/// Corre el pipeline completo sobre `ctx`.
///
/// `Err` sólo para fallos de armado; un pipeline abortado es un `Ok` con
/// `TerminalState::Aborted`.
pub async fn execute(ctx: &mut RequestContext,
                     config: &AppConfig,
                     fetcher: Arc<dyn RemoteFetcher>)
                     -> Result<PipelineRun, AppError> {
    debug!("{ctx}");
    let mut controller = build_controller(fetcher, config.api_base.clone(), config.effects.clone())?;
    let run = controller.execute(ctx).await;
    info!(run_id = %run.run_id, completed = run.is_completed(), "request {} finished", ctx.request_id);
    Ok(run)
}
