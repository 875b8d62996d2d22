//! FetchStage (Fetch)
//!
//! Fan-out contra `<root>/<kind>/`, construcción de registros y, si la
//! petición es expandida en modo criatura, una segunda ola por referencias.
//! La etapa es una barrera: termina cuando todos los fetches volvieron.
use async_trait::async_trait;
use futures::future::join_all;
use log::{info, warn};

use dex_core::{StageDefinition, StageKind, StageRunResult};
use dex_domain::{construct, EffectSelection, Mode};
use dex_providers::{ExpansionEngine, FanOutAggregator, RemoteOutcome};

use crate::context::{ItemError, ItemResult, RequestContext};

#[derive(Debug, Clone)]
pub struct FetchStage {
    aggregator: FanOutAggregator,
    expansion: ExpansionEngine,
    api_root: String,
    effects: EffectSelection,
}

impl FetchStage {
    pub fn new(aggregator: FanOutAggregator,
               expansion: ExpansionEngine,
               api_root: impl Into<String>,
               effects: EffectSelection)
               -> Self {
        Self { aggregator,
               expansion,
               api_root: api_root.into(),
               effects }
    }

    /// URL base del tipo de registro, con `/` final.
    pub fn kind_base_url(&self, mode: Mode) -> String {
        format!("{}/{}/", self.api_root.trim_end_matches('/'), mode.endpoint())
    }

    fn to_item(&self, mode: Mode, identifier: &str, outcome: RemoteOutcome) -> ItemResult {
        let error = match outcome {
            RemoteOutcome::Found(payload) => match construct(mode.record_kind(), &payload, &self.effects) {
                Ok(record) => return ItemResult::Record(record),
                Err(e) => ItemError::Malformed(e.to_string()),
            },
            RemoteOutcome::NotFound => ItemError::NotFound,
            RemoteOutcome::TransportError(fault) => ItemError::Transport(fault.to_string()),
        };
        ItemResult::Failed { identifier: identifier.to_string(),
                             error }
    }
}

#[async_trait]
impl StageDefinition<RequestContext> for FetchStage {
    fn id(&self) -> &str {
        "fetch"
    }

    fn kind(&self) -> StageKind {
        StageKind::Fetch
    }

    async fn run(&self, ctx: &mut RequestContext) -> StageRunResult {
        let base_url = self.kind_base_url(ctx.mode);
        let outcomes = match self.aggregator.fetch_all(&base_url, &ctx.items).await {
            Ok(outcomes) => outcomes,
            Err(e) => return StageRunResult::failure(e.to_string()),
        };

        let mut results: Vec<ItemResult> =
            ctx.items.iter().zip(outcomes).map(|(id, outcome)| self.to_item(ctx.mode, id, outcome)).collect();

        if ctx.expanded && ctx.mode == Mode::Creature {
            let expansions = results.into_iter().map(|item| async move {
                                                    match item {
                                                        ItemResult::Record(r) => ItemResult::Record(self.expansion.expand_record(r).await),
                                                        failed => failed,
                                                    }
                                                });
            results = join_all(expansions).await;
        }

        let failed = results.iter().filter(|r| r.error().is_some()).count();
        if failed > 0 {
            warn!("request {}: {failed} of {} item(s) failed", ctx.request_id, results.len());
        }
        info!("request {}: fetched {} {} record(s)", ctx.request_id, results.len() - failed, ctx.mode);
        ctx.results = results;
        StageRunResult::Success
    }
}
