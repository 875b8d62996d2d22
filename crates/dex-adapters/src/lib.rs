//! dex-adapters: etapas del pipeline de consulta sobre `RequestContext`.
//!
//! Este crate conecta el motor neutral (`dex-core`) con el dominio y los
//! providers:
//! - `RequestContext`: el contexto mutable que recorre la cadena.
//! - Etapas `validate → normalize → fetch → render`, cada una con su
//!   colaborador expuesto como función libre para poder probarlo aislado.
//! - `build_controller`: arma la cadena en el orden fijo.

pub mod context;
pub mod steps;

use std::sync::Arc;

use dex_core::{CoreEngineError, PipelineController};
use dex_domain::EffectSelection;
use dex_providers::{ExpansionEngine, FanOutAggregator, RemoteFetcher};

pub use context::{ItemError, ItemResult, OutputTarget, RequestContext};
use steps::{FetchStage, NormalizeStage, RenderStage, ValidateStage};

/// Construye el pipeline `validate → normalize → fetch → render`.
///
/// `api_root` es la raíz del catálogo (p. ej. `https://pokeapi.co/api/v2`);
/// la etapa de fetch le agrega `/<kind>/` según el modo de la petición.
pub fn build_controller(fetcher: Arc<dyn RemoteFetcher>,
                        api_root: impl Into<String>,
                        effects: EffectSelection)
                        -> Result<PipelineController<RequestContext>, CoreEngineError> {
    let aggregator = FanOutAggregator::new(fetcher);
    let expansion = ExpansionEngine::new(aggregator.clone(), effects.clone());
    PipelineController::builder().add_stage(ValidateStage)
                                 .add_stage(NormalizeStage)
                                 .add_stage(FetchStage::new(aggregator, expansion, api_root, effects))
                                 .add_stage(RenderStage)
                                 .build()
}
