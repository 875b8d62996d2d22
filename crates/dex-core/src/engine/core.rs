//! Core PipelineController implementation

use std::fmt;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::engine::{PipelineBuilder, PipelineRun, TerminalState};
use crate::errors::CoreEngineError;
use crate::event::{EventStore, InMemoryEventStore, PipelineEvent, PipelineEventKind};
use crate::stage::{StageDefinition, StageRunResult, StageStatus};

/// Controlador de la cadena de etapas.
///
/// Ejecuta las etapas estrictamente en orden sobre un único contexto mutable.
/// La primera etapa que devuelve `Failure` termina la ejecución con
/// `TerminalState::Aborted`; ninguna etapa posterior llega a correr.
pub struct PipelineController<C: Send, E: EventStore = InMemoryEventStore> {
    event_store: E,
    stages: Vec<Box<dyn StageDefinition<C>>>,
}

impl<C: Send> PipelineController<C, InMemoryEventStore> {
    /// Crea un builder con store de eventos en memoria.
    #[inline]
    pub fn builder() -> PipelineBuilder<C, InMemoryEventStore> {
        PipelineBuilder::new()
    }
}

impl<C: Send, E: EventStore> PipelineController<C, E> {
    pub(crate) fn from_parts(event_store: E, stages: Vec<Box<dyn StageDefinition<C>>>) -> Self {
        Self { event_store, stages }
    }

    pub fn stage_ids(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    pub fn events_for(&self, run_id: Uuid) -> Vec<PipelineEvent> {
        self.event_store.list(run_id)
    }

    /// Ejecuta la cadena completa sobre `ctx`.
    pub async fn execute(&mut self, ctx: &mut C) -> PipelineRun {
        let run_id = Uuid::new_v4();
        let mut statuses: Vec<(String, StageStatus)> =
            self.stages.iter().map(|s| (s.id().to_string(), StageStatus::Pending)).collect();

        for (stage_index, stage) in self.stages.iter().enumerate() {
            let stage_id = stage.id().to_string();
            statuses[stage_index].1 = StageStatus::Running;
            self.event_store.append_kind(run_id,
                                         PipelineEventKind::StageStarted { stage_index,
                                                                           stage_id: stage_id.clone() });
            debug!("[{run_id}] stage '{}' ({:?}) started", stage.name(), stage.kind());

            match stage.run(ctx).await {
                StageRunResult::Success => {
                    statuses[stage_index].1 = StageStatus::FinishedOk;
                    self.event_store.append_kind(run_id, PipelineEventKind::StageFinished { stage_index, stage_id });
                }
                StageRunResult::Failure { message } => {
                    statuses[stage_index].1 = StageStatus::Failed;
                    warn!("[{run_id}] stage '{}' aborted the pipeline: {message}", stage.name());
                    self.event_store.append_kind(run_id,
                                                 PipelineEventKind::StageFailed { stage_index,
                                                                                  stage_id: stage_id.clone(),
                                                                                  message: message.clone() });
                    self.event_store.append_kind(run_id,
                                                 PipelineEventKind::PipelineAborted { stage_id: stage_id.clone(),
                                                                                      message: message.clone() });
                    return PipelineRun { run_id,
                                         state: TerminalState::Aborted { stage: stage_id, message },
                                         statuses };
                }
            }
        }

        self.event_store.append_kind(run_id, PipelineEventKind::PipelineCompleted { stage_count: self.stages.len() });
        info!("[{run_id}] pipeline completed ({} stages)", self.stages.len());
        PipelineRun { run_id,
                      state: TerminalState::Completed,
                      statuses }
    }

    /// Ejecuta una sola etapa por id, sin registrar eventos.
    pub async fn run_stage(&self, stage_id: &str, ctx: &mut C) -> Result<StageRunResult, CoreEngineError> {
        let stage = self.stages
                        .iter()
                        .find(|s| s.id() == stage_id)
                        .ok_or_else(|| CoreEngineError::UnknownStage(stage_id.to_string()))?;
        Ok(stage.run(ctx).await)
    }
}

impl<C: Send, E: EventStore> fmt::Debug for PipelineController<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineController").field("stages", &self.stage_ids()).finish()
    }
}
