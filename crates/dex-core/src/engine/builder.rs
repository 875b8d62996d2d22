//! Builder para `PipelineController`.
//!
//! Reemplaza el encadenamiento "cada handler apunta al siguiente" por una
//! lista explícita y ordenada de etapas. El orden de `add_stage` es el orden
//! de ejecución.
//!
//! ```ignore
//! let controller = PipelineController::builder()
//!     .add_stage(ValidateStage)
//!     .add_stage(NormalizeStage)
//!     .build()?;
//! ```

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::engine::PipelineController;
use crate::errors::CoreEngineError;
use crate::event::{EventStore, InMemoryEventStore};
use crate::stage::StageDefinition;

pub struct PipelineBuilder<C: Send, E: EventStore = InMemoryEventStore> {
    event_store: E,
    /// Lista de etapas en orden de ejecución.
    stages: Vec<Box<dyn StageDefinition<C>>>,
    _ctx: PhantomData<fn(&mut C)>,
}

impl<C: Send> PipelineBuilder<C, InMemoryEventStore> {
    pub fn new() -> Self {
        Self { event_store: InMemoryEventStore::default(),
               stages: Vec::new(),
               _ctx: PhantomData }
    }
}

impl<C: Send> Default for PipelineBuilder<C, InMemoryEventStore> {
    fn default() -> Self { Self::new() }
}

impl<C: Send, E: EventStore> PipelineBuilder<C, E> {
    /// Sustituye la store de eventos conservando las etapas ya añadidas.
    pub fn with_event_store<E2: EventStore>(self, event_store: E2) -> PipelineBuilder<C, E2> {
        PipelineBuilder { event_store,
                          stages: self.stages,
                          _ctx: PhantomData }
    }

    /// Añade la siguiente etapa de la cadena.
    #[inline]
    pub fn add_stage<S>(mut self, stage: S) -> Self
        where S: StageDefinition<C> + 'static
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Construye el controlador. Falla si no hay etapas o si un id se repite.
    pub fn build(self) -> Result<PipelineController<C, E>, CoreEngineError> {
        if self.stages.is_empty() {
            return Err(CoreEngineError::EmptyPipeline);
        }
        let mut seen = HashSet::new();
        for stage in &self.stages {
            if !seen.insert(stage.id().to_string()) {
                return Err(CoreEngineError::DuplicateStage(stage.id().to_string()));
            }
        }
        Ok(PipelineController::from_parts(self.event_store, self.stages))
    }
}
