//! dex-core: motor de pipeline por etapas.
//!
//! El core no conoce el dominio: un `PipelineController<C>` empuja un
//! contexto mutable `C` a través de una lista ordenada de etapas
//! (`StageDefinition<C>`). Cada etapa puede cortar la cadena devolviendo
//! `StageRunResult::Failure`; el controlador se detiene inmediatamente y
//! reporta `TerminalState::Aborted`.
pub mod engine;
pub mod errors;
pub mod event;
pub mod stage;

pub use engine::{PipelineBuilder, PipelineController, PipelineRun, TerminalState};
pub use errors::CoreEngineError;
pub use event::{EventStore, InMemoryEventStore, PipelineEvent, PipelineEventKind};
pub use stage::{StageDefinition, StageKind, StageRunResult, StageStatus};
