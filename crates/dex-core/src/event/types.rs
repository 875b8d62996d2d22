//! Tipos de evento de una ejecución y estructura `PipelineEvent`.
//!
//! Cada `execute` del `PipelineController` emite eventos a un `EventStore`
//! append-only, agrupados por `run_id`. Sirven para auditar en qué etapa se
//! detuvo una petición sin inspeccionar el contexto.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineEventKind {
    /// Una etapa comenzó su ejecución. No implica éxito.
    StageStarted { stage_index: usize, stage_id: String },
    /// Una etapa terminó correctamente.
    StageFinished { stage_index: usize, stage_id: String },
    /// Una etapa terminó con fallo. El pipeline no continúa.
    StageFailed { stage_index: usize, stage_id: String, message: String },
    /// Todas las etapas terminaron correctamente.
    PipelineCompleted { stage_count: usize },
    /// Evento de cierre cuando una etapa cortó la cadena.
    PipelineAborted { stage_id: String, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineEvent {
    pub seq: u64, // orden de append dentro del run
    pub run_id: Uuid,
    pub kind: PipelineEventKind,
    pub ts: DateTime<Utc>,
}
