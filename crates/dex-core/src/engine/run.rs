use uuid::Uuid;

use crate::stage::StageStatus;

/// Estado terminal de una ejecución.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalState {
    /// Todas las etapas (incluida la de salida) terminaron correctamente.
    Completed,
    /// Una etapa cortó la cadena; las posteriores no se ejecutaron.
    Aborted { stage: String, message: String },
}

/// Resumen de una ejecución del pipeline.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub run_id: Uuid,
    pub state: TerminalState,
    /// Estado final de cada etapa, en el orden del pipeline.
    pub statuses: Vec<(String, StageStatus)>,
}

impl PipelineRun {
    pub fn is_completed(&self) -> bool {
        self.state == TerminalState::Completed
    }

    pub fn status_of(&self, stage_id: &str) -> Option<StageStatus> {
        self.statuses.iter().find(|(id, _)| id == stage_id).map(|(_, s)| *s)
    }

    /// Mensaje del fallo, si lo hubo.
    pub fn abort_message(&self) -> Option<&str> {
        match &self.state {
            TerminalState::Aborted { message, .. } => Some(message),
            TerminalState::Completed => None,
        }
    }
}
