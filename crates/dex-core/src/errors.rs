//! Errores específicos del core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreEngineError {
    #[error("pipeline has no stages")] EmptyPipeline,
    #[error("unknown stage: {0}")] UnknownStage(String),
    #[error("duplicate stage id: {0}")] DuplicateStage(String),
}
