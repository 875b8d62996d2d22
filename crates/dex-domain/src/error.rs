use thiserror::Error;

use crate::kind::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// El payload remoto no tiene la forma esperada para el kind.
    #[error("malformed {kind} payload: {reason}")]
    MalformedPayload { kind: RecordKind, reason: String },

    #[error("{0}")]
    ValidationError(String),
}

impl DomainError {
    pub fn malformed(kind: RecordKind, reason: impl Into<String>) -> Self {
        DomainError::MalformedPayload { kind, reason: reason.into() }
    }
}
