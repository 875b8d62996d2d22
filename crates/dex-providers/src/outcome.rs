//! Resultado de un fetch remoto.
use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// No se pudo abrir la conexión (DNS, conexión rechazada).
    Connect,
    Timeout,
    /// Status HTTP distinto de 200/404.
    Status(u16),
    /// Cuerpo recibido pero no decodificable como JSON.
    Decode,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFault {
    pub kind: FaultKind,
    pub detail: String,
}

impl TransportFault {
    pub fn new(kind: FaultKind, detail: impl Into<String>) -> Self {
        Self { kind,
               detail: detail.into() }
    }
}

impl fmt::Display for TransportFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)
    }
}

/// Un fetch termina en exactamente una de estas variantes; nunca mezcla
/// payload y error.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteOutcome {
    Found(Value),
    NotFound,
    TransportError(TransportFault),
}

impl RemoteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RemoteOutcome::Found(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            RemoteOutcome::Found(v) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn is_connect_failure(&self) -> bool {
        matches!(self, RemoteOutcome::TransportError(TransportFault { kind: FaultKind::Connect, .. }))
    }
}
