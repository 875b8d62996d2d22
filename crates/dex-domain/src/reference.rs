//! Referencias embebidas y su resolución.
use serde::{Deserialize, Serialize};

/// Puntero embebido en un payload: nombre visible + URL de descarga.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub url: String,
}

impl Reference {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(),
               url: url.into() }
    }
}

/// Entrada de una lista de referencias de un `Creature`.
///
/// Antes de expandir toda entrada es `Reference`. La expansión la reemplaza
/// por `Record` o, si no se pudo resolver, por el centinela `Unavailable`
/// (que conserva la referencia original).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Linked<T> {
    Reference(Reference),
    Record(T),
    Unavailable { reference: Reference, reason: String },
}

impl<T> Linked<T> {
    pub fn is_reference(&self) -> bool {
        matches!(self, Linked::Reference(_))
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Linked::Record(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Linked::Unavailable { .. })
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            Linked::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Referencia sin resolver o la conservada por el centinela.
    pub fn reference(&self) -> Option<&Reference> {
        match self {
            Linked::Reference(r) | Linked::Unavailable { reference: r, .. } => Some(r),
            Linked::Record(_) => None,
        }
    }
}
