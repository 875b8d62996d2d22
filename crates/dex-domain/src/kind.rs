//! Kinds de registro y modos de petición.
//!
//! `RecordKind` cubre todo lo que se puede materializar (incluido `Stat`, que
//! sólo aparece durante la expansión). `Mode` es el subconjunto que un usuario
//! puede pedir directamente.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Creature,
    Ability,
    Move,
    Stat,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [RecordKind::Creature, RecordKind::Ability, RecordKind::Move, RecordKind::Stat];

    /// Segmento de ruta del catálogo remoto (`.../api/v2/<endpoint>/`).
    pub const fn endpoint(self) -> &'static str {
        match self {
            RecordKind::Creature => "pokemon",
            RecordKind::Ability => "ability",
            RecordKind::Move => "move",
            RecordKind::Stat => "stat",
        }
    }

    /// Posición en la tabla de constructores.
    pub(crate) const fn index(self) -> usize {
        match self {
            RecordKind::Creature => 0,
            RecordKind::Ability => 1,
            RecordKind::Move => 2,
            RecordKind::Stat => 3,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Modo de una petición.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Creature,
    Ability,
    Move,
}

impl Mode {
    pub const fn record_kind(self) -> RecordKind {
        match self {
            Mode::Creature => RecordKind::Creature,
            Mode::Ability => RecordKind::Ability,
            Mode::Move => RecordKind::Move,
        }
    }

    pub const fn endpoint(self) -> &'static str {
        self.record_kind().endpoint()
    }
}

impl FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pokemon" => Ok(Mode::Creature),
            "ability" => Ok(Mode::Ability),
            "move" => Ok(Mode::Move),
            other => Err(DomainError::ValidationError(format!("unknown mode '{other}' (expected pokemon, ability or move)"))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}
