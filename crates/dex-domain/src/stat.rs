use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::Fields;
use crate::{DomainError, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub id: u32,
    pub is_battle_only: bool,
}

impl Stat {
    /// Campos: `name`, `id`, `is_battle_only`.
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        let f = Fields::new(RecordKind::Stat, payload)?;
        Ok(Stat { name: f.non_empty("name")?,
                  id: f.u32("id")?,
                  is_battle_only: f.bool("is_battle_only")? })
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Id: {}", self.id)?;
        write!(f, "Battle only: {}", self.is_battle_only)
    }
}
