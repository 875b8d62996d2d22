use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::{EffectSelection, Fields};
use crate::render::or_na;
use crate::{DomainError, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub id: u32,
    pub generation: String,
    /// `None` cuando el catálogo envía `null` (movimientos de estado).
    pub accuracy: Option<u32>,
    pub power: Option<u32>,
    pub pp: u32,
    pub damage_class: String,
    pub short_effect: String,
}

impl Move {
    /// Campos: `name`, `id`, `generation.name`, `accuracy`, `power`, `pp`,
    /// `damage_class.name`, `effect_entries[<sel>].short_effect`.
    pub fn from_payload(payload: &Value, effects: &EffectSelection) -> Result<Self, DomainError> {
        let f = Fields::new(RecordKind::Move, payload)?;
        let entry = f.effect_entry(effects)?;
        Ok(Move { name: f.non_empty("name")?,
                  id: f.u32("id")?,
                  generation: f.nested_name("generation")?,
                  accuracy: f.opt_u32("accuracy")?,
                  power: f.opt_u32("power")?,
                  pp: f.u32("pp")?,
                  damage_class: f.nested_name("damage_class")?,
                  short_effect: f.entry_text(entry, "short_effect")? })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Accuracy: {}", or_na(self.accuracy))?;
        writeln!(f, "Power: {}", or_na(self.power))?;
        writeln!(f, "PP: {}", self.pp)?;
        writeln!(f, "Damage class: {}", self.damage_class)?;
        write!(f, "Short effect: {}", self.short_effect)
    }
}
