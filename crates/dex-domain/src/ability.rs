use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::{EffectSelection, Fields};
use crate::render::join;
use crate::{DomainError, RecordKind, Reference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub id: u32,
    pub generation: String,
    pub effect: String,
    pub short_effect: String,
    /// Criaturas que pueden tener la habilidad (`pokemon[].pokemon`).
    pub creatures: Vec<Reference>,
}

impl Ability {
    /// Campos: `name`, `id`, `generation.name`,
    /// `effect_entries[<sel>].{effect,short_effect}`, `pokemon[].pokemon`.
    pub fn from_payload(payload: &Value, effects: &EffectSelection) -> Result<Self, DomainError> {
        let f = Fields::new(RecordKind::Ability, payload)?;
        let entry = f.effect_entry(effects)?;
        Ok(Ability { name: f.non_empty("name")?,
                     id: f.u32("id")?,
                     generation: f.nested_name("generation")?,
                     effect: f.entry_text(entry, "effect")?,
                     short_effect: f.entry_text(entry, "short_effect")?,
                     creatures: f.references("pokemon", "pokemon")? })
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Effect: {}", self.effect)?;
        writeln!(f, "Short effect: {}", self.short_effect)?;
        write!(f, "Pokemon: {}", join(self.creatures.iter().map(|r| r.name.as_str())))
    }
}
