//! Creature: el único kind con referencias expandibles.
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::Fields;
use crate::render::{indent, join};
use crate::{Ability, DomainError, Linked, Move, RecordKind, Reference, Stat};

/// Estadística base de una criatura: valor + stat (referencia o resuelto).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_value: u32,
    pub stat: Linked<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub id: u32,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<Reference>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<Linked<Ability>>,
    pub moves: Vec<Linked<Move>>,
    expanded: bool,
}

impl Creature {
    /// Campos: `name`, `id`, `height`, `weight`, `types[].type`,
    /// `stats[].{base_stat,stat}`, `abilities[].ability`, `moves[].move`.
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        let f = Fields::new(RecordKind::Creature, payload)?;
        let stats = f.list("stats")?
                     .iter()
                     .enumerate()
                     .map(|(i, item)| -> Result<StatEntry, DomainError> {
                         let base_value = item.get("base_stat")
                                              .and_then(Value::as_u64)
                                              .and_then(|n| u32::try_from(n).ok())
                                              .ok_or_else(|| {
                                                  DomainError::malformed(RecordKind::Creature,
                                                                         format!("field `stats[{i}].base_stat` is missing or not an unsigned integer"))
                                              })?;
                         let reference = f.reference_at(item, &format!("stats[{i}].stat"), "stat")?;
                         Ok(StatEntry { base_value,
                                        stat: Linked::Reference(reference) })
                     })
                     .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Creature { name: f.non_empty("name")?,
                      id: f.u32("id")?,
                      height: f.u32("height")?,
                      weight: f.u32("weight")?,
                      types: f.references("types", "type")?,
                      stats,
                      abilities: f.references("abilities", "ability")?.into_iter().map(Linked::Reference).collect(),
                      moves: f.references("moves", "move")?.into_iter().map(Linked::Reference).collect(),
                      expanded: false })
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Referencias de stats en orden (incluye las conservadas por centinelas).
    pub fn stat_references(&self) -> Vec<Reference> {
        self.stats.iter().filter_map(|s| s.stat.reference().cloned()).collect()
    }

    pub fn ability_references(&self) -> Vec<Reference> {
        self.abilities.iter().filter_map(|a| a.reference().cloned()).collect()
    }

    pub fn move_references(&self) -> Vec<Reference> {
        self.moves.iter().filter_map(|m| m.reference().cloned()).collect()
    }

    /// Reemplaza in-place las tres listas por sus versiones resueltas y marca
    /// la criatura como expandida.
    ///
    /// Las longitudes deben coincidir con las actuales: la expansión cambia el
    /// tipo de cada entrada, nunca la cantidad.
    pub fn apply_expansion(&mut self,
                           stats: Vec<Linked<Stat>>,
                           abilities: Vec<Linked<Ability>>,
                           moves: Vec<Linked<Move>>)
                           -> Result<(), DomainError> {
        for (label, have, got) in [("stats", self.stats.len(), stats.len()),
                                   ("abilities", self.abilities.len(), abilities.len()),
                                   ("moves", self.moves.len(), moves.len())]
        {
            if have != got {
                return Err(DomainError::ValidationError(format!("expansion of {label} for '{}' returned {got} entries, expected {have}",
                                                                self.name)));
            }
        }
        for (entry, stat) in self.stats.iter_mut().zip(stats) {
            entry.stat = stat;
        }
        self.abilities = abilities;
        self.moves = moves;
        self.expanded = true;
        Ok(())
    }

    fn fmt_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Weight: {}", self.weight)?;
        writeln!(f, "Types: {}", join(self.types.iter().map(|t| t.name.as_str())))
    }

    fn fmt_compact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)?;
        let stats: Vec<String> =
            self.stats.iter().map(|s| format!("{}: {}", linked_name(&s.stat, |st| &st.name), s.base_value)).collect();
        writeln!(f, "Stats: {}", join(stats.iter().map(String::as_str)))?;
        writeln!(f, "Abilities: {}", join(self.abilities.iter().map(|a| linked_name(a, |ab| &ab.name))))?;
        write!(f, "Moves: {}", join(self.moves.iter().map(|m| linked_name(m, |mv| &mv.name))))
    }

    fn fmt_expanded(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)?;
        writeln!(f, "Stats:")?;
        for entry in &self.stats {
            let block = match &entry.stat {
                Linked::Record(stat) => format!("{stat}\nBase value: {}", entry.base_value),
                other => format!("{}\nBase value: {}", sentinel_line(other), entry.base_value),
            };
            writeln!(f, "{}\n", indent(&block))?;
        }
        writeln!(f, "Abilities:")?;
        write_linked_blocks(f, &self.abilities)?;
        writeln!(f, "Moves:")?;
        write_linked_blocks(f, &self.moves)
    }
}

fn linked_name<'a, T>(linked: &'a Linked<T>, name: impl Fn(&'a T) -> &'a String) -> &'a str {
    match linked {
        Linked::Record(r) => name(r).as_str(),
        Linked::Reference(r) | Linked::Unavailable { reference: r, .. } => r.name.as_str(),
    }
}

fn sentinel_line<T>(linked: &Linked<T>) -> String {
    match linked {
        Linked::Unavailable { reference, reason } => format!("{}: unavailable ({reason})", reference.name),
        Linked::Reference(reference) => format!("{}: not resolved", reference.name),
        Linked::Record(_) => String::new(),
    }
}

fn write_linked_blocks<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[Linked<T>]) -> fmt::Result {
    for item in items {
        let block = match item {
            Linked::Record(r) => r.to_string(),
            other => sentinel_line(other),
        };
        writeln!(f, "{}\n", indent(&block))?;
    }
    Ok(())
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expanded { self.fmt_expanded(f) } else { self.fmt_compact(f) }
    }
}
