//! `Record` polimórfico y tabla de constructores por kind.
//!
//! El conjunto de kinds es cerrado, así que la fábrica es una tabla estática
//! de punteros a función indexada por `RecordKind`.
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::EffectSelection;
use crate::{Ability, Creature, DomainError, Move, RecordKind, Stat};

/// Capacidades comunes a todo registro materializado.
pub trait PokedexEntry: fmt::Display {
    fn name(&self) -> &str;
    fn id(&self) -> u32;
    fn kind(&self) -> RecordKind;

    /// Texto renderizado; función pura del estado actual.
    fn render(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Record {
    Creature(Creature),
    Ability(Ability),
    Move(Move),
    Stat(Stat),
}

impl Record {
    pub fn as_creature(&self) -> Option<&Creature> {
        match self {
            Record::Creature(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_ability(&self) -> Option<&Ability> {
        match self {
            Record::Ability(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_move(&self) -> Option<&Move> {
        match self {
            Record::Move(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_stat(&self) -> Option<&Stat> {
        match self {
            Record::Stat(s) => Some(s),
            _ => None,
        }
    }
}

impl PokedexEntry for Record {
    fn name(&self) -> &str {
        match self {
            Record::Creature(c) => &c.name,
            Record::Ability(a) => &a.name,
            Record::Move(m) => &m.name,
            Record::Stat(s) => &s.name,
        }
    }

    fn id(&self) -> u32 {
        match self {
            Record::Creature(c) => c.id,
            Record::Ability(a) => a.id,
            Record::Move(m) => m.id,
            Record::Stat(s) => s.id,
        }
    }

    fn kind(&self) -> RecordKind {
        match self {
            Record::Creature(_) => RecordKind::Creature,
            Record::Ability(_) => RecordKind::Ability,
            Record::Move(_) => RecordKind::Move,
            Record::Stat(_) => RecordKind::Stat,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Creature(c) => fmt::Display::fmt(c, f),
            Record::Ability(a) => fmt::Display::fmt(a, f),
            Record::Move(m) => fmt::Display::fmt(m, f),
            Record::Stat(s) => fmt::Display::fmt(s, f),
        }
    }
}

pub type RecordConstructor = fn(&Value, &EffectSelection) -> Result<Record, DomainError>;

fn creature_record(payload: &Value, _effects: &EffectSelection) -> Result<Record, DomainError> {
    Creature::from_payload(payload).map(Record::Creature)
}

fn ability_record(payload: &Value, effects: &EffectSelection) -> Result<Record, DomainError> {
    Ability::from_payload(payload, effects).map(Record::Ability)
}

fn move_record(payload: &Value, effects: &EffectSelection) -> Result<Record, DomainError> {
    Move::from_payload(payload, effects).map(Record::Move)
}

fn stat_record(payload: &Value, _effects: &EffectSelection) -> Result<Record, DomainError> {
    Stat::from_payload(payload).map(Record::Stat)
}

// Orden = RecordKind::index().
static CONSTRUCTORS: [RecordConstructor; 4] = [creature_record, ability_record, move_record, stat_record];

pub fn constructor_for(kind: RecordKind) -> RecordConstructor {
    CONSTRUCTORS[kind.index()]
}

/// Construye el registro de `kind` a partir de un payload decodificado.
pub fn construct(kind: RecordKind, payload: &Value, effects: &EffectSelection) -> Result<Record, DomainError> {
    constructor_for(kind)(payload, effects)
}
