// dex-domain library entry point
pub mod ability;
pub mod creature;
pub mod error;
pub mod kind;
pub mod moves;
mod payload;
pub mod record;
pub mod reference;
mod render;
pub mod stat;

pub use ability::Ability;
pub use creature::{Creature, StatEntry};
pub use error::DomainError;
pub use kind::{Mode, RecordKind};
pub use moves::Move;
pub use payload::EffectSelection;
pub use record::{construct, constructor_for, PokedexEntry, Record, RecordConstructor};
pub use reference::{Linked, Reference};
pub use stat::Stat;
