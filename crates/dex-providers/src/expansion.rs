//! Expansión de un `Creature`: resuelve sus referencias a stats,
//! habilidades y movimientos en registros tipados.
//!
//! Cada clase de referencia es un lote independiente del agregador; los tres
//! lotes corren a la vez (`tokio::join!`) y cada uno es concurrente por
//! dentro. Una referencia que no se resuelve se degrada a centinela
//! `Linked::Unavailable`; la expansión en su conjunto nunca falla.
use log::{debug, warn};
use serde_json::Value;

use dex_domain::{Ability, Creature, DomainError, EffectSelection, Linked, Move, Record, Reference, Stat};

use crate::aggregator::FanOutAggregator;
use crate::outcome::RemoteOutcome;

type Build<T> = fn(&Value, &EffectSelection) -> Result<T, DomainError>;

// Los stats no llevan texto de efecto.
fn stat_from_payload(payload: &Value, _: &EffectSelection) -> Result<Stat, DomainError> {
    Stat::from_payload(payload)
}

#[derive(Debug, Clone)]
pub struct ExpansionEngine {
    aggregator: FanOutAggregator,
    effects: EffectSelection,
}

impl ExpansionEngine {
    pub fn new(aggregator: FanOutAggregator, effects: EffectSelection) -> Self {
        Self { aggregator, effects }
    }

    /// Expande un `Creature`. Una criatura ya expandida se devuelve intacta.
    pub async fn expand(&self, mut creature: Creature) -> Creature {
        if creature.is_expanded() {
            return creature;
        }
        let stat_refs = creature.stat_references();
        let ability_refs = creature.ability_references();
        let move_refs = creature.move_references();

        let (stats, abilities, moves) =
            tokio::join!(self.resolve_class(&stat_refs, stat_from_payload),
                         self.resolve_class(&ability_refs, Ability::from_payload),
                         self.resolve_class(&move_refs, Move::from_payload));

        let unavailable = stats.iter().filter(|s| s.is_unavailable()).count()
                          + abilities.iter().filter(|a| a.is_unavailable()).count()
                          + moves.iter().filter(|m| m.is_unavailable()).count();
        if unavailable > 0 {
            warn!("'{}' expanded with {unavailable} unavailable reference(s)", creature.name);
        } else {
            debug!("'{}' fully expanded", creature.name);
        }

        // Las tres listas salen de `*_references()` de esta misma criatura,
        // por lo que las longitudes coinciden.
        if let Err(e) = creature.apply_expansion(stats, abilities, moves) {
            warn!("could not apply expansion to '{}': {e}", creature.name);
        }
        creature
    }

    /// Sólo `Record::Creature` se expande; el resto pasa sin cambios.
    pub async fn expand_record(&self, record: Record) -> Record {
        match record {
            Record::Creature(c) => Record::Creature(self.expand(c).await),
            other => other,
        }
    }

    async fn resolve_class<T>(&self, refs: &[Reference], build: Build<T>) -> Vec<Linked<T>> {
        let urls: Vec<String> = refs.iter().map(|r| r.url.clone()).collect();
        match self.aggregator.fetch_urls(&urls).await {
            Ok(outcomes) => refs.iter().zip(outcomes).map(|(r, o)| self.resolve_one(r, o, build)).collect(),
            Err(e) => refs.iter()
                          .map(|r| Linked::Unavailable { reference: r.clone(),
                                                         reason: e.to_string() })
                          .collect(),
        }
    }

    fn resolve_one<T>(&self, reference: &Reference, outcome: RemoteOutcome, build: Build<T>) -> Linked<T> {
        let reason = match outcome {
            RemoteOutcome::Found(payload) => match build(&payload, &self.effects) {
                Ok(record) => return Linked::Record(record),
                Err(e) => e.to_string(),
            },
            RemoteOutcome::NotFound => "not found".to_string(),
            RemoteOutcome::TransportError(fault) => format!("transport error: {fault}"),
        };
        Linked::Unavailable { reference: reference.clone(),
                              reason }
    }
}
