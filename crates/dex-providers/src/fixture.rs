//! `RemoteFetcher` en memoria.
//!
//! Responde por URL exacta desde una tabla de rutas; una URL sin ruta
//! responde `NotFound`, igual que el catálogo real ante un 404. Registra cada
//! llamada y el máximo de fetches simultáneos observados.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::fetcher::RemoteFetcher;
use crate::outcome::{FaultKind, RemoteOutcome, TransportFault};

#[derive(Debug, Default)]
pub struct FixtureFetcher {
    routes: HashMap<String, RemoteOutcome>,
    delays: HashMap<String, Duration>,
    unreachable: bool,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found(mut self, url: impl Into<String>, payload: Value) -> Self {
        self.routes.insert(url.into(), RemoteOutcome::Found(payload));
        self
    }

    pub fn not_found(mut self, url: impl Into<String>) -> Self {
        self.routes.insert(url.into(), RemoteOutcome::NotFound);
        self
    }

    pub fn transport_error(mut self, url: impl Into<String>, detail: impl Into<String>) -> Self {
        self.routes.insert(url.into(), RemoteOutcome::TransportError(TransportFault::new(FaultKind::Other, detail)));
        self
    }

    /// Retrasa la respuesta de `url` (sirve para desordenar las finalizaciones).
    pub fn delayed(mut self, url: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(url.into(), delay);
        self
    }

    /// Toda llamada falla como si no hubiera red.
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Mini catálogo con la forma del servicio real bajo `root`
    /// (p. ej. `https://pokeapi.co/api/v2`): la criatura 25 con 6 stats,
    /// 2 habilidades y 4 movimientos, y todos los sub-registros que referencia,
    /// más los movimientos 1 y 2.
    pub fn sample_catalog(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        let stat_names = ["hp", "attack", "defense", "special-attack", "special-defense", "speed"];
        let base_values = [35, 55, 40, 50, 50, 90];
        let abilities = [(9, "static"), (31, "lightning-rod")];
        let moves = [(5, "mega-punch"), (6, "pay-day"), (7, "thunder-punch"), (8, "ice-punch")];

        let creature = json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [{"slot": 1, "type": {"name": "electric", "url": format!("{root}/type/13/")}}],
            "stats": stat_names.iter().zip(base_values).enumerate().map(|(i, (name, base))| json!({
                "base_stat": base, "effort": 0, "stat": {"name": name, "url": format!("{root}/stat/{}/", i + 1)}
            })).collect::<Vec<_>>(),
            "abilities": abilities.iter().enumerate().map(|(slot, (id, name))| json!({
                "is_hidden": slot == 1, "slot": slot + 1, "ability": {"name": name, "url": format!("{root}/ability/{id}/")}
            })).collect::<Vec<_>>(),
            "moves": moves.iter().map(|(id, name)| json!({
                "move": {"name": name, "url": format!("{root}/move/{id}/")}, "version_group_details": []
            })).collect::<Vec<_>>(),
        });

        let mut fixture = Self::new().found(format!("{root}/pokemon/25"), creature.clone())
                                     .found(format!("{root}/pokemon/pikachu"), creature);
        for (i, name) in stat_names.iter().enumerate() {
            fixture = fixture.found(format!("{root}/stat/{}/", i + 1), stat_payload(i as u32 + 1, name));
        }
        for (id, name) in abilities {
            fixture = fixture.found(format!("{root}/ability/{id}/"), ability_payload(id, name, root));
        }
        for (id, name) in moves {
            fixture = fixture.found(format!("{root}/move/{id}/"), move_payload(id, name, Some(75)));
        }
        fixture.found(format!("{root}/move/1"), move_payload(1, "pound", Some(40)))
               .found(format!("{root}/move/2"), move_payload(2, "karate-chop", Some(50)))
               .found(format!("{root}/ability/9"), ability_payload(9, "static", root))
    }
}

pub fn stat_payload(id: u32, name: &str) -> Value {
    json!({"id": id, "name": name, "is_battle_only": false, "game_index": id})
}

pub fn move_payload(id: u32, name: &str, power: Option<u32>) -> Value {
    json!({
        "id": id,
        "name": name,
        "accuracy": 100,
        "power": power,
        "pp": 35,
        "damage_class": {"name": "physical", "url": "https://pokeapi.co/api/v2/move-damage-class/2/"},
        "generation": {"name": "generation-i", "url": "https://pokeapi.co/api/v2/generation/1/"},
        "effect_entries": [{
            "effect": "Inflicts regular damage.",
            "short_effect": "Inflicts regular damage with no additional effect.",
            "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}
        }]
    })
}

pub fn ability_payload(id: u32, name: &str, root: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "generation": {"name": "generation-iii", "url": format!("{root}/generation/3/")},
        "effect_entries": [
            {"effect": "Kann bei Berührung paralysieren.", "short_effect": "Paralyse bei Berührung.", "language": {"name": "de"}},
            {"effect": "Whenever a move makes contact, the attacker may be paralyzed.",
             "short_effect": "Has a 30% chance of paralyzing attacking Pokémon on contact.",
             "language": {"name": "en"}}
        ],
        "pokemon": [
            {"is_hidden": false, "slot": 1, "pokemon": {"name": "pikachu", "url": format!("{root}/pokemon/25/")}}
        ]
    })
}

#[async_trait]
impl RemoteFetcher for FixtureFetcher {
    async fn fetch(&self, url: &str) -> RemoteOutcome {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        } else {
            tokio::task::yield_now().await;
        }

        let outcome = if self.unreachable {
            RemoteOutcome::TransportError(TransportFault::new(FaultKind::Connect, format!("connection refused: {url}")))
        } else {
            self.routes.get(url).cloned().unwrap_or(RemoteOutcome::NotFound)
        };
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}
