//! Extracción de campos desde payloads JSON poco tipados.
//!
//! Las rutas de campo (por ejemplo `generation.name` o
//! `moves[].move.{name,url}`) reflejan el esquema del catálogo remoto; cada
//! acceso valida presencia y forma y produce `MalformedPayload` nombrando la
//! ruta que falló.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{DomainError, RecordKind, Reference};

pub(crate) struct Fields<'a> {
    kind: RecordKind,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(kind: RecordKind, payload: &'a Value) -> Result<Self, DomainError> {
        match payload {
            Value::Object(map) if map.is_empty() => Err(DomainError::malformed(kind, "empty payload")),
            Value::Object(map) => Ok(Self { kind, map }),
            other => Err(DomainError::malformed(kind, format!("expected a JSON object, got {}", type_name(other)))),
        }
    }

    fn wrong(&self, path: &str, expected: &str) -> DomainError {
        DomainError::malformed(self.kind, format!("field `{path}` is missing or not {expected}"))
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub(crate) fn string(&self, key: &str) -> Result<String, DomainError> {
        self.get(key).and_then(Value::as_str).map(str::to_string).ok_or_else(|| self.wrong(key, "a string"))
    }

    /// Igual que `string` pero rechaza cadenas vacías.
    pub(crate) fn non_empty(&self, key: &str) -> Result<String, DomainError> {
        let s = self.string(key)?;
        if s.trim().is_empty() {
            return Err(self.wrong(key, "a non-empty string"));
        }
        Ok(s)
    }

    pub(crate) fn u32(&self, key: &str) -> Result<u32, DomainError> {
        self.get(key).and_then(as_u32).ok_or_else(|| self.wrong(key, "an unsigned integer"))
    }

    /// `null` o ausente se leen como `None`; cualquier otro tipo es error.
    pub(crate) fn opt_u32(&self, key: &str) -> Result<Option<u32>, DomainError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => as_u32(v).map(Some).ok_or_else(|| self.wrong(key, "an unsigned integer or null")),
        }
    }

    pub(crate) fn bool(&self, key: &str) -> Result<bool, DomainError> {
        self.get(key).and_then(Value::as_bool).ok_or_else(|| self.wrong(key, "a boolean"))
    }

    /// Lee `<key>.name`.
    pub(crate) fn nested_name(&self, key: &str) -> Result<String, DomainError> {
        self.get(key)
            .and_then(|v| v.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| self.wrong(&format!("{key}.name"), "a string"))
    }

    pub(crate) fn list(&self, key: &str) -> Result<&'a Vec<Value>, DomainError> {
        self.get(key).and_then(Value::as_array).ok_or_else(|| self.wrong(key, "a list"))
    }

    /// Lee `<list_key>[].<inner_key>.{name,url}` preservando el orden.
    pub(crate) fn references(&self, list_key: &str, inner_key: &str) -> Result<Vec<Reference>, DomainError> {
        self.list(list_key)?
            .iter()
            .enumerate()
            .map(|(i, item)| self.reference_at(item, &format!("{list_key}[{i}].{inner_key}"), inner_key))
            .collect()
    }

    pub(crate) fn reference_at(&self, item: &Value, path: &str, inner_key: &str) -> Result<Reference, DomainError> {
        let inner = item.get(inner_key).ok_or_else(|| self.wrong(path, "an object"))?;
        let name = inner.get("name").and_then(Value::as_str).ok_or_else(|| self.wrong(&format!("{path}.name"), "a string"))?;
        let url = inner.get("url").and_then(Value::as_str).ok_or_else(|| self.wrong(&format!("{path}.url"), "a string"))?;
        Ok(Reference::new(name, url))
    }

    /// Selecciona una entrada de `effect_entries` según la política.
    pub(crate) fn effect_entry(&self, selection: &EffectSelection) -> Result<&'a Value, DomainError> {
        let entries = self.list("effect_entries")?;
        selection.select(entries).ok_or_else(|| {
            DomainError::malformed(self.kind,
                                   format!("effect_entries ({} entries) has no entry for {selection}", entries.len()))
        })
    }

    pub(crate) fn entry_text(&self, entry: &Value, key: &str) -> Result<String, DomainError> {
        entry.get(key)
             .and_then(Value::as_str)
             .map(str::to_string)
             .ok_or_else(|| self.wrong(&format!("effect_entries[].{key}"), "a string"))
    }
}

fn as_u32(v: &Value) -> Option<u32> {
    v.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Política para elegir la entrada de `effect_entries` de Ability y Move.
///
/// Por defecto toma la primera entrada cuyo `language.name` coincide con el
/// locale `en`. `Index` fija una posición concreta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectSelection {
    Locale(String),
    Index(usize),
}

impl Default for EffectSelection {
    fn default() -> Self {
        EffectSelection::Locale("en".to_string())
    }
}

impl EffectSelection {
    pub fn select<'v>(&self, entries: &'v [Value]) -> Option<&'v Value> {
        match self {
            EffectSelection::Index(i) => entries.get(*i),
            EffectSelection::Locale(locale) => entries.iter().find(|e| {
                e.get("language").and_then(|l| l.get("name")).and_then(Value::as_str) == Some(locale.as_str())
            }),
        }
    }
}

impl std::fmt::Display for EffectSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectSelection::Locale(l) => write!(f, "locale '{l}'"),
            EffectSelection::Index(i) => write!(f, "index {i}"),
        }
    }
}
