//! Configuración central de la aplicación.
//! Carga variables de entorno (.env incluido) y expone una instancia global
//! perezosa (`CONFIG`) más `AppConfig::from_env` / `from_lookup` para tests.
use std::env;
use std::time::Duration;

use dex_domain::EffectSelection;
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EFFECT_LOCALE: &str = "en";
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Raíz del catálogo; las URL por tipo son `<api_base>/<kind>/`.
    pub api_base: String,
    /// Timeout de transporte para una petición individual.
    pub http_timeout: Duration,
    /// Qué entrada de `effect_entries` usan Ability y Move.
    pub effects: EffectSelection,
    /// Filtro de logs cuando `RUST_LOG` no está definido.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string(),
               http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
               effects: EffectSelection::Locale(DEFAULT_EFFECT_LOCALE.to_string()),
               log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso (tras cargar `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base = value("POKEDEX_API_BASE").map(|v| v.trim_end_matches('/').to_string())
                                                .unwrap_or(defaults.api_base);

        let http_timeout = match value("POKEDEX_HTTP_TIMEOUT_SECS") {
            Some(raw) => match parse_number("POKEDEX_HTTP_TIMEOUT_SECS", &raw)? {
                0 => return Err(ConfigError::InvalidNumber { key: "POKEDEX_HTTP_TIMEOUT_SECS",
                                                             value: raw }),
                secs => Duration::from_secs(secs),
            },
            None => defaults.http_timeout,
        };

        // Un índice fijo tiene prioridad sobre el locale.
        let effects = match value("POKEDEX_EFFECT_INDEX") {
            Some(raw) => EffectSelection::Index(parse_number("POKEDEX_EFFECT_INDEX", &raw)?),
            None => value("POKEDEX_EFFECT_LOCALE").map(EffectSelection::Locale).unwrap_or(defaults.effects),
        };

        let log_filter = value("POKEDEX_LOG").unwrap_or(defaults.log_filter);

        Ok(Self { api_base,
                  http_timeout,
                  effects,
                  log_filter })
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidNumber { key,
                                                        value: raw.to_string() })
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<Result<AppConfig, ConfigError>> = Lazy::new(AppConfig::from_env);

/// Acceso a la configuración global.
pub fn config() -> Result<&'static AppConfig, ConfigError> {
    CONFIG.as_ref().map_err(Clone::clone)
}
