//! Fan-out / fan-in de fetches independientes.
//!
//! Un lote crea un future por URL y los espera todos juntos (`join_all`).
//! Cada future escribe sólo su propia posición del vector de salida, así que
//! `result[i]` corresponde siempre a `input[i]` sin importar el orden de
//! finalización. El fallo de un ítem no cancela a los demás.
use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};

use crate::error::ProviderError;
use crate::fetcher::RemoteFetcher;
use crate::outcome::RemoteOutcome;

#[derive(Clone)]
pub struct FanOutAggregator {
    fetcher: Arc<dyn RemoteFetcher>,
}

impl FanOutAggregator {
    pub fn new(fetcher: Arc<dyn RemoteFetcher>) -> Self {
        Self { fetcher }
    }

    /// URL destino: `base_url` + identificador recortado y en minúsculas.
    pub fn target_url(base_url: &str, identifier: &str) -> String {
        let id = identifier.trim().to_lowercase();
        if base_url.ends_with('/') {
            format!("{base_url}{id}")
        } else {
            format!("{base_url}/{id}")
        }
    }

    /// Un fetch por identificador contra `base_url`; mismo largo y orden que
    /// `identifiers`.
    pub async fn fetch_all(&self, base_url: &str, identifiers: &[String]) -> Result<Vec<RemoteOutcome>, ProviderError> {
        let urls: Vec<String> = identifiers.iter().map(|id| Self::target_url(base_url, id)).collect();
        self.fetch_urls(&urls).await
    }

    /// Un fetch por URL ya resuelta (referencias embebidas).
    ///
    /// Devuelve `Err` sólo si ninguna petición del lote pudo conectar.
    pub async fn fetch_urls(&self, urls: &[String]) -> Result<Vec<RemoteOutcome>, ProviderError> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let outcomes = join_all(urls.iter().map(|url| self.fetcher.fetch(url))).await;

        for (url, outcome) in urls.iter().zip(&outcomes) {
            match outcome {
                RemoteOutcome::Found(_) => {}
                RemoteOutcome::NotFound => debug!("{url}: not found"),
                RemoteOutcome::TransportError(fault) => warn!("{url}: {fault}"),
            }
        }

        if outcomes.iter().all(RemoteOutcome::is_connect_failure) {
            let detail = match &outcomes[0] {
                RemoteOutcome::TransportError(fault) => fault.detail.clone(),
                _ => String::new(),
            };
            return Err(ProviderError::Unreachable { attempted: outcomes.len(),
                                                    detail });
        }
        Ok(outcomes)
    }
}

impl std::fmt::Debug for FanOutAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanOutAggregator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_url_lowercases_and_joins() {
        assert_eq!(FanOutAggregator::target_url("https://x/api/v2/move/", " Pound "), "https://x/api/v2/move/pound");
        assert_eq!(FanOutAggregator::target_url("https://x/api/v2/move", "1"), "https://x/api/v2/move/1");
    }
}
