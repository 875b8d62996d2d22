use async_trait::async_trait;

use crate::outcome::RemoteOutcome;

/// Un único GET contra el catálogo.
///
/// Contrato: exactamente una petición, sin reintentos; `404` es
/// `NotFound` y nunca un error. Las implementaciones no comparten estado
/// mutable entre llamadas, así que pueden invocarse concurrentemente.
#[async_trait]
pub trait RemoteFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> RemoteOutcome;
}
