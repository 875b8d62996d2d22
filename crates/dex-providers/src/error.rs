use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("could not build HTTP client: {0}")]
    Client(String),
    /// Ningún fetch del lote logró abrir conexión.
    #[error("remote catalog unreachable ({attempted} requests failed to connect): {detail}")]
    Unreachable { attempted: usize, detail: String },
}
