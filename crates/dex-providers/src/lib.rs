//! dex-providers: acceso al catálogo remoto.
//!
//! - `RemoteFetcher`: un GET, clasificado como `RemoteOutcome`.
//! - `FanOutAggregator`: N fetches concurrentes, orden preservado, fallos
//!   aislados por ítem.
//! - `ExpansionEngine`: segunda ola de fetches guiada por las referencias de
//!   un `Creature`.
//!
//! `HttpFetcher` habla con el servicio real; `FixtureFetcher` responde desde
//! memoria para tests y demos sin red.

pub mod aggregator;
pub mod error;
pub mod expansion;
pub mod fetcher;
pub mod fixture;
pub mod http;
pub mod outcome;

pub use aggregator::FanOutAggregator;
pub use error::ProviderError;
pub use expansion::ExpansionEngine;
pub use fetcher::RemoteFetcher;
pub use fixture::FixtureFetcher;
pub use http::HttpFetcher;
pub use outcome::{FaultKind, RemoteOutcome, TransportFault};
