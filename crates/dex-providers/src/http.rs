//! `RemoteFetcher` sobre reqwest.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;

use crate::error::ProviderError;
use crate::fetcher::RemoteFetcher;
use crate::outcome::{FaultKind, RemoteOutcome, TransportFault};

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// `timeout` aplica a cada petición individual; `None` deja el límite en
    /// manos del transporte.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let mut builder = Client::builder().user_agent(concat!("pokedex-rust/", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build().map_err(|e| ProviderError::Client(e.to_string()))?;
        Ok(Self { http })
    }
}

fn fault_from(err: &reqwest::Error) -> TransportFault {
    let kind = if err.is_timeout() {
        FaultKind::Timeout
    } else if err.is_connect() {
        FaultKind::Connect
    } else if err.is_decode() {
        FaultKind::Decode
    } else {
        FaultKind::Other
    };
    TransportFault::new(kind, err.to_string())
}

#[async_trait]
impl RemoteFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> RemoteOutcome {
        let response = match self.http.get(url).header(header::ACCEPT, "application/json").send().await {
            Ok(r) => r,
            Err(e) => return RemoteOutcome::TransportError(fault_from(&e)),
        };

        let status = response.status();
        debug!("GET {url} -> {status}");
        match status {
            StatusCode::OK => match response.json::<Value>().await {
                Ok(body) => RemoteOutcome::Found(body),
                Err(e) => RemoteOutcome::TransportError(fault_from(&e)),
            },
            StatusCode::NOT_FOUND => RemoteOutcome::NotFound,
            other => RemoteOutcome::TransportError(TransportFault::new(FaultKind::Status(other.as_u16()),
                                                                       format!("unexpected HTTP status {other} for {url}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Servidor HTTP mínimo en loopback: responde por path con
    /// `(status, cuerpo)` y cierra la conexión.
    async fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let mut read = 0;
                    while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf[read..]).await {
                            Ok(0) | Err(_) => break,
                            Ok(n) => read += n,
                        }
                    }
                    let head = String::from_utf8_lossy(&buf[..read]).to_string();
                    let path = head.split_whitespace().nth(1).unwrap_or("/");
                    let (status, body) =
                        routes.iter().find(|(p, ..)| *p == path).map(|(_, s, b)| (*s, *b)).unwrap_or((404, ""));
                    let reason = match status {
                        200 => "OK",
                        404 => "Not Found",
                        _ => "Internal Server Error",
                    };
                    let response = format!("HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                                           body.len());
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn status_codes_map_to_outcomes() {
        let base = serve(vec![("/move/1", 200, r#"{"name": "pound"}"#),
                              ("/move/500", 500, r#"{"error": "boom"}"#),
                              ("/move/bad", 200, "<html>not json</html>")]).await;
        let fetcher = HttpFetcher::new(Some(Duration::from_secs(5))).expect("client");

        let found = fetcher.fetch(&format!("{base}/move/1")).await;
        assert_eq!(found.payload().and_then(|p| p["name"].as_str()), Some("pound"));

        assert_eq!(fetcher.fetch(&format!("{base}/move/9999")).await, RemoteOutcome::NotFound);

        match fetcher.fetch(&format!("{base}/move/500")).await {
            RemoteOutcome::TransportError(fault) => assert_eq!(fault.kind, FaultKind::Status(500)),
            other => panic!("expected a status fault, got {other:?}"),
        }

        match fetcher.fetch(&format!("{base}/move/bad")).await {
            RemoteOutcome::TransportError(fault) => assert_eq!(fault.kind, FaultKind::Decode),
            other => panic!("expected a decode fault, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let fetcher = HttpFetcher::new(Some(Duration::from_secs(5))).expect("client");
        // Puerto 1 en loopback: nadie escucha.
        let outcome = fetcher.fetch("http://127.0.0.1:1/api/v2/move/1").await;
        assert!(matches!(outcome, RemoteOutcome::TransportError(_)), "got {outcome:?}");
    }

    #[test]
    fn client_builds_without_timeout() {
        assert!(HttpFetcher::new(None).is_ok());
    }
}
