//! Contexto de una petición y resultados por ítem.
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use dex_domain::{Mode, Record};

/// Valor reservado de `--output` que significa "sólo consola".
pub const CONSOLE_TARGET: &str = "print";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Console,
    File(PathBuf),
}

impl OutputTarget {
    /// `"print"` es la consola; cualquier otro valor es una ruta.
    pub fn parse(raw: &str) -> Self {
        if raw == CONSOLE_TARGET {
            OutputTarget::Console
        } else {
            OutputTarget::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Console => f.write_str(CONSOLE_TARGET),
            OutputTarget::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Fallo de un único identificador. Nunca corta el lote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("not found")]
    NotFound,
    #[error("transport error: {0}")]
    Transport(String),
    /// Texto del `DomainError` de construcción.
    #[error("{0}")]
    Malformed(String),
}

/// Una posición de `results`: registro o marcador de fallo, nunca ambos.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemResult {
    Record(Record),
    Failed { identifier: String, error: ItemError },
}

impl ItemResult {
    pub fn record(&self) -> Option<&Record> {
        match self {
            ItemResult::Record(r) => Some(r),
            ItemResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ItemError> {
        match self {
            ItemResult::Failed { error, .. } => Some(error),
            ItemResult::Record(_) => None,
        }
    }
}

impl fmt::Display for ItemResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemResult::Record(r) => fmt::Display::fmt(r, f),
            ItemResult::Failed { identifier, error } => write!(f, "{identifier}: {error}"),
        }
    }
}

/// Estado mutable de una invocación; lo recorre la cadena de etapas.
///
/// `items` queda vacío hasta `normalize`; tras `fetch`, `results` tiene el
/// mismo largo y orden que `items`.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: Uuid,
    pub mode: Mode,
    pub input_data: Option<String>,
    pub input_file: Option<PathBuf>,
    pub expanded: bool,
    pub output: OutputTarget,
    pub items: Vec<String>,
    pub results: Vec<ItemResult>,
    /// Texto producido por `render`.
    pub rendered: Option<String>,
}

impl RequestContext {
    pub fn new(mode: Mode) -> Self {
        Self { request_id: Uuid::new_v4(),
               mode,
               input_data: None,
               input_file: None,
               expanded: false,
               output: OutputTarget::Console,
               items: Vec::new(),
               results: Vec::new(),
               rendered: None }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.input_data = Some(data.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_file = Some(path.into());
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "Request {}: mode: {}, data: {}, file: {}, expanded: {}, output: {}",
               self.request_id,
               self.mode,
               self.input_data.as_deref().unwrap_or("-"),
               self.input_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "-".into()),
               self.expanded,
               self.output)
    }
}
