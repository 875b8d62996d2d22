/// Resultado de ejecutar una etapa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageRunResult {
    Success,
    Failure { message: String },
}

impl StageRunResult {
    pub fn failure(message: impl Into<String>) -> Self {
        StageRunResult::Failure { message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StageRunResult::Success)
    }

    /// Forma `(mensaje, éxito)` de la cadena clásica de handlers.
    pub fn into_pair(self) -> (String, bool) {
        match self {
            StageRunResult::Success => (String::new(), true),
            StageRunResult::Failure { message } => (message, false),
        }
    }
}
