use async_trait::async_trait;

use super::run_result::StageRunResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind { Check, Transform, Fetch, Sink }

/// Trait que define una etapa del pipeline sobre un contexto `C`.
///
/// La etapa recibe el contexto por referencia mutable: es el único dueño
/// mientras corre y el controlador no lo comparte con otras etapas.
#[async_trait]
pub trait StageDefinition<C: Send>: Send + Sync {
    /// Identificador estable y único dentro del pipeline.
    fn id(&self) -> &str;

    /// Nombre opcional amigable.
    fn name(&self) -> &str { self.id() }

    /// Tipo general de la etapa.
    fn kind(&self) -> StageKind;

    /// Ejecuta la etapa. Un `Failure` detiene el pipeline.
    async fn run(&self, ctx: &mut C) -> StageRunResult;
}
