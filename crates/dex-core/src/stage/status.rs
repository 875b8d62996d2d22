/// Estado de una etapa en tiempo de ejecución.
///
/// Las transiciones válidas son:
/// - `Pending` -> `Running`
/// - `Running` -> `FinishedOk`
/// - `Running` -> `Failed`
///
/// Una etapa posterior a un fallo queda en `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    /// La etapa está pendiente de ejecución.
    Pending,
    /// La etapa está en ejecución.
    Running,
    /// La etapa finalizó correctamente.
    FinishedOk,
    /// La etapa falló y cortó el pipeline.
    Failed,
}
