//! Las cuatro etapas del pipeline de consulta, en orden de ejecución.
pub mod fetch;
pub mod normalize;
pub mod render;
pub mod validate;

pub use fetch::FetchStage;
pub use normalize::{materialize_items, NormalizeStage};
pub use render::{render_results, write_output, RenderStage};
pub use validate::{validate_file_paths, ValidateStage};
