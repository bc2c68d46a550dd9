use thiserror::Error;

use crate::domain::ValidationError;
use crate::ports::StorageError;

/// Error de las operaciones del `ContentStore`.
///
/// Las capas superiores (CLI, vistas) deciden cómo mostrarlo; ninguna
/// variante deja el documento en memoria a medio modificar.
#[derive(Debug, Error)]
pub enum ContentError {
  #[error("invalid content: {0}")]
  Invalid(#[from] ValidationError),

  #[error("{collection} index {index} out of range (len {len})")]
  IndexOutOfRange { collection: &'static str, index: usize, len: usize },

  #[error("storage error: {0}")]
  Storage(#[from] StorageError),

  #[error("snapshot error: {0}")]
  Snapshot(#[from] serde_json::Error),
}
