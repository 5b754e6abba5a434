//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum TheodoliteTypesError {
    /// The text does not name any known axis direction.
    #[error("unknown axis direction: {0}")]
    UnknownAxisDirection(String),
}
