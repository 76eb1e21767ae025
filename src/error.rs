use thiserror::Error;

/// Top-level error type for edge slide computations.
#[derive(Debug, Error)]
pub enum EdgeSlideError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Factor(#[from] FactorError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Errors related to the current edge selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no edges selected")]
    NoSelection,

    #[error("selection is not an edge loop: {0}")]
    SelectionNotALoop(String),

    #[error("selection order is not available for first-selected measurement")]
    SelectionOrderUnavailable,
}

/// Errors related to mesh topology.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("unsupported topology: edge has {faces} incident faces")]
    UnsupportedTopology { faces: usize },

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to converting a distance into a slide factor.
#[derive(Debug, Error, PartialEq)]
pub enum FactorError {
    #[error("distance {requested} exceeds the available travel of {available}")]
    OutOfRange { requested: f64, available: f64 },
}

/// A failure reported by the host's native slide operator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("edge slide failed: {message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    /// Creates a host error carrying the host's message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Convenience type alias for results using [`EdgeSlideError`].
pub type Result<T> = std::result::Result<T, EdgeSlideError>;
