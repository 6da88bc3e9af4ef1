use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("no directed edge {from} -> {to}")]
    EdgeNotFound { from: usize, to: usize },

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    #[error("demand still unmet after {limit} augmentations")]
    IterationLimitExceeded { limit: usize },
}

/// Rejected before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("source and sink are the same node {0}")]
    SourceIsSink(usize),

    #[error("node {0} does not exist")]
    UnknownNode(usize),

    #[error("requested flow must be positive")]
    NonPositiveDemand,

    #[error("edge {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },

    #[error("edge {from} -> {to} has a negative or undefined cost")]
    InvalidCost { from: usize, to: usize },

    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge { from: usize, to: usize },
}
