use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("vertex {vertex} out of range for a network with {num_nodes} vertices")]
    VertexOutOfRange { vertex: usize, num_nodes: usize },

    #[error("negative capacity on edge {from} -> {to}")]
    NegativeCapacity { from: usize, to: usize },

    #[error("source and sink are the same vertex ({0})")]
    SourceIsSink(usize),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("algorithms disagree on {instance}: edmonds-karp={edmonds_karp}, dinic={dinic}")]
    Mismatch { instance: String, edmonds_karp: i64, dinic: i64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FlowError {
    // raised before anything was mutated
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FlowError::VertexOutOfRange { .. } | FlowError::NegativeCapacity { .. } | FlowError::SourceIsSink(_) | FlowError::InvalidParameter(_)
        )
    }
}
