use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vertex not found in graph")]
    VertexNotFound,

    #[error("Requested {requested} edges but {vertices} vertices allow at most {max}")]
    EdgeLimitExceeded {
        requested: usize,
        max: usize,
        vertices: usize,
    },
}
