pub mod directed;
pub mod error;
pub mod result;
pub mod traits;
pub mod undirected;

mod adjacency;

pub use directed::DirectedGraph;
pub use error::GraphError;
pub use result::GraphResult;
pub use traits::{Graph, Vertex};
pub use undirected::UndirectedGraph;
