pub mod connectivity;
pub mod randomizer;
pub mod shortest_path;
pub mod traversal;

pub use connectivity::find_components;
pub use randomizer::{
    randomize, randomize_cleared, randomize_existing, randomize_with, RandomizerOptions,
};
pub use shortest_path::{dijkstra, ShortestPaths};
pub use traversal::{bfs, bfs_component, dfs, dfs_component};
