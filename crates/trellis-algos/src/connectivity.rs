//! Connected-component discovery.

use std::collections::HashSet;

use tracing::debug;
use trellis_core::{Graph, Vertex};

use crate::traversal;

/// Partition the graph's vertices into components.
///
/// Grows one component per not-yet-visited vertex, in `vertices()` scan
/// order, by depth-first expansion. Every vertex lands in exactly one
/// component and an isolated vertex forms a singleton. For directed graphs
/// edges are followed in their stored direction only, so the partitions are
/// reachability sets from the scan-order seeds rather than strongly
/// connected components.
pub fn find_components<V: Vertex, G: Graph<V>>(graph: &G) -> Vec<HashSet<V>> {
    let mut components = Vec::new();
    let mut visited = HashSet::new();

    for vertex in graph.vertices() {
        if !visited.contains(&vertex) {
            let mut member_order = Vec::new();
            traversal::dfs_component(graph, &vertex, &mut member_order, &mut visited);
            components.push(member_order.into_iter().collect());
        }
    }

    debug!(
        "split {} vertices into {} components",
        graph.vertex_count(),
        components.len()
    );
    components
}
