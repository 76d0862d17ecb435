use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::result::GraphResult;

/// Bounds required of vertex values
///
/// Blanket-implemented for every type that is equality-comparable, hashable,
/// and cloneable, so callers never implement it by hand. Vertices are stored
/// by value and cloned into query results.
pub trait Vertex: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Vertex for T {}

/// Capability set shared by every graph variant
///
/// Mutations go through `add_*`, `remove_*`, and `clear`; queries return
/// owned copies of internal state so a caller can never mutate the graph
/// through a query result. Counts are maintained incrementally and read back
/// in constant time.
pub trait Graph<V: Vertex> {
    /// Insert a vertex with no edges. Re-inserting an existing vertex is a
    /// no-op that keeps its current edges.
    fn add_vertex(&mut self, vertex: V);

    /// Insert an edge with weight `1.0`, creating missing endpoints.
    fn add_edge(&mut self, source: V, destination: V) -> GraphResult<()> {
        self.add_edge_weighted(source, destination, 1.0)
    }

    /// Insert an edge with the given weight, creating missing endpoints.
    fn add_edge_weighted(&mut self, source: V, destination: V, weight: f64) -> GraphResult<()> {
        self.add_edge_with(source, destination, weight, true)
    }

    /// Insert an edge, controlling whether missing endpoints are created.
    ///
    /// With `create_vertices` set, absent endpoints are added first. Without
    /// it, an absent endpoint fails the call with
    /// [`GraphError`](crate::GraphError)`::VertexNotFound` and the graph is
    /// left untouched. Re-inserting an existing edge overwrites its weight
    /// without changing the edge count.
    fn add_edge_with(
        &mut self,
        source: V,
        destination: V,
        weight: f64,
        create_vertices: bool,
    ) -> GraphResult<()>;

    /// Remove a vertex and every edge incident to it. Absent vertices are
    /// ignored.
    fn remove_vertex(&mut self, vertex: &V);

    /// Remove an edge. Absent edges and absent endpoints are ignored.
    fn remove_edge(&mut self, source: &V, destination: &V);

    fn contains_vertex(&self, vertex: &V) -> bool;

    fn contains_edge(&self, source: &V, destination: &V) -> bool;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of logical edges. An undirected edge counts once regardless of
    /// its two stored entries.
    fn edge_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Every vertex, in no particular order.
    fn vertices(&self) -> Vec<V>;

    /// Vertices adjacent to `vertex`, or an empty set when it is absent.
    fn neighbors(&self, vertex: &V) -> HashSet<V>;

    /// Adjacent vertices together with the weight of the connecting edge.
    fn neighbors_with_weights(&self, vertex: &V) -> HashMap<V, f64>;

    /// Weight of the edge from `source` to `destination`, if present.
    fn weight(&self, source: &V, destination: &V) -> Option<f64>;

    /// Drop every vertex and edge.
    fn clear(&mut self);
}
