//! Single-source shortest paths via Dijkstra's algorithm.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;
use trellis_core::{Graph, GraphError, GraphResult, Vertex};

/// Shortest-path distances and predecessors from a single source.
///
/// Produced by [`dijkstra`] and read-only afterwards. Vertices the search
/// never reached are absent from the internal maps and read back as an
/// infinite distance with no path.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    source: V,
    distances: HashMap<V, f64>,
    predecessors: HashMap<V, V>,
}

impl<V: Vertex> ShortestPaths<V> {
    /// The vertex the search started from.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Shortest known distance to `target`, or `f64::INFINITY` when the
    /// target was never reached.
    pub fn distance_to(&self, target: &V) -> f64 {
        self.distances.get(target).copied().unwrap_or(f64::INFINITY)
    }

    /// Shortest path from the source to `target`, or `None` when the target
    /// was never reached.
    ///
    /// The path starts at the source and ends at `target`. Asking for the
    /// source itself yields the single-element path `[source]`.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.distances.contains_key(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = self.predecessors.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Frontier entry ordered by tentative distance, smallest first.
#[derive(Debug)]
struct FrontierEntry<V> {
    vertex: V,
    distance: f64,
}

impl<V> PartialEq for FrontierEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<V> Eq for FrontierEntry<V> {}

impl<V> PartialOrd for FrontierEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for FrontierEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; comparing the other way round turns it
        // into the min-ordered frontier the search needs.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Compute single-source shortest paths over the weighted neighbor view.
///
/// Works on either graph variant. Fails with `GraphError::VertexNotFound`
/// when `source` is not a vertex of the graph. Correct only for non-negative
/// edge weights; negative weights are not rejected, but results over them
/// are unspecified.
pub fn dijkstra<V: Vertex, G: Graph<V>>(graph: &G, source: &V) -> GraphResult<ShortestPaths<V>> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::VertexNotFound);
    }

    let mut distances = HashMap::new();
    let mut predecessors = HashMap::new();
    let mut frontier = BinaryHeap::new();

    distances.insert(source.clone(), 0.0);
    frontier.push(FrontierEntry {
        vertex: source.clone(),
        distance: 0.0,
    });

    while let Some(FrontierEntry { vertex, distance }) = frontier.pop() {
        let best = distances.get(&vertex).copied().unwrap_or(f64::INFINITY);
        if distance > best {
            // Stale duplicate left behind by a later relaxation.
            continue;
        }

        for (neighbor, weight) in graph.neighbors_with_weights(&vertex) {
            let candidate = distance + weight;
            let known = distances.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), vertex.clone());
                frontier.push(FrontierEntry {
                    vertex: neighbor,
                    distance: candidate,
                });
            }
        }
    }

    trace!(
        "dijkstra settled {} of {} vertices",
        distances.len(),
        graph.vertex_count()
    );

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}
