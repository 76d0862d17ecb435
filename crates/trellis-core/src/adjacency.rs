use std::collections::{HashMap, HashSet};

use crate::traits::Vertex;

/// Adjacency-list storage shared by both graph variants.
///
/// Maps each vertex to its neighbor-to-weight row and caches the logical
/// edge count. Edge policy (mirroring, count bookkeeping on insert and
/// removal) stays with the variants, which manipulate this state directly.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencyList<V> {
    pub(crate) rows: HashMap<V, HashMap<V, f64>>,
    pub(crate) edge_count: usize,
}

impl<V> Default for AdjacencyList<V> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<V: Vertex> AdjacencyList<V> {
    pub(crate) fn add_vertex(&mut self, vertex: V) {
        self.rows.entry(vertex).or_default();
    }

    pub(crate) fn contains_vertex(&self, vertex: &V) -> bool {
        self.rows.contains_key(vertex)
    }

    pub(crate) fn contains_edge(&self, source: &V, destination: &V) -> bool {
        self.rows
            .get(source)
            .map(|row| row.contains_key(destination))
            .unwrap_or(false)
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn vertices(&self) -> Vec<V> {
        self.rows.keys().cloned().collect()
    }

    pub(crate) fn neighbors(&self, vertex: &V) -> HashSet<V> {
        self.rows
            .get(vertex)
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn neighbors_with_weights(&self, vertex: &V) -> HashMap<V, f64> {
        self.rows.get(vertex).cloned().unwrap_or_default()
    }

    pub(crate) fn weight(&self, source: &V, destination: &V) -> Option<f64> {
        self.rows
            .get(source)
            .and_then(|row| row.get(destination))
            .copied()
    }

    pub(crate) fn clear(&mut self) {
        self.rows.clear();
        self.edge_count = 0;
    }
}
