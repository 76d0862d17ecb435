use std::collections::{HashMap, HashSet};

use crate::adjacency::AdjacencyList;
use crate::error::GraphError;
use crate::result::GraphResult;
use crate::traits::{Graph, Vertex};

/// Directed graph backed by an adjacency list.
///
/// Every edge is a single `source -> destination` entry; nothing is
/// mirrored. Incoming edges are not indexed, so removing a vertex scans the
/// remaining rows to purge edges pointing at it.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    adj: AdjacencyList<V>,
}

impl<V> DirectedGraph<V> {
    pub fn new() -> Self {
        Self {
            adj: AdjacencyList::default(),
        }
    }
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for DirectedGraph<V> {
    fn add_vertex(&mut self, vertex: V) {
        self.adj.add_vertex(vertex);
    }

    fn add_edge_with(
        &mut self,
        source: V,
        destination: V,
        weight: f64,
        create_vertices: bool,
    ) -> GraphResult<()> {
        if create_vertices {
            self.adj.add_vertex(source.clone());
            self.adj.add_vertex(destination.clone());
        } else if !self.adj.contains_vertex(&source) || !self.adj.contains_vertex(&destination) {
            return Err(GraphError::VertexNotFound);
        }

        if !self.adj.contains_edge(&source, &destination) {
            self.adj.edge_count += 1;
        }
        self.adj
            .rows
            .entry(source)
            .or_default()
            .insert(destination, weight);
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) {
        let outgoing = match self.adj.rows.remove(vertex) {
            Some(row) => row,
            None => return,
        };
        self.adj.edge_count -= outgoing.len();

        // Incoming edges live in the remaining rows.
        for row in self.adj.rows.values_mut() {
            if row.remove(vertex).is_some() {
                self.adj.edge_count -= 1;
            }
        }
    }

    fn remove_edge(&mut self, source: &V, destination: &V) {
        if let Some(row) = self.adj.rows.get_mut(source) {
            if row.remove(destination).is_some() {
                self.adj.edge_count -= 1;
            }
        }
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adj.contains_vertex(vertex)
    }

    fn contains_edge(&self, source: &V, destination: &V) -> bool {
        self.adj.contains_edge(source, destination)
    }

    fn vertex_count(&self) -> usize {
        self.adj.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.adj.edge_count
    }

    fn vertices(&self) -> Vec<V> {
        self.adj.vertices()
    }

    fn neighbors(&self, vertex: &V) -> HashSet<V> {
        self.adj.neighbors(vertex)
    }

    fn neighbors_with_weights(&self, vertex: &V) -> HashMap<V, f64> {
        self.adj.neighbors_with_weights(vertex)
    }

    fn weight(&self, source: &V, destination: &V) -> Option<f64> {
        self.adj.weight(source, destination)
    }

    fn clear(&mut self) {
        self.adj.clear();
    }
}
