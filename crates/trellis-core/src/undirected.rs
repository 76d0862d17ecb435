use std::collections::{HashMap, HashSet};

use crate::adjacency::AdjacencyList;
use crate::error::GraphError;
use crate::result::GraphResult;
use crate::traits::{Graph, Vertex};

/// Undirected graph backed by an adjacency list.
///
/// An edge between two distinct vertices is stored as a mirrored pair of
/// entries and counted as one logical edge. A self-loop is stored as a
/// single entry. Both stored entries of an edge always carry the same
/// weight.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    adj: AdjacencyList<V>,
}

impl<V> UndirectedGraph<V> {
    pub fn new() -> Self {
        Self {
            adj: AdjacencyList::default(),
        }
    }
}

impl<V> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for UndirectedGraph<V> {
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
            .entry(source.clone())
            .or_default()
            .insert(destination.clone(), weight);
        if source != destination {
            self.adj
                .rows
                .entry(destination)
                .or_default()
                .insert(source, weight);
        }
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) {
        let row = match self.adj.rows.remove(vertex) {
            Some(row) => row,
            None => return,
        };
        // Each entry in the removed row is one logical edge, self-loop
        // included since loops are stored once.
        self.adj.edge_count -= row.len();

        for neighbor in row.keys() {
            if let Some(other) = self.adj.rows.get_mut(neighbor) {
                other.remove(vertex);
            }
        }
    }

    fn remove_edge(&mut self, source: &V, destination: &V) {
        let removed = self
            .adj
            .rows
            .get_mut(source)
            .and_then(|row| row.remove(destination));
        if removed.is_some() {
            self.adj.edge_count -= 1;
        }
        if let Some(row) = self.adj.rows.get_mut(destination) {
            row.remove(source);
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
