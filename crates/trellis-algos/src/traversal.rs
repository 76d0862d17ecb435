//! Breadth-first and depth-first traversal over any graph variant.
//!
//! The whole-graph forms cover every component, one component at a time, in
//! the order components are first met while scanning `vertices()`. The
//! `*_component` forms expand a single component into caller-owned state so
//! multi-source and partial traversals can be driven externally.

use std::collections::{HashSet, VecDeque};

use tracing::trace;
use trellis_core::{Graph, Vertex};

/// Visit every vertex in breadth-first order.
pub fn bfs<V: Vertex, G: Graph<V>>(graph: &G) -> Vec<V> {
    let mut result = Vec::with_capacity(graph.vertex_count());
    let mut visited = HashSet::new();

    for vertex in graph.vertices() {
        if !visited.contains(&vertex) {
            bfs_component(graph, &vertex, &mut result, &mut visited);
        }
    }

    trace!("bfs visited {} vertices", result.len());
    result
}

/// Expand one component breadth-first from `source` into caller-owned state.
///
/// Vertices already in `visited` are never re-entered through neighbor
/// expansion. The source itself is always expanded, even when it is already
/// marked visited.
pub fn bfs_component<V: Vertex, G: Graph<V>>(
    graph: &G,
    source: &V,
    result: &mut Vec<V>,
    visited: &mut HashSet<V>,
) {
    let mut queue = VecDeque::new();
    queue.push_back(source.clone());
    visited.insert(source.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
        result.push(current);
    }
}

/// Visit every vertex in depth-first order.
pub fn dfs<V: Vertex, G: Graph<V>>(graph: &G) -> Vec<V> {
    let mut result = Vec::with_capacity(graph.vertex_count());
    let mut visited = HashSet::new();

    for vertex in graph.vertices() {
        if !visited.contains(&vertex) {
            dfs_component(graph, &vertex, &mut result, &mut visited);
        }
    }

    trace!("dfs visited {} vertices", result.len());
    result
}

/// Expand one component depth-first from `source` into caller-owned state.
///
/// Uses an explicit stack, so component depth cannot overflow the call
/// stack. A source already in `visited` is skipped outright.
pub fn dfs_component<V: Vertex, G: Graph<V>>(
    graph: &G,
    source: &V,
    result: &mut Vec<V>,
    visited: &mut HashSet<V>,
) {
    let mut stack = vec![source.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        for neighbor in graph.neighbors(&current) {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
        result.push(current);
    }
}
