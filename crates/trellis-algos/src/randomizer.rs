//! Random-edge generation for building graph fixtures.
//!
//! Edges are drawn by rejection sampling: pick two vertices uniformly,
//! discard self-loops and already-present edges, repeat until the requested
//! edge count is reached or the attempt budget runs out. Densities near the
//! maximum reject most samples, so generation may fall short of the request;
//! it never fails because of that.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use trellis_core::{Graph, GraphError, GraphResult, Vertex};

/// Tunables for the random-edge generator.
///
/// The serde defaults match [`Default`], so a partially specified document
/// deserializes to the same options `Default::default()` produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomizerOptions {
    /// Attempt budget per requested edge. Sampling stops once
    /// `attempt_multiplier * max_edges` draws have been made.
    #[serde(default = "default_attempt_multiplier")]
    pub attempt_multiplier: usize,
    /// Weight assigned to every generated edge.
    #[serde(default = "default_edge_weight")]
    pub edge_weight: f64,
}

fn default_attempt_multiplier() -> usize {
    100
}

fn default_edge_weight() -> f64 {
    1.0
}

impl Default for RandomizerOptions {
    fn default() -> Self {
        Self {
            attempt_multiplier: default_attempt_multiplier(),
            edge_weight: default_edge_weight(),
        }
    }
}

/// Populate `graph` with random edges between `vertices` using default
/// [`RandomizerOptions`].
///
/// See [`randomize_with`] for the full contract.
pub fn randomize<V: Vertex, G: Graph<V>, R: Rng>(
    graph: &mut G,
    vertices: &[V],
    max_edges: usize,
    rng: &mut R,
) -> GraphResult<()> {
    randomize_with(graph, vertices, max_edges, &RandomizerOptions::default(), rng)
}

/// Clear `graph` first, then generate into the fresh graph.
pub fn randomize_cleared<V: Vertex, G: Graph<V>, R: Rng>(
    graph: &mut G,
    vertices: &[V],
    max_edges: usize,
    rng: &mut R,
) -> GraphResult<()> {
    graph.clear();
    randomize(graph, vertices, max_edges, rng)
}

/// Generate between the vertices already present in `graph`.
pub fn randomize_existing<V: Vertex, G: Graph<V>, R: Rng>(
    graph: &mut G,
    max_edges: usize,
    rng: &mut R,
) -> GraphResult<()> {
    let vertices = graph.vertices();
    randomize(graph, &vertices, max_edges, rng)
}

/// Fully parameterized generator entry point.
///
/// Fails with `GraphError::EdgeLimitExceeded`, before touching the graph,
/// when `max_edges` exceeds the directed-pair ceiling `n * (n - 1)` for the
/// `n` supplied vertices. Otherwise all of `vertices` are inserted and
/// sampling runs until `graph.edge_count()` reaches `max_edges` or the
/// attempt budget is spent. Edges already present in the graph count toward
/// the target. Self-loops are never generated.
///
/// The ceiling is the directed one even for undirected graphs, where only
/// `n * (n - 1) / 2` distinct edges exist; requests between the two bounds
/// simply exhaust the budget and stop short.
pub fn randomize_with<V: Vertex, G: Graph<V>, R: Rng>(
    graph: &mut G,
    vertices: &[V],
    max_edges: usize,
    options: &RandomizerOptions,
    rng: &mut R,
) -> GraphResult<()> {
    let vertex_count = vertices.len();
    let max_possible = vertex_count * vertex_count.saturating_sub(1);
    if max_edges > max_possible {
        return Err(GraphError::EdgeLimitExceeded {
            requested: max_edges,
            max: max_possible,
            vertices: vertex_count,
        });
    }

    for vertex in vertices {
        graph.add_vertex(vertex.clone());
    }

    let max_attempts = max_edges.saturating_mul(options.attempt_multiplier);
    let mut attempts = 0;

    while graph.edge_count() < max_edges && attempts < max_attempts {
        let source = &vertices[rng.random_range(0..vertex_count)];
        let destination = &vertices[rng.random_range(0..vertex_count)];

        if source != destination && !graph.contains_edge(source, destination) {
            graph.add_edge_weighted(source.clone(), destination.clone(), options.edge_weight)?;
        }
        attempts += 1;
    }

    if graph.edge_count() < max_edges {
        debug!(
            "edge generation stopped at {} of {} edges after {} attempts",
            graph.edge_count(),
            max_edges,
            attempts
        );
    }
    Ok(())
}
