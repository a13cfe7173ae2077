use std::fmt::Debug;

use crate::error::{GraphError, Result};

/// Capability interface the spanning-tree engine consumes.
///
/// Vertices are integer indices in `[0, vertex_count)`; the implementor owns
/// and assigns the index space. Any concrete representation (adjacency list,
/// adjacency matrix, edge array) can back this trait as long as the adjacency
/// enumeration lists every edge incident to the queried vertex.
pub trait WeightedGraph<W> {
    /// Number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Whether edges are directed.
    fn is_directed(&self) -> bool;

    /// All `(neighbor, weight)` pairs incident to `vertex`.
    ///
    /// For an undirected graph each edge may be listed from both endpoints;
    /// consumers deduplicate by endpoint order.
    ///
    /// # Panics
    /// Panics if `vertex` is outside `[0, vertex_count)`.
    fn neighbors(&self, vertex: usize) -> &[(usize, W)];

    /// Whether an edge `u -> v` exists (`u -- v` for undirected graphs).
    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).iter().any(|(n, _)| *n == v)
    }

    /// Weight of the edge `u -> v`, or `None` if the edge is absent.
    ///
    /// When parallel edges exist between `u` and `v`, the first one in the
    /// adjacency enumeration is returned.
    fn edge_weight(&self, u: usize, v: usize) -> Option<W>
    where
        W: Copy,
    {
        self.neighbors(u)
            .iter()
            .find(|(n, _)| *n == v)
            .map(|(_, w)| *w)
    }
}

/// Adjacency-list graph over a fixed vertex index space.
///
/// The vertex set is fixed at construction; edges are inserted afterwards.
/// Undirected insertion records the edge in both endpoint lists. Parallel
/// edges between the same pair are admitted; callers that need a simple
/// graph should check [`WeightedGraph::has_edge`] before inserting.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyListGraph<W> {
    adjacency: Vec<Vec<(usize, W)>>,
    directed: bool,
    edge_count: usize,
}

impl<W: Copy + Debug> AdjacencyListGraph<W> {
    /// Creates an undirected graph with `vertex_count` vertices and no edges.
    pub fn new_undirected(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed: false,
            edge_count: 0,
        }
    }

    /// Creates a directed graph with `vertex_count` vertices and no edges.
    pub fn new_directed(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed: true,
            edge_count: 0,
        }
    }

    /// Inserts the edge `u -- v` (or `u -> v` when directed) with `weight`.
    ///
    /// # Errors
    /// * `VertexOutOfRange` if either endpoint is outside `[0, vertex_count)`
    /// * `InvalidInput` for a self-loop (`u == v`)
    ///
    /// The graph is left untouched on error.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::invalid_input(format!(
                "Self-loop on vertex {} is not allowed",
                u
            )));
        }

        self.adjacency[u].push((v, weight));
        if !self.directed {
            self.adjacency[v].push((u, weight));
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Number of edges inserted so far (each undirected edge counted once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All edges as `(u, v)` pairs.
    ///
    /// For an undirected graph each edge appears once with `u < v`; for a
    /// directed graph every arc appears as inserted.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for (v, _) in neighbors {
                if self.directed || u < *v {
                    edges.push((u, *v));
                }
            }
        }
        edges
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.adjacency.len() {
            return Err(GraphError::VertexOutOfRange {
                index: vertex,
                cardinality: self.adjacency.len(),
            });
        }
        Ok(())
    }
}

impl<W: Copy + Debug> WeightedGraph<W> for AdjacencyListGraph<W> {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        &self.adjacency[vertex]
    }
}
