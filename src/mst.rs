use std::cmp::Ordering;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Num;

use crate::disjoint_set::DisjointSetForest;
use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyListGraph, WeightedGraph};

/// An undirected weighted edge.
///
/// Edges produced by the engine are normalized so that `u < v`, which makes
/// unordered-pair comparison plain equality on the endpoint fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

/// Minimum spanning forest produced by [`minimum_spanning_tree`].
///
/// Holds the accepted edges in acceptance order together with the vertex
/// cardinality they span. The structure is distinct from the input graph;
/// computing it never mutates the input.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W: Num + Copy + Debug> SpanningForest<W> {
    /// Accepted edges in acceptance order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Number of accepted edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of vertices the forest spans.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of connected components in the input graph.
    ///
    /// Every accepted edge merges two components, so this is always
    /// `vertex_count - edge_count`.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Whether the forest is a single spanning tree (the input was connected).
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count() == 1
    }

    /// Sum of the accepted edge weights, accumulated in `W`'s own domain.
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::zero(), |total, edge| total + edge.weight)
    }

    /// Re-materializes the forest as a new undirected [`AdjacencyListGraph`],
    /// suitable for handing to path-search or reporting code.
    pub fn to_graph(&self) -> Result<AdjacencyListGraph<W>> {
        let mut graph = AdjacencyListGraph::new_undirected(self.vertex_count);
        for edge in &self.edges {
            graph.add_edge(edge.u, edge.v, edge.weight)?;
        }
        Ok(graph)
    }
}

/// Total order over candidate edges: weight ascending, then endpoint pair.
///
/// The endpoint tie-break fixes which of several equal-weight spanning trees
/// is produced, so repeated runs on identical input accept an identical edge
/// sequence.
fn edge_order<W: PartialOrd>(a: &Edge<W>, b: &Edge<W>) -> Ordering {
    a.weight
        .partial_cmp(&b.weight)
        .unwrap_or(Ordering::Equal)
        .then_with(|| (a.u, a.v).cmp(&(b.u, b.v)))
}

/// Materializes one entry per undirected edge from the adjacency enumeration.
///
/// The container may list each edge from both endpoints; keeping only `u < v`
/// entries counts every edge exactly once. Parallel edges between the same
/// pair survive as distinct candidates.
fn half_edges<W, G>(graph: &G) -> Vec<Edge<W>>
where
    W: Copy,
    G: WeightedGraph<W>,
{
    let mut edges = Vec::new();
    for u in 0..graph.vertex_count() {
        for &(v, weight) in graph.neighbors(u) {
            if u < v {
                edges.push(Edge { u, v, weight });
            }
        }
    }
    edges
}

/// Computes a minimum spanning forest of an undirected weighted graph using
/// Kruskal's algorithm.
///
/// Candidate edges are sorted by weight (ties broken by endpoint indices,
/// keeping the result deterministic) and scanned once; an edge is accepted
/// exactly when its endpoints lie in different components of a disjoint-set
/// forest, which is then merged across the edge.
///
/// # Arguments
/// * `graph` - The undirected graph to span
///
/// # Returns
/// * `Ok(forest)` - The accepted edges; a single spanning tree when the input
///   is connected, one tree per component otherwise
/// * `Err(GraphError)` - If the graph is directed
///
/// # Examples
/// ```
/// use netbackbone::{minimum_spanning_tree, AdjacencyListGraph};
///
/// let mut graph = AdjacencyListGraph::new_undirected(3);
/// graph.add_edge(0, 1, 4.0).unwrap();
/// graph.add_edge(0, 2, 2.0).unwrap();
/// graph.add_edge(1, 2, 1.0).unwrap();
///
/// let forest = minimum_spanning_tree(&graph).unwrap();
/// assert_eq!(forest.edge_count(), 2);
/// assert_eq!(forest.total_weight(), 3.0);
/// ```
///
/// # Complexity
/// * Time: O(E log E) for the sort plus O(E α(V)) for the forest operations
/// * Space: O(V + E)
///
/// # Errors
/// * `InvalidInput` if the graph is directed; returned before any edge is
///   examined
pub fn minimum_spanning_tree<W, G>(graph: &G) -> Result<SpanningForest<W>>
where
    W: Num + PartialOrd + Copy + Debug,
    G: WeightedGraph<W>,
{
    if graph.is_directed() {
        return Err(GraphError::invalid_input(
            "Kruskal's algorithm requires an undirected graph",
        ));
    }

    let vertex_count = graph.vertex_count();
    let mut candidates = half_edges(graph);
    candidates.sort_by(edge_order);

    let mut forest = DisjointSetForest::new(vertex_count);
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));

    for edge in candidates.iter() {
        if forest.find(edge.u) != forest.find(edge.v) {
            trace!(
                "accepting edge ({}, {}) weight {:?}",
                edge.u,
                edge.v,
                edge.weight
            );
            accepted.push(*edge);
            forest.union(edge.u, edge.v);
            if accepted.len() == vertex_count.saturating_sub(1) {
                break;
            }
        } else {
            trace!(
                "rejecting edge ({}, {}) weight {:?}: endpoints already connected",
                edge.u,
                edge.v,
                edge.weight
            );
        }
    }

    debug!(
        "accepted {} of {} candidate edges across {} vertices",
        accepted.len(),
        candidates.len(),
        vertex_count
    );

    Ok(SpanningForest {
        vertex_count,
        edges: accepted,
    })
}
