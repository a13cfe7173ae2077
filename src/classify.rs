use std::collections::HashSet;
use std::fmt::Debug;

use num_traits::Num;

use crate::graph::WeightedGraph;
use crate::mst::{Edge, SpanningForest};

/// Partition of a network's edges into backbone and redundant sets.
///
/// Backbone edges keep the network connected; redundant edges can be removed
/// without disconnecting anything. Together the two sets cover the original
/// edge set exactly (as unordered pairs) and never overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<W> {
    /// Edges retained in the spanning structure, annotated with the weights
    /// recorded in the source graph.
    pub backbone: Vec<Edge<W>>,
    /// Edges present in the original network but absent from the backbone.
    pub redundant: Vec<Edge<W>>,
    /// Sum of the backbone weights, accumulated in `W`'s own domain.
    pub total_weight: W,
}

/// Splits the graph's edge set against an already-computed spanning forest.
///
/// Backbone weights are re-read from the source graph so callers get the
/// container's own edge metadata; comparison is by normalized unordered pair,
/// so the enumeration direction of an edge never affects the split. The graph
/// is only read, never mutated.
///
/// # Examples
/// ```
/// use netbackbone::{classify, minimum_spanning_tree, AdjacencyListGraph};
///
/// let mut graph = AdjacencyListGraph::new_undirected(3);
/// graph.add_edge(0, 1, 1.0).unwrap();
/// graph.add_edge(1, 2, 2.0).unwrap();
/// graph.add_edge(0, 2, 3.0).unwrap();
///
/// let forest = minimum_spanning_tree(&graph).unwrap();
/// let split = classify(&graph, &forest);
/// assert_eq!(split.backbone.len(), 2);
/// assert_eq!(split.redundant.len(), 1);
/// assert_eq!(split.total_weight, 3.0);
/// ```
pub fn classify<W, G>(graph: &G, forest: &SpanningForest<W>) -> Classification<W>
where
    W: Num + Copy + Debug,
    G: WeightedGraph<W>,
{
    let mut backbone = Vec::with_capacity(forest.edge_count());
    let mut backbone_pairs: HashSet<(usize, usize)> = HashSet::with_capacity(forest.edge_count());
    for edge in forest.edges() {
        // re-annotate from the source graph; the carried weight only backs
        // an edge the container no longer reports
        let weight = graph.edge_weight(edge.u, edge.v).unwrap_or(edge.weight);
        backbone.push(Edge {
            u: edge.u,
            v: edge.v,
            weight,
        });
        backbone_pairs.insert((edge.u, edge.v));
    }

    let mut redundant = Vec::new();
    let mut redundant_pairs: HashSet<(usize, usize)> = HashSet::new();
    for u in 0..graph.vertex_count() {
        for &(v, weight) in graph.neighbors(u) {
            if u < v && !backbone_pairs.contains(&(u, v)) && redundant_pairs.insert((u, v)) {
                redundant.push(Edge { u, v, weight });
            }
        }
    }

    let total_weight = backbone
        .iter()
        .fold(W::zero(), |total, edge| total + edge.weight);

    Classification {
        backbone,
        redundant,
        total_weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;
    use crate::mst::minimum_spanning_tree;

    fn graph_from<W: Copy + Debug>(
        vertex_count: usize,
        edges: &[(usize, usize, W)],
    ) -> AdjacencyListGraph<W> {
        let mut graph = AdjacencyListGraph::new_undirected(vertex_count);
        for &(u, v, w) in edges {
            graph.add_edge(u, v, w).unwrap();
        }
        graph
    }

    fn pair_set(edges: &[Edge<i64>]) -> HashSet<(usize, usize)> {
        edges.iter().map(|e| (e.u, e.v)).collect()
    }

    #[test]
    fn test_artificial_network_split() {
        let (u, v, w, x, y, z) = (0, 1, 2, 3, 4, 5);
        let graph = graph_from(
            6,
            &[
                (u, v, 1),
                (u, w, 4),
                (v, x, 2),
                (v, w, 1),
                (w, y, 5),
                (w, x, 4),
                (x, z, 3),
                (y, z, 2),
            ],
        );

        let forest = minimum_spanning_tree(&graph).unwrap();
        let split = classify(&graph, &forest);

        assert_eq!(split.total_weight, 9);
        assert_eq!(
            pair_set(&split.backbone),
            HashSet::from([(u, v), (v, w), (v, x), (x, z), (y, z)])
        );
        assert_eq!(
            pair_set(&split.redundant),
            HashSet::from([(u, w), (w, y), (w, x)])
        );
    }

    #[test]
    fn test_five_station_split() {
        let (a, b, c, d, e) = (0, 1, 2, 3, 4);
        let graph = graph_from(
            5,
            &[
                (a, b, 4),
                (a, c, 2),
                (b, c, 1),
                (b, d, 5),
                (c, d, 8),
                (c, e, 10),
                (d, e, 2),
            ],
        );

        let forest = minimum_spanning_tree(&graph).unwrap();
        let split = classify(&graph, &forest);

        assert_eq!(split.total_weight, 10);
        assert_eq!(
            pair_set(&split.redundant),
            HashSet::from([(a, b), (c, d), (c, e)])
        );
    }

    #[test]
    fn test_partition_covers_edge_set_exactly() {
        let graph = graph_from(
            5,
            &[
                (0, 1, 3),
                (1, 2, 1),
                (2, 3, 4),
                (3, 4, 1),
                (0, 4, 5),
                (1, 3, 9),
            ],
        );
        let forest = minimum_spanning_tree(&graph).unwrap();
        let split = classify(&graph, &forest);

        let backbone = pair_set(&split.backbone);
        let redundant = pair_set(&split.redundant);
        let original: HashSet<(usize, usize)> = graph.edge_list().into_iter().collect();

        assert!(backbone.is_disjoint(&redundant));
        let union: HashSet<_> = backbone.union(&redundant).copied().collect();
        assert_eq!(union, original);
    }

    #[test]
    fn test_backbone_weights_read_from_source_graph() {
        let graph = graph_from(3, &[(0, 1, 7), (1, 2, 3)]);
        let forest = minimum_spanning_tree(&graph).unwrap();
        let split = classify(&graph, &forest);

        for edge in &split.backbone {
            assert_eq!(graph.edge_weight(edge.u, edge.v), Some(edge.weight));
        }
        assert_eq!(split.total_weight, forest.total_weight());
    }

    #[test]
    fn test_empty_network_trivial_split() {
        let graph: AdjacencyListGraph<i64> = AdjacencyListGraph::new_undirected(4);
        let forest = minimum_spanning_tree(&graph).unwrap();
        let split = classify(&graph, &forest);

        assert!(split.backbone.is_empty());
        assert!(split.redundant.is_empty());
        assert_eq!(split.total_weight, 0);
    }

    #[test]
    fn test_disconnected_network_split() {
        // Two components: {0, 1, 2} with a cycle, {3, 4} with one edge
        let graph = graph_from(5, &[(0, 1, 1), (1, 2, 2), (0, 2, 3), (3, 4, 4)]);
        let forest = minimum_spanning_tree(&graph).unwrap();
        let split = classify(&graph, &forest);

        assert_eq!(split.backbone.len(), 3);
        assert_eq!(pair_set(&split.redundant), HashSet::from([(0, 2)]));
        assert_eq!(split.total_weight, 7);
    }
}
