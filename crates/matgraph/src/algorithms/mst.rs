//! Minimum spanning trees over dense adjacency matrices.
//!
//! Two solvers with identical contracts and identical total weight on
//! connected graphs:
//!
//! - [`prim`] grows a tree from a start vertex, selecting the cheapest
//!   frontier vertex by linear scan. O(V²), the natural fit for a dense
//!   matrix.
//! - [`kruskal`] sorts every undirected edge globally and accepts those that
//!   join two different components, tracked by
//!   [`UnionFind`](matgraph_core::UnionFind). O(E log E), dominated by the
//!   sort.
//!
//! Both require a symmetric matrix. On a disconnected graph both return a
//! partial forest rather than failing; callers detect that through
//! [`MstResult::is_spanning`].

use matgraph_core::{DenseGraph, Result, UnionFind, Weight};

use crate::algorithms::traits::GraphAlgorithm;

/// An accepted spanning-tree edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstEdge {
    /// Endpoint already in the tree when the edge was accepted.
    pub source: usize,
    /// Endpoint the edge attached to the tree.
    pub target: usize,
    /// Weight of the edge.
    pub weight: Weight,
}

/// Edges and total weight produced by [`prim`] or [`kruskal`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstResult {
    edges: Vec<MstEdge>,
    total_weight: Weight,
    vertex_count: usize,
}

impl MstResult {
    /// Accepted edges, in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[MstEdge] {
        &self.edges
    }

    /// Sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Number of vertices in the graph the tree was built over.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns `true` if the accepted edges span every vertex, i.e. exactly
    /// `n - 1` edges for `n` vertices.
    ///
    /// A disconnected input produces fewer edges (a partial forest) and
    /// `false` here; that outcome is a valid result, not an error.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        if self.vertex_count <= 1 {
            return self.edges.is_empty();
        }
        self.edges.len() + 1 == self.vertex_count
    }
}

/// Grows a minimum spanning tree from `start` (Prim's algorithm).
///
/// Every round scans the vertices not yet in the tree for the one with the
/// cheapest known connecting weight, adds it, and relaxes its neighbors'
/// keys. Matrix entries of `0.0` or `+infinity` are "no edge". If at some
/// round no remaining vertex has a finite key, the rest of the graph is
/// unreachable and the partial forest built so far is returned.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`](matgraph_core::GraphError) if
/// `start` is out of range.
pub fn prim(graph: &DenseGraph, start: usize) -> Result<MstResult> {
    graph.check_vertex(start)?;
    let vertex_count = graph.vertex_count();

    let mut in_tree = vec![false; vertex_count];
    let mut key = vec![Weight::INFINITY; vertex_count];
    let mut parent: Vec<Option<usize>> = vec![None; vertex_count];
    key[start] = 0.0;

    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_weight = 0.0;

    for _ in 0..vertex_count {
        // Cheapest vertex not yet in the tree. Vertices with an infinite
        // key are never candidates.
        let mut next = None;
        let mut best = Weight::INFINITY;
        for vertex in 0..vertex_count {
            if !in_tree[vertex] && key[vertex] < best {
                best = key[vertex];
                next = Some(vertex);
            }
        }
        let Some(vertex) = next else {
            // Everything still outside the tree is unreachable.
            break;
        };
        in_tree[vertex] = true;

        if let Some(source) = parent[vertex] {
            edges.push(MstEdge {
                source,
                target: vertex,
                weight: key[vertex],
            });
            total_weight += key[vertex];
        }

        for (neighbor, weight) in graph.neighbors(vertex) {
            if !in_tree[neighbor] && weight < key[neighbor] {
                key[neighbor] = weight;
                parent[neighbor] = Some(vertex);
            }
        }
    }

    tracing::debug!(
        start,
        vertices = vertex_count,
        edges = edges.len(),
        total_weight,
        "prim finished"
    );

    Ok(MstResult {
        edges,
        total_weight,
        vertex_count,
    })
}

/// Builds a minimum spanning tree by globally sorted edge selection
/// (Kruskal's algorithm).
///
/// Enumerates each undirected edge once from the upper triangle of the
/// matrix, sorts ascending by weight (stable, so equal weights keep their
/// row-major enumeration order), and accepts every edge that joins two
/// different components. Stops once `n - 1` edges are accepted or the edges
/// run out; the latter means the graph is disconnected and the result is a
/// partial forest.
#[must_use]
pub fn kruskal(graph: &DenseGraph) -> MstResult {
    let vertex_count = graph.vertex_count();

    let mut candidates: Vec<(usize, usize, Weight)> = graph.edges().collect();
    candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut components = UnionFind::new(vertex_count);
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_weight = 0.0;

    for (source, target, weight) in candidates {
        if components.union(source, target) {
            edges.push(MstEdge {
                source,
                target,
                weight,
            });
            total_weight += weight;
            if edges.len() + 1 == vertex_count {
                break;
            }
        }
    }

    tracing::debug!(
        vertices = vertex_count,
        edges = edges.len(),
        total_weight,
        "kruskal finished"
    );

    MstResult {
        edges,
        total_weight,
        vertex_count,
    }
}

/// [`GraphAlgorithm`] wrapper around [`prim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimAlgorithm {
    /// Vertex the tree is grown from.
    pub start: usize,
}

impl GraphAlgorithm for PrimAlgorithm {
    type Output = MstResult;

    fn name(&self) -> &'static str {
        "prim"
    }

    fn run(&self, graph: &DenseGraph) -> Result<Self::Output> {
        prim(graph, self.start)
    }
}

/// [`GraphAlgorithm`] wrapper around [`kruskal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KruskalAlgorithm;

impl GraphAlgorithm for KruskalAlgorithm {
    type Output = MstResult;

    fn run(&self, graph: &DenseGraph) -> Result<Self::Output> {
        Ok(kruskal(graph))
    }

    fn name(&self) -> &'static str {
        "kruskal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matgraph_core::GraphError;

    /// 5-vertex sample: 0-1=2, 0-3=6, 1-2=3, 1-3=8, 1-4=5, 2-4=7, 3-4=9.
    fn sample_graph() -> DenseGraph {
        DenseGraph::from_rows(vec![
            vec![0.0, 2.0, 0.0, 6.0, 0.0],
            vec![2.0, 0.0, 3.0, 8.0, 5.0],
            vec![0.0, 3.0, 0.0, 0.0, 7.0],
            vec![6.0, 8.0, 0.0, 0.0, 9.0],
            vec![0.0, 5.0, 7.0, 9.0, 0.0],
        ])
    }

    #[test]
    fn test_kruskal_accepts_cheapest_acyclic_edges() {
        let tree = kruskal(&sample_graph());
        assert!(tree.is_spanning());
        assert_eq!(tree.total_weight(), 16.0);
        assert_eq!(
            tree.edges(),
            &[
                MstEdge { source: 0, target: 1, weight: 2.0 },
                MstEdge { source: 1, target: 2, weight: 3.0 },
                MstEdge { source: 1, target: 4, weight: 5.0 },
                MstEdge { source: 0, target: 3, weight: 6.0 },
            ]
        );
    }

    #[test]
    fn test_prim_matches_kruskal_total_weight() {
        let graph = sample_graph();
        let by_vertex = prim(&graph, 0).unwrap();
        let by_edge = kruskal(&graph);
        assert!(by_vertex.is_spanning());
        assert_eq!(by_vertex.edges().len(), 4);
        assert_eq!(by_vertex.total_weight(), by_edge.total_weight());
    }

    #[test]
    fn test_prim_emits_parent_edges_in_settle_order() {
        let tree = prim(&sample_graph(), 0).unwrap();
        assert_eq!(
            tree.edges(),
            &[
                MstEdge { source: 0, target: 1, weight: 2.0 },
                MstEdge { source: 1, target: 2, weight: 3.0 },
                MstEdge { source: 1, target: 4, weight: 5.0 },
                MstEdge { source: 0, target: 3, weight: 6.0 },
            ]
        );
    }

    #[test]
    fn test_prim_invalid_start_is_rejected() {
        let err = prim(&sample_graph(), 99).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidVertex {
                vertex: 99,
                vertex_count: 5
            }
        );
    }

    #[test]
    fn test_disconnected_graph_yields_partial_forest() {
        // Components {0, 1} and {2, 3}.
        let graph = DenseGraph::from_rows(vec![
            vec![0.0, 3.0, 0.0, 0.0],
            vec![3.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 4.0],
            vec![0.0, 0.0, 4.0, 0.0],
        ]);

        let by_edge = kruskal(&graph);
        assert!(!by_edge.is_spanning());
        assert_eq!(by_edge.edges().len(), 2);
        assert_eq!(by_edge.total_weight(), 7.0);

        // Prim only ever sees the start vertex's component.
        let by_vertex = prim(&graph, 0).unwrap();
        assert!(!by_vertex.is_spanning());
        assert_eq!(by_vertex.edges().len(), 1);
        assert_eq!(by_vertex.total_weight(), 3.0);
    }

    #[test]
    fn test_weight_ties_keep_enumeration_order() {
        // Triangle with all weights equal: the first two enumerated edges
        // (0,1) and (0,2) win, (1,2) would close the cycle.
        let graph = DenseGraph::from_rows(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ]);
        let tree = kruskal(&graph);
        assert_eq!(
            tree.edges(),
            &[
                MstEdge { source: 0, target: 1, weight: 1.0 },
                MstEdge { source: 0, target: 2, weight: 1.0 },
            ]
        );
    }

    #[test]
    fn test_single_vertex_graph() {
        let graph = DenseGraph::from_rows(vec![vec![0.0]]);
        let by_vertex = prim(&graph, 0).unwrap();
        assert!(by_vertex.edges().is_empty());
        assert_eq!(by_vertex.total_weight(), 0.0);
        assert!(by_vertex.is_spanning());

        let by_edge = kruskal(&graph);
        assert!(by_edge.edges().is_empty());
        assert_eq!(by_edge.total_weight(), 0.0);
        assert!(by_edge.is_spanning());
    }

    #[test]
    fn test_empty_graph() {
        let graph = DenseGraph::from_rows(Vec::new());
        let tree = kruskal(&graph);
        assert!(tree.edges().is_empty());
        assert!(tree.is_spanning());
        assert!(prim(&graph, 0).is_err());
    }

    #[test]
    fn test_algorithm_wrappers() {
        let graph = sample_graph();
        let by_vertex = PrimAlgorithm { start: 0 }.run(&graph).unwrap();
        let by_edge = KruskalAlgorithm.run(&graph).unwrap();
        assert_eq!(by_vertex.total_weight(), by_edge.total_weight());
        assert_eq!(PrimAlgorithm { start: 0 }.name(), "prim");
        assert_eq!(KruskalAlgorithm.name(), "kruskal");
    }
}
