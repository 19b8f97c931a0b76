//! Single-source shortest paths over dense adjacency matrices.
//!
//! Classic label-setting Dijkstra: a binary min-heap keyed by tentative
//! distance, duplicate heap entries instead of decrease-key, stale entries
//! skipped on pop. O((V + E) log V) with the heap, which for a dense matrix
//! degenerates to O(V² log V); fine at the scales this crate targets.

use std::collections::BinaryHeap;

use matgraph_core::{DenseGraph, Result, Weight};

use crate::algorithms::traits::{GraphAlgorithm, MinScored};

/// Distances and predecessors computed by [`dijkstra`].
///
/// Unreachable vertices carry a distance of `+infinity` and no predecessor.
/// The source always has distance `0.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DijkstraResult {
    source: usize,
    distances: Vec<Weight>,
    predecessors: Vec<Option<usize>>,
}

impl DijkstraResult {
    /// The source vertex the search started from.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Per-vertex shortest distances, `+infinity` where unreachable.
    #[must_use]
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// Per-vertex predecessor on a shortest path, `None` for the source and
    /// for unreachable vertices.
    #[must_use]
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Shortest distance to `target`, or `None` if `target` is out of range.
    ///
    /// An unreachable (but valid) target yields `Some(+infinity)`.
    #[must_use]
    pub fn distance_to(&self, target: usize) -> Option<Weight> {
        self.distances.get(target).copied()
    }

    /// Returns `true` if a path from the source to `target` exists.
    #[must_use]
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distances
            .get(target)
            .is_some_and(|distance| distance.is_finite())
    }

    /// Reconstructs the shortest path `source ..= target` by walking the
    /// predecessor chain backwards.
    ///
    /// Returns `None` if `target` is out of range or unreachable. The
    /// returned path has at most `vertex_count` vertices; predecessors are
    /// only ever set on a strict improvement, so the chain is acyclic.
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes shortest paths from `source` to every vertex of `graph`.
///
/// Matrix entries of `0.0` or `+infinity` are "no edge" and are never
/// relaxed. All real edge weights must be non-negative; the result is
/// unspecified if negative weights are present (they are not detected).
/// Directed matrices are supported: only the row of the settled vertex is
/// scanned.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`](matgraph_core::GraphError) if
/// `source` is out of range.
pub fn dijkstra(graph: &DenseGraph, source: usize) -> Result<DijkstraResult> {
    graph.check_vertex(source)?;
    let vertex_count = graph.vertex_count();

    let mut distances = vec![Weight::INFINITY; vertex_count];
    let mut predecessors: Vec<Option<usize>> = vec![None; vertex_count];
    distances[source] = 0.0;

    let mut queue = BinaryHeap::new();
    queue.push(MinScored(0.0, source));

    while let Some(MinScored(distance, vertex)) = queue.pop() {
        if distance > distances[vertex] {
            // Stale entry: this vertex was settled via a shorter path after
            // the entry was pushed.
            continue;
        }
        for (neighbor, weight) in graph.neighbors(vertex) {
            let candidate = distance + weight;
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                predecessors[neighbor] = Some(vertex);
                queue.push(MinScored(candidate, neighbor));
            }
        }
    }

    tracing::debug!(
        source,
        vertices = vertex_count,
        reachable = distances.iter().filter(|d| d.is_finite()).count(),
        "dijkstra settled all reachable vertices"
    );

    Ok(DijkstraResult {
        source,
        distances,
        predecessors,
    })
}

/// Shortest path from `source` to `target` as a vertex sequence, or `None`
/// if `target` is unreachable.
///
/// Convenience wrapper over [`dijkstra`] + [`DijkstraResult::path_to`] for
/// callers that want a single point-to-point path.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`](matgraph_core::GraphError) if
/// `source` or `target` is out of range.
pub fn dijkstra_path(
    graph: &DenseGraph,
    source: usize,
    target: usize,
) -> Result<Option<Vec<usize>>> {
    graph.check_vertex(target)?;
    Ok(dijkstra(graph, source)?.path_to(target))
}

/// [`GraphAlgorithm`] wrapper around [`dijkstra`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DijkstraAlgorithm {
    /// Source vertex for the search.
    pub source: usize,
}

impl GraphAlgorithm for DijkstraAlgorithm {
    type Output = DijkstraResult;

    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn run(&self, graph: &DenseGraph) -> Result<Self::Output> {
        dijkstra(graph, self.source)
    }
}
