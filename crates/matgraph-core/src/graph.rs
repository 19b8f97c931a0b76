//! Dense adjacency-matrix graph representation.
//!
//! Chosen for O(1) edge-weight lookup at the cost of O(n²) space, which is
//! the right trade for the dense, small-to-medium graphs the algorithms in
//! `matgraph` are written for. A sparse adjacency-list variant could
//! implement the same read-only accessors without touching the algorithms.

use crate::error::{GraphError, Result};

/// Edge weight type used across all matgraph crates.
pub type Weight = f64;

/// Returns `true` if `weight` encodes a real edge.
///
/// The matrix format overloads two values as "no edge": `0.0` and
/// `+infinity`. The convention is preserved from the data this engine
/// consumes, and it has a known representational limitation: a genuine
/// zero-weight edge cannot be expressed. Callers that need zero-weight edges
/// must shift their weights before building the matrix.
#[inline]
#[must_use]
pub fn is_edge(weight: Weight) -> bool {
    weight > 0.0 && weight.is_finite()
}

/// An immutable weighted graph backed by a row-major n×n weight matrix.
///
/// Vertices are `0..n`. Entry `(u, v)` holds the weight of the edge from `u`
/// to `v`, with `0.0` or `+infinity` meaning "no edge" (see [`is_edge`]).
/// The matrix must be symmetric for the spanning-tree algorithms; shortest
/// paths work on directed matrices as well. Symmetry is a caller obligation
/// and is not checked here.
///
/// Graphs are read-only once constructed, so a single graph may be shared
/// freely across simultaneous solver calls.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseGraph {
    /// Row-major weights, length `vertex_count * vertex_count`.
    weights: Vec<Weight>,
    vertex_count: usize,
}

impl DenseGraph {
    /// Builds a graph from a square matrix given as rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from the number of rows. Shape is
    /// a caller precondition, not a recoverable condition.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Self {
        let vertex_count = rows.len();
        let mut weights = Vec::with_capacity(vertex_count * vertex_count);
        for row in rows {
            assert_eq!(
                row.len(),
                vertex_count,
                "adjacency matrix must be square"
            );
            weights.extend(row);
        }
        Self {
            weights,
            vertex_count,
        }
    }

    /// Builds a graph from an already-flattened row-major weight vector.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len() != vertex_count * vertex_count`.
    #[must_use]
    pub fn from_flat(vertex_count: usize, weights: Vec<Weight>) -> Self {
        assert_eq!(
            weights.len(),
            vertex_count * vertex_count,
            "weight vector length must be vertex_count squared"
        );
        Self {
            weights,
            vertex_count,
        }
    }

    /// Number of vertices `n`.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns `true` for the zero-vertex graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Raw matrix entry for `(u, v)`, including the "no edge" encodings.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range.
    #[must_use]
    pub fn weight(&self, u: usize, v: usize) -> Weight {
        assert!(v < self.vertex_count, "vertex index out of range");
        self.weights[u * self.vertex_count + v]
    }

    /// Returns `true` if a real edge `(u, v)` exists per [`is_edge`].
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        is_edge(self.weight(u, v))
    }

    /// Validates that `vertex` is a usable index into this graph.
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Iterates over `(target, weight)` pairs for the real edges leaving `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` is out of range.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let row = &self.weights[u * self.vertex_count..(u + 1) * self.vertex_count];
        row.iter()
            .copied()
            .enumerate()
            .filter(|&(_, weight)| is_edge(weight))
    }

    /// Iterates over the undirected edges `(u, v, weight)` with `u < v`.
    ///
    /// Only the upper triangle of the matrix is read, so each undirected
    /// edge is reported exactly once, in row-major order. Entries that fail
    /// [`is_edge`] are skipped.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        (0..self.vertex_count).flat_map(move |u| {
            ((u + 1)..self.vertex_count)
                .map(move |v| (u, v, self.weight(u, v)))
                .filter(|&(_, _, weight)| is_edge(weight))
        })
    }
}
