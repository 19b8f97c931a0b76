//! # matgraph
//!
//! Single-source shortest paths and minimum spanning trees over weighted
//! graphs stored as dense adjacency matrices.
//!
//! Build a [`DenseGraph`] from an n×n weight matrix (`0.0` or `+infinity`
//! meaning "no edge"), then hand it to one of the solvers in
//! [`algorithms`]. Every solver is a pure function of its inputs: no shared
//! state, no I/O, deterministic output.
//!
//! ## Quick Start
//!
//! ```rust
//! use matgraph::DenseGraph;
//! use matgraph::algorithms::{dijkstra, kruskal};
//!
//! let graph = DenseGraph::from_rows(vec![
//!     vec![0.0, 2.0, 0.0],
//!     vec![2.0, 0.0, 3.0],
//!     vec![0.0, 3.0, 0.0],
//! ]);
//!
//! let paths = dijkstra(&graph, 0)?;
//! assert_eq!(paths.distance_to(2), Some(5.0));
//! assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
//!
//! let tree = kruskal(&graph);
//! assert!(tree.is_spanning());
//! assert_eq!(tree.total_weight(), 5.0);
//! # Ok::<(), matgraph::GraphError>(())
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;

// Re-export core types - callers need these for graph construction and errors
pub use matgraph_core::{DenseGraph, GraphError, Result, UnionFind, Weight, is_edge};
