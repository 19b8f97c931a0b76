//! # matgraph-core
//!
//! Foundation layer for matgraph: the dense adjacency-matrix graph
//! representation, the union-find structure used by the spanning-tree
//! algorithms, and shared error types.
//!
//! This crate has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`graph`] - The [`DenseGraph`] adjacency-matrix type and the
//!   edge-encoding convention
//! - [`union_find`] - Disjoint-set structure with path compression and
//!   union by rank
//! - [`error`] - Error and result types shared by the matgraph crates

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod graph;
pub mod union_find;

// Re-export commonly used types at crate root
pub use error::{GraphError, Result};
pub use graph::{DenseGraph, Weight, is_edge};
pub use union_find::UnionFind;
