//! Graph algorithms for matgraph.
//!
//! ## Algorithm Categories
//!
//! - [`shortest_path`] - Dijkstra's label-setting search with predecessor
//!   tracking and path reconstruction
//! - [`mst`] - Minimum spanning trees, vertex-greedy (Prim) and edge-greedy
//!   (Kruskal)
//!
//! ## Usage
//!
//! ```rust
//! use matgraph::DenseGraph;
//! use matgraph::algorithms::{dijkstra, kruskal, prim};
//!
//! let graph = DenseGraph::from_rows(vec![
//!     vec![0.0, 4.0, 1.0],
//!     vec![4.0, 0.0, 2.0],
//!     vec![1.0, 2.0, 0.0],
//! ]);
//!
//! let paths = dijkstra(&graph, 0)?;
//! assert_eq!(paths.distance_to(1), Some(3.0));
//!
//! let by_vertex = prim(&graph, 0)?;
//! let by_edge = kruskal(&graph);
//! assert_eq!(by_vertex.total_weight(), by_edge.total_weight());
//! # Ok::<(), matgraph::GraphError>(())
//! ```

pub mod mst;
pub mod shortest_path;
mod traits;

// Core traits
pub use traits::{GraphAlgorithm, MinScored};

// Shortest path algorithms
pub use shortest_path::{DijkstraResult, dijkstra, dijkstra_path};

// Minimum Spanning Tree algorithms
pub use mst::{MstEdge, MstResult, kruskal, prim};

// Algorithm wrappers (uniform, configured-instance form of the above)
pub use mst::{KruskalAlgorithm, PrimAlgorithm};
pub use shortest_path::DijkstraAlgorithm;
