//! Named sample graphs shared by the integration tests.
//!
//! All four are symmetric matrices with `0.0` meaning "no edge", passed
//! explicitly into the solvers under test.

use matgraph::DenseGraph;

/// 5 vertices: 0-1=2, 0-3=6, 1-2=3, 1-3=8, 1-4=5, 2-4=7, 3-4=9.
pub fn graph1() -> DenseGraph {
    DenseGraph::from_rows(vec![
        vec![0.0, 2.0, 0.0, 6.0, 0.0],
        vec![2.0, 0.0, 3.0, 8.0, 5.0],
        vec![0.0, 3.0, 0.0, 0.0, 7.0],
        vec![6.0, 8.0, 0.0, 0.0, 9.0],
        vec![0.0, 5.0, 7.0, 9.0, 0.0],
    ])
}

/// 6 vertices, sparse ring-ish layout.
pub fn graph2() -> DenseGraph {
    DenseGraph::from_rows(vec![
        vec![0.0, 4.0, 0.0, 0.0, 0.0, 0.0],
        vec![4.0, 0.0, 8.0, 0.0, 0.0, 0.0],
        vec![0.0, 8.0, 0.0, 7.0, 0.0, 4.0],
        vec![0.0, 0.0, 7.0, 0.0, 9.0, 14.0],
        vec![0.0, 0.0, 0.0, 9.0, 0.0, 10.0],
        vec![0.0, 0.0, 4.0, 14.0, 10.0, 0.0],
    ])
}

/// 7 vertices, several equal-weight edges.
pub fn graph3() -> DenseGraph {
    DenseGraph::from_rows(vec![
        vec![0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        vec![2.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0],
        vec![0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 0.0],
        vec![1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        vec![0.0, 0.0, 3.0, 1.0, 0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    ])
}

/// 5 vertices: 0-1=5, 0-2=3, 1-3=4, 2-3=2, 2-4=6, 3-4=1. Connected, but
/// vertex 4 is only reachable through 2 or 3.
pub fn graph4() -> DenseGraph {
    DenseGraph::from_rows(vec![
        vec![0.0, 5.0, 3.0, 0.0, 0.0],
        vec![5.0, 0.0, 0.0, 4.0, 0.0],
        vec![3.0, 0.0, 0.0, 2.0, 6.0],
        vec![0.0, 4.0, 2.0, 0.0, 1.0],
        vec![0.0, 0.0, 6.0, 1.0, 0.0],
    ])
}

/// [`graph4`] with edges (2,4) and (3,4) removed, isolating vertex 4.
pub fn graph4_disconnected() -> DenseGraph {
    DenseGraph::from_rows(vec![
        vec![0.0, 5.0, 3.0, 0.0, 0.0],
        vec![5.0, 0.0, 0.0, 4.0, 0.0],
        vec![3.0, 0.0, 0.0, 2.0, 0.0],
        vec![0.0, 4.0, 2.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0],
    ])
}
