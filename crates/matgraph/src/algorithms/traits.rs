//! Shared algorithm traits and ordering adapters.

use std::cmp::Ordering;

use matgraph_core::{DenseGraph, Result};

/// A runnable graph algorithm with typed output.
///
/// Implemented by the wrapper structs ([`DijkstraAlgorithm`],
/// [`PrimAlgorithm`], [`KruskalAlgorithm`]) so that configured algorithm
/// instances can be driven uniformly, e.g. from a registry or a benchmark
/// harness.
///
/// [`DijkstraAlgorithm`]: crate::algorithms::DijkstraAlgorithm
/// [`PrimAlgorithm`]: crate::algorithms::PrimAlgorithm
/// [`KruskalAlgorithm`]: crate::algorithms::KruskalAlgorithm
pub trait GraphAlgorithm {
    /// Value produced by a successful run.
    type Output;

    /// Short name for diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Executes the algorithm against `graph`.
    fn run(&self, graph: &DenseGraph) -> Result<Self::Output>;
}

/// `MinScored<K, T>` holds a score `K` and an associated value `T`, ordered
/// by *reversed* score so that a `std::collections::BinaryHeap` (a max-heap)
/// pops the smallest score first.
///
/// Only `PartialOrd` is required of `K`: incomparable scores (NaN) are
/// ordered as if greater than everything else, so they sink to the end of
/// the queue instead of poisoning the ordering.
#[derive(Copy, Clone, Debug)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: PartialOrd, T> PartialEq for MinScored<K, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd, T> Eq for MinScored<K, T> {}

impl<K: PartialOrd, T> PartialOrd for MinScored<K, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, T> Ord for MinScored<K, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.0;
        let b = &other.0;
        if a == b {
            Ordering::Equal
        } else if a < b {
            Ordering::Greater
        } else if a > b {
            Ordering::Less
        } else if a.ne(a) && b.ne(b) {
            // Two NaN scores compare equal to each other.
            Ordering::Equal
        } else if a.ne(a) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
