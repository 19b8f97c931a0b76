//! Union-find (disjoint-set) structure with path compression and union by
//! rank.
//!
//! Used by Kruskal's algorithm to answer "would this edge close a cycle" in
//! near-constant amortized time, but exposed publicly because it is useful on
//! its own for connectivity queries.

/// A partition of `0..n` into disjoint sets.
///
/// [`find`](UnionFind::find) compresses every node on the visited path to
/// point directly at the root, iteratively (no recursion, so deep parent
/// chains cannot overflow the stack). [`union`](UnionFind::union) attaches
/// the lower-ranked root under the higher-ranked one; on equal ranks the
/// first argument's root is attached under the second's, whose rank then
/// grows by one.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets, one per element of `0..n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Every node visited on the way up is re-pointed directly at the root,
    /// so repeated queries over the same chain are amortized near-O(1).
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Returns `true` if `a` and `b` are currently in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if the two were already in the same set (no merge
    /// happened). Kruskal relies on this return value to reject
    /// cycle-forming edges.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Equal => {
                self.parent[root_a] = root_b;
                self.rank[root_b] += 1;
            }
        }
        self.sets -= 1;
        true
    }
}
