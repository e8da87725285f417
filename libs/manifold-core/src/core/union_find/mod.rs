//! # Union-Find
//!
//! Disjoint-set forest over a dense index space, used to label the connected
//! components of a mesh's vertex graph.
//!
//! ## Example
//!
//! ```rust
//! use manifold_core::core::union_find::UnionFind;
//!
//! let mut uf = UnionFind::new(5);
//! uf.union(0, 3);
//! uf.union(4, 1);
//! let components = uf.connected_components();
//! assert_eq!(components.count, 3);
//! assert_eq!(components.labels, vec![0, 1, 2, 0, 1]);
//! ```

/// Disjoint-set forest with union by rank and path halving.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

/// Dense component labelling produced by [`UnionFind::connected_components`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    /// Number of components.
    pub count: usize,
    /// Component of each element, in `[0, count)`.
    pub labels: Vec<u32>,
}

impl UnionFind {
    /// Creates `size` singleton sets.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            rank: vec![0; size],
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `x`'s set.
    pub fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets containing `x` and `y`. Returns false if they were
    /// already the same set.
    pub fn union(&mut self, x: u32, y: u32) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        let (rx_rank, ry_rank) = (self.rank[rx as usize], self.rank[ry as usize]);
        if rx_rank < ry_rank {
            self.parent[rx as usize] = ry;
        } else if rx_rank > ry_rank {
            self.parent[ry as usize] = rx;
        } else {
            self.parent[ry as usize] = rx;
            self.rank[rx as usize] += 1;
        }
        true
    }

    /// Assigns every set a dense label.
    ///
    /// Labels follow the order in which each set's lowest element appears, so
    /// the result is deterministic for a given sequence of unions.
    pub fn connected_components(&mut self) -> ComponentLabels {
        let n = self.len();
        let mut root_label = vec![u32::MAX; n];
        let mut labels = Vec::with_capacity(n);
        let mut count = 0u32;
        for x in 0..n as u32 {
            let root = self.find(x) as usize;
            if root_label[root] == u32::MAX {
                root_label[root] = count;
                count += 1;
            }
            labels.push(root_label[root]);
        }
        ComponentLabels {
            count: count as usize,
            labels,
        }
    }
}
