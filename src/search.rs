// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Depth-first search for augmenting paths.
//!
//! The search uses an explicit stack. Each stack entry carries the
//! bottleneck of the path leading to it and a reference to that path. Paths
//! are stored as a shared trail of `(arc, parent)` pairs, so pushing an entry
//! never copies its prefix. A node is expanded at most once, the moment it is
//! popped for the first time, hence one search takes `O(n + m)` time.
//!
//! The neighbors of a node are pushed in adjacency order, so the last
//! neighbor is explored first.
//!
//! # Example
//!
//! ```
//! use rs_flow::{CapacityGraph, ResidualGraph};
//! use rs_flow::search::{augmenting_path, scaled_augmenting_path, initial_delta};
//!
//! let cap: CapacityGraph<&str, i32> =
//!     vec![("s", "a", 3), ("s", "b", 9), ("a", "t", 3), ("b", "t", 2)].into_iter().collect();
//! let g = ResidualGraph::build(&cap).unwrap();
//! let (s, t) = g.terminals(&"s", &"t").unwrap();
//!
//! let path = augmenting_path(&g, s, t).unwrap();
//! assert_eq!(path.bottleneck, 2);
//! assert_eq!(path.nodes(&g), vec![s, g.id(&"b").unwrap(), t]);
//!
//! assert_eq!(initial_delta(&g, s), 8);
//! assert!(scaled_augmenting_path(&g, s, t, 4).is_none());
//! assert_eq!(scaled_augmenting_path(&g, s, t, 3).unwrap().bottleneck, 3);
//! ```

use crate::residual::ResidualGraph;

use std::cmp::min;
use std::fmt::Debug;
use std::hash::Hash;

use crate::num::traits::{CheckedAdd, NumAssign, Signed};

/// An augmenting path from source to sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath<F> {
    /// The arcs of the path in order from source to sink.
    pub arcs: Vec<usize>,
    /// The minimal residual capacity along the path.
    pub bottleneck: F,
}

impl<F> AugmentingPath<F> {
    /// Return the path as a sequence of `(tail, head)` pairs.
    pub fn edges<N>(&self, g: &ResidualGraph<N, F>) -> Vec<(usize, usize)>
    where
        N: Eq + Hash + Clone + Debug,
        F: NumAssign + Signed + CheckedAdd + Ord + Copy,
    {
        self.arcs.iter().map(|&e| (g.tail(e), g.head(e))).collect()
    }

    /// Return the nodes of the path, starting with the source.
    pub fn nodes<N>(&self, g: &ResidualGraph<N, F>) -> Vec<usize>
    where
        N: Eq + Hash + Clone + Debug,
        F: NumAssign + Signed + CheckedAdd + Ord + Copy,
    {
        let mut nodes = Vec::with_capacity(self.arcs.len() + 1);
        if let Some(&e) = self.arcs.first() {
            nodes.push(g.tail(e));
        }
        nodes.extend(self.arcs.iter().map(|&e| g.head(e)));
        nodes
    }
}

/// An entry of the DFS stack.
#[derive(Clone, Copy)]
struct Frontier<F> {
    /// The node reached by this entry.
    node: usize,
    /// The bottleneck of the path to `node`, `None` for the source.
    bottleneck: Option<F>,
    /// The last element of the path in the trail, `usize::max_value()` for the source.
    trail: usize,
}

/// Reusable data structures for augmenting path searches.
pub struct Dfs<F> {
    stack: Vec<Frontier<F>>,
    /// Pairs `(arc, parent)` describing all paths pushed so far.
    trail: Vec<(usize, usize)>,
    visited: Vec<bool>,
}

impl<F> Default for Dfs<F> {
    fn default() -> Self {
        Dfs {
            stack: vec![],
            trail: vec![],
            visited: vec![],
        }
    }
}

impl<F> Dfs<F>
where
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    /// Return new search data structures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a path from `src` to `snk` over arcs with positive residual
    /// capacity.
    ///
    /// Returns `None` if the sink cannot be reached.
    pub fn find<N>(&mut self, g: &ResidualGraph<N, F>, src: usize, snk: usize) -> Option<AugmentingPath<F>>
    where
        N: Eq + Hash + Clone + Debug,
    {
        self.search(g, src, snk, |r| r > F::zero())
    }

    /// Find a path from `src` to `snk` over arcs with residual capacity at
    /// least `delta`.
    ///
    /// Arcs with zero residual capacity are never used, even if `delta` is 0.
    pub fn find_scaled<N>(
        &mut self,
        g: &ResidualGraph<N, F>,
        src: usize,
        snk: usize,
        delta: F,
    ) -> Option<AugmentingPath<F>>
    where
        N: Eq + Hash + Clone + Debug,
    {
        self.search(g, src, snk, |r| r > F::zero() && r >= delta)
    }

    fn search<N, P>(
        &mut self,
        g: &ResidualGraph<N, F>,
        src: usize,
        snk: usize,
        eligible: P,
    ) -> Option<AugmentingPath<F>>
    where
        N: Eq + Hash + Clone + Debug,
        P: Fn(F) -> bool,
    {
        self.stack.clear();
        self.trail.clear();
        self.visited.clear();
        self.visited.resize(g.num_nodes(), false);

        self.stack.push(Frontier {
            node: src,
            bottleneck: None,
            trail: usize::max_value(),
        });

        while let Some(cur) = self.stack.pop() {
            if cur.node == snk {
                return cur.bottleneck.map(|bottleneck| AugmentingPath {
                    arcs: self.path(cur.trail),
                    bottleneck,
                });
            }
            if self.visited[cur.node] {
                continue;
            }
            self.visited[cur.node] = true;

            for &(e, v) in g.neighs(cur.node) {
                let r = g.residual(e);
                if !self.visited[v] && eligible(r) {
                    self.trail.push((e, cur.trail));
                    self.stack.push(Frontier {
                        node: v,
                        bottleneck: Some(cur.bottleneck.map_or(r, |b| min(b, r))),
                        trail: self.trail.len() - 1,
                    });
                }
            }
        }

        None
    }

    /// Collect the arcs of the path ending in trail element `last`.
    fn path(&self, mut last: usize) -> Vec<usize> {
        let mut arcs = vec![];
        while last != usize::max_value() {
            let (e, parent) = self.trail[last];
            arcs.push(e);
            last = parent;
        }
        arcs.reverse();
        debug_assert!(arcs.len() < self.visited.len());
        arcs
    }
}

/// Find an augmenting path from `src` to `snk` with positive residual
/// capacity on every arc.
pub fn augmenting_path<N, F>(g: &ResidualGraph<N, F>, src: usize, snk: usize) -> Option<AugmentingPath<F>>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    Dfs::new().find(g, src, snk)
}

/// Find an augmenting path from `src` to `snk` with residual capacity at
/// least `delta` on every arc.
pub fn scaled_augmenting_path<N, F>(
    g: &ResidualGraph<N, F>,
    src: usize,
    snk: usize,
    delta: F,
) -> Option<AugmentingPath<F>>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    Dfs::new().find_scaled(g, src, snk, delta)
}

/// Return the largest power of two not exceeding the largest capacity of an
/// arc leaving `src`.
///
/// Returns 0 if no arc leaving `src` has positive capacity.
pub fn initial_delta<N, F>(g: &ResidualGraph<N, F>, src: usize) -> F
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    let maxcap = g
        .neighs(src)
        .iter()
        .map(|&(e, _)| g.upper(e))
        .max()
        .unwrap_or_else(F::zero);
    if maxcap <= F::zero() {
        return F::zero();
    }

    let mut delta = F::one();
    // `delta <= maxcap - delta` avoids overflowing `delta + delta`
    while delta <= maxcap - delta {
        delta += delta;
    }
    delta
}
