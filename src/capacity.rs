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

//! The input of a max-flow problem.
//!
//! A [`CapacityGraph`] is a plain list of directed edges with capacities.
//! Nodes are identified by arbitrary hashable tokens and are created the
//! first time they appear as an endpoint of an edge.
//!
//! # Example
//!
//! ```
//! use rs_flow::CapacityGraph;
//!
//! let g: CapacityGraph<&str, i32> = vec![("s", "a", 3), ("a", "t", 2)].into_iter().collect();
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.num_edges(), 2);
//! assert!(g.contains(&"a"));
//! assert_eq!(g.nodes().collect::<Vec<_>>(), vec![&"s", &"a", &"t"]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FromIterator;

/// A directed graph with a capacity on each edge.
///
/// The graph is never modified by the algorithms. Each algorithm builds its
/// own [`ResidualGraph`](crate::ResidualGraph) from it.
#[derive(Clone, Debug)]
pub struct CapacityGraph<N, F> {
    /// The node tokens in order of first appearance.
    nodes: Vec<N>,
    /// Index of each node token in `nodes`.
    index: HashMap<N, usize>,
    /// The edges `(u, v, c)` in input order, endpoints as indices.
    edges: Vec<(usize, usize, F)>,
}

impl<N, F> Default for CapacityGraph<N, F> {
    fn default() -> Self {
        CapacityGraph {
            nodes: vec![],
            index: HashMap::new(),
            edges: vec![],
        }
    }
}

impl<N, F> CapacityGraph<N, F>
where
    N: Eq + Hash + Clone,
    F: Copy,
{
    /// Return a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its index.
    ///
    /// If the node already exists, its old index is returned.
    pub fn add_node(&mut self, u: N) -> usize {
        if let Some(&i) = self.index.get(&u) {
            return i;
        }
        let i = self.nodes.len();
        self.index.insert(u.clone(), i);
        self.nodes.push(u);
        i
    }

    /// Add an edge from `u` to `v` with capacity `c`.
    ///
    /// Both endpoints are added as nodes if they do not exist, yet. The
    /// capacity is not checked here, negative values are rejected when the
    /// residual graph is built.
    pub fn add_edge(&mut self, u: N, v: N, c: F) {
        let u = self.add_node(u);
        let v = self.add_node(v);
        self.edges.push((u, v, c));
    }

    /// Return `true` if `u` is a node of this graph.
    pub fn contains(&self, u: &N) -> bool {
        self.index.contains_key(u)
    }

    /// Return the index of node `u`.
    pub fn node_index(&self, u: &N) -> Option<usize> {
        self.index.get(u).cloned()
    }

    /// The number of distinct nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The number of edges, counting repeated edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return an iterator over all nodes in order of first appearance.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Return an iterator over all edges `(u, v, c)` in input order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, F)> + '_ {
        self.edges
            .iter()
            .map(move |&(u, v, c)| (&self.nodes[u], &self.nodes[v], c))
    }

    /// Return an iterator over all edges with endpoints given as indices.
    pub(crate) fn indexed_edges(&self) -> impl Iterator<Item = (usize, usize, F)> + '_ {
        self.edges.iter().cloned()
    }

    pub(crate) fn node_tokens(&self) -> &[N] {
        &self.nodes
    }
}

impl<N, F> FromIterator<(N, N, F)> for CapacityGraph<N, F>
where
    N: Eq + Hash + Clone,
    F: Copy,
{
    fn from_iter<I: IntoIterator<Item = (N, N, F)>>(iter: I) -> Self {
        let mut g = CapacityGraph::new();
        for (u, v, c) in iter {
            g.add_edge(u, v, c);
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::CapacityGraph;

    #[test]
    fn lazy_nodes() {
        let mut g = CapacityGraph::new();
        g.add_edge("s", "a", 3);
        g.add_edge("a", "b", 5);
        g.add_edge("s", "a", 4);
        g.add_edge("b", "t", 2);

        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.node_index(&"s"), Some(0));
        assert_eq!(g.node_index(&"t"), Some(3));
        assert_eq!(g.node_index(&"x"), None);
        assert_eq!(
            g.edges().collect::<Vec<_>>(),
            vec![(&"s", &"a", 3), (&"a", &"b", 5), (&"s", &"a", 4), (&"b", &"t", 2)]
        );
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = CapacityGraph::<u32, i64>::new();
        assert_eq!(g.add_node(7), 0);
        assert_eq!(g.add_node(3), 1);
        assert_eq!(g.add_node(7), 0);
        assert_eq!(g.num_nodes(), 2);
        assert_eq!(g.num_edges(), 0);
    }
}
