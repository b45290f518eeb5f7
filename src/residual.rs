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

//! The residual graph shared by all max-flow algorithms.
//!
//! Nodes are stored in an arena and addressed by their index. Each input
//! edge `(u, v)` corresponds to a pair of arcs with ids `e` and `e ^ 1`, the
//! forward arc `(u, v)` and the reverse arc `(v, u)`. If the input contains
//! both `(u, v)` and `(v, u)`, both edges share one arc pair and the reverse
//! arc gets the capacity of the antiparallel edge, otherwise the reverse arc
//! has capacity 0.
//!
//! The only mutation is [`ResidualGraph::augment`], which moves residual
//! capacity from an arc to its reverse arc. Hence
//! `residual(e) + residual(e ^ 1)` stays constant, i.e. the flow is skew
//! symmetric: `flow(e) == -flow(e ^ 1)`.
//!
//! # Example
//!
//! ```
//! use rs_flow::{CapacityGraph, ResidualGraph};
//!
//! let cap: CapacityGraph<&str, i32> = vec![("s", "a", 4), ("a", "t", 3)].into_iter().collect();
//! let mut g = ResidualGraph::build(&cap).unwrap();
//! let (s, t) = g.terminals(&"s", &"t").unwrap();
//! assert_eq!(g.num_arcs(), 4);
//!
//! let (e, a) = g.neighs(s)[0];
//! assert_eq!(g.node(a), &"a");
//! g.augment(e, 3);
//! assert_eq!(g.residual(e), 1);
//! assert_eq!(g.residual(g.reverse(e)), 3);
//! assert_eq!(g.flow_between(&"s", &"a"), Some(3));
//! assert_eq!(g.flow_between(&"a", &"s"), Some(-3));
//! assert_eq!(g.flow_between(&"s", &"t"), None);
//! # let _ = t;
//! ```

use crate::capacity::CapacityGraph;
use crate::error::{Error, Result};

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::num::traits::{CheckedAdd, NumAssign, Signed};

/// A residual graph with integral capacities.
#[derive(Clone, Debug)]
pub struct ResidualGraph<N, F> {
    /// The node tokens, indexed by node id.
    nodes: Vec<N>,
    /// The node id of each token.
    index: HashMap<N, usize>,
    /// The arcs `(e, v)` leaving each node, in input order.
    neighs: Vec<Vec<(usize, usize)>>,
    /// The head node of each arc.
    heads: Vec<usize>,
    /// The original capacity of each arc.
    upper: Vec<F>,
    /// The current residual capacity of each arc.
    residual: Vec<F>,
    /// The number of input edges.
    num_edges: usize,
}

impl<N, F> ResidualGraph<N, F>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    /// Build the residual graph of a capacity graph.
    ///
    /// The residual capacity of each arc equals its capacity, i.e. the
    /// represented flow is zero. If an edge is given more than once, the
    /// last capacity is used.
    ///
    /// Fails with [`Error::InvalidEdge`] if some capacity is negative, if
    /// the graph contains a loop or if the capacities of an edge and its
    /// antiparallel edge do not sum up to a representable value.
    pub fn build(cap: &CapacityGraph<N, F>) -> Result<Self> {
        let nodes = cap.node_tokens().to_vec();
        let n = nodes.len();
        let index = nodes.iter().cloned().enumerate().map(|(i, u)| (u, i)).collect();

        let mut neighs = vec![vec![]; n];
        let mut heads = Vec::with_capacity(cap.num_edges() * 2);
        let mut upper = Vec::with_capacity(cap.num_edges() * 2);
        let mut arcs = HashMap::with_capacity(cap.num_edges() * 2);

        for (u, v, c) in cap.indexed_edges() {
            if c < F::zero() {
                return Err(Error::InvalidEdge(format!(
                    "negative capacity on edge ({:?}, {:?})",
                    nodes[u], nodes[v]
                )));
            }
            if u == v {
                return Err(Error::InvalidEdge(format!("invalid loop ({:?}, {:?})", nodes[u], nodes[v])));
            }

            if let Some(&e) = arcs.get(&(u, v)) {
                // either a repeated edge or the reverse arc of an antiparallel edge
                upper[e] = c;
            } else {
                let e = heads.len();
                heads.push(v);
                upper.push(c);
                heads.push(u);
                upper.push(F::zero());
                arcs.insert((u, v), e);
                arcs.insert((v, u), e ^ 1);
                neighs[u].push((e, v));
                neighs[v].push((e ^ 1, u));
            }
        }

        // the residual capacity of an arc may grow to the capacity of its pair
        for e in (0..upper.len()).step_by(2) {
            if upper[e].checked_add(&upper[e ^ 1]).is_none() {
                return Err(Error::InvalidEdge(format!(
                    "capacities of ({:?}, {:?}) and its antiparallel edge overflow",
                    nodes[heads[e ^ 1]], nodes[heads[e]]
                )));
            }
        }

        Ok(ResidualGraph {
            nodes,
            index,
            neighs,
            heads,
            residual: upper.clone(),
            upper,
            num_edges: cap.num_edges(),
        })
    }

    /// Reset all residual capacities to the original capacities.
    ///
    /// This removes the flow of any previous computation.
    pub fn reset(&mut self) {
        self.residual.copy_from_slice(&self.upper);
    }

    /// The number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The number of arcs, forward and reverse.
    pub fn num_arcs(&self) -> usize {
        self.heads.len()
    }

    /// The number of edges of the input graph.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Return the token of node `u`.
    pub fn node(&self, u: usize) -> &N {
        &self.nodes[u]
    }

    /// Return the id of the node with token `u`.
    pub fn id(&self, u: &N) -> Option<usize> {
        self.index.get(u).cloned()
    }

    /// Return the ids of source and sink.
    ///
    /// Fails with [`Error::InvalidEdge`] if one of them is not a node of the
    /// graph, if both are equal or if the total capacity leaving the source
    /// is not representable. The latter bounds every flow value and every
    /// excess, so no algorithm overflows once the terminals are accepted.
    pub fn terminals(&self, src: &N, snk: &N) -> Result<(usize, usize)> {
        let s = self
            .id(src)
            .ok_or_else(|| Error::InvalidEdge(format!("source node {:?} does not exist", src)))?;
        let t = self
            .id(snk)
            .ok_or_else(|| Error::InvalidEdge(format!("sink node {:?} does not exist", snk)))?;
        if s == t {
            return Err(Error::InvalidEdge(format!("source and sink node must not be equal: {:?}", src)));
        }
        self.neighs[s]
            .iter()
            .try_fold(F::zero(), |sum, &(e, _)| sum.checked_add(&self.upper[e]))
            .ok_or_else(|| {
                Error::InvalidEdge(format!("total capacity leaving source {:?} overflows", src))
            })?;
        Ok((s, t))
    }

    /// The arcs `(e, v)` leaving node `u`.
    pub fn neighs(&self, u: usize) -> &[(usize, usize)] {
        &self.neighs[u]
    }

    /// The head of arc `e`.
    pub fn head(&self, e: usize) -> usize {
        self.heads[e]
    }

    /// The tail of arc `e`.
    pub fn tail(&self, e: usize) -> usize {
        self.heads[e ^ 1]
    }

    /// The reverse arc of `e`.
    pub fn reverse(&self, e: usize) -> usize {
        e ^ 1
    }

    /// The original capacity of arc `e`.
    pub fn upper(&self, e: usize) -> F {
        self.upper[e]
    }

    /// The current residual capacity of arc `e`.
    pub fn residual(&self, e: usize) -> F {
        self.residual[e]
    }

    /// The current (net) flow over arc `e`.
    ///
    /// The value is negative if flow is sent over the reverse arc.
    pub fn flow(&self, e: usize) -> F {
        self.upper[e] - self.residual[e]
    }

    /// The current net flow from `u` to `v`.
    ///
    /// If both `(u, v)` and `(v, u)` are edges, they share one arc pair and
    /// the value is the flow over `(u, v)` minus the flow over `(v, u)`. It
    /// may thus be negative, but never below `-upper(v, u)`.
    ///
    /// Returns `None` if neither `(u, v)` nor `(v, u)` is an edge.
    pub fn flow_between(&self, u: &N, v: &N) -> Option<F> {
        let u = self.id(u)?;
        let v = self.id(v)?;
        self.neighs[u]
            .iter()
            .find(|&&(_, w)| w == v)
            .map(|&(e, _)| self.flow(e))
    }

    /// The net flow leaving node `u`.
    ///
    /// This is zero for every node except source and sink once a maximal
    /// flow has been computed.
    pub fn net_outflow(&self, u: usize) -> F {
        self.neighs[u].iter().fold(F::zero(), |sum, &(e, _)| sum + self.flow(e))
    }

    /// Send `df` units of flow over arc `e`.
    ///
    /// The residual capacity of `e` decreases and the residual capacity of
    /// its reverse arc increases by the same amount.
    pub fn augment(&mut self, e: usize, df: F) {
        debug_assert!(df <= self.residual[e], "augmentation exceeds residual capacity");
        self.residual[e] -= df;
        self.residual[e ^ 1] += df;
    }

    /// Send `df` units of flow along a path of arcs.
    pub fn augment_path(&mut self, arcs: &[usize], df: F) {
        for &e in arcs {
            self.augment(e, df);
        }
    }

    /// Return `true` if every arc pair still carries its original total
    /// capacity and no residual capacity is negative.
    pub fn is_consistent(&self) -> bool {
        (0..self.num_arcs()).step_by(2).all(|e| {
            self.residual[e] + self.residual[e ^ 1] == self.upper[e] + self.upper[e ^ 1]
                && self.residual[e] >= F::zero()
                && self.residual[e ^ 1] >= F::zero()
        })
    }

    /// Return the nodes reachable from `src` over arcs with positive
    /// residual capacity.
    ///
    /// After a maximal flow has been computed this is the source side of a
    /// minimal cut. The nodes are returned in BFS order.
    pub fn source_side(&self, src: usize) -> Vec<usize> {
        let mut seen = vec![false; self.num_nodes()];
        let mut queue = VecDeque::new();
        let mut side = vec![src];
        seen[src] = true;
        queue.push_back(src);
        while let Some(u) = queue.pop_front() {
            for &(e, v) in &self.neighs[u] {
                if !seen[v] && self.residual[e] > F::zero() {
                    seen[v] = true;
                    side.push(v);
                    queue.push_back(v);
                }
            }
        }
        side
    }
}
