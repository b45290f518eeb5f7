// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements a push relabel algorithm for solving max
//! flow problems.
//!
//! Active nodes are processed in FIFO order. A node whose height increased
//! while being discharged is moved to the front of the queue, nodes that
//! become active by a push are appended to the back.
//!
//! # Example
//!
//! ```
//! use rs_flow::CapacityGraph;
//! use rs_flow::maxflow::PushRelabel;
//!
//! let g: CapacityGraph<&str, i32> = vec![
//!     ("s", "a", 5),
//!     ("s", "c", 5),
//!     ("a", "b", 2),
//!     ("a", "c", 1),
//!     ("a", "d", 1),
//!     ("c", "d", 2),
//!     ("d", "b", 2),
//!     ("b", "t", 4),
//!     ("d", "t", 5),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut pr = PushRelabel::new(&g).unwrap();
//! pr.solve(&"s", &"t").unwrap();
//! assert_eq!(pr.value(), 5);
//!
//! let mut mincut = pr.mincut();
//! mincut.sort();
//! assert_eq!(mincut, vec![&"a", &"c", &"s"]);
//!
//! // flow conservation
//! for u in &["a", "b", "c", "d"] {
//!     assert_eq!(pr.excess(u), Some(0));
//! }
//! ```

use crate::capacity::CapacityGraph;
use crate::error::{Error, Result};
use crate::residual::ResidualGraph;

use log::{debug, trace};
use std::cmp::min;
use std::collections::VecDeque;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::num::traits::{CheckedAdd, NumAssign, Signed};

/// The push-relabel algorithm.
///
/// This struct contains all algorithmic working data.
pub struct PushRelabel<N, F> {
    /// The residual graph the flow problem is solved on.
    g: ResidualGraph<N, F>,
    /// Data associated with each node.
    nodes: Vec<NodeInfo<F>>,
    /// The queue of active nodes.
    queue: VecDeque<usize>,
    /// The source node.
    src: usize,
    /// The sink node.
    snk: usize,
    /// The flow value.
    value: F,
    /// The number of relabel operations performed during the algorithm.
    pub cnt_relabel: usize,
    /// The number of push operations performed during the algorithm.
    pub cnt_push: usize,
}

/// Data associated with a node.
#[derive(Clone)]
struct NodeInfo<Flow> {
    /// The current height of the node.
    height: usize,
    /// The excess of flow of the node.
    excess: Flow,
    /// Whether the node is currently in the queue of active nodes.
    queued: bool,
}

impl<Flow> NodeInfo<Flow>
where
    Flow: NumAssign,
{
    fn reset(&mut self) {
        self.height = 0;
        self.excess = Flow::zero();
        self.queued = false;
    }
}

impl<N, F> PushRelabel<N, F>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    /// Return a new push-relabel algorithm data structure for a graph.
    pub fn new(g: &CapacityGraph<N, F>) -> Result<Self> {
        let g = ResidualGraph::build(g)?;
        let n = g.num_nodes();
        Ok(PushRelabel {
            g,
            nodes: vec![
                NodeInfo {
                    height: 0,
                    excess: F::zero(),
                    queued: false,
                };
                n
            ],
            queue: VecDeque::with_capacity(n),
            src: 0,
            snk: 0,
            value: F::zero(),
            cnt_relabel: 0,
            cnt_push: 0,
        })
    }

    /// Return the residual graph of the latest computed flow.
    pub fn as_graph(&self) -> &ResidualGraph<N, F> {
        &self.g
    }

    /// Return the flow value.
    ///
    /// The function returns 0 if the flow has not been computed, yet.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the net flow from `u` to `v`.
    pub fn flow(&self, u: &N, v: &N) -> Option<F> {
        self.g.flow_between(u, v)
    }

    /// Return the current height of node `u`.
    pub fn height(&self, u: &N) -> Option<usize> {
        self.g.id(u).map(|u| self.nodes[u].height)
    }

    /// Return the current excess of node `u`.
    pub fn excess(&self, u: &N) -> Option<F> {
        self.g.id(u).map(|u| self.nodes[u].excess)
    }

    /// Run the push-relabel algorithm from some source to some sink node.
    ///
    /// Fails with [`Error::Invariant`] if some node cannot be discharged,
    /// which does not happen on valid graphs.
    pub fn solve(&mut self, src: &N, snk: &N) -> Result<()> {
        let (src, snk) = self.g.terminals(src, snk)?;
        self.src = src;
        self.snk = snk;
        self.cnt_relabel = 0;
        self.cnt_push = 0;
        self.init_preflow();

        while let Some(u) = self.queue.pop_front() {
            self.nodes[u].queued = false;
            if self.nodes[u].excess.is_zero() {
                continue;
            }

            let h_old = self.nodes[u].height;
            self.discharge(u)?;

            // Nodes that just got relabelled are handled first when they
            // become active again.
            if self.nodes[u].height > h_old && !self.nodes[u].queued {
                self.nodes[u].queued = true;
                self.queue.push_front(u);
            }
        }

        if let Some(u) = (0..self.g.num_nodes())
            .find(|&u| u != src && u != snk && !self.nodes[u].excess.is_zero())
        {
            return Err(Error::Invariant(format!(
                "node {:?} has excess {} after termination",
                self.g.node(u),
                self.nodes[u].excess
            )));
        }

        self.value = self.nodes[snk].excess;
        debug_assert!(self.g.is_consistent());
        debug_assert!(self.nodes[src].excess + self.value == F::zero());
        debug!(
            "Push-relabel: flow {} with {} pushes and {} relabels",
            self.value, self.cnt_push, self.cnt_relabel
        );
        Ok(())
    }

    /// Return the minimal cut associated with the last maximum flow.
    pub fn mincut(&self) -> Vec<&N> {
        self.g
            .source_side(self.src)
            .into_iter()
            .map(|u| self.g.node(u))
            .collect()
    }

    /// Initialize preflow algorithm.
    ///
    /// All edges leaving the source node are saturated, the source's
    /// height is set to `n`, all other heights are set to `0`.
    fn init_preflow(&mut self) {
        self.g.reset();
        for node in &mut self.nodes {
            node.reset();
        }
        self.queue.clear();
        self.value = F::zero();

        let src = self.src;
        self.nodes[src].height = self.g.num_nodes();

        // send maximal flow out of source
        for i in 0..self.g.neighs(src).len() {
            let (e, v) = self.g.neighs(src)[i];
            let ub = self.g.residual(e);
            if ub > F::zero() {
                self.g.augment(e, ub);
                self.nodes[v].excess += ub;
                self.nodes[src].excess -= ub;
                self.activate(v);
            }
        }
    }

    /// Append `v` to the queue of active nodes if it is not a terminal and
    /// not queued already.
    fn activate(&mut self, v: usize) {
        if v != self.src && v != self.snk && !self.nodes[v].queued {
            self.nodes[v].queued = true;
            self.queue.push_back(v);
        }
    }

    /// Discharges node `u`.
    ///
    /// This function does a sequence of push and relabel operations for an
    /// active node `u` until its excess reaches 0.
    fn discharge(&mut self, u: usize) -> Result<()> {
        while self.nodes[u].excess > F::zero() {
            let mut pushed = false;
            for i in 0..self.g.neighs(u).len() {
                if self.nodes[u].excess.is_zero() {
                    break;
                }
                let (e, v) = self.g.neighs(u)[i];
                if self.g.residual(e) > F::zero() && self.nodes[u].height == self.nodes[v].height + 1 {
                    self.push(u, e, v);
                    pushed = true;
                }
            }

            // no admissible edge left but node still has positive excess
            if !pushed && self.nodes[u].excess > F::zero() {
                self.relabel(u)?;
            }
        }
        Ok(())
    }

    /// The push operation.
    ///
    /// Sends as much excess as possible from `u` over the admissible arc `e`
    /// to `v`.
    fn push(&mut self, u: usize, e: usize, v: usize) {
        let df = min(self.nodes[u].excess, self.g.residual(e));

        debug_assert_eq!(self.nodes[u].height, self.nodes[v].height + 1);
        debug_assert!(df > F::zero());

        self.g.augment(e, df);
        self.nodes[u].excess -= df;
        self.nodes[v].excess += df;
        self.cnt_push += 1;
        self.activate(v);
    }

    /// The relabel operation.
    ///
    /// Raises the height of `u` to one more than the lowest neighbor reachable
    /// over an arc with positive residual capacity.
    fn relabel(&mut self, u: usize) -> Result<()> {
        debug_assert!(self.nodes[u].excess > F::zero());

        let h_old = self.nodes[u].height;
        let h_min = self
            .g
            .neighs(u)
            .iter()
            .filter(|&&(e, _)| self.g.residual(e) > F::zero())
            .map(|&(_, v)| self.nodes[v].height)
            .min()
            .ok_or_else(|| {
                Error::Invariant(format!(
                    "node {:?} has positive excess but no residual arc",
                    self.g.node(u)
                ))
            })?;
        let h_new = h_min + 1;

        debug_assert!(h_new > h_old);

        // active nodes are connected to the source, so their height is at most 2n - 1
        let n = self.g.num_nodes();
        if h_new >= 2 * n {
            return Err(Error::Invariant(format!(
                "height {} of node {:?} exceeds {}",
                h_new,
                self.g.node(u),
                2 * n - 1
            )));
        }

        trace!("relabel {:?}: {} -> {}", self.g.node(u), h_old, h_new);
        self.nodes[u].height = h_new;
        self.cnt_relabel += 1;
        Ok(())
    }
}

/// Solve the maxflow problem using the push-relabel algorithm.
///
/// The function solves the max flow problem from the source node
/// `src` to the sink node `snk` and returns the flow value.
pub fn pushrelabel<N, F>(g: &CapacityGraph<N, F>, src: &N, snk: &N) -> Result<F>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    let mut maxflow = PushRelabel::new(g)?;
    maxflow.solve(src, snk)?;
    Ok(maxflow.value())
}

#[cfg(test)]
mod tests {
    use crate::maxflow::{pushrelabel, PushRelabel};
    use crate::{CapacityGraph, Error};

    #[test]
    fn test_pushrelabel() {
        let g: CapacityGraph<&str, isize> = vec![
            ("s", "v1", 15),
            ("s", "v3", 10),
            ("v1", "v2", 6),
            ("v1", "v3", 7),
            ("v2", "t", 5),
            ("v2", "v4", 2),
            ("v3", "v2", 11),
            ("v3", "v4", 4),
            ("v4", "v2", 4),
            ("v4", "t", 20),
        ]
        .into_iter()
        .collect();

        let mut pr = PushRelabel::new(&g).unwrap();
        pr.solve(&"s", &"t").unwrap();

        assert_eq!(pr.value(), 11);
        assert_eq!(pr.excess(&"t"), Some(11));
        assert_eq!(pr.excess(&"s"), Some(-11));
        assert!(["v1", "v2", "v3", "v4"].iter().all(|u| pr.excess(u) == Some(0)));
        // (v2, v4) and (v4, v2) share an arc pair carrying the net flow
        let f = pr.flow(&"v2", &"v4").unwrap();
        assert!(-4 <= f && f <= 2);
        assert_eq!(pr.flow(&"v4", &"v2"), Some(-f));

        let rg = pr.as_graph();
        assert!(rg.is_consistent());
        for u in 0..rg.num_nodes() {
            for &(e, _) in rg.neighs(u) {
                assert!(rg.flow(e) <= rg.upper(e));
                assert_eq!(rg.flow(e), -rg.flow(rg.reverse(e)));
            }
        }
        assert_eq!(pr.height(&"s"), Some(6));
    }

    #[test]
    fn relabel_bound() {
        // a long path forces many relabels
        let names: Vec<String> = (0..20).map(|i| format!("v{}", i)).collect();
        let mut g = CapacityGraph::new();
        g.add_edge("s".to_string(), names[0].clone(), 100i64);
        for w in names.windows(2) {
            g.add_edge(w[0].clone(), w[1].clone(), 1);
        }
        g.add_edge(names[19].clone(), "t".to_string(), 100);

        let mut pr = PushRelabel::new(&g).unwrap();
        pr.solve(&"s".to_string(), &"t".to_string()).unwrap();
        let n = g.num_nodes();
        assert_eq!(pr.value(), 1);
        assert!(pr.cnt_relabel <= 2 * n * n);
        assert!(g.nodes().all(|u| pr.height(u).unwrap() < 2 * n));
    }

    #[test]
    fn disconnected_sink() {
        let g: CapacityGraph<&str, i32> = vec![("s", "a", 3), ("a", "b", 2), ("c", "t", 4)]
            .into_iter()
            .collect();
        let mut pr = PushRelabel::new(&g).unwrap();
        pr.solve(&"s", &"t").unwrap();
        assert_eq!(pr.value(), 0);
        // all excess has been returned to the source
        assert_eq!(pr.excess(&"s"), Some(0));
        assert_eq!(pr.flow(&"s", &"a"), Some(0));
    }

    #[test]
    fn source_capacity_overflow() {
        let g: CapacityGraph<&str, i32> = vec![
            ("s", "a", i32::MAX),
            ("s", "b", i32::MAX),
            ("a", "t", 1),
            ("b", "t", 1),
        ]
        .into_iter()
        .collect();
        let mut pr = PushRelabel::new(&g).unwrap();
        assert!(matches!(pr.solve(&"s", &"t"), Err(Error::InvalidEdge(_))));

        // the largest representable total capacity is fine
        let g: CapacityGraph<&str, i32> = vec![
            ("s", "a", i32::MAX - 1),
            ("s", "b", 1),
            ("a", "t", 1),
            ("b", "t", 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(pushrelabel(&g, &"s", &"t").unwrap(), 2);
    }

    #[test]
    fn repeated_solve() {
        let g: CapacityGraph<&str, i32> = vec![("s", "a", 3), ("a", "t", 2), ("s", "t", 1)]
            .into_iter()
            .collect();
        let mut pr = PushRelabel::new(&g).unwrap();
        pr.solve(&"s", &"t").unwrap();
        let relabels = pr.cnt_relabel;
        pr.solve(&"s", &"t").unwrap();
        assert_eq!(pr.value(), 3);
        assert_eq!(pr.cnt_relabel, relabels);
        assert_eq!(pushrelabel(&g, &"s", &"t").unwrap(), 3);
    }
}
