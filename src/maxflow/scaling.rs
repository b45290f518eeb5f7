/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! This module implements the capacity scaling variant of the Ford-Fulkerson
//! algorithm.
//!
//! The algorithm works in phases with a threshold `delta`, starting with the
//! largest power of two not exceeding the largest capacity of an edge leaving
//! the source. Within a phase only arcs with residual capacity at least
//! `delta` are used for augmenting paths. Once no such path exists, `delta` is
//! halved. There are `O(log U)` phases with `O(m)` augmentations each.
//!
//! # Example
//!
//! ```
//! use rs_flow::CapacityGraph;
//! use rs_flow::maxflow::scaling;
//!
//! let g: CapacityGraph<&str, i32> = vec![
//!     ("s", "a", 1000),
//!     ("s", "b", 1000),
//!     ("a", "b", 1),
//!     ("a", "t", 1000),
//!     ("b", "t", 1000),
//! ]
//! .into_iter()
//! .collect();
//!
//! let (value, augmentations) = scaling(&g, &"s", &"t").unwrap();
//! assert_eq!(value, 2000);
//! assert_eq!(augmentations, 2);
//! ```

use super::augmenting::PathAugmenter;
use crate::capacity::CapacityGraph;
use crate::error::Result;
use crate::residual::ResidualGraph;
use crate::search::{initial_delta, AugmentingPath};

use log::debug;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::num::traits::{CheckedAdd, NumAssign, Signed};

/// Capacity scaling max-flow algorithm.
pub struct ScalingFordFulkerson<N, F> {
    data: PathAugmenter<N, F>,
    cnt_phase: usize,
}

impl<N, F> ScalingFordFulkerson<N, F>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    /// Create a new scaling algorithm instance for a graph.
    pub fn new(g: &CapacityGraph<N, F>) -> Result<Self> {
        Ok(ScalingFordFulkerson {
            data: PathAugmenter::new(g)?,
            cnt_phase: 0,
        })
    }

    /// Return the residual graph of the latest computed flow.
    pub fn as_graph(&self) -> &ResidualGraph<N, F> {
        &self.data.g
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.data.value
    }

    /// Return the number of augmentations of the latest computation.
    pub fn augmentations(&self) -> usize {
        self.data.cnt_augment
    }

    /// Return the number of scaling phases of the latest computation.
    pub fn phases(&self) -> usize {
        self.cnt_phase
    }

    /// Return the net flow from `u` to `v`.
    pub fn flow(&self, u: &N, v: &N) -> Option<F> {
        self.data.g.flow_between(u, v)
    }

    /// Solve the max flow problem from `src` to `snk`.
    pub fn solve(&mut self, src: &N, snk: &N) -> Result<()> {
        self.solve_with(src, snk, |_, _| ())
    }

    /// Solve the max flow problem from `src` to `snk`.
    ///
    /// The function `observe` is called after each augmentation with the
    /// augmenting path and the new flow value.
    pub fn solve_with<O>(&mut self, src: &N, snk: &N, mut observe: O) -> Result<()>
    where
        O: FnMut(&AugmentingPath<F>, F),
    {
        self.data.start(src, snk)?;
        self.cnt_phase = 0;

        let two = F::one() + F::one();
        let mut delta = initial_delta(&self.data.g, self.data.src);
        while delta >= F::one() {
            self.cnt_phase += 1;
            let cnt_before = self.data.cnt_augment;
            self.data.augment_all(Some(delta), &mut observe);
            debug!(
                "scaling phase delta={}: {} augmentations, flow {}",
                delta,
                self.data.cnt_augment - cnt_before,
                self.data.value
            );
            delta = delta / two;
        }

        debug_assert!(self.data.g.is_consistent());
        debug!(
            "Scaling Ford-Fulkerson: flow {} after {} augmentations in {} phases",
            self.data.value, self.data.cnt_augment, self.cnt_phase
        );
        Ok(())
    }

    /// Return the minimal cut associated with the last maximum flow.
    pub fn mincut(&self) -> Vec<&N> {
        self.data.mincut()
    }
}

/// Solve the maxflow problem using the capacity scaling algorithm.
///
/// The function returns the flow value and the number of augmentations.
pub fn scaling<N, F>(g: &CapacityGraph<N, F>, src: &N, snk: &N) -> Result<(F, usize)>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    let mut maxflow = ScalingFordFulkerson::new(g)?;
    maxflow.solve(src, snk)?;
    Ok((maxflow.value(), maxflow.augmentations()))
}

#[cfg(test)]
mod tests {
    use super::{scaling, ScalingFordFulkerson};
    use crate::CapacityGraph;

    #[test]
    fn test_scaling() {
        let g: CapacityGraph<&str, i32> = vec![
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
        let mut alg = ScalingFordFulkerson::new(&g).unwrap();
        alg.solve(&"s", &"t").unwrap();
        assert_eq!(alg.value(), 11);
        // delta = 8, 4, 2, 1
        assert_eq!(alg.phases(), 4);
        assert!(alg.as_graph().is_consistent());
    }

    #[test]
    fn source_without_capacity() {
        let g: CapacityGraph<&str, i32> = vec![("s", "a", 0), ("a", "t", 5)].into_iter().collect();
        let mut alg = ScalingFordFulkerson::new(&g).unwrap();
        alg.solve(&"s", &"t").unwrap();
        assert_eq!(alg.value(), 0);
        assert_eq!(alg.augmentations(), 0);
        assert_eq!(alg.phases(), 0);
    }

    #[test]
    fn bottlenecks_respect_delta() {
        let g: CapacityGraph<&str, i64> = vec![
            ("s", "a", 13),
            ("s", "b", 7),
            ("a", "b", 3),
            ("a", "t", 6),
            ("b", "t", 12),
        ]
        .into_iter()
        .collect();
        let mut alg = ScalingFordFulkerson::new(&g).unwrap();
        let mut bottlenecks = vec![];
        alg.solve_with(&"s", &"t", |path, _| bottlenecks.push(path.bottleneck))
            .unwrap();
        assert_eq!(alg.value(), 16);
        assert_eq!(bottlenecks.iter().sum::<i64>(), 16);
        // no path of capacity 8 exists, the first augmentation happens in phase 4
        assert_eq!(alg.phases(), 4);
        assert_eq!(bottlenecks[0], 7);
    }

    #[test]
    fn single_edge() {
        let g: CapacityGraph<&str, i32> = vec![("s", "t", 7)].into_iter().collect();
        assert_eq!(scaling(&g, &"s", &"t").unwrap(), (7, 1));
    }
}
