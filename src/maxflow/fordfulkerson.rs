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

//! This module implements the max flow algorithm of Ford and Fulkerson.
//!
//! Augmenting paths are found by a depth-first search. The number of
//! augmentations is bounded by the flow value only, so the algorithm may be
//! slow on graphs with large capacities.
//!
//! # Example
//!
//! ```
//! use rs_flow::CapacityGraph;
//! use rs_flow::maxflow::fordfulkerson;
//!
//! let g: CapacityGraph<&str, i32> = vec![
//!     ("s", "a", 10),
//!     ("s", "b", 10),
//!     ("a", "t", 10),
//!     ("b", "t", 10),
//! ]
//! .into_iter()
//! .collect();
//!
//! let (value, augmentations) = fordfulkerson(&g, &"s", &"t").unwrap();
//! assert_eq!(value, 20);
//! assert_eq!(augmentations, 2);
//! ```

use super::augmenting::PathAugmenter;
use crate::capacity::CapacityGraph;
use crate::error::Result;
use crate::residual::ResidualGraph;
use crate::search::AugmentingPath;

use log::debug;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::num::traits::{CheckedAdd, NumAssign, Signed};

/// Max-flow algorithm of Ford and Fulkerson.
pub struct FordFulkerson<N, F> {
    data: PathAugmenter<N, F>,
}

impl<N, F> FordFulkerson<N, F>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    /// Create a new Ford-Fulkerson algorithm instance for a graph.
    pub fn new(g: &CapacityGraph<N, F>) -> Result<Self> {
        Ok(FordFulkerson {
            data: PathAugmenter::new(g)?,
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

    /// Return the net flow from `u` to `v`.
    ///
    /// See [`ResidualGraph::flow_between`] for antiparallel edges.
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
        self.data.augment_all(None, &mut observe);

        debug_assert!(self.data.g.is_consistent());
        debug!(
            "Ford-Fulkerson: flow {} after {} augmentations",
            self.data.value, self.data.cnt_augment
        );
        Ok(())
    }

    /// Return the minimal cut associated with the last maximum flow.
    pub fn mincut(&self) -> Vec<&N> {
        self.data.mincut()
    }
}

/// Solve the maxflow problem using the algorithm of Ford and Fulkerson.
///
/// The function returns the flow value and the number of augmentations.
pub fn fordfulkerson<N, F>(g: &CapacityGraph<N, F>, src: &N, snk: &N) -> Result<(F, usize)>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    let mut maxflow = FordFulkerson::new(g)?;
    maxflow.solve(src, snk)?;
    Ok((maxflow.value(), maxflow.augmentations()))
}

#[cfg(test)]
mod tests {
    use super::{fordfulkerson, FordFulkerson};
    use crate::{CapacityGraph, Error};

    #[test]
    fn test_fordfulkerson() {
        let g: CapacityGraph<&str, i32> = vec![
            ("s", "a", 3),
            ("s", "b", 2),
            ("a", "t", 3),
            ("b", "t", 2),
            ("a", "b", 5),
        ]
        .into_iter()
        .collect();
        let (value, augmentations) = fordfulkerson(&g, &"s", &"t").unwrap();
        assert_eq!(value, 5);
        assert!(augmentations >= 2);
    }

    #[test]
    fn monotonic_progress() {
        let g: CapacityGraph<&str, i64> = vec![
            ("s", "a", 1000),
            ("s", "b", 1000),
            ("a", "b", 1),
            ("a", "t", 1000),
            ("b", "t", 1000),
        ]
        .into_iter()
        .collect();
        let mut ff = FordFulkerson::new(&g).unwrap();
        let mut values = vec![];
        ff.solve_with(&"s", &"t", |path, value| {
            assert!(path.bottleneck > 0);
            values.push(value);
        })
        .unwrap();

        assert_eq!(ff.value(), 2000);
        assert_eq!(values.len(), ff.augmentations());
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values.last(), Some(&2000));
    }

    #[test]
    fn mincut() {
        let g: CapacityGraph<&str, i32> = vec![("s", "a", 5), ("a", "b", 1), ("b", "t", 5)]
            .into_iter()
            .collect();
        let mut ff = FordFulkerson::new(&g).unwrap();
        ff.solve(&"s", &"t").unwrap();
        assert_eq!(ff.value(), 1);
        assert_eq!(ff.flow(&"a", &"b"), Some(1));
        let mut cut = ff.mincut();
        cut.sort();
        assert_eq!(cut, vec![&"a", &"s"]);
    }

    #[test]
    fn repeated_solve() {
        let g: CapacityGraph<&str, i32> = vec![("s", "a", 4), ("a", "t", 3)].into_iter().collect();
        let mut ff = FordFulkerson::new(&g).unwrap();
        ff.solve(&"s", &"t").unwrap();
        ff.solve(&"s", &"t").unwrap();
        assert_eq!(ff.value(), 3);
        assert_eq!(ff.augmentations(), 1);
        // reverse direction: the reverse arcs carry no capacity
        ff.solve(&"t", &"s").unwrap();
        assert_eq!(ff.value(), 0);
    }

    #[test]
    fn missing_sink() {
        let g: CapacityGraph<&str, i32> = vec![("s", "a", 4)].into_iter().collect();
        assert!(matches!(fordfulkerson(&g, &"s", &"t"), Err(Error::InvalidEdge(_))));
    }
}
