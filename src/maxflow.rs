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

//! Maximum flow algorithms.
//!
//! All algorithms build their own [`ResidualGraph`](crate::ResidualGraph)
//! from the input [`CapacityGraph`] and reset it before each run, so the
//! same input may be solved by several algorithms.
//!
//! # Example
//!
//! ```
//! use rs_flow::CapacityGraph;
//! use rs_flow::maxflow::{self, Algorithm};
//!
//! let g: CapacityGraph<&str, i64> = vec![
//!     ("s", "a", 3),
//!     ("s", "b", 2),
//!     ("a", "t", 3),
//!     ("b", "t", 2),
//!     ("a", "b", 5),
//! ]
//! .into_iter()
//! .collect();
//!
//! for &alg in Algorithm::all() {
//!     let sol = maxflow::solve(alg, &g, &"s", &"t").unwrap();
//!     assert_eq!(sol.value, 5);
//!     assert_eq!(sol.augmentations.is_some(), alg != Algorithm::PushRelabel);
//! }
//! ```

mod augmenting;

pub mod fordfulkerson;
pub use self::fordfulkerson::{fordfulkerson, FordFulkerson};

pub mod scaling;
pub use self::scaling::{scaling, ScalingFordFulkerson};

pub mod pushrelabel;
pub use self::pushrelabel::{pushrelabel, PushRelabel};

use crate::capacity::CapacityGraph;
use crate::error::Result;

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::num::traits::{CheckedAdd, NumAssign, Signed};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The available max-flow algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Augmenting paths found by depth-first search.
    FordFulkerson,
    /// Augmenting paths with capacity scaling.
    Scaling,
    /// FIFO push-relabel.
    PushRelabel,
}

impl Algorithm {
    /// Return all algorithms.
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::FordFulkerson, Algorithm::Scaling, Algorithm::PushRelabel]
    }

    /// Return the short name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::FordFulkerson => "ff",
            Algorithm::Scaling => "scaling",
            Algorithm::PushRelabel => "pr",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::FordFulkerson => "Ford-Fulkerson",
            Algorithm::Scaling => "Scaling Ford-Fulkerson",
            Algorithm::PushRelabel => "Push-Relabel",
        };
        write!(fmt, "{}", name)
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ff" | "fordfulkerson" | "ford-fulkerson" => Ok(Algorithm::FordFulkerson),
            "scaling" | "sff" | "scaling-ford-fulkerson" => Ok(Algorithm::Scaling),
            "pr" | "pushrelabel" | "push-relabel" | "preflow" => Ok(Algorithm::PushRelabel),
            _ => Err(format!("unknown max-flow algorithm: {}", s)),
        }
    }
}

/// The result of a max-flow computation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Solution<F> {
    /// The algorithm that computed the flow.
    pub algorithm: Algorithm,
    /// The maximal flow value.
    pub value: F,
    /// The number of augmentations, only for augmenting path algorithms.
    pub augmentations: Option<usize>,
    /// The number of nodes of the graph.
    pub num_nodes: usize,
    /// The number of edges of the graph.
    pub num_edges: usize,
}

/// Solve the maxflow problem from `src` to `snk` with the given algorithm.
pub fn solve<N, F>(algorithm: Algorithm, g: &CapacityGraph<N, F>, src: &N, snk: &N) -> Result<Solution<F>>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    let (value, augmentations) = match algorithm {
        Algorithm::FordFulkerson => {
            let (value, cnt) = fordfulkerson(g, src, snk)?;
            (value, Some(cnt))
        }
        Algorithm::Scaling => {
            let (value, cnt) = scaling(g, src, snk)?;
            (value, Some(cnt))
        }
        Algorithm::PushRelabel => (pushrelabel(g, src, snk)?, None),
    };

    Ok(Solution {
        algorithm,
        value,
        augmentations,
        num_nodes: g.num_nodes(),
        num_edges: g.num_edges(),
    })
}

#[cfg(test)]
mod tests {
    use super::{solve, Algorithm};
    use crate::{CapacityGraph, Error};

    #[test]
    fn parse_algorithm() {
        assert_eq!("ff".parse(), Ok(Algorithm::FordFulkerson));
        assert_eq!("Scaling".parse(), Ok(Algorithm::Scaling));
        assert_eq!("push-relabel".parse(), Ok(Algorithm::PushRelabel));
        assert!("dinic".parse::<Algorithm>().is_err());
        for &alg in Algorithm::all() {
            assert_eq!(alg.name().parse(), Ok(alg));
        }
    }

    #[test]
    fn solution_counts() {
        let g: CapacityGraph<&str, i32> = vec![("s", "a", 4), ("a", "t", 3), ("s", "a", 2)]
            .into_iter()
            .collect();
        let sol = solve(Algorithm::FordFulkerson, &g, &"s", &"t").unwrap();
        assert_eq!(sol.value, 2);
        assert_eq!(sol.augmentations, Some(1));
        assert_eq!(sol.num_nodes, 3);
        assert_eq!(sol.num_edges, 3);
    }

    #[test]
    fn errors_are_propagated() {
        let g: CapacityGraph<&str, i32> = vec![("s", "a", -4), ("a", "t", 3)].into_iter().collect();
        for &alg in Algorithm::all() {
            assert!(matches!(solve(alg, &g, &"s", &"t"), Err(Error::InvalidEdge(_))));
        }
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn serialize_solution() {
        let g: CapacityGraph<&str, i32> = vec![("s", "t", 7)].into_iter().collect();
        let sol = solve(Algorithm::Scaling, &g, &"s", &"t").unwrap();
        let json = serde_json::to_string(&sol).unwrap();
        assert_eq!(
            json,
            r#"{"algorithm":"Scaling","value":7,"augmentations":1,"num_nodes":2,"num_edges":1}"#
        );
        let back: super::Solution<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sol);
    }
}
