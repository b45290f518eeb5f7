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

#![forbid(unsafe_code)]

//! Maximum flow algorithms on capacitated digraphs.
//!
//! The crate provides three algorithms computing a maximal flow from a
//! source to a sink node:
//!
//! - [`maxflow::FordFulkerson`]: augmenting paths found by depth-first search,
//! - [`maxflow::ScalingFordFulkerson`]: augmenting paths with capacity scaling,
//! - [`maxflow::PushRelabel`]: the FIFO preflow-push algorithm.
//!
//! All algorithms work on a [`ResidualGraph`] that is built from an immutable
//! [`CapacityGraph`].

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, Result};

// # Data structures

pub mod capacity;
pub use self::capacity::CapacityGraph;

pub mod residual;
pub use self::residual::ResidualGraph;

// # Algorithms

pub mod maxflow;
pub mod search;

// # Input and output

pub mod edgelist;
