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

//! Errors raised while reading graphs and computing flows.

use std::io;
use thiserror::Error;

/// Error of a max-flow computation.
///
/// All errors are deterministic functions of the input, so none of them is
/// worth retrying with the same graph.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a graph file failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A line of an edge list could not be parsed.
    #[error("Format error on line {line}: '{content}': {msg}")]
    Parse { line: usize, content: String, msg: String },

    /// The capacity graph is not a valid max-flow instance.
    #[error("Invalid edge: {0}")]
    InvalidEdge(String),

    /// An internal precondition of an algorithm has been violated.
    #[error("Algorithm invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
