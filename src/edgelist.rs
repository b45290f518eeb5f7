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

//! Reading and writing graphs as plain edge lists.
//!
//! An edge list file contains one edge per line, each line consisting of
//! exactly three whitespace separated tokens
//!
//! ```text
//! <from-node> <to-node> <capacity>
//! ```
//!
//! Node names are arbitrary tokens, the capacity must be an integer. Any
//! line with a different number of tokens (including empty lines) is an
//! error. By convention the source and sink nodes are named `s` and `t`.
//!
//! # Example
//!
//! ```
//! use rs_flow::edgelist;
//! use rs_flow::maxflow::fordfulkerson;
//!
//! let g = edgelist::read::<_, i64>("s a 3\ns b 2\na t 3\nb t 2\na b 5\n".as_bytes()).unwrap();
//! assert_eq!(g.num_nodes(), 4);
//! assert_eq!(g.num_edges(), 5);
//!
//! let s = edgelist::DEFAULT_SOURCE.to_string();
//! let t = edgelist::DEFAULT_SINK.to_string();
//! assert_eq!(fordfulkerson(&g, &s, &t).unwrap().0, 5);
//! ```

use crate::capacity::CapacityGraph;
use crate::error::{Error, Result};

use std::fmt::Display;
use std::io::{BufRead, BufReader, Read, Write};
use std::str::FromStr;

/// The conventional name of the source node.
pub const DEFAULT_SOURCE: &str = "s";

/// The conventional name of the sink node.
pub const DEFAULT_SINK: &str = "t";

/// Read a capacity graph from an edge list.
///
/// Fails with [`Error::Parse`] on the first malformed line, no partial graph
/// is returned.
pub fn read<R, F>(r: R) -> Result<CapacityGraph<String, F>>
where
    R: Read,
    F: FromStr + Copy,
    F::Err: Display,
{
    let mut g = CapacityGraph::new();
    let mut reader = BufReader::new(r);
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let content = match std::str::from_utf8(&buf) {
            Ok(line) => strip_eol(line),
            Err(e) => {
                return Err(Error::Parse {
                    line: line_number,
                    content: strip_eol(&String::from_utf8_lossy(&buf)).to_string(),
                    msg: format!("invalid UTF-8: {}", e),
                })
            }
        };
        let parse_error = |msg: String| Error::Parse {
            line: line_number,
            content: content.to_string(),
            msg,
        };

        let toks: Vec<&str> = content.split_whitespace().collect();
        if toks.len() != 3 {
            return Err(parse_error(format!(
                "expected format '<u> <v> <capacity>', got {} tokens",
                toks.len()
            )));
        }

        let c = toks[2]
            .parse()
            .map_err(|e| parse_error(format!("invalid capacity '{}': {}", toks[2], e)))?;
        g.add_edge(toks[0].to_string(), toks[1].to_string(), c);
    }

    Ok(g)
}

/// Remove the line terminator.
fn strip_eol(line: &str) -> &str {
    line.trim_end_matches(|c: char| c == '\n' || c == '\r')
}

/// Read a capacity graph from a named edge list file.
pub fn read_from_file<F>(filename: &str) -> Result<CapacityGraph<String, F>>
where
    F: FromStr + Copy,
    F::Err: Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a capacity graph as edge list.
pub fn write<W, N, F>(mut w: W, g: &CapacityGraph<N, F>) -> std::io::Result<()>
where
    W: Write,
    N: Eq + std::hash::Hash + Clone + Display,
    F: Copy + Display,
{
    for (u, v, c) in g.edges() {
        writeln!(w, "{} {} {}", u, v, c)?;
    }
    Ok(())
}

/// Write a capacity graph as edge list to a named file.
pub fn write_to_file<N, F>(filename: &str, g: &CapacityGraph<N, F>) -> std::io::Result<()>
where
    N: Eq + std::hash::Hash + Clone + Display,
    F: Copy + Display,
{
    write(&mut std::fs::File::create(filename)?, g)
}

#[cfg(test)]
mod tests {
    use crate::edgelist;
    use crate::Error;
    use std::io::Cursor;

    #[test]
    fn parse_file_test() {
        let file = "s a 10
s b 10
a t 10
b t 10
";
        let g = edgelist::read::<_, i32>(Cursor::new(file)).unwrap();
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 4);

        let edges: Vec<_> = g.edges().map(|(u, v, c)| (u.as_str(), v.as_str(), c)).collect();
        assert_eq!(
            edges,
            vec![("s", "a", 10), ("s", "b", 10), ("a", "t", 10), ("b", "t", 10)]
        );
    }

    #[test]
    fn tabs_and_crlf() {
        let g = edgelist::read::<_, i64>(Cursor::new("s\tt   7\r\nt u 1")).unwrap();
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.num_nodes(), 3);
    }

    #[test]
    fn wrong_token_count() {
        match edgelist::read::<_, i32>(Cursor::new("s a 3\na b\n")) {
            Err(Error::Parse { line, content, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "a b");
            }
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn content_is_not_trimmed() {
        match edgelist::read::<_, i32>(Cursor::new("s a 3\n  a\tb \r\n")) {
            Err(Error::Parse { line, content, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "  a\tb ");
            }
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn invalid_utf8() {
        match edgelist::read::<_, i32>(Cursor::new(&b"s a 3\na \xff 2\n"[..])) {
            Err(Error::Parse { line, content, msg }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "a \u{fffd} 2");
                assert!(msg.contains("UTF-8"));
            }
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn empty_line() {
        match edgelist::read::<_, i32>(Cursor::new("s a 3\n\na t 3\n")) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn invalid_capacity() {
        match edgelist::read::<_, i32>(Cursor::new("s a x\n")) {
            Err(Error::Parse { line, content, msg }) => {
                assert_eq!(line, 1);
                assert_eq!(content, "s a x");
                assert!(msg.contains("invalid capacity"));
            }
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn negative_capacity_is_read() {
        // rejected later when the residual graph is built
        let g = edgelist::read::<_, i32>(Cursor::new("s a -3\n")).unwrap();
        assert_eq!(g.edges().next().map(|(_, _, c)| c), Some(-3));
    }

    #[test]
    fn write_test_file() {
        let g = edgelist::read::<_, i32>(Cursor::new("s a 4\na t 2\n")).unwrap();
        let mut buf = Cursor::new(Vec::new());
        edgelist::write(&mut buf, &g).unwrap();
        assert_eq!(String::from_utf8(buf.into_inner()).unwrap(), "s a 4\na t 2\n");
    }

    #[test]
    fn write_and_read_file() {
        let g = edgelist::read::<_, i64>(Cursor::new("s a 4\na b 1\nb a 2\na t 2\n")).unwrap();
        let path = std::env::temp_dir().join(format!("rs-flow-edgelist-{}.txt", std::process::id()));
        let filename = path.to_str().unwrap();

        edgelist::write_to_file(filename, &g).unwrap();
        let h = edgelist::read_from_file::<i64>(filename).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(h.num_nodes(), g.num_nodes());
        assert_eq!(h.edges().collect::<Vec<_>>(), g.edges().collect::<Vec<_>>());
    }
}
