//! Edge-list graph reader and writer.
//!
//! # Format
//! - First non-blank line: the vertex count `n`.
//! - Every further non-blank line: two whitespace-separated vertex ids `u v`,
//!   both in `0..n`.
//! - Lines starting with `#` are comments.
//!
//! # Rejected input
//! Every problem is reported as [`GraphError::InvalidInput`] carrying the
//! 1-based line number: missing or non-integer count, a line without exactly
//! two ids, a non-integer id, an id outside `0..n`, a self-loop, or an edge that
//! was already listed.

use super::{GraphReader, GraphWriter};
use crate::debug_invariants::DebugInvariants;
use crate::graph::{Graph, VertexId};
use crate::graph_error::GraphError;
use std::io::{Read, Write};

/// Reader for the edge-list format.
#[derive(Debug, Default, Clone)]
pub struct EdgeListReader;

/// Writer for the edge-list format.
#[derive(Debug, Default, Clone)]
pub struct EdgeListWriter;

impl EdgeListReader {
    fn parse_count(line_no: usize, raw: &str) -> Result<usize, GraphError> {
        raw.parse::<usize>().map_err(|_| GraphError::InvalidInput {
            line: line_no,
            reason: format!("invalid vertex count: {raw}"),
        })
    }

    fn parse_vertex(line_no: usize, raw: &str, n: usize) -> Result<VertexId, GraphError> {
        let v = raw.parse::<VertexId>().map_err(|_| GraphError::InvalidInput {
            line: line_no,
            reason: format!("invalid vertex id: {raw}"),
        })?;
        if v >= n {
            return Err(GraphError::InvalidInput {
                line: line_no,
                reason: format!("vertex {v} is outside 0..{n}"),
            });
        }
        Ok(v)
    }

    /// Parse a graph from an in-memory description.
    pub fn parse(&self, contents: &str) -> Result<Graph, GraphError> {
        let mut lines = contents
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let (count_line, raw_count) = lines.next().ok_or_else(|| GraphError::InvalidInput {
            line: 1,
            reason: "missing vertex count".into(),
        })?;
        let n = Self::parse_count(count_line, raw_count)?;
        let mut graph = Graph::new(n);

        for (line_no, line) in lines {
            let parts: Vec<&str> = line.split_whitespace().collect();
            let [a, b] = parts.as_slice() else {
                return Err(GraphError::InvalidInput {
                    line: line_no,
                    reason: format!("expected two vertex ids, found {}", parts.len()),
                });
            };
            let u = Self::parse_vertex(line_no, a, n)?;
            let v = Self::parse_vertex(line_no, b, n)?;
            if u == v {
                return Err(GraphError::InvalidInput {
                    line: line_no,
                    reason: format!("self-loop on vertex {u}"),
                });
            }
            let inserted = graph.add_edge(u, v).map_err(|e| GraphError::InvalidInput {
                line: line_no,
                reason: e.to_string(),
            })?;
            if !inserted {
                return Err(GraphError::InvalidInput {
                    line: line_no,
                    reason: format!("duplicate edge ({u}, {v})"),
                });
            }
        }
        graph.debug_assert_invariants();
        log::trace!(
            "parsed edge list: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl GraphReader for EdgeListReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<Graph, GraphError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        self.parse(&contents)
    }
}

impl GraphWriter for EdgeListWriter {
    fn write<W: Write>(&self, mut writer: W, graph: &Graph) -> Result<(), GraphError> {
        writeln!(writer, "{}", graph.vertex_count())?;
        for (u, v) in graph.edges() {
            writeln!(writer, "{u} {v}")?;
        }
        Ok(())
    }
}

/// Parse an edge-list description held in memory.
pub fn parse_edge_list(contents: &str) -> Result<Graph, GraphError> {
    EdgeListReader.parse(contents)
}

/// Write `graph` in edge-list format.
pub fn write_edge_list<W: Write>(graph: &Graph, writer: W) -> Result<(), GraphError> {
    EdgeListWriter.write(writer, graph)
}
