//! Graph I/O helpers.
//!
//! This module provides trait-based readers and writers for loading and saving
//! a [`Graph`] in the line-based edge-list format (see [`edge_list`]).

pub mod edge_list;

pub use edge_list::{EdgeListReader, EdgeListWriter, parse_edge_list, write_edge_list};

use crate::graph::Graph;
use crate::graph_error::GraphError;
use std::io::{Read, Write};

/// Trait for readers that produce a graph.
pub trait GraphReader {
    /// Parse a graph from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<Graph, GraphError>;
}

/// Trait for writers that serialize a graph.
pub trait GraphWriter {
    /// Write a graph to a writer.
    fn write<W: Write>(&self, writer: W, graph: &Graph) -> Result<(), GraphError>;
}
