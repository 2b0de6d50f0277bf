//! Output module for rendering the flow graph
//!
//! This module handles:
//! - Serializing the flow graph as pretty-printed JSON (4-space indent)
//! - Writing the JSON to stdout or a file
//! - Recording crawl statistics

pub mod stats;

pub use stats::{log_statistics, CrawlStatistics};

use crate::graph::FlowGraph;
use crate::FlowMapError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Indentation used for the JSON document
const JSON_INDENT: &[u8] = b"    ";

/// Writes the flow graph as pretty-printed JSON to a writer
///
/// # Arguments
///
/// * `flow` - The flow graph to serialize
/// * `writer` - Destination for the JSON text
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the document
/// * `Err(FlowMapError)` - Serialization or IO failed
pub fn write_json<W: Write>(flow: &FlowGraph, writer: W) -> Result<(), FlowMapError> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    flow.serialize(&mut serializer)?;
    Ok(())
}

/// Renders the flow graph as a pretty-printed JSON string
pub fn to_pretty_json(flow: &FlowGraph) -> Result<String, FlowMapError> {
    let mut buffer = Vec::new();
    write_json(flow, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| FlowMapError::Input(e.to_string()))
}

/// Writes the flow graph JSON to a file, followed by a newline
pub fn write_json_file(flow: &FlowGraph, path: &Path) -> Result<(), FlowMapError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(flow, &mut writer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
