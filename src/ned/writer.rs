//! NED network description writer.
//!
//! Emits a `simple Node` module type, a `network RandomNetwork` with one
//! submodule per node, and one connection statement per edge, in edge order.
//! The layout (indentation, gate comments, keywords) is fixed; downstream
//! tooling compares it byte for byte.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::topology::types::{Edge, GateCounts};

/// Name of the emitted simple module type
pub const MODULE_TYPE: &str = "Node";

/// Name of the emitted network
pub const NETWORK_NAME: &str = "RandomNetwork";

/// Prefix of every submodule instance name
pub const INSTANCE_PREFIX: &str = "node";

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "RandomNetwork.ned";

const INDENT: &str = "    ";

/// How the module type declares its gate arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateHeader {
    /// Always `in[1]` / `out[2]`, whatever gate counts the edges were drawn with
    #[default]
    Fixed,
    /// Declare the gate counts used for generation
    Parametric,
}

impl GateHeader {
    /// Gate counts to declare in the module header
    pub fn declared(self, generated: GateCounts) -> GateCounts {
        match self {
            Self::Fixed => GateCounts::default(),
            Self::Parametric => generated,
        }
    }
}

/// Name of the submodule instance for node `index`
pub fn instance_name(index: usize) -> String {
    format!("{}{}", INSTANCE_PREFIX, index)
}

/// Write the module header, submodules and connections to `sink`.
///
/// `declared` is the gate count written into the module type; see
/// [`GateHeader::declared`]. Lines go to the sink as they are produced.
pub fn write_ned<W: Write>(
    sink: &mut W,
    edges: &[Edge],
    num_nodes: usize,
    declared: GateCounts,
) -> io::Result<()> {
    sink.write_all(module_type_block(declared).as_bytes())?;
    writeln!(sink)?;

    writeln!(sink, "network {} {{", NETWORK_NAME)?;
    writeln!(sink, "{}submodules:", INDENT)?;
    for index in 0..num_nodes {
        writeln!(sink, "{}", submodule_line(index))?;
    }
    writeln!(sink, "{}connections:", INDENT)?;
    for edge in edges {
        writeln!(sink, "{0}{0}{1}", INDENT, connection_line(edge))?;
    }
    writeln!(sink, "}}")?;
    Ok(())
}

/// `simple Node { ... }` declaration, including the trailing newline
fn module_type_block(declared: GateCounts) -> String {
    let mut block = String::new();
    block.push_str(&format!("simple {} {{\n", MODULE_TYPE));
    block.push_str(&format!("{}gates:\n", INDENT));
    block.push_str(&format!(
        "{0}{0}input in[{1}];  // {1} input {2} for each node\n",
        INDENT,
        declared.inputs,
        gate_noun(declared.inputs)
    ));
    block.push_str(&format!(
        "{0}{0}output out[{1}]; // {1} output {2} for each node\n",
        INDENT,
        declared.outputs,
        gate_noun(declared.outputs)
    ));
    block.push_str("}\n");
    block
}

fn submodule_line(index: usize) -> String {
    format!("{0}{0}{1}: {2};", INDENT, instance_name(index), MODULE_TYPE)
}

fn gate_noun(count: u32) -> &'static str {
    if count == 1 {
        "gate"
    } else {
        "gates"
    }
}

/// Connection statement for one edge, without indentation
pub fn connection_line(edge: &Edge) -> String {
    format!(
        "{}.out[{}] --> {}.in[{}];",
        instance_name(edge.source),
        edge.source_gate,
        instance_name(edge.target),
        edge.target_gate
    )
}

/// Render the full description into a string.
///
/// Produces exactly the bytes [`write_ned`] streams into a sink.
pub fn render_ned(edges: &[Edge], num_nodes: usize, declared: GateCounts) -> String {
    let mut content = module_type_block(declared);
    content.push('\n');

    content.push_str(&format!("network {} {{\n", NETWORK_NAME));
    content.push_str(&format!("{}submodules:\n", INDENT));
    for index in 0..num_nodes {
        content.push_str(&submodule_line(index));
        content.push('\n');
    }
    content.push_str(&format!("{}connections:\n", INDENT));
    for edge in edges {
        content.push_str(&format!("{0}{0}{1}\n", INDENT, connection_line(edge)));
    }
    content.push_str("}\n");
    content
}

/// Create or truncate `path` and write the description into it.
///
/// The file handle is closed when this returns, on success and on error.
///
/// # Arguments
/// * `path` - Destination file, created if missing and truncated otherwise
/// * `edges` - Connections to emit, in the order given
/// * `num_nodes` - Number of `nodeN` submodules to declare
/// * `declared` - Gate counts written into the `simple Node` header
///
/// # Returns
/// `Ok(())` once the file is fully written and flushed, or the I/O error
/// wrapped with the path that failed
pub fn write_ned_file(
    path: &Path,
    edges: &[Edge],
    num_nodes: usize,
    declared: GateCounts,
) -> Result<()> {
    debug!("Opening {} for writing", path.display());
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create NED file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_ned(&mut writer, edges, num_nodes, declared)
        .wrap_err_with(|| format!("Failed to write NED file {}", path.display()))?;
    writer
        .flush()
        .wrap_err_with(|| format!("Failed to flush NED file {}", path.display()))?;

    info!(
        "NED description written to {} ({} submodules, {} connections)",
        path.display(),
        num_nodes,
        edges.len()
    );
    Ok(())
}
