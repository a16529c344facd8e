//! Reader for NED descriptions produced by the writer.
//!
//! This is not a general NED parser. It recognises the fixed layout the
//! writer emits (gate declarations, `nodeN: Node;` submodules and
//! `nodeA.out[g] --> nodeB.in[h];` connections) and ignores everything else.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use color_eyre::eyre::{Result, WrapErr};
use regex::Regex;

use crate::topology::types::{Edge, GateCounts};

/// Errors that can occur while reading a NED description
#[derive(Debug, thiserror::Error)]
pub enum NedParseError {
    #[error("No network declaration found")]
    MissingNetwork,

    #[error("Module type does not declare {gate} gates")]
    MissingGates { gate: &'static str },

    #[error("Submodule on line {line} is {found}, expected node{expected}")]
    UnorderedSubmodule {
        line: usize,
        expected: usize,
        found: String,
    },

    #[error("Number '{value}' on line {line} is out of range")]
    InvalidNumber { line: usize, value: String },
}

/// Compiled regex patterns for the emitted layout
struct NedPatterns {
    /// Match: "input in[N];"
    input_gates: Regex,
    /// Match: "output out[N];"
    output_gates: Regex,
    /// Match: "network NAME {"
    network: Regex,
    /// Match: "nodeN: Node;"
    submodule: Regex,
    /// Match: "nodeA.out[G] --> nodeB.in[H];"
    connection: Regex,
}

impl NedPatterns {
    fn new() -> Self {
        Self {
            input_gates: Regex::new(r"^\s*input\s+in\[(\d+)\];")
                .expect("Invalid input_gates regex"),
            output_gates: Regex::new(r"^\s*output\s+out\[(\d+)\];")
                .expect("Invalid output_gates regex"),
            network: Regex::new(r"^\s*network\s+(\w+)\s*\{")
                .expect("Invalid network regex"),
            submodule: Regex::new(r"^\s*(node(\d+))\s*:\s*Node\s*;")
                .expect("Invalid submodule regex"),
            connection: Regex::new(
                r"^\s*node(\d+)\.out\[(\d+)\]\s*-->\s*node(\d+)\.in\[(\d+)\]\s*;"
            ).expect("Invalid connection regex"),
        }
    }
}

static PATTERNS: LazyLock<NedPatterns> = LazyLock::new(NedPatterns::new);

/// Contents of a description read back from text
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNetwork {
    /// Network name from the `network` declaration
    pub name: String,
    /// Number of `nodeN: Node;` submodules
    pub num_nodes: usize,
    /// Gate counts declared on the module type
    pub declared: GateCounts,
    /// Connections in file order
    pub edges: Vec<Edge>,
}

fn parse_number<T: FromStr>(value: &str, line: usize) -> Result<T, NedParseError> {
    value.parse().map_err(|_| NedParseError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn parse_connection(text: &str, line: usize) -> Result<Option<Edge>, NedParseError> {
    let Some(caps) = PATTERNS.connection.captures(text) else {
        return Ok(None);
    };
    Ok(Some(Edge::new(
        parse_number(&caps[1], line)?,
        parse_number(&caps[2], line)?,
        parse_number(&caps[3], line)?,
        parse_number(&caps[4], line)?,
    )))
}

/// Collect every connection statement in `text`, in file order
pub fn parse_connections(text: &str) -> Result<Vec<Edge>, NedParseError> {
    let mut edges = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(edge) = parse_connection(line, index + 1)? {
            edges.push(edge);
        }
    }
    Ok(edges)
}

/// Read the whole description: header gates, submodules and connections.
///
/// Submodules must be numbered `node0, node1, ...` without gaps.
pub fn parse_network(text: &str) -> Result<ParsedNetwork, NedParseError> {
    let mut inputs = None;
    let mut outputs = None;
    let mut name = None;
    let mut num_nodes = 0usize;
    let mut edges = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;

        if let Some(caps) = PATTERNS.input_gates.captures(line) {
            inputs = Some(parse_number(&caps[1], line_no)?);
        } else if let Some(caps) = PATTERNS.output_gates.captures(line) {
            outputs = Some(parse_number(&caps[1], line_no)?);
        } else if let Some(caps) = PATTERNS.network.captures(line) {
            name = Some(caps[1].to_string());
        } else if let Some(caps) = PATTERNS.submodule.captures(line) {
            let found: usize = parse_number(&caps[2], line_no)?;
            if found != num_nodes {
                return Err(NedParseError::UnorderedSubmodule {
                    line: line_no,
                    expected: num_nodes,
                    found: caps[1].to_string(),
                });
            }
            num_nodes += 1;
        } else if let Some(edge) = parse_connection(line, line_no)? {
            edges.push(edge);
        }
    }

    let name = name.ok_or(NedParseError::MissingNetwork)?;
    let inputs = inputs.ok_or(NedParseError::MissingGates { gate: "input" })?;
    let outputs = outputs.ok_or(NedParseError::MissingGates { gate: "output" })?;

    Ok(ParsedNetwork {
        name,
        num_nodes,
        declared: GateCounts::new(inputs, outputs),
        edges,
    })
}

/// Check that the connections in `text` reproduce `edges` exactly.
///
/// Order matters and duplicates count; extra, missing or reordered
/// connections all return `Ok(false)`.
pub fn verify_round_trip(edges: &[Edge], text: &str) -> Result<bool, NedParseError> {
    let parsed = parse_connections(text)?;
    if parsed.as_slice() != edges {
        log::warn!(
            "Round trip mismatch: {} edges expected, {} connections parsed",
            edges.len(),
            parsed.len()
        );
        return Ok(false);
    }
    Ok(true)
}

/// Read and parse a description from disk
pub fn read_ned_file(path: &Path) -> Result<ParsedNetwork> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read NED file {}", path.display()))?;
    let network = parse_network(&text)
        .wrap_err_with(|| format!("Failed to parse NED file {}", path.display()))?;
    log::debug!(
        "Read {} with {} submodules and {} connections",
        path.display(),
        network.num_nodes,
        network.edges.len()
    );
    Ok(network)
}
