//! Run orchestrator.
//!
//! This module coordinates one run: generate the edge list from a
//! [`RunConfig`], write it as a NED description, and report what was written.

use std::fmt;
use std::path::PathBuf;

use color_eyre::eyre::Result;
use log::info;

use crate::config::RunConfig;
use crate::ned::writer::write_ned_file;
use crate::topology::generator::generate_with_seed;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub output: PathBuf,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Random DAG with {} nodes and {} edges generated!",
            self.num_nodes, self.num_edges
        )
    }
}

/// Generate the network described by `config` and write it to `config.output`.
///
/// The configuration is validated first. The edge list lives only for the
/// duration of this call.
///
/// # Arguments
/// * `config` - Validated or unvalidated run configuration
///
/// # Returns
/// A [`RunSummary`] with node and edge counts and the path written, or the
/// validation or I/O error that stopped the run
pub fn generate_network(config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;

    let edges = generate_with_seed(config.num_nodes, config.gates(), config.seed);
    write_ned_file(&config.output, &edges, config.num_nodes, config.declared_gates())?;

    info!(
        "Wrote {} nodes and {} edges to {:?}",
        config.num_nodes,
        edges.len(),
        config.output
    );

    Ok(RunSummary {
        num_nodes: config.num_nodes,
        num_edges: edges.len(),
        output: config.output.clone(),
    })
}
