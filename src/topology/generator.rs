//! Random DAG generation.
//!
//! Every pair `(i, j)` with `i < j` is visited once, in order of increasing
//! `i` then increasing `j`. Each visit draws one float; below
//! [`EDGE_PROBABILITY`] the pair becomes an edge and two more draws pick the
//! source output gate and then the destination input gate. Because edges only
//! run from lower to higher indices the result is acyclic without any check.

use log::{debug, info};
use rand::RngCore;

use crate::topology::sampling::{index_below, seeded_stream, unit_interval};
use crate::topology::types::{Edge, GateCounts};

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u32 = 12345;

/// Probability that any given node pair is connected
pub const EDGE_PROBABILITY: f64 = 0.3;

/// Generate a DAG over `num_nodes` nodes with the default seed.
///
/// Repeated calls with the same arguments return identical edge lists.
pub fn generate(num_nodes: usize, gates: GateCounts) -> Vec<Edge> {
    generate_with_seed(num_nodes, gates, DEFAULT_SEED)
}

/// Generate a DAG from a fresh stream keyed with `seed`
///
/// # Arguments
/// * `num_nodes` - Number of nodes; indices run over `[0, num_nodes)`
/// * `gates` - Input and output gate counts every node exposes
/// * `seed` - Key for the stream, owned by this call alone
///
/// # Returns
/// Edges in generation order: increasing source index, then increasing target
pub fn generate_with_seed(num_nodes: usize, gates: GateCounts, seed: u32) -> Vec<Edge> {
    info!(
        "Generating random DAG: {} nodes, {} input / {} output gates, seed {}",
        num_nodes, gates.inputs, gates.outputs, seed
    );
    let mut rng = seeded_stream(seed);
    generate_with_rng(num_nodes, gates, &mut rng)
}

/// Generate a DAG drawing from a caller-owned stream.
///
/// The stream is advanced; nothing else is touched.
pub fn generate_with_rng<R: RngCore + ?Sized>(
    num_nodes: usize,
    gates: GateCounts,
    rng: &mut R,
) -> Vec<Edge> {
    let mut edges = Vec::new();

    for source in 0..num_nodes {
        for target in (source + 1)..num_nodes {
            if unit_interval(rng) < EDGE_PROBABILITY {
                let source_gate = index_below(rng, gates.outputs);
                let target_gate = index_below(rng, gates.inputs);
                edges.push(Edge::new(source, source_gate, target, target_gate));
            }
        }
    }

    debug!("Generated {} edges over {} nodes", edges.len(), num_nodes);
    edges
}

/// Expected edge count for `num_nodes` nodes
pub fn expected_edge_count(num_nodes: usize) -> f64 {
    pair_count(num_nodes) as f64 * EDGE_PROBABILITY
}

/// Standard deviation of the edge count for `num_nodes` nodes
pub fn edge_count_std_dev(num_nodes: usize) -> f64 {
    let pairs = pair_count(num_nodes) as f64;
    (pairs * EDGE_PROBABILITY * (1.0 - EDGE_PROBABILITY)).sqrt()
}

/// Number of pairs `i < j`; widened so that no `usize` node count overflows
fn pair_count(num_nodes: usize) -> u128 {
    let n = num_nodes as u128;
    n * n.saturating_sub(1) / 2
}
