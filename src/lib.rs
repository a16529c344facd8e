//! # NedGen - Random DAG topologies for NED network descriptions
//!
//! This library generates pseudo-random directed acyclic graphs over a fixed
//! number of nodes and writes them as NED files that a discrete-event network
//! simulator can load directly.
//!
//! ## Overview
//!
//! Every node exposes a fixed number of input and output gates. For each pair
//! of nodes `i < j` an edge is created with probability 0.3, wired from a
//! random output gate of `i` to a random input gate of `j`. Edges only point
//! from lower to higher indices, so the graph is acyclic by construction.
//!
//! Generation is reproducible: the random stream is seeded with a fixed
//! constant on every call and owned by that call alone, so identical
//! parameters always yield identical files.
//!
//! ## Command Line
//!
//! `nedgen` with no arguments writes `RandomNetwork.ned` for 20 nodes with
//! the fixed seed and default gate counts, then prints
//! `Random DAG with 20 nodes and 64 edges generated!`. A positional node
//! count replaces the 20. The remaining options (`--config`, `--output`,
//! `--seed`, `--input-gates`, `--output-gates`, `--parametric-gates`) are
//! optional and leave that default output untouched when omitted.
//!
//! ## Architecture
//!
//! - `topology`: edge types, seeded draw primitives and the DAG generator
//! - `ned`: NED writer and a reader for the same layout
//! - `config`: run configuration, YAML loading and CLI overrides
//! - `orchestrator`: one run from configuration to written file
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nedgen::{config::RunConfig, orchestrator};
//!
//! let summary = orchestrator::generate_network(&RunConfig::default())?;
//! println!("{}", summary);
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Output Format
//!
//! ```text
//! simple Node {
//!     gates:
//!         input in[1];  // 1 input gate for each node
//!         output out[2]; // 2 output gates for each node
//! }
//!
//! network RandomNetwork {
//!     submodules:
//!         node0: Node;
//!         node1: Node;
//!         node2: Node;
//!     connections:
//!         node0.out[1] --> node2.in[0];
//! }
//! ```
//!
//! ## Error Handling
//!
//! File-level operations return `color_eyre::eyre::Result` with path context.
//! Configuration and parsing problems are typed `thiserror` enums that
//! convert into the same report type.

pub mod config;
pub mod ned;
pub mod orchestrator;
pub mod topology;
