use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use nedgen::config::{self, CliOverrides, RunConfig};
use nedgen::orchestrator;

/// Generate a random DAG topology as a NED network description
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes in the network
    num_nodes: Option<usize>,

    /// Path to a YAML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output NED file (default: RandomNetwork.ned)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for the random stream (default: 12345)
    #[arg(long)]
    seed: Option<u32>,

    /// Input gates per node (default: 1)
    #[arg(long)]
    input_gates: Option<u32>,

    /// Output gates per node (default: 2)
    #[arg(long)]
    output_gates: Option<u32>,

    /// Declare the generated gate counts in the module header instead of in[1]/out[2]
    #[arg(long)]
    parametric_gates: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            num_nodes: self.num_nodes,
            input_gates: self.input_gates,
            output_gates: self.output_gates,
            seed: self.seed,
            output: self.output.clone(),
            parametric_gates: self.parametric_gates,
        }
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut run_config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => RunConfig::default(),
    };
    config::apply_overrides(&mut run_config, &args.overrides())?;
    info!("Output file: {:?}", run_config.output);

    let summary = orchestrator::generate_network(&run_config)?;
    println!("{}", summary);
    Ok(())
}
