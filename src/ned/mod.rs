//! NED network description output.
//!
//! This module renders generated edge lists as NED text and reads such
//! text back, which is how round trips are checked.

pub mod writer;
pub mod parser;

pub use writer::{render_ned, write_ned, write_ned_file, GateHeader, DEFAULT_OUTPUT_FILE};
pub use parser::{parse_connections, parse_network, read_ned_file, verify_round_trip, NedParseError, ParsedNetwork};
