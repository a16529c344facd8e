//! Topology type definitions.
//!
//! Nodes carry no data of their own; a node is its index in `[0, num_nodes)`.
//! The types here describe what hangs between them.

/// Default number of input gates per node
pub const DEFAULT_INPUT_GATES: u32 = 1;

/// Default number of output gates per node
pub const DEFAULT_OUTPUT_GATES: u32 = 2;

/// A directed connection from an output gate of one node to an input gate of another.
///
/// Edges are plain values: two edges with the same fields are the same edge,
/// and the generator may legitimately produce several edges between one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Index of the sending node
    pub source: usize,
    /// Output gate index on the sending node
    pub source_gate: u32,
    /// Index of the receiving node, always greater than `source`
    pub target: usize,
    /// Input gate index on the receiving node
    pub target_gate: u32,
}

impl Edge {
    pub fn new(source: usize, source_gate: u32, target: usize, target_gate: u32) -> Self {
        Self {
            source,
            source_gate,
            target,
            target_gate,
        }
    }

    /// Returns true if the edge points from a lower to a higher node index
    pub fn is_forward(&self) -> bool {
        self.source < self.target
    }

    /// Returns true if both gate indices fall inside the given gate counts
    pub fn fits(&self, gates: GateCounts) -> bool {
        self.source_gate < gates.outputs && self.target_gate < gates.inputs
    }
}

impl From<(usize, u32, usize, u32)> for Edge {
    fn from((source, source_gate, target, target_gate): (usize, u32, usize, u32)) -> Self {
        Self::new(source, source_gate, target, target_gate)
    }
}

/// Number of input and output gates every node exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateCounts {
    pub inputs: u32,
    pub outputs: u32,
}

impl GateCounts {
    pub fn new(inputs: u32, outputs: u32) -> Self {
        Self { inputs, outputs }
    }
}

impl Default for GateCounts {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_INPUT_GATES,
            outputs: DEFAULT_OUTPUT_GATES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gate_counts() {
        let gates = GateCounts::default();
        assert_eq!(gates.inputs, 1);
        assert_eq!(gates.outputs, 2);
    }

    #[test]
    fn test_edge_from_tuple() {
        let edge = Edge::from((0, 1, 2, 0));
        assert_eq!(edge, Edge::new(0, 1, 2, 0));
        assert!(edge.is_forward());
        assert!(edge.fits(GateCounts::default()));
    }

    #[test]
    fn test_edge_gate_bounds() {
        let gates = GateCounts::default();
        assert!(!Edge::new(0, 2, 1, 0).fits(gates));
        assert!(!Edge::new(0, 0, 1, 1).fits(gates));
        assert!(!Edge::new(3, 0, 1, 0).is_forward());
    }
}
