
/// Execution engines, units and architectural state.
pub mod core;

/// Decoding, the pattern table and the disassembler.
pub mod isa;



/// Performance counters.
pub mod stats;
