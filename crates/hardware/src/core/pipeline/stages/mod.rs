//! Pipeline stage implementations.
//!
//! One function per stage. `PipelineEngine::tick` calls them in reverse
//! pipeline order so each reads the latch its predecessor filled last cycle.
//! 1. **Fetch:** Reads the word at the PC, predicting not-taken.
//! 2. **Decode:** Detects RAW hazards and generates control signals.
//! 3. **Execute:** Runs the shared semantics and resolves the next PC.
//! 4. **Memory:** Performs loads and stores.
//! 5. **Writeback:** Retires the register write.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
