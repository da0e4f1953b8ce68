//! Instruction Set Architecture (ISA) Definitions.
//!
//! Everything about an instruction that does not depend on timing lives here.
//!
//! # Modules
//!
//! * `instruction`: Field extraction and the per-instruction record.
//! * `decode`: Format classification, immediates and operand read.
//! * `table`: The ordered pattern table all engines dispatch through.
//! * `semantics`: What each pattern does, expressed as an `Effect`.
//! * `disasm`: Mnemonic printer for tracing and debugging.

/// Application Binary Interface (ABI) register names and indices.
pub mod abi;

/// Instruction decoding: formats, immediates, operands.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set opcodes.
pub mod rv64i;

/// Instruction semantics shared by the timing models.
pub mod semantics;

/// `ecall`/`ebreak` encodings and syscall numbers.
pub mod system;

/// Ordered instruction pattern table.
pub mod table;
