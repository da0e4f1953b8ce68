//! Simulation statistics collection and reporting.
//!
//! This module tracks the performance counters of a run. It provides:
//! 1. **Cycles and CPI:** Total cycles, executed instructions, and the derived CPI.
//! 2. **Instruction mix:** Counts by category (ALU, mul/div, load, store, branch, jump, system).
//! 3. **Hazards:** RAW stall episodes and cycles, control-hazard redirects.
//! 4. **Divider:** Divide-family operations, fused operations, and penalty cycles.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::semantics::Semantics;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulated cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that reached execute, including the halting one.
    pub instructions_retired: u64,

    /// Count of integer ALU instructions (excluding multiply/divide).
    pub inst_alu: u64,
    /// Count of multiply/divide instructions.
    pub inst_muldiv: u64,
    /// Count of load instructions.
    pub inst_load: u64,
    /// Count of store instructions.
    pub inst_store: u64,
    /// Count of conditional branches.
    pub inst_branch: u64,
    /// Count of `jal`/`jalr`.
    pub inst_jump: u64,
    /// Count of `ecall`, `ebreak`, fences and unrecognized encodings.
    pub inst_system: u64,

    /// Number of instructions held in decode by a RAW hazard (one per stall episode).
    pub stalls_data: u64,
    /// Total cycles decode spent stalled on RAW hazards.
    pub raw_stall_cycles: u64,
    /// Number of execute-stage redirects after a wrong next-PC prediction.
    pub stalls_control: u64,

    /// Divide/remainder operations executed.
    pub div_ops: u64,
    /// Divide/remainder operations whose latency was waived by fusion.
    pub div_fused: u64,
    /// Cycles charged for divider latency.
    pub div_penalty_cycles: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_muldiv: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_system: 0,
            stalls_data: 0,
            raw_stall_cycles: 0,
            stalls_control: 0,
            div_ops: 0,
            div_fused: 0,
            div_penalty_cycles: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["performance", "instruction_mix", "hazards", "divider"];

/// Banner line framing the statistics report.
const BANNER: &str = "==========================================================";

/// Rule separating report sections.
const RULE: &str = "----------------------------------------------------------";

impl SimStats {
    /// Counts one executed instruction in the instruction mix.
    pub const fn record(&mut self, semantics: Semantics) {
        self.instructions_retired += 1;
        match semantics {
            Semantics::Lui | Semantics::Auipc | Semantics::AluImm { .. } => self.inst_alu += 1,
            Semantics::AluReg { op, .. } if op.is_muldiv() => self.inst_muldiv += 1,
            Semantics::AluReg { .. } => self.inst_alu += 1,
            Semantics::Load { .. } => self.inst_load += 1,
            Semantics::Store(_) => self.inst_store += 1,
            Semantics::Branch(_) => self.inst_branch += 1,
            Semantics::Jal | Semantics::Jalr => self.inst_jump += 1,
            Semantics::Fence | Semantics::Ebreak | Semantics::Ecall | Semantics::Unknown => {
                self.inst_system += 1;
            }
        }
    }

    /// Cycles per instruction, or 0 before any instruction has executed.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// The three-line performance block printed at halt.
    pub fn performance_report(&self) -> String {
        format!(
            "Performance:\n\tINST NUM  = {:4}\n\tCYCLE NUM = {:4}\n\tCPI       = {:.3}\n",
            self.instructions_retired,
            self.cycles,
            self.cpi()
        )
    }

    /// Renders the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to render all sections.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let instr = self.instructions_retired.max(1) as f64;
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;
        let mut out = String::new();

        let _ = writeln!(out, "\n{BANNER}");
        let _ = writeln!(out, "RV64IM SIMULATION STATISTICS");
        let _ = writeln!(out, "{BANNER}");
        if want("performance") {
            let seconds = self.start_time.elapsed().as_secs_f64();
            let _ = writeln!(out, "host_seconds             {seconds:.4} s");
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "sim_cpi                  {:.3}", self.cpi());
            let _ = writeln!(out, "{RULE}");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, n) in [
                ("op.alu", self.inst_alu),
                ("op.muldiv", self.inst_muldiv),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.jump", self.inst_jump),
                ("op.system", self.inst_system),
            ] {
                let _ = writeln!(out, "  {name:<22} {n} ({:.2}%)", pct(n, instr));
            }
            let _ = writeln!(out, "{RULE}");
        }
        if want("hazards") {
            let _ = writeln!(out, "HAZARDS");
            let _ = writeln!(out, "  stalls.data            {}", self.stalls_data);
            let _ = writeln!(
                out,
                "  stalls.data_cycles     {} ({:.2}%)",
                self.raw_stall_cycles,
                pct(self.raw_stall_cycles, cyc)
            );
            let _ = writeln!(out, "  stalls.control         {}", self.stalls_control);
            let _ = writeln!(out, "{RULE}");
        }
        if want("divider") {
            let _ = writeln!(out, "DIVIDER");
            let _ = writeln!(out, "  div.ops                {}", self.div_ops);
            let _ = writeln!(out, "  div.fused              {}", self.div_fused);
            let _ = writeln!(
                out,
                "  div.penalty_cycles     {} ({:.2}%)",
                self.div_penalty_cycles,
                pct(self.div_penalty_cycles, cyc)
            );
        }
        let _ = writeln!(out, "{BANNER}");
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
