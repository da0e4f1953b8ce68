//! Divider latency model.
//!
//! Divide and remainder instructions occupy the execute stage for a fixed
//! number of extra cycles. The penalty is waived when the instruction ahead of
//! the current one was itself a divide-family operation with identical `rs1`,
//! `rs2` and `rd` fields, modelling reuse of the divider's last result.

use tracing::debug;

use crate::config::TimingConfig;
use crate::isa::instruction::InstructionBits;
use crate::stats::SimStats;

/// Fixed-latency divider with optional result reuse.
#[derive(Clone, Copy, Debug)]
pub struct Divider {
    latency: u64,
    fusion: bool,
}

impl Divider {
    /// Creates a divider from the timing configuration.
    pub const fn new(timing: &TimingConfig) -> Self {
        Self {
            latency: timing.div_latency,
            fusion: timing.fusion,
        }
    }

    /// Returns `true` if `cur` may reuse the result of the divide `prev`.
    pub fn fuses(prev: u32, cur: u32) -> bool {
        prev.rs1() == cur.rs1() && prev.rs2() == cur.rs2() && prev.rd() == cur.rd()
    }

    /// Charges the latency of the divide `cur` to `stats.cycles`, unless it fuses.
    ///
    /// # Arguments
    ///
    /// * `stats` - Counters receiving the penalty cycles.
    /// * `prev` - Encoding of the preceding divide-family instruction, if the
    ///   instruction directly ahead was one.
    /// * `cur` - Encoding of the divide being executed.
    pub fn charge(&self, stats: &mut SimStats, prev: Option<u32>, cur: u32) {
        stats.div_ops += 1;
        if self.fusion && prev.is_some_and(|p| Self::fuses(p, cur)) {
            stats.div_fused += 1;
            debug!(inst = format_args!("{cur:#010x}"), "divide fused");
            return;
        }
        stats.cycles += self.latency;
        stats.div_penalty_cycles += self.latency;
    }
}
