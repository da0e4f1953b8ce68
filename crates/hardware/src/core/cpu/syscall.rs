//! Environment-call servicing.
//!
//! `ecall` is resolved on the host, Linux style: the syscall number is in `a7`,
//! arguments in `a0`-`a2`, and the result is returned in `a0` through the
//! instruction's ordinary register write.

use tracing::{error, info, warn};

use super::Cpu;
use crate::common::constants::HALT_FATAL;
use crate::core::units::lsu::MemWidth;
use crate::isa::semantics::{Effect, EnvCall};
use crate::isa::system::syscall;

/// File descriptor of the guest's standard output.
const STDOUT_FD: u64 = 1;

impl Cpu {
    /// Services an environment call, updating `effect` with its result.
    ///
    /// * `exit` reports on the console and halts with the code in `a0`.
    /// * `write` to fd 1 copies the buffer to the console and returns the count;
    ///   any other fd returns `-1`.
    /// * Anything else halts with `-1`.
    pub(crate) fn service_env_call(&mut self, pc: u64, call: EnvCall, effect: &mut Effect) {
        let [a0, a1, a2] = call.args;
        match call.number {
            syscall::EXIT => {
                let code = a0 as i64;
                info!(code, "syscall exit");
                self.console.write(format!("Syscall: exit with code {code}\n").as_bytes());
                effect.halt = Some(code);
            }
            syscall::WRITE if a0 == STDOUT_FD => {
                let len = a2.min(self.mem.size() as u64);
                let bytes: Vec<u8> = (0..len)
                    .map(|i| self.mem.read(a1.wrapping_add(i), MemWidth::Byte) as u8)
                    .collect();
                self.console.write(&bytes);
                effect.alu = a2;
            }
            syscall::WRITE => {
                warn!(fd = a0, "syscall write to unsupported fd");
                effect.alu = u64::MAX;
            }
            number => {
                error!(number, pc = format_args!("{pc:#010x}"), "unknown syscall");
                effect.halt = Some(HALT_FATAL);
            }
        }
    }
}
