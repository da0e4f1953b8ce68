//! Interactive debugger.
//!
//! A line-oriented REPL over the simulator's run-control primitives:
//!
//! | command        | action |
//! |----------------|--------|
//! | `help`         | list commands |
//! | `c`            | continue to halt |
//! | `q`            | quit |
//! | `si [n]`       | step `n` instructions (default 1) |
//! | `info r`       | dump PC and registers |
//! | `x <len> <addr>` | dump `len` 32-bit words from `addr` |

use std::io::{self, BufRead, Write};

use rv64im_core::common::ExitStatus;
use rv64im_core::core::units::lsu::MemWidth;
use rv64im_core::isa::disasm::disassemble_bytes;
use rv64im_core::sim::Simulator;

/// Bytes per word dumped by `x`.
const WORD_BYTES: u64 = 4;

/// One parsed debugger command.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Continue,
    Quit,
    Step(u64),
    InfoRegs,
    Examine { len: u64, addr: u64 },
}

/// Parses one input line.
fn parse(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let cmd = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();
    match (cmd, args.as_slice()) {
        ("help", []) => Ok(Command::Help),
        ("c", []) => Ok(Command::Continue),
        ("q", []) => Ok(Command::Quit),
        ("si", []) => Ok(Command::Step(1)),
        ("si", [n]) => n
            .parse()
            .map(Command::Step)
            .map_err(|_| format!("invalid step count '{n}'")),
        ("info", ["r"]) => Ok(Command::InfoRegs),
        ("x", [len, addr]) => {
            let len = len.parse().map_err(|_| format!("invalid length '{len}'"))?;
            let digits = addr.trim_start_matches("0x").trim_start_matches("0X");
            let addr =
                u64::from_str_radix(digits, 16).map_err(|_| format!("invalid address '{addr}'"))?;
            Ok(Command::Examine { len, addr })
        }
        _ => Err(format!("unknown command '{}', try 'help'", line.trim())),
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  help           - Display this help message");
    println!("  c              - Continue execution");
    println!("  q              - Quit the simulator");
    println!("  si [n]         - Step n instructions (default 1)");
    println!("  info r         - Display PC and registers");
    println!("  x <len> <addr> - Examine len words of memory at addr (hex)");
}

fn examine(sim: &Simulator, len: u64, addr: u64) {
    for i in 0..len {
        let a = addr.wrapping_add(i * WORD_BYTES);
        let word = sim.cpu.mem.read(a, MemWidth::Word) as u32;
        let text = disassemble_bytes(&word.to_le_bytes(), a).unwrap_or_default();
        println!("{a:#010x}: {word:#010x}    {text}");
    }
}

/// Runs the REPL on stdin until quit or end of input.
///
/// # Returns
///
/// The halt status if the program halted, or `None` if the user quit first.
pub fn run(sim: &mut Simulator) -> Option<ExitStatus> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("(sim) ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse(&line) {
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => break,
            Ok(Command::Continue | Command::Step(_)) if sim.is_halted() => {
                println!("The program has finished.");
            }
            Ok(Command::Continue) => {
                let _ = sim.run();
            }
            Ok(Command::Step(n)) => {
                if sim.step(n).is_none() {
                    println!("  pc = {:#018x}", sim.cpu.pc);
                }
            }
            Ok(Command::InfoRegs) => sim.cpu.dump_state(),
            Ok(Command::Examine { len, addr }) => examine(sim, len, addr),
            Err(msg) => println!("{msg}"),
        }
    }
    sim.is_halted().then_some(sim.exit_status()).flatten()
}
