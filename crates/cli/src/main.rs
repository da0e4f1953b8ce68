//! RV64IM simulator CLI.
//!
//! This binary runs a raw program image under one of the three timing models. It performs:
//! 1. **Setup:** Parses arguments, installs the `tracing` subscriber and builds the configuration.
//! 2. **Loading:** Places the image at the memory base and reads ELF symbols for ftrace.
//! 3. **Run:** Executes to halt in batch mode, or hands control to the debugger.
//!
//! The process exits with 0 on a good trap and nonzero on a bad trap or a host error.

mod debugger;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use rv64im_core::common::{ExitStatus, SimError};
use rv64im_core::config::{Config, Model};
use rv64im_core::sim::Simulator;
use rv64im_core::sim::loader;
use rv64im_core::sim::symbols::SymbolTable;

/// Timing model names accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelArg {
    /// Functional instruction-set simulator.
    Iss,
    /// Multi-cycle state machine.
    Mc,
    /// Five-stage pipeline.
    Pl,
}

impl From<ModelArg> for Model {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Iss => Self::Iss,
            ModelArg::Mc => Self::MultiCycle,
            ModelArg::Pl => Self::Pipeline,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "simulator",
    author,
    version,
    about = "RV64IM simulator with functional, multi-cycle and pipelined timing models",
    long_about = "Run a raw RV64IM binary loaded at the memory base.\n\nExamples:\n  simulator iss prog.bin --batch\n  simulator pl prog.bin --batch --itrace\n  simulator mc prog.bin --debug --elf prog.elf --ftrace"
)]
struct Cli {
    /// Timing model.
    #[arg(value_enum)]
    model: ModelArg,

    /// Raw binary image.
    image: PathBuf,

    /// Start in the interactive debugger.
    #[arg(short, long, conflicts_with = "batch")]
    debug: bool,

    /// Run to halt without interaction.
    #[arg(short, long)]
    batch: bool,

    /// Log every executed instruction.
    #[arg(long)]
    itrace: bool,

    /// Log function calls and returns (needs --elf).
    #[arg(long, requires = "elf")]
    ftrace: bool,

    /// ELF file carrying the image's symbols.
    #[arg(long, value_name = "FILE")]
    elf: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the full statistics report after the run.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if !cli.debug && !cli.batch {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(Some(status)) => exit_code(status),
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the simulator and runs it in the selected mode.
///
/// Returns the halt status, or `None` if the debugger quit before the program halted.
fn run(cli: &Cli) -> Result<Option<ExitStatus>, SimError> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SimError::ImageRead {
                path: path.clone(),
                source,
            })?;
            Config::from_json(&text)?
        }
        None => Config::default(),
    };
    config.model = cli.model.into();
    config.general.trace_instructions |= cli.itrace;
    config.general.trace_functions |= cli.ftrace;

    let symbols = match &cli.elf {
        Some(path) => loader::load_elf_symbols(path)?,
        None => SymbolTable::default(),
    };

    let mut sim = Simulator::new(&config, symbols)?;
    let _ = sim.load_image(&cli.image)?;

    let status = if cli.debug {
        debugger::run(&mut sim)
    } else {
        Some(sim.run())
    };

    if status.is_some() {
        sim.print_report();
        if cli.stats {
            sim.cpu.stats.print();
        }
    }
    Ok(status)
}

/// Maps a halt status to the process exit code.
fn exit_code(status: ExitStatus) -> ExitCode {
    if status.is_good() {
        return ExitCode::SUCCESS;
    }
    match u8::try_from(status.process_code()) {
        Ok(0) | Err(_) => ExitCode::FAILURE,
        Ok(code) => ExitCode::from(code),
    }
}
