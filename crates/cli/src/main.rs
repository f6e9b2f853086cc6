//! RISC-V ALU cycle-accurate simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Run:** Drive one ALU variant with a JSON stimulus trace and print every edge.
//! 2. **Check:** Run both variants in lockstep and verify the pipelined ALU matches.
//! 3. **Eval:** Evaluate one operation combinationally.

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rvalu_core::AluOp;
use rvalu_core::config::Config;
use rvalu_core::core::pipeline::engine::AluVariant;
use rvalu_core::core::units::alu::Alu;
use rvalu_core::sim::{Simulator, Stimulus, lockstep};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "RISC-V integer ALU cycle-accurate simulator",
    long_about = "Drive the single-cycle or pipelined ALU with a stimulus trace, or check both in lockstep.\n\nExamples:\n  sim run -s traces/shifts.json --variant pipelined\n  sim check -s traces/shifts.json\n  sim eval sra 0x80000000 31"
)]
struct Cli {
    /// Log every simulated edge (sets the default log level to debug).
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a stimulus trace through one ALU variant.
    Run {
        /// JSON stimulus trace.
        #[arg(short, long)]
        stimulus: String,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// ALU variant, overriding the configuration (`single-cycle` or `pipelined`).
        #[arg(long)]
        variant: Option<AluVariant>,
    },

    /// Run a stimulus trace through both variants and compare them edge by edge.
    Check {
        /// JSON stimulus trace.
        #[arg(short, long)]
        stimulus: String,
    },

    /// Evaluate a single operation combinationally.
    Eval {
        /// Operation mnemonic (add, sub, and, or, xor, sll, srl, sra, slt, sltu, pass).
        op: AluOp,

        /// Operand A (decimal or 0x-prefixed hex).
        #[arg(value_parser = parse_word)]
        a: u32,

        /// Operand B (decimal or 0x-prefixed hex).
        #[arg(value_parser = parse_word)]
        b: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    match cli.command {
        Commands::Run {
            stimulus,
            config,
            variant,
        } => cmd_run(&stimulus, config.as_deref(), variant, cli.trace),
        Commands::Check { stimulus } => cmd_check(&stimulus),
        Commands::Eval { op, a, b } => {
            let result = Alu::execute(op, a, b);
            println!("{op} {a:#010x}, {b:#010x} = {result:#010x} ({result})");
        }
    }
}

/// Installs the fmt subscriber; `RUST_LOG` overrides the default level.
fn init_logging(trace: bool) {
    let default = if trace { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a 32-bit operand written in decimal or `0x` hex.
fn parse_word(s: &str) -> Result<u32, String> {
    let parsed = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .map_or_else(|| s.parse::<u32>(), |hex| u32::from_str_radix(hex, 16));
    parsed.map_err(|e| format!("invalid 32-bit operand `{s}`: {e}"))
}

/// Loads a trace or exits with a diagnostic.
fn load_stimulus(path: &str) -> Stimulus {
    let stimulus = Stimulus::load(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });
    tracing::debug!(path, edges = stimulus.len(), "loaded stimulus");
    stimulus
}

/// Runs a trace through the configured ALU and prints one line per edge plus statistics.
fn cmd_run(
    stimulus_path: &str,
    config_path: Option<&str>,
    variant: Option<AluVariant>,
    trace: bool,
) {
    let loaded = match config_path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });
    if let Some(variant) = variant {
        config.alu.variant = variant;
    }
    config.general.trace_cycles |= trace;

    let stimulus = load_stimulus(stimulus_path);
    let mut sim = Simulator::new(&config);

    println!("[*] ALU variant: {}", sim.variant());
    println!("[*] Stimulus: {stimulus_path} ({} edges)", stimulus.len());
    println!();
    println!("cycle  rst  in_v  op    a           b           | out_v  result");

    match sim.run(&stimulus) {
        Ok(records) => {
            for r in &records {
                println!(
                    "{:>5}  {:>3}  {:>4}  {:<4}  {:#010x}  {:#010x}  | {:>5}  {:#010x}",
                    r.cycle,
                    u8::from(r.reset),
                    u8::from(r.inputs.valid),
                    r.inputs.op,
                    r.inputs.a,
                    r.inputs.b,
                    u8::from(r.outputs.valid),
                    r.outputs.result
                );
            }
            println!();
            println!("{}", sim.stats);
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            println!("{}", sim.stats);
            process::exit(1);
        }
    }
}

/// Runs the lockstep checker and exits non-zero on the first divergence.
fn cmd_check(stimulus_path: &str) {
    let stimulus = load_stimulus(stimulus_path);
    match lockstep::check(&stimulus) {
        Ok(report) => {
            println!(
                "[*] Equivalent: {} edges, {} compared, {} valid results",
                report.cycles, report.compared, report.valid_compared
            );
        }
        Err(e) => {
            eprintln!("\n[!] {e}");
            process::exit(1);
        }
    }
}
