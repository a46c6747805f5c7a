//! Command-line driver: executes a hex-encoded bytecode file and reports the
//! terminal status and the gas consumed.

use clap::{Parser, ValueEnum};
use sevm::{decode_hex, interpret, CodeAnalysis, DummyHost, U256};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Hex-encoded EVM bytecode.
    Evm,
}

/// Execute an EVM bytecode program.
#[derive(Parser, Debug)]
#[command(name = "sevm", version, about)]
struct Cli {
    /// Input file containing the hex-encoded bytecode.
    input_file: PathBuf,

    /// Input format.
    #[arg(long, value_enum)]
    format: Format,

    /// Gas budget for the execution.
    #[arg(long, default_value_t = u64::MAX)]
    gas_limit: u64,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let Format::Evm = cli.format;

    let text = fs::read_to_string(&cli.input_file)?;
    let code = decode_hex(&text)?;

    let analysis = CodeAnalysis::analyze(&code);
    let mut host = DummyHost;
    let outcome = interpret(&analysis, &mut host, cli.gas_limit, U256::ZERO, &[]);

    println!("Status: {}", outcome.status);
    println!("Total Gas used: {}", cli.gas_limit - outcome.gas_left);
    Ok(())
}
