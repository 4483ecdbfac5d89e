//! buzzsheet - compile a text sheet into the buzzer device byte layout.
//!
//! Reads a sheet file, compiles and validates it, and flushes the encoded
//! song to the output sink (a plain file or an existing player device
//! node). Creating the device node itself is left to the system.

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use buzzsheet_core::{compile, encoder};

/// Buzzer sheet-music compiler
#[derive(Parser)]
#[command(name = "buzzsheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the sheet file
    #[arg(short, long)]
    sheet: PathBuf,

    /// Path to the output sink (file or player chardev)
    #[arg(short, long)]
    output: PathBuf,

    /// Print the parsed song listing before flushing
    #[arg(long)]
    print: bool,

    /// Dump the compiled song as JSON to stdout instead of encoding
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = fs::read_to_string(&cli.sheet)
        .with_context(|| format!("Failed to read sheet at {}", cli.sheet.display()))?;

    println!("Parsing sheet music at {}", cli.sheet.display());
    let song = compile(&source)
        .with_context(|| format!("Failed to parse sheet at {}", cli.sheet.display()))?;

    if cli.print {
        print!("{song}");
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&song).context("Failed to serialize song")?;
        println!("{json}");
        return Ok(());
    }

    println!("Flushing song to {}", cli.output.display());
    let mut sink = File::create(&cli.output)
        .with_context(|| format!("Failed to open sink at {}", cli.output.display()))?;
    encoder::write_song(&song, &mut sink)
        .with_context(|| format!("Failed to write song to {}", cli.output.display()))?;

    println!("{}", "Ready to play!".green());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red());
            ExitCode::FAILURE
        }
    }
}
