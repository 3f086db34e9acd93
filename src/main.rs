//! fen-board CLI
//!
//! Usage:
//!   fen-board manifest     Print the capability manifest
//!   fen-board transform    Read a render request from stdin, print `["<html>"]`
//!
//! Set `RUST_LOG=debug` to trace the pipeline on stderr.

use std::io::{self, Read};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fen_board::{output, transform, Manifest, RenderRequest};

#[derive(Parser)]
#[command(name = "fen-board")]
#[command(about = "Create chess boards from FEN strings")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Print the JSON manifest describing this tool
    Manifest,

    /// Read `{"data": "<fen>", "arguments": {...}}` from stdin and print the HTML figure
    Transform,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.mode {
        Mode::Manifest => print_manifest(),
        Mode::Transform => run_transform(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_manifest() {
    match Manifest::fen_board().to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error encoding manifest: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_transform() {
    let mut bytes = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut bytes) {
        eprintln!("Error reading from stdin: {}", e);
        std::process::exit(1);
    }

    // Invalid UTF-8 is replaced rather than rejected
    let source = String::from_utf8_lossy(&bytes);
    let request = RenderRequest::from_json(&source);
    let image = transform(&request);

    // A failed save is reported but never changes the printed result
    if let Some(path) = &request.save_path {
        if let Err(e) = output::save_svg(path, &image.svg) {
            eprintln!("{}", e);
        }
    }

    if let Err(e) = output::write_result(io::stdout().lock(), &image.html) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
