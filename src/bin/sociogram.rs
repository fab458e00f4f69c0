// src/bin/sociogram.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use sociogram_core::cli::{self, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Path { start, end }) => cli::handle_path(cli, *start, *end),
        Some(Commands::Chain) => cli::handle_chain(cli),
        None => cli::handle_session(cli),
    }
}

