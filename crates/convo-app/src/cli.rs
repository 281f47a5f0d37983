use std::path::PathBuf;

use clap::Parser;

/// convo: chat with a hosted language model from the terminal.
#[derive(Parser, Debug)]
#[command(name = "convo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Sampling temperature override (0.0-2.0).
    #[arg(short = 't', long)]
    pub temperature: Option<f64>,

    /// Wait for the full reply instead of streaming it.
    #[arg(long)]
    pub no_stream: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
