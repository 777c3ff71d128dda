use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "ai-code-analyzer")]
#[clap(about = "AI-powered code review for uploaded source files", long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of ~/ai-code-analyzer/config.toml
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
