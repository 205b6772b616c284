use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nmclean",
    about = "Find node_modules directories and delete the ones you pick",
    version
)]
pub struct Cli {
    /// Directory to scan. Skips the path prompt when given.
    #[arg(long, env = "NMCLEAN_ROOT")]
    pub root: Option<PathBuf>,

    /// Select every match instead of prompting
    #[arg(long)]
    pub all: bool,

    /// Report sizes without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Fraction digits shown in sizes
    #[arg(long, default_value_t = 2)]
    pub decimals: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
