use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notify-migrate")]
#[command(
    about = "Rewrite alert()/confirm() calls to the async notification manager",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Source files to migrate, processed in the order given
    #[arg(required = true, num_args = 1.., value_name = "FILE")]
    pub paths: Vec<PathBuf>,
}

/// Parse CLI arguments, exiting with a usage error when no file is given
pub fn parse_args() -> Cli {
    Cli::parse()
}
