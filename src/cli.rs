use clap::Parser;
use std::path::PathBuf;

/// Parses a strictly positive integer (concurrency, timeout seconds)
fn parse_positive(s: &str) -> Result<u64, String> {
    match s.parse::<u64>() {
        Ok(0) => Err("value must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid number: {}", s)),
    }
}

/// Report the unpacked size of every package in an npm organization
#[derive(Parser, Debug)]
#[command(name = "npm-org-sizes")]
#[command(version)]
#[command(
    about = "Report the unpacked size of every package in an npm organization",
    long_about = "Lists all packages of an npm organization, fetches the unpacked size of each \
                  package's latest version, and writes the results sorted by size to a CSV file \
                  and a console table. The auth token is read from ~/.npmrc."
)]
pub struct Args {
    /// Organization (scope) name, with or without the leading @
    pub org: String,

    /// CSV output path [default: package-sizes.csv]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Registry base URL [default: https://registry.npmjs.org/]
    #[arg(short, long, value_name = "URL")]
    pub registry: Option<String>,

    /// Maximum number of package lookups in flight [default: 16]
    #[arg(short = 'j', long, value_name = "N", value_parser = parse_positive)]
    pub concurrency: Option<u64>,

    /// Per-request timeout in seconds [default: 30]
    #[arg(short, long, value_name = "SECS", value_parser = parse_positive)]
    pub timeout: Option<u64>,

    /// Credentials file [default: $HOME/.npmrc]
    #[arg(long, value_name = "PATH")]
    pub npmrc: Option<PathBuf>,

    /// Config file (defaults to ./npm-org-sizes.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip printing the console table
    #[arg(long)]
    pub no_table: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
