//! mir-gen-csproj CLI - generate NuGet packaging manifests.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mir_native::core::matrix::parse_platform_selector;
use mir_native::ops::gen_csproj::{generate, GenOptions};

/// Generate one packaging .csproj per library type for a platform.
#[derive(Parser)]
#[command(name = "mir-gen-csproj")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Platform: win, linux, mac, or all (case-insensitive)
    platform: String,

    /// Directory the .csproj files are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Usage errors exit 1 and enumerate the valid selectors; --help and
    // --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            if code != 0 {
                eprintln!("platform options: all, win, linux, mac");
            }
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let filter = if cli.verbose {
        EnvFilter::new("mir_native=debug")
    } else {
        EnvFilter::new("mir_native=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let platforms = parse_platform_selector(&cli.platform)?;

    let opts = GenOptions {
        out_dir: cli.out_dir,
    };

    generate(&platforms, &opts)
}
