//! mir-build CLI - configure and build the harfbuzz native library.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mir_native::core::matrix::parse_lib_type_selector;
use mir_native::ops::build::{build, BuildOptions};
use mir_native::{Runtime, ToolFailure};

/// Configure and build the harfbuzz native library for one runtime.
#[derive(Parser)]
#[command(name = "mir-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Runtime identifier: win-x64, win-arm64, linux-musl-x64,
    /// linux-musl-arm64, osx-x64, or osx-arm64 (case-insensitive)
    runtime: String,

    /// Library type: static, shared, or all (case-insensitive)
    lib_type: String,

    /// Directory holding project.ini, zig.ini, and the cross files
    #[arg(long, default_value = "../scripts")]
    scripts_dir: PathBuf,

    /// Root directory for build output
    #[arg(long, default_value = "../build")]
    build_root: PathBuf,

    /// Print the meson command lines without running them
    #[arg(long)]
    dry_run: bool,

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
                eprintln!("runtime options: {}", Runtime::ids().join(", "));
                eprintln!("lib_type options: all, static, shared");
            }
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        // A failed meson invocation surfaces its own exit status.
        let code = e
            .downcast_ref::<ToolFailure>()
            .and_then(|f| f.code)
            .unwrap_or(1);
        std::process::exit(code);
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

    let runtime: Runtime = cli.runtime.parse()?;
    let lib_types = parse_lib_type_selector(&cli.lib_type)?;

    let opts = BuildOptions {
        scripts_dir: cli.scripts_dir,
        build_root: cli.build_root,
        dry_run: cli.dry_run,
    };

    build(runtime, &lib_types, &opts)
}
