//! Configure-and-build driver.
//!
//! Assembles the meson configure and compile command lines for one runtime
//! and library type, echoes them, and runs them fail-fast. The driver does
//! no compilation itself; meson and the checked-in ini files under the
//! scripts directory carry all of the cross-compilation knowledge.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use thiserror::Error;

use crate::core::matrix::{LibType, Platform, Runtime};
use crate::util::process::{find_executable, ProcessBuilder};

const MESON: &str = "meson";
const PROJECT_FILE: &str = "project.ini";
const ZIG_FILE: &str = "zig.ini";

/// Options for the build driver.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory holding project.ini, zig.ini, and the per-runtime cross
    /// files.
    pub scripts_dir: PathBuf,
    /// Root under which per-invocation output directories are created.
    pub build_root: PathBuf,
    /// Print the command lines without executing anything.
    pub dry_run: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            scripts_dir: PathBuf::from("../scripts"),
            build_root: PathBuf::from("../build"),
            dry_run: false,
        }
    }
}

/// A child build tool exited unsuccessfully. The CLI propagates `code` as
/// its own exit status.
#[derive(Debug, Error)]
#[error("`{command}` failed with exit code {code:?}")]
pub struct ToolFailure {
    pub command: String,
    pub code: Option<i32>,
}

/// Output directory for one (runtime, lib_type) invocation.
pub fn build_dir(runtime: Runtime, lib_type: LibType, opts: &BuildOptions) -> PathBuf {
    opts.build_root
        .join(format!("{}-{}", runtime.id(), lib_type.name()))
}

/// Per-platform extra configure arguments. Windows pins the static CRT;
/// linux builds route both the build and host machines through the zig
/// toolchain file.
fn platform_args(platform: Platform, scripts_dir: &Path) -> Vec<String> {
    match platform {
        Platform::Win => vec!["-Db_vscrt=static_from_buildtype".to_string()],
        Platform::Linux => {
            let zig = scripts_dir.join(ZIG_FILE).display().to_string();
            vec![
                "--native-file".to_string(),
                zig.clone(),
                "--cross-file".to_string(),
                zig,
            ]
        }
        Platform::Mac => Vec::new(),
    }
}

/// Assemble the meson configure arguments for one runtime and library
/// type. The output directory is always the final argument.
pub fn configure_args(runtime: Runtime, lib_type: LibType, opts: &BuildOptions) -> Vec<String> {
    let mut args = platform_args(runtime.platform, &opts.scripts_dir);

    let project = opts.scripts_dir.join(PROJECT_FILE).display().to_string();
    if runtime.is_native() {
        args.push("--native-file".to_string());
        args.push(project);
    } else {
        args.push("--cross-file".to_string());
        args.push(project);
        args.push("--cross-file".to_string());
        args.push(
            opts.scripts_dir
                .join(format!("{}.ini", runtime.id()))
                .display()
                .to_string(),
        );
    }

    if lib_type == LibType::Static {
        args.push("-Ddefault_library=static".to_string());
    }

    args.push(build_dir(runtime, lib_type, opts).display().to_string());
    args
}

/// Echo a command line and run it, converting a non-zero exit status into
/// a `ToolFailure`.
fn run_checked(proc: &ProcessBuilder, dry_run: bool) -> Result<()> {
    println!("{}", proc.display_command());
    if dry_run {
        return Ok(());
    }
    let status = proc.status()?;
    if !status.success() {
        return Err(ToolFailure {
            command: proc.display_command(),
            code: status.code(),
        }
        .into());
    }
    Ok(())
}

/// Run the full configure + compile sequence for one library type.
fn execute(runtime: Runtime, lib_type: LibType, opts: &BuildOptions) -> Result<()> {
    tracing::debug!("building {} ({})", runtime.id(), lib_type.name());

    let configure = ProcessBuilder::new(MESON).args(configure_args(runtime, lib_type, opts));
    run_checked(&configure, opts.dry_run)?;

    let compile = ProcessBuilder::new(MESON).args([
        "compile",
        "-C",
        &build_dir(runtime, lib_type, opts).display().to_string(),
    ]);
    run_checked(&compile, opts.dry_run)
}

/// Build one runtime for each requested library type, in order, stopping
/// at the first failure.
pub fn build(runtime: Runtime, lib_types: &[LibType], opts: &BuildOptions) -> Result<()> {
    if !opts.dry_run && find_executable(MESON).is_none() {
        bail!("meson not found in PATH; {}", meson_install_hint());
    }

    for &lib_type in lib_types {
        execute(runtime, lib_type, opts)?;
    }
    Ok(())
}

fn meson_install_hint() -> &'static str {
    #[cfg(target_os = "macos")]
    {
        "install it with `brew install meson` or `pip install meson`"
    }
    #[cfg(target_os = "windows")]
    {
        "install it with `pip install meson` or `winget install meson`"
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        "install it with `pip install meson` or your system package manager"
    }
}
