//! The platform/architecture/library-type matrix.
//!
//! Every runtime identifier, file extension, and package-id component the
//! two tools emit is derived from the tables in this module. The variant
//! order of each enum is load-bearing: "all" selectors iterate in the
//! declared order, and that order is visible in output and file writes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Target operating system for the native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Win,
    Linux,
    Mac,
}

impl Platform {
    /// All platforms, in selector/output order.
    pub const ALL: [Platform; 3] = [Platform::Win, Platform::Linux, Platform::Mac];

    /// Lowercase name used as the CLI selector and extension-table key.
    pub fn key(self) -> &'static str {
        match self {
            Platform::Win => "win",
            Platform::Linux => "linux",
            Platform::Mac => "mac",
        }
    }

    /// Capitalized name used in package identifiers.
    pub fn title(self) -> &'static str {
        match self {
            Platform::Win => "Win",
            Platform::Linux => "Linux",
            Platform::Mac => "Mac",
        }
    }

    /// Runtime-identifier prefix. Linux targets the musl libc via the zig
    /// toolchain, and macOS uses the .NET "osx" spelling.
    pub fn prefix(self) -> &'static str {
        match self {
            Platform::Win => "win",
            Platform::Linux => "linux-musl",
            Platform::Mac => "osx",
        }
    }

    /// File extension of a shared library on this platform.
    pub fn shared_extension(self) -> &'static str {
        match self {
            Platform::Win => ".dll",
            Platform::Linux => ".so",
            Platform::Mac => ".dylib",
        }
    }
}

/// CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X64,
    Arm64,
}

impl Arch {
    /// All architectures, in output order.
    pub const ALL: [Arch; 2] = [Arch::X64, Arch::Arm64];

    pub fn name(self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the produced binary is a static archive or a shared object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibType {
    Static,
    Shared,
}

impl LibType {
    /// All library types. "all" builds iterate static first, then shared.
    pub const ALL: [LibType; 2] = [LibType::Static, LibType::Shared];

    pub fn name(self) -> &'static str {
        match self {
            LibType::Static => "static",
            LibType::Shared => "shared",
        }
    }

    /// Capitalized name used in package identifiers.
    pub fn title(self) -> &'static str {
        match self {
            LibType::Static => "Static",
            LibType::Shared => "Shared",
        }
    }

    /// File extension of the built binary. Static archives are `.a` on
    /// every platform (the windows builds use a MinGW-style toolchain);
    /// shared libraries use the platform's native extension.
    pub fn extension(self, platform: Platform) -> &'static str {
        match self {
            LibType::Static => ".a",
            LibType::Shared => platform.shared_extension(),
        }
    }
}

impl fmt::Display for LibType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A platform/architecture pair, identified on the command line and in
/// paths by its runtime identifier (e.g. `linux-musl-x64`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Runtime {
    pub platform: Platform,
    pub arch: Arch,
}

impl Runtime {
    /// All runtimes, platform-major in declared order.
    pub fn all() -> impl Iterator<Item = Runtime> {
        Platform::ALL
            .into_iter()
            .flat_map(|platform| Arch::ALL.into_iter().map(move |arch| Runtime { platform, arch }))
    }

    /// The runtime identifier, `{platform prefix}-{arch}`.
    pub fn id(&self) -> String {
        format!("{}-{}", self.platform.prefix(), self.arch.name())
    }

    /// Whether this runtime is built directly on a matching host. Only
    /// win-x64 and osx-arm64 builds run natively; every other runtime goes
    /// through a meson cross file.
    pub fn is_native(&self) -> bool {
        matches!(
            (self.platform, self.arch),
            (Platform::Win, Arch::X64) | (Platform::Mac, Arch::Arm64)
        )
    }

    /// The runtime identifiers of every runtime, in declared order. Used
    /// wherever a usage error lists the valid choices.
    pub fn ids() -> Vec<String> {
        Runtime::all().map(|r| r.id()).collect()
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform.prefix(), self.arch.name())
    }
}

impl FromStr for Runtime {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Runtime::all()
            .find(|r| r.id() == lower)
            .ok_or_else(|| MatrixError::UnknownRuntime {
                given: s.to_string(),
                options: Runtime::ids(),
            })
    }
}

/// Selector errors. Every variant lists the valid options so the CLI can
/// print them verbatim.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("unsupported runtime `{given}`; valid options: {}", .options.join(", "))]
    UnknownRuntime { given: String, options: Vec<String> },

    #[error("unsupported lib_type `{given}`; valid options: all, static, shared")]
    UnknownLibType { given: String },

    #[error("unsupported platform `{given}`; valid options: all, win, linux, mac")]
    UnknownPlatform { given: String },
}

/// Parse a library-type selector: `static`, `shared`, or `all`
/// (case-insensitive). `all` expands to static then shared.
pub fn parse_lib_type_selector(s: &str) -> Result<Vec<LibType>, MatrixError> {
    match s.to_lowercase().as_str() {
        "all" => Ok(LibType::ALL.to_vec()),
        "static" => Ok(vec![LibType::Static]),
        "shared" => Ok(vec![LibType::Shared]),
        _ => Err(MatrixError::UnknownLibType {
            given: s.to_string(),
        }),
    }
}

/// Parse a platform selector: a platform name or `all` (case-insensitive).
/// `all` expands to the declared platform order.
pub fn parse_platform_selector(s: &str) -> Result<Vec<Platform>, MatrixError> {
    let lower = s.to_lowercase();
    if lower == "all" {
        return Ok(Platform::ALL.to_vec());
    }
    Platform::ALL
        .into_iter()
        .find(|p| p.key() == lower)
        .map(|p| vec![p])
        .ok_or(MatrixError::UnknownPlatform {
            given: s.to_string(),
        })
}
