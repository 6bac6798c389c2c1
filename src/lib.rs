//! mir-native-tools - build and packaging drivers for the MIR harfbuzz
//! native library matrix.
//!
//! This crate provides the shared library behind two small CLIs:
//! `mir-build`, which assembles and runs meson configure/compile
//! invocations for one runtime, and `mir-gen-csproj`, which writes one
//! NuGet packaging manifest per platform and library type.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::matrix::{Arch, LibType, MatrixError, Platform, Runtime};
pub use crate::ops::build::ToolFailure;
pub use crate::util::process::ProcessBuilder;
