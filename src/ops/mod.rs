//! High-level operations.
//!
//! This module contains the implementation of the two CLI tools.

pub mod build;
pub mod gen_csproj;

pub use build::{build, BuildOptions, ToolFailure};
pub use gen_csproj::{generate, GenOptions};
