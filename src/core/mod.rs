//! Core data structures.
//!
//! The platform/architecture/library-type matrix is a closed set known at
//! build time, so it lives here as fieldless enums with const tables
//! rather than runtime configuration.

pub mod matrix;

pub use matrix::{
    parse_lib_type_selector, parse_platform_selector, Arch, LibType, MatrixError, Platform,
    Runtime,
};
