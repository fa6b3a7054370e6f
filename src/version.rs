// src/version.rs
//! Package version, kept in sync with `Cargo.toml` through `CARGO_PKG_VERSION`.

/// Version of the `tex_parser` package.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
