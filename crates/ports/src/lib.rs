//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: raw operating-system file primitives
//!
//! The gateway in the root crate is written against these traits so it can
//! run over the real OS or over an in-memory double in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
