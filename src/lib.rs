//! COMET: transpiles prefix-tagged StarC source into C, then hands the result
//! to a native compiler.
//!
//! The pipeline per input line is [`parser::normalize_line`] →
//! [`parser::classify`] → [`emitter::emit_line`] → [`emitter::EmitContext`],
//! driven by [`executor::transpile`].

pub mod build;
pub mod config;
pub mod emitter;
pub mod error;
pub mod executor;
pub mod parser;

pub use build::{BuildOutcome, BuildStep, Compiler};
pub use config::Config;
pub use error::{BuildError, CometError, ConfigError, TranspileError};
pub use executor::{transpile, transpile_str, TranspileOptions, TranspileSummary};
