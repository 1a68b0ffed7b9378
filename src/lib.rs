#![forbid(unsafe_code)]
//! truthy: boolean-coercion predicates and a command-line checker.
//!
//! The predicates themselves live in [`truthy_core`] and are re-exported here. This crate adds the tooling around
//! them: a literal syntax for typing values on the command line ([`literal`]), coercion reports ([`report`]) and
//! the `truthy` CLI ([`cli`]).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod literal;
pub mod report;
pub mod version;

pub use truthy_core::{FalsyValue, NaN, ToBoolean, Value, ValueKind, is_falsy, is_nan, is_truthy, toggle};

pub use config::{InputSyntax, OutputFormat, ReportConfig};
