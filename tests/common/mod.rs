//! Shared test utilities for acertijos integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. The assertion macros are `#[macro_export]`ed and need
//! no import.

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
