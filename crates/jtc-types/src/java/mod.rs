//! Java-specific helpers for the jtc type universe.
//!
//! Formatters here are "Java-like" and stable, intended for diagnostics.

pub mod env;
pub mod format;
pub mod members;
pub mod subtyping;
