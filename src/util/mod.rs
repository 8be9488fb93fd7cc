//! Shared utilities

pub mod diagnostic;
pub mod fs;
pub mod pathlist;

pub use diagnostic::Diagnostic;
