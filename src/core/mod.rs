//! Core data structures for sdkshift.
//!
//! This module contains the foundational types used throughout sdkshift:
//! - Tool specifications and environment rules
//! - The tool registry loaded from the catalog file
//! - Host platform detection (prefixes, separators)
//! - The error taxonomy

pub mod errors;
pub mod platform;
pub mod registry;
pub mod tool;

pub use errors::SwitchError;
pub use platform::Platform;
pub use registry::ToolRegistry;
pub use tool::{EnvRule, RuleKind, ToolSpec};
