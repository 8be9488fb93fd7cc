//! Sdkshift - switch which installed version of a tool is active.
//!
//! This crate provides the core library functionality for sdkshift:
//! the tool catalog, the persistent environment store, and the
//! activation/deactivation engines that rewrite environment state and
//! maintain the per-tool "current version" symlink.

pub mod core;
pub mod ops;
pub mod store;
pub mod util;

pub use crate::core::errors::SwitchError;
pub use crate::core::platform::Platform;
pub use crate::core::registry::ToolRegistry;
pub use crate::core::tool::{EnvRule, RuleKind, ToolSpec};

pub use crate::ops::Switcher;
pub use crate::store::{EnvStore, ProfileStore};
