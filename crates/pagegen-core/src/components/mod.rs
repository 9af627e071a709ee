//! Component reconciliation
//!
//! This module provides:
//! - Required component resolution from a configuration
//! - Presence checks against the host project
//! - Best-effort installation through the external component CLI

pub mod installer;
pub mod resolver;
pub mod tool;

pub use installer::{ComponentInstaller, InstallOutcome, Precondition};
pub use resolver::{resolve_components, ComponentId};
pub use tool::{shadcn_tool, ComponentTool, InstallError, ToolConfig, ToolManager};
