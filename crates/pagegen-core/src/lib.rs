//! Pagegen Core - list page generation for Next.js projects using shadcn/ui
//!
//! Turns one [`GeneratorConfig`] into a set of TypeScript/React source files
//! inside a host project, and makes sure the shadcn/ui components those
//! files import are installed.
//!
//! # Architecture
//!
//! The library is organized into stages:
//!
//! - **Plan** - [`config`] validation, [`plan`] (where each file goes) and
//!   [`render`] (what it contains). Pure, no I/O.
//! - **Install** - [`components`] resolves the required shadcn/ui set and
//!   installs whatever is missing through the shadcn CLI.
//! - **Write** - [`writer`] puts rendered files on disk.
//! - **Orchestration** - [`PageGenerator`] runs the stages in order and
//!   reports progress through an [`EventSink`].
//! - **CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use pagegen_core::{Architecture, ConsoleSink, GenerateOptions, GeneratorConfig, PageGenerator};
//!
//! let config = GeneratorConfig::new("User Management", "admin/users", Architecture::Simplified);
//! let generator = PageGenerator::with_defaults(GenerateOptions::new("."))?;
//! let result = generator.generate(config, &ConsoleSink).await?;
//! for step in &result.instructions {
//!     println!("{}", step);
//! }
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod generator;
pub mod naming;
pub mod plan;
pub mod render;
pub mod writer;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use components::{resolve_components, ComponentId, InstallOutcome, Precondition};
pub use config::{load_config, Architecture, GeneratorConfig, ValidConfig};
pub use error::{ConfigError, GenError, GenResult};
pub use events::{ConsoleSink, Event, EventSink, NullSink, RecordingSink};
pub use generator::{
    GenerateOptions, GeneratedFile, GenerationResult, InstallReport, PageGenerator, Warning,
};
pub use writer::WriteStatus;

#[cfg(feature = "tui")]
pub use tui::run;
