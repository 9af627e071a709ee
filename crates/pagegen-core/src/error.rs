//! Typed failures surfaced by the generation pipeline

use crate::plan::FileRole;
use std::path::PathBuf;
use thiserror::Error;

/// A malformed configuration reached the core
///
/// Always raised before any filesystem or process I/O.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} is required")]
    Empty { field: &'static str },

    #[error(
        "invalid route path '{0}': only lowercase letters, numbers, dashes, and slashes are allowed"
    )]
    RoutePath(String),

    #[error("invalid {field} '{value}': {rule}")]
    Identifier {
        field: &'static str,
        value: String,
        rule: &'static str,
    },

    #[error("duplicate column key '{0}'")]
    DuplicateColumn(String),

    #[error("duplicate filter key '{0}'")]
    DuplicateFilter(String),

    #[error("filter keys '{first}' and '{second}' generate the same state names")]
    FilterNameClash { first: String, second: String },

    #[error("sortable column '{0}' does not match any column key")]
    UnknownSortableColumn(String),

    #[error("at least one column is required")]
    NoColumns,

    #[error("{first:?} and {second:?} both resolve to {}", .path.display())]
    DuplicatePath {
        first: FileRole,
        second: FileRole,
        path: PathBuf,
    },

    #[error("failed to read config file {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Fatal failure of a generation run
#[derive(Debug, Error)]
pub enum GenError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load template {name}: {reason}")]
    Template { name: String, reason: String },

    #[error("failed to render {role:?}: {reason}")]
    Render { role: FileRole, reason: String },

    #[error("refusing to overwrite existing file {}", .0.display())]
    WriteConflict(PathBuf),

    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type GenResult<T> = Result<T, GenError>;
