//! # Sector Development Tools
//!
//! Command-line tools for development:
//! - Catalog validation
//! - Catalog export
//! - Seeded skirmishes for checking combat numbers

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod skirmish;
pub mod validate;

use std::path::PathBuf;

use sector_core::error::GameError;
use thiserror::Error;

/// Errors surfaced by the tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Reading or writing a file failed.
    #[error("{path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// The catalog parsed but has broken cross-references.
    #[error("{count} catalog problem(s) found", count = problems.len())]
    InvalidCatalog {
        /// One line per problem.
        problems: Vec<String>,
    },

    /// A game rule rejected the request.
    #[error(transparent)]
    Game(#[from] GameError),

    /// Rendering output failed.
    #[error("Failed to render output: {0}")]
    Render(String),
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;
