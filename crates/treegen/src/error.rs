//! Error types for Treegen
//!
//! Two tiers:
//! - Fatal: the request cannot be satisfied (`Infeasible`, `InvalidConfig`)
//!   or the output sink failed (`Io`).
//! - Advisory: naming-space warnings are not errors; they travel as
//!   [`Feasibility::Warning`](crate::Feasibility::Warning).

use thiserror::Error;

/// Result type alias using Treegen's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Treegen error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested file count exceeds what width and depth bounds can hold.
    #[error(
        "requested number of files ({files}) exceeding width and depth limits (max {max_files} with -w {width} -d {depth})"
    )]
    Infeasible {
        files: u64,
        max_files: u64,
        width: usize,
        depth: usize,
    },

    /// A generation bound is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while writing the command stream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
