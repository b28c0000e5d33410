//! Feasibility check run before any tree is built.
//!
//! - **Fatal**: `n` exceeds `sum(w^i for i in 1..=d)`, the most nodes a tree
//!   with fan-out `w` and depth `d` can hold.
//! - **Advisory**: fewer distinct names exist at lengths `1..=f` than both
//!   `w` and `n`. Collisions then dominate and the walk may degenerate.

use crate::config::GenConfig;
use crate::error::{Error, Result};
use crate::names::{self, geometric_sum};

/// Outcome of a passing feasibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feasibility {
    /// Structurally reachable, ample naming space.
    Ok,
    /// Reachable, but the naming space is too small. Generation proceeds.
    Warning(String),
}

impl Feasibility {
    /// Warning message, if any.
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Ok => None,
            Self::Warning(msg) => Some(msg),
        }
    }
}

/// Most nodes a tree with fan-out `width` and depth `depth` can hold.
/// Saturates at `u64::MAX`.
pub fn max_files(width: usize, depth: usize) -> u64 {
    geometric_sum(width as u64, depth)
}

/// Check `files` against structural capacity and naming space.
pub fn validate(
    files: u64,
    width: usize,
    depth: usize,
    max_name_len: usize,
    alphabet_size: u64,
) -> Result<Feasibility> {
    let max = max_files(width, depth);
    if files > max {
        tracing::debug!(files, max, width, depth, "request exceeds tree capacity");
        return Err(Error::Infeasible {
            files,
            max_files: max,
            width,
            depth,
        });
    }

    let distinct = names::name_space(alphabet_size, max_name_len);
    if (width as u64) > distinct && files > distinct {
        let msg = "specified width and number of files are greater than maximum different file names which can be generated; this may result in an incorrect list of commands (or even no list at all)".to_string();
        tracing::debug!(distinct, width, files, "naming space smaller than width and file count");
        return Ok(Feasibility::Warning(msg));
    }

    tracing::debug!(files, max, distinct, "feasibility check passed");
    Ok(Feasibility::Ok)
}

/// Validate a full configuration against the built-in alphabet.
///
/// Companion mode builds no tree and is never rejected.
pub fn check(config: &GenConfig) -> Result<Feasibility> {
    if config.companion {
        return Ok(Feasibility::Ok);
    }
    validate(
        config.files,
        config.width,
        config.depth,
        config.max_name_len,
        names::ALPHABET.len() as u64,
    )
}
