//! Treegen - random filesystem-tree fixtures
//!
//! Generates `create_dir` / `create` command streams for driving a
//! filesystem implementation under test, plus the matching stream of `ok`
//! acknowledgements a correct implementation answers with.
//!
//! # Example
//!
//! ```rust
//! use treegen::{GenConfig, generate};
//!
//! fn main() -> treegen::Result<()> {
//!     let config = GenConfig::new()
//!         .files(3)
//!         .width(1)
//!         .depth(5)
//!         .max_name_len(1)
//!         .seed(0);
//!     let mut out = Vec::new();
//!
//!     let report = generate(&config, &mut out)?;
//!     assert_eq!(report.commands, 3);
//!
//!     let text = String::from_utf8(out).unwrap();
//!     assert_eq!(text.lines().filter(|l| l.starts_with("create_dir")).count(), 2);
//!     assert!(text.ends_with("exit\n"));
//!     Ok(())
//! }
//! ```

mod config;
mod error;
pub mod feasibility;
pub mod names;
pub mod serialize;
mod tree;

pub use config::{
    DEFAULT_DEPTH, DEFAULT_FILES, DEFAULT_MAX_NAME_LEN, DEFAULT_WIDTH, GenConfig,
};
pub use error::{Error, Result};
pub use feasibility::Feasibility;
pub use serialize::Command;
pub use tree::{Node, Tree, TreeStats};

use std::io::Write;

use serde::Serialize;

/// Summary of one [`generate`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    /// Whether the acknowledgement stream was written instead of commands.
    pub companion: bool,
    /// Naming-space warning raised by the feasibility check.
    pub warning: Option<String>,
    /// Creation commands (or acknowledgements) written.
    pub commands: u64,
    /// Random walks taken by the builder.
    pub rounds: u64,
    /// Tree shape; `None` in companion mode.
    pub tree: Option<TreeStats>,
}

/// Validate, build, and write.
///
/// In companion mode writes `config.files` acknowledgement lines and nothing
/// else. Otherwise checks feasibility, builds a tree from
/// [`GenConfig::rng`], and writes its script to `out`. A naming-space warning
/// does not stop generation; it is returned in the report. Nothing is written
/// when validation fails.
pub fn generate<W: Write + ?Sized>(config: &GenConfig, out: &mut W) -> Result<GenerateReport> {
    config.check_bounds()?;
    let feasibility = feasibility::check(config)?;
    generate_checked(config, &feasibility, out)
}

/// Like [`generate`], for callers that already ran
/// [`feasibility::check`] (for instance to print its warning first).
pub fn generate_checked<W: Write + ?Sized>(
    config: &GenConfig,
    feasibility: &Feasibility,
    out: &mut W,
) -> Result<GenerateReport> {
    if config.companion {
        config.check_bounds()?;
        serialize::write_acks(config.files, out)?;
        return Ok(GenerateReport {
            companion: true,
            commands: config.files,
            ..GenerateReport::default()
        });
    }

    let mut rng = config.rng();
    let tree = Tree::build(config, &mut rng)?;
    let stats = tree.stats();
    tracing::debug!(
        nodes = stats.nodes,
        directories = stats.directories,
        files = stats.files,
        max_depth = stats.max_depth,
        "tree shape"
    );

    let commands = serialize::write_script(tree.root(), out)?;
    Ok(GenerateReport {
        companion: false,
        warning: feasibility.warning().map(str::to_string),
        commands,
        rounds: tree.rounds(),
        tree: Some(stats),
    })
}
