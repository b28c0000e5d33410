//! Generation parameters
//!
//! Bounds for the generated tree. Every numeric bound must be at least 1.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};

/// Default number of files to create: 100,000
pub const DEFAULT_FILES: u64 = 100_000;

/// Default maximum file name (single segment) length: 255
pub const DEFAULT_MAX_NAME_LEN: usize = 255;

/// Default maximum children per directory: 1024
pub const DEFAULT_WIDTH: usize = 1024;

/// Default maximum tree depth: 255
pub const DEFAULT_DEPTH: usize = 255;

/// Tree generation parameters.
///
/// # Example
///
/// ```rust
/// use treegen::GenConfig;
///
/// let config = GenConfig::new()
///     .files(50)
///     .width(4)
///     .depth(3)
///     .max_name_len(8)
///     .seed(7);
///
/// assert!(config.check_bounds().is_ok());
/// ```
///
/// # Defaults
///
/// | Field | Default | Purpose |
/// |-------|---------|---------|
/// | `files` | 100,000 | Nodes inserted by the builder |
/// | `max_name_len` | 255 | Longest path segment |
/// | `width` | 1024 | Children per directory |
/// | `depth` | 255 | Segments from root to deepest node |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Number of insertions the builder performs (`n`).
    pub files: u64,

    /// Maximum path segment length (`f`).
    pub max_name_len: usize,

    /// Use `max_name_len` as the exact segment length.
    pub exact_length: bool,

    /// Maximum children per directory (`w`).
    pub width: usize,

    /// Maximum depth (`d`).
    pub depth: usize,

    /// Emit the expected acknowledgement stream instead of commands.
    pub companion: bool,

    /// Seed for the random source; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            files: DEFAULT_FILES,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            exact_length: false,
            width: DEFAULT_WIDTH,
            depth: DEFAULT_DEPTH,
            companion: false,
            seed: None,
        }
    }
}

impl GenConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of files
    pub fn files(mut self, files: u64) -> Self {
        self.files = files;
        self
    }

    /// Set maximum segment length
    pub fn max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    /// Treat `max_name_len` as exact
    pub fn exact_length(mut self, exact: bool) -> Self {
        self.exact_length = exact;
        self
    }

    /// Set maximum directory width
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set maximum depth
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Switch to companion (expected acknowledgement) output
    pub fn companion(mut self, companion: bool) -> Self {
        self.companion = companion;
        self
    }

    /// Fix the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for one generation run.
    ///
    /// Seeded from `seed` when set, so equal configurations produce equal
    /// trees; otherwise drawn from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Reject zero bounds.
    ///
    /// A zero width would stall the builder at the root; zero depth or name
    /// length leave nothing to generate.
    pub fn check_bounds(&self) -> Result<()> {
        let zero = [
            ("files", self.files == 0),
            ("max_name_len", self.max_name_len == 0),
            ("width", self.width == 0),
            ("depth", self.depth == 0),
        ];
        match zero.iter().find(|(_, is_zero)| *is_zero) {
            Some((name, _)) => Err(Error::InvalidConfig(format!(
                "{} must be a positive integer",
                name
            ))),
            None => Ok(()),
        }
    }
}
