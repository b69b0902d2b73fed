//! Extraction configuration.

use std::path::{Path, PathBuf};

use mesh_clip::ClipParams;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, ExtractResult};

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./objects/default_save";

/// Configuration for a batch extraction.
///
/// Loadable from JSON; missing fields take their defaults:
///
/// ```json
/// {
///   "clip": { "bounds": { "min": [0, 0, 0], "max": [100, 100, 40] }, "offset": [0, 0, 20] },
///   "output_dir": "out/run_3",
///   "parallel": true,
///   "num_threads": 4
/// }
/// ```
///
/// # Example
///
/// ```
/// use mesh_extract::ExtractConfig;
/// use mesh_clip::ClipParams;
/// use mesh_types::Aabb;
///
/// let config = ExtractConfig::default()
///     .with_clip(ClipParams::bounded(Aabb::from_arrays([0.0; 3], [50.0; 3])))
///     .with_output_dir("out")
///     .with_parallel(true);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Box and offset applied to every segment.
    pub clip: ClipParams,

    /// Directory the `seg_<id>.obj`/`.mtl` pairs are written to. Created on
    /// first write if missing.
    pub output_dir: PathBuf,

    /// Process segments on a worker pool instead of one at a time.
    pub parallel: bool,

    /// Worker count in parallel mode. `None` uses rayon's default.
    pub num_threads: Option<usize>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            clip: ClipParams::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            parallel: false,
            num_threads: None,
        }
    }
}

impl ExtractConfig {
    /// Set the clip parameters.
    #[must_use]
    pub fn with_clip(mut self, clip: ClipParams) -> Self {
        self.clip = clip;
        self
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Enable or disable parallel mode.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the worker count for parallel mode.
    #[must_use]
    pub const fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = Some(n);
        self
    }

    /// Check the configuration before a run.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] if the output directory is
    /// empty or `num_threads` is zero.
    pub fn validate(&self) -> ExtractResult<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ExtractError::InvalidConfig(
                "output_dir must not be empty".into(),
            ));
        }
        if self.num_threads == Some(0) {
            return Err(ExtractError::InvalidConfig(
                "num_threads must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ConfigParse`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> ExtractResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ConfigIo`] if the file cannot be read, or
    /// [`ExtractError::ConfigParse`] if its content is invalid.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ExtractError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
