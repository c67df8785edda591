//! Run configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for one mirroring run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct MirrorConfig {
    /// Tree to read images from.
    pub input_root: PathBuf,

    /// Tree to write mirrored images to.
    #[builder(default = "default_output_root()")]
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Number of transform workers (1 = sequential, 0 = auto-detect).
    #[builder(default = "1")]
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

fn default_output_root() -> PathBuf {
    PathBuf::from("output")
}

fn default_jobs() -> usize {
    1
}

impl MirrorConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let Some(ref input) = self.input_root else {
            return Err("Input root is required".to_string());
        };
        if input.as_os_str().is_empty() {
            return Err("Input root cannot be empty".to_string());
        }
        if let Some(ref output) = self.output_root {
            if output.as_os_str().is_empty() {
                return Err("Output root cannot be empty".to_string());
            }
            if output == input {
                return Err("Output root must differ from input root".to_string());
            }
        }
        Ok(())
    }
}

impl MirrorConfig {
    /// Create a new config builder.
    pub fn builder() -> MirrorConfigBuilder {
        MirrorConfigBuilder::default()
    }

    /// Create a sequential config for a pair of roots.
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            jobs: 1,
        }
    }

    /// Whether transforms run on a worker pool.
    pub fn is_parallel(&self) -> bool {
        self.jobs != 1
    }
}
