//! Configuration types for importing and ranking.
//!
//! Configuration can be built in code with the `with_*` setters or decoded
//! from JSON:
//!
//! ```json
//! {
//!   "iterations": 50,
//!   "sink_policy": "uniform",
//!   "import": { "skip_blank_lines": true, "trim_fields": false }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// How the transition matrix treats a vertex with zero total outgoing weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkPolicy {
    /// Redistribute the sink's mass uniformly over all vertices.
    #[default]
    Uniform,
    /// Keep the sink's mass on the sink itself.
    SelfLoop,
    /// Fail the ranking with [`crate::Error::RankSink`].
    Reject,
    /// Divide by zero anyway; the column becomes non-finite. A warning is
    /// emitted for every sink.
    Propagate,
}

impl SinkPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkPolicy::Uniform => "uniform",
            SinkPolicy::SelfLoop => "self_loop",
            SinkPolicy::Reject => "reject",
            SinkPolicy::Propagate => "propagate",
        }
    }
}

/// Tolerances applied while parsing an edge list.
///
/// Both are off by default: any blank line or padded field is a format
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Ignore empty and whitespace-only lines.
    pub skip_blank_lines: bool,
    /// Trim surrounding whitespace (including `\r`) from each field.
    pub trim_fields: bool,
}

impl ImportConfig {
    /// Strict parsing: every line must be a well-formed record.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Skip blank lines and trim fields.
    pub fn lenient() -> Self {
        Self {
            skip_blank_lines: true,
            trim_fields: true,
        }
    }

    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    pub fn with_trim_fields(mut self, trim: bool) -> Self {
        self.trim_fields = trim;
        self
    }
}

/// Settings for a single ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    /// Number of power-iteration steps. `0` returns the uniform vector.
    pub iterations: usize,
    /// Treatment of vertices without outgoing weight.
    pub sink_policy: SinkPolicy,
    /// Edge-list parsing tolerances.
    pub import: ImportConfig,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            sink_policy: SinkPolicy::default(),
            import: ImportConfig::default(),
        }
    }
}

impl RankConfig {
    /// Create a new RankConfig with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the sink policy
    pub fn with_sink_policy(mut self, sink_policy: SinkPolicy) -> Self {
        self.sink_policy = sink_policy;
        self
    }

    /// Set the import tolerances
    pub fn with_import(mut self, import: ImportConfig) -> Self {
        self.import = import;
        self
    }

    /// Decode a configuration from JSON. Missing fields take their defaults;
    /// unknown fields are an error.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
