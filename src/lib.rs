//! # rapid-pagerank
//!
//! PageRank for directed, weighted graphs using plain power iteration over a
//! column-stochastic transition matrix.
//!
//! The crate is organized leaf-first:
//!
//! - [`graph`]: the insertion-ordered [`GraphStore`] and the
//!   `source|destination|weight` edge-list importer
//! - [`matrix`]: a dense, fixed-shape [`Matrix`] with bounds-checked access
//! - [`pagerank`]: transition matrix construction, the power-iteration
//!   engine and the [`PageRank`] facade
//!
//! ```
//! use rapid_pagerank::{GraphStore, PageRank};
//!
//! let mut graph = GraphStore::new();
//! graph.add_edge("A", "B", 1);
//! graph.add_edge("B", "A", 1);
//!
//! let ranks = PageRank::from_graph(graph).calculate_page_rank(10).unwrap();
//! assert!((ranks["A"] - 0.5).abs() < 1e-12);
//! ```

/// Enter a tracing span for a ranking stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("rank_stage", stage = $name).entered();
        #[cfg(not(feature = "tracing"))]
        let _ = $name;
    };
}

pub mod errors;
pub mod graph;
pub mod matrix;
pub mod pagerank;
pub mod types;

pub use errors::{Error, Result};
pub use graph::import::EdgeRecord;
pub use graph::store::GraphStore;
pub use matrix::Matrix;
pub use pagerank::{PageRank, PageRankResult};
pub use types::{ImportConfig, RankConfig, SinkPolicy};

/// Stage names reported through `trace_stage!`.
pub(crate) const STAGE_IMPORT: &str = "import";
pub(crate) const STAGE_TRANSITION: &str = "transition";
pub(crate) const STAGE_POWER_ITERATION: &str = "power_iteration";
