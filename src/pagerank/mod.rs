//! PageRank algorithms
//!
//! This module ties the stages together: a [`GraphStore`] is normalized into
//! a transition matrix ([`transition`]), which the power-iteration engine
//! ([`power`]) applies to the uniform random-surfer vector.

pub mod power;
pub mod transition;

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::errors::Result;
use crate::graph::store::GraphStore;
use crate::matrix::Matrix;
use crate::types::RankConfig;
use power::{uniform_vector, PowerIteration};
use transition::TransitionMatrixBuilder;

/// Result of a PageRank computation
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Vertex names, in graph order
    pub vertices: Vec<String>,
    /// Scores for each vertex (indexed like `vertices`)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Maps vertex name -> position in `vertices`
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(vertices: Vec<String>, scores: Vec<f64>, iterations: usize) -> Self {
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self {
            vertices,
            scores,
            iterations,
            index,
        }
    }

    /// Get the score for a vertex
    pub fn score(&self, vertex: &str) -> Option<f64> {
        self.index
            .get(vertex)
            .and_then(|&i| self.scores.get(i).copied())
    }

    /// Get the top N vertices by score. Ties keep graph order.
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self
            .vertices
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Sum of all scores
    pub fn total_mass(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Mapping from vertex name to score
    pub fn to_map(&self) -> FxHashMap<String, f64> {
        self.vertices
            .iter()
            .cloned()
            .zip(self.scores.iter().copied())
            .collect()
    }

    /// Serialize as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// PageRank over an imported graph
#[derive(Debug, Clone, Default)]
pub struct PageRank {
    graph: GraphStore,
    config: RankConfig,
}

impl PageRank {
    /// Create a ranker with an empty graph and default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank an already built graph
    pub fn from_graph(graph: GraphStore) -> Self {
        Self {
            graph,
            config: RankConfig::default(),
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: RankConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Import an edge-list file, replacing the current graph.
    ///
    /// On error the current graph is left as it was.
    pub fn import_data(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.graph = GraphStore::from_path(path, &self.config.import)?;
        Ok(())
    }

    /// Transition matrix of the current graph under the configured sink policy
    pub fn construct_transition_matrix(&self) -> Result<Matrix> {
        TransitionMatrixBuilder::new()
            .with_sink_policy(self.config.sink_policy)
            .build(&self.graph)
    }

    /// Uniform starting vector for the current graph
    pub fn random_surfer_vector(&self) -> Matrix {
        uniform_vector(self.graph.vertex_count())
    }

    /// Run with the configured number of iterations
    pub fn rank(&self) -> Result<PageRankResult> {
        self.rank_with_iterations(self.config.iterations)
    }

    /// Run with an explicit number of iterations
    pub fn rank_with_iterations(&self, iterations: usize) -> Result<PageRankResult> {
        let transition = self.construct_transition_matrix()?;
        let state = PowerIteration::new(iterations).run(&transition)?;

        Ok(PageRankResult::new(
            self.graph.vertices().to_vec(),
            state.into_vec(),
            iterations,
        ))
    }

    /// Mapping from vertex name to PageRank after `iterations` steps
    pub fn calculate_page_rank(&self, iterations: usize) -> Result<FxHashMap<String, f64>> {
        Ok(self.rank_with_iterations(iterations)?.to_map())
    }
}
