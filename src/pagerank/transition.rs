//! Transition matrix construction
//!
//! Column `i` of the transition matrix is the probability distribution of a
//! random surfer leaving vertex `i`: row `j` holds `weight(i, j) / out(i)`.
//! Rows are destinations and columns are sources, so right-multiplying by a
//! column probability vector moves mass from sources to destinations.

use crate::errors::{Error, Result};
use crate::graph::store::GraphStore;
use crate::matrix::Matrix;
use crate::types::SinkPolicy;

/// Builds column-stochastic transition matrices from a [`GraphStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionMatrixBuilder {
    /// Treatment of vertices with zero total outgoing weight
    pub sink_policy: SinkPolicy,
}

impl TransitionMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sink policy
    pub fn with_sink_policy(mut self, sink_policy: SinkPolicy) -> Self {
        self.sink_policy = sink_policy;
        self
    }

    /// Build the N x N transition matrix, indexed in vertex order
    pub fn build(&self, graph: &GraphStore) -> Result<Matrix> {
        trace_stage!(crate::STAGE_TRANSITION);
        let n = graph.vertex_count();
        let mut transition = Matrix::new(n, n);
        let sinks = graph.sinks();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = n,
            sinks = sinks.len(),
            sink_policy = self.sink_policy.as_str(),
            "building transition matrix"
        );

        for src in 0..n {
            // `sinks` is ascending
            if sinks.binary_search(&src).is_ok() {
                self.fill_sink_column(&mut transition, graph, src)?;
                continue;
            }

            let total_out = graph.out_weight(src) as f64;
            for (dst, &weight) in graph.out_weights(src).iter().enumerate() {
                transition.set(dst, src, weight as f64 / total_out)?;
            }
        }

        Ok(transition)
    }

    fn fill_sink_column(&self, transition: &mut Matrix, graph: &GraphStore, src: usize) -> Result<()> {
        let n = graph.vertex_count();
        let vertex = graph.name_of(src).unwrap_or_default();

        match self.sink_policy {
            SinkPolicy::Uniform => {
                let share = 1.0 / n as f64;
                for dst in 0..n {
                    transition.set(dst, src, share)?;
                }
            }
            SinkPolicy::SelfLoop => {
                transition.set(src, src, 1.0)?;
            }
            SinkPolicy::Reject => {
                return Err(Error::RankSink {
                    vertex: vertex.to_string(),
                });
            }
            SinkPolicy::Propagate => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    vertex,
                    sink_policy = self.sink_policy.as_str(),
                    "rank sink: zero outgoing weight, transition column is not finite"
                );
                for dst in 0..n {
                    transition.set(dst, src, f64::NAN)?;
                }
            }
        }

        Ok(())
    }
}
