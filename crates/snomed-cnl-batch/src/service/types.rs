//! Types for the batch renderer.

use std::time::Duration;

use snomed_cnl::SctId;
use snomed_cnl_renderer::RenderError;

use crate::error::{BatchError, BatchResult};

/// A successfully rendered definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDefinition {
    /// The rendered concept.
    pub concept_id: SctId,
    /// The definition text.
    pub text: String,
}

/// A concept that could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    /// The concept that failed.
    pub concept_id: SctId,
    /// Why it failed.
    pub error: RenderError,
}

/// Result of a batch render.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Rendered definitions, in input order.
    pub rendered: Vec<RenderedDefinition>,
    /// Failed concepts, in input order.
    pub failures: Vec<RenderFailure>,
    /// Statistics for this batch.
    pub stats: BatchStats,
}

impl BatchReport {
    /// Returns true if every concept rendered.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Gets the definition rendered for a concept.
    pub fn definition(&self, concept_id: SctId) -> Option<&str> {
        self.rendered
            .iter()
            .find(|d| d.concept_id == concept_id)
            .map(|d| d.text.as_str())
    }

    /// Converts the report into its definitions, failing if any concept failed.
    pub fn into_definitions(self) -> BatchResult<Vec<RenderedDefinition>> {
        if self.failures.is_empty() {
            Ok(self.rendered)
        } else {
            Err(BatchError::Incomplete {
                failed: self.failures.len(),
                total: self.stats.requested,
            })
        }
    }
}

/// Statistics about batch rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    /// Number of concepts requested.
    pub requested: usize,
    /// Number of concepts rendered.
    pub rendered: usize,
    /// Number of concepts that failed.
    pub failed: usize,
    /// Wall-clock time spent rendering.
    pub elapsed: Duration,
}

impl BatchStats {
    /// Returns the success rate as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.requested == 0 {
            0.0
        } else {
            (self.rendered as f64 / self.requested as f64) * 100.0
        }
    }

    /// Returns the average render time per concept in milliseconds.
    pub fn avg_render_time_ms(&self) -> f64 {
        if self.requested == 0 {
            0.0
        } else {
            self.elapsed.as_secs_f64() * 1000.0 / self.requested as f64
        }
    }

    /// Adds another batch's counts to these.
    pub fn merge(&mut self, other: &BatchStats) {
        self.requested += other.requested;
        self.rendered += other.rendered;
        self.failed += other.failed;
        self.elapsed += other.elapsed;
    }
}

impl std::fmt::Display for BatchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Batch Rendering Statistics:")?;
        writeln!(f, "  Requested:       {}", self.requested)?;
        writeln!(f, "  Rendered:        {}", self.rendered)?;
        writeln!(f, "  Failed:          {}", self.failed)?;
        writeln!(f, "  Success rate:    {:.1}%", self.success_rate())?;
        writeln!(f, "  Total time:      {:.1}ms", self.elapsed.as_secs_f64() * 1000.0)?;
        writeln!(f, "  Avg time:        {:.2}ms", self.avg_render_time_ms())?;
        Ok(())
    }
}
