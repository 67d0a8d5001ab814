//! Batch definition rendering with a shared name cache.
//!
//! This module provides a high-level service for rendering the definitions
//! of many concepts. Failures are collected per concept rather than aborting
//! the batch.
//!
//! # Example
//!
//! ```ignore
//! use snomed_cnl_batch::service::BatchRenderer;
//!
//! // Create the service
//! let batch = BatchRenderer::new(&store);
//!
//! // Render a list of concepts
//! let report = batch.render_all(&[71620000, 195967001]);
//! println!("Rendered: {} / {}", report.stats.rendered, report.stats.requested);
//!
//! // Render one concept through the same cache
//! let text = batch.render_one(71620000)?;
//! ```

mod types;

pub use types::{BatchReport, BatchStats, RenderFailure, RenderedDefinition};

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use snomed_cnl::SctId;
use snomed_cnl_renderer::{
    CacheStats, ControlledEnglishGenerator, NameCache, NameCacheConfig, RenderResult,
    RendererConfig, TerminologyStore,
};
use tracing::{debug, info, warn};

use crate::error::BatchResult;

/// Configuration for batch rendering.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Render on the rayon thread pool (requires the `parallel` feature).
    pub parallel: bool,
    /// Append concept ids to rendered names.
    pub embed_ids: bool,
    /// Shared name cache configuration (None = no caching).
    pub name_cache: Option<NameCacheConfig>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            embed_ids: false,
            name_cache: Some(NameCacheConfig::default()),
        }
    }
}

impl BatchConfig {
    /// Creates a new builder for BatchConfig.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder::default()
    }

    /// Creates a config with no caching.
    pub fn no_cache() -> Self {
        Self {
            name_cache: None,
            ..Self::default()
        }
    }
}

/// Builder for BatchConfig.
#[derive(Debug, Clone, Default)]
pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl BatchConfigBuilder {
    /// Enables or disables parallel rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Enables or disables concept ids in rendered names.
    pub fn with_embed_ids(mut self, embed_ids: bool) -> Self {
        self.config.embed_ids = embed_ids;
        self
    }

    /// Sets the shared name cache configuration.
    pub fn with_name_cache(mut self, name_cache: NameCacheConfig) -> Self {
        self.config.name_cache = Some(name_cache);
        self
    }

    /// Disables the shared name cache.
    pub fn without_name_cache(mut self) -> Self {
        self.config.name_cache = None;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> BatchConfig {
        self.config
    }
}

/// Renders the definitions of many concepts.
///
/// One name cache is shared by every concept the renderer sees, across calls
/// and across threads.
pub struct BatchRenderer<'a> {
    generator: ControlledEnglishGenerator<'a>,
    config: BatchConfig,
    cache: Option<Arc<NameCache>>,
    stats: RwLock<BatchStats>,
}

impl<'a> BatchRenderer<'a> {
    /// Creates a new batch renderer with default configuration.
    pub fn new(store: &'a dyn TerminologyStore) -> Self {
        Self::with_config(store, BatchConfig::default())
    }

    /// Creates a new batch renderer with custom configuration.
    pub fn with_config(store: &'a dyn TerminologyStore, config: BatchConfig) -> Self {
        let cache = config
            .name_cache
            .as_ref()
            .map(|c| Arc::new(NameCache::new(c.clone())));

        let generator = match &cache {
            Some(cache) => ControlledEnglishGenerator::with_shared_cache(
                store,
                RendererConfig::default(),
                Arc::clone(cache),
            ),
            None => ControlledEnglishGenerator::new(store),
        };

        Self {
            generator,
            config,
            cache,
            stats: RwLock::new(BatchStats::default()),
        }
    }

    /// Renders every concept in `concept_ids`.
    ///
    /// Concepts that fail are reported with their error; the rest of the
    /// batch still renders. Output keeps input order.
    pub fn render_all(&self, concept_ids: &[SctId]) -> BatchReport {
        let start = Instant::now();
        let outcomes = self.render_outcomes(concept_ids);

        let mut report = BatchReport::default();
        for (concept_id, outcome) in outcomes {
            match outcome {
                Ok(text) => report.rendered.push(RenderedDefinition { concept_id, text }),
                Err(error) => {
                    warn!(concept_id, error = %error, "failed to render definition");
                    report.failures.push(RenderFailure { concept_id, error });
                }
            }
        }

        report.stats = BatchStats {
            requested: concept_ids.len(),
            rendered: report.rendered.len(),
            failed: report.failures.len(),
            elapsed: start.elapsed(),
        };
        info!(
            requested = report.stats.requested,
            rendered = report.stats.rendered,
            failed = report.stats.failed,
            elapsed_ms = report.stats.elapsed.as_millis() as u64,
            "batch rendered"
        );

        self.stats.write().merge(&report.stats);
        report
    }

    /// Renders one concept through the shared cache.
    pub fn render_one(&self, concept_id: SctId) -> BatchResult<String> {
        Ok(self
            .generator
            .render_definition(concept_id, self.config.embed_ids)?)
    }

    #[cfg(feature = "parallel")]
    fn render_outcomes(&self, concept_ids: &[SctId]) -> Vec<(SctId, RenderResult<String>)> {
        use rayon::prelude::*;

        if !self.config.parallel {
            return self.render_sequential(concept_ids);
        }
        debug!(concepts = concept_ids.len(), "rendering batch in parallel");
        let embed_ids = self.config.embed_ids;
        concept_ids
            .par_iter()
            .map(|&id| (id, self.generator.render_definition(id, embed_ids)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn render_outcomes(&self, concept_ids: &[SctId]) -> Vec<(SctId, RenderResult<String>)> {
        if self.config.parallel {
            debug!("parallel feature disabled, rendering batch sequentially");
        }
        self.render_sequential(concept_ids)
    }

    fn render_sequential(&self, concept_ids: &[SctId]) -> Vec<(SctId, RenderResult<String>)> {
        let embed_ids = self.config.embed_ids;
        concept_ids
            .iter()
            .map(|&id| (id, self.generator.render_definition(id, embed_ids)))
            .collect()
    }

    /// Clears the shared name cache.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// Returns name cache statistics, if caching is enabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|c| c.stats())
    }

    /// Returns statistics accumulated over every batch.
    pub fn stats(&self) -> BatchStats {
        self.stats.read().clone()
    }

    /// Resets accumulated statistics.
    pub fn reset_stats(&self) {
        *self.stats.write() = BatchStats::default();
    }

    /// Returns a reference to the underlying generator.
    pub fn generator(&self) -> &ControlledEnglishGenerator<'a> {
        &self.generator
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }
}
