//! Controlled English generator.

use std::collections::HashSet;
use std::sync::Arc;

use snomed_cnl::{Concept, Relationship, SctId};
use tracing::debug;

use crate::cache::NameCache;
use crate::composer::compose;
use crate::config::RendererConfig;
use crate::dispatch::render_relationships;
use crate::error::{RenderError, RenderResult};
use crate::names::NameRenderer;
use crate::render::RenderContext;
use crate::traits::TerminologyStore;

/// Main definition rendering engine.
///
/// The generator reads a concept's ISA parents and active relationships from
/// any store implementing [`TerminologyStore`] and renders them as a
/// controlled English definition.
///
/// # Example
///
/// ```ignore
/// use snomed_cnl_renderer::{ControlledEnglishGenerator, TerminologyStore};
///
/// // Assumes MyStore implements TerminologyStore
/// let store = MyStore::new();
/// let generator = ControlledEnglishGenerator::new(&store);
///
/// let text = generator.render_definition(5913000, false)?;
/// // "Fracture of neck of femur is a fracture of femur.  It is ..."
/// ```
pub struct ControlledEnglishGenerator<'a> {
    /// Reference to the terminology store.
    store: &'a dyn TerminologyStore,
    /// Generator configuration.
    config: RendererConfig,
    /// Concept name cache (optional).
    cache: Option<Arc<NameCache>>,
    /// Concepts at which part-of walks stop.
    stop_list: HashSet<SctId>,
}

impl<'a> ControlledEnglishGenerator<'a> {
    /// Creates a new generator with default configuration.
    ///
    /// Names are not cached and the store's stop-list is used.
    pub fn new(store: &'a dyn TerminologyStore) -> Self {
        Self::with_config(store, RendererConfig::default())
    }

    /// Creates a generator with custom configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = RendererConfig::builder()
    ///     .with_name_cache(NameCacheConfig::default())
    ///     .build();
    ///
    /// let generator = ControlledEnglishGenerator::with_config(&store, config);
    /// ```
    pub fn with_config(store: &'a dyn TerminologyStore, config: RendererConfig) -> Self {
        let cache = config
            .name_cache
            .as_ref()
            .map(|c| Arc::new(NameCache::new(c.clone())));
        Self::build(store, config, cache)
    }

    /// Creates a generator that uses an existing name cache.
    ///
    /// Used to share one cache between several generators, e.g. across the
    /// worker threads of a batch. The configuration's own cache settings are
    /// ignored.
    pub fn with_shared_cache(
        store: &'a dyn TerminologyStore,
        config: RendererConfig,
        cache: Arc<NameCache>,
    ) -> Self {
        Self::build(store, config, Some(cache))
    }

    fn build(
        store: &'a dyn TerminologyStore,
        config: RendererConfig,
        cache: Option<Arc<NameCache>>,
    ) -> Self {
        let stop_list = config
            .stop_list
            .clone()
            .unwrap_or_else(|| store.stop_list());
        Self {
            store,
            config,
            cache,
            stop_list,
        }
    }

    /// Returns a reference to the cache if enabled.
    pub fn cache(&self) -> Option<&NameCache> {
        self.cache.as_deref()
    }

    /// Returns a reference to the generator configuration.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Renders the definition of a concept looked up by id.
    ///
    /// # Arguments
    ///
    /// * `concept_id` - The concept to define
    /// * `embed_ids` - Append `" (<id>)"` to every concept name
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The definition text
    /// * `Err(RenderError)` - If the concept or one of its relationships
    ///   cannot be rendered; no partial text is returned
    pub fn render_definition(&self, concept_id: SctId, embed_ids: bool) -> RenderResult<String> {
        let concept = self
            .store
            .concept(concept_id)
            .ok_or(RenderError::ConceptNotFound(concept_id))?;
        self.render_concept(&concept, embed_ids)
    }

    /// Renders the definition of an already loaded concept.
    pub fn render_concept(&self, concept: &Concept, embed_ids: bool) -> RenderResult<String> {
        let names = NameRenderer::new(self.cache(), embed_ids);
        let ctx = RenderContext::new(self.store, names, &self.stop_list);

        let classification: Vec<String> = self
            .store
            .isa_parents(concept.id)
            .iter()
            .map(|parent| names.with_article(parent.id, &parent.fsn))
            .collect();

        let relationships: Vec<Relationship> = self
            .store
            .active_outbound_relationships(concept.id)
            .into_iter()
            .filter(|r| r.active && !r.is_isa())
            .collect();
        debug!(
            concept_id = concept.id,
            parents = classification.len(),
            relationships = relationships.len(),
            "rendering definition"
        );

        let phrases = render_relationships(ctx, &relationships)?;
        Ok(compose(concept.name(), &classification, &phrases))
    }
}

impl std::fmt::Debug for ControlledEnglishGenerator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlledEnglishGenerator")
            .field("config", &self.config)
            .field("cache", &self.cache.as_ref().map(|c| c.stats()))
            .field("stop_list", &self.stop_list.len())
            .finish()
    }
}
