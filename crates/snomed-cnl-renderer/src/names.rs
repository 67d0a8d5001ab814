//! Concept name rendering.
//!
//! Turns a concept id plus its FSN into the noun phrase used in definitions.

use snomed_cnl::{NormalizedName, Relationship, SctId};

use crate::cache::NameCache;
use crate::error::{RenderError, RenderResult};
use crate::traits::TerminologyStore;

/// Renders concept names as noun phrases.
///
/// Normalization (tag stripping, lowercasing, suffix trimming) goes through
/// the optional [`NameCache`]; the article and id suffix are applied to the
/// cached value on every call.
#[derive(Clone, Copy)]
pub struct NameRenderer<'a> {
    cache: Option<&'a NameCache>,
    embed_ids: bool,
}

impl<'a> NameRenderer<'a> {
    /// Creates a name renderer.
    ///
    /// When `embed_ids` is set, rendered names carry a `" (<id>)"` suffix.
    pub fn new(cache: Option<&'a NameCache>, embed_ids: bool) -> Self {
        Self { cache, embed_ids }
    }

    /// Returns true if rendered names carry their concept id.
    pub fn embeds_ids(&self) -> bool {
        self.embed_ids
    }

    /// Gets the normalized name of a concept, consulting the cache first.
    pub fn normalized(&self, concept_id: SctId, fsn: &str) -> NormalizedName {
        if let Some(cache) = self.cache {
            if let Some(name) = cache.get(concept_id) {
                return name;
            }
        }

        let name = NormalizedName::from_fsn(fsn);
        if let Some(cache) = self.cache {
            cache.insert(concept_id, name.clone());
        }
        name
    }

    /// Renders a concept name.
    ///
    /// `suppress_id` drops the id suffix even when ids are embedded.
    pub fn render(
        &self,
        concept_id: SctId,
        fsn: &str,
        with_article: bool,
        suppress_id: bool,
    ) -> String {
        let id_suffix = (self.embed_ids && !suppress_id).then_some(concept_id);
        self.normalized(concept_id, fsn)
            .phrase(with_article, id_suffix)
            .to_string()
    }

    /// Renders a concept name with an indefinite article.
    pub fn with_article(&self, concept_id: SctId, fsn: &str) -> String {
        self.render(concept_id, fsn, true, false)
    }

    /// Renders a concept name without an article.
    pub fn plain(&self, concept_id: SctId, fsn: &str) -> String {
        self.render(concept_id, fsn, false, false)
    }

    /// Renders the destination of a relationship.
    pub fn destination(&self, relationship: &Relationship, with_article: bool) -> String {
        self.render(
            relationship.destination_id,
            &relationship.destination_fsn,
            with_article,
            false,
        )
    }

    /// Renders a concept known only by id, looking its FSN up in the store.
    pub fn lookup(
        &self,
        store: &dyn TerminologyStore,
        concept_id: SctId,
        with_article: bool,
    ) -> RenderResult<String> {
        let id_suffix = self.embed_ids.then_some(concept_id);
        if let Some(cache) = self.cache {
            if let Some(name) = cache.get(concept_id) {
                return Ok(name.phrase(with_article, id_suffix).to_string());
            }
        }

        let concept = store
            .concept(concept_id)
            .ok_or(RenderError::ConceptNotFound(concept_id))?;
        Ok(self.render(concept_id, &concept.fsn, with_article, false))
    }
}

impl std::fmt::Debug for NameRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameRenderer")
            .field("cached", &self.cache.is_some())
            .field("embed_ids", &self.embed_ids)
            .finish()
    }
}
