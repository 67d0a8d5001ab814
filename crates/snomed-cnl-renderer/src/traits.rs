//! The terminology store seam.
//!
//! This module defines the [`TerminologyStore`] trait that must be implemented
//! by any SNOMED CT store the renderer reads from.
//!
//! # Architecture Note
//!
//! This crate intentionally does NOT depend on a concrete store (database,
//! RF2 loader, ...). The trait is defined here; implementations live in the
//! consuming crate.
//!
//! # Example
//!
//! ```ignore
//! use snomed_cnl::{Concept, ConceptRef, Relationship, SctId};
//! use snomed_cnl_renderer::TerminologyStore;
//!
//! impl TerminologyStore for MyStore {
//!     fn concept(&self, concept_id: SctId) -> Option<Concept> {
//!         self.concepts.get(&concept_id).cloned()
//!     }
//!
//!     fn active_outbound_relationships(&self, concept_id: SctId) -> Vec<Relationship> {
//!         self.relationships_from(concept_id).filter(|r| r.active).collect()
//!     }
//!
//!     fn isa_parents(&self, concept_id: SctId) -> Vec<ConceptRef> {
//!         self.parents_of(concept_id)
//!     }
//!
//!     fn part_of(&self, concept_id: SctId) -> Vec<SctId> {
//!         self.part_of_targets(concept_id)
//!     }
//! }
//! ```

use std::collections::HashSet;

use snomed_cnl::{Concept, ConceptRef, Relationship, SctId};

/// Well-known concepts consulted by the renderer.
pub mod well_known {
    use snomed_cnl::SctId;

    /// Body structure
    pub const BODY_STRUCTURE: SctId = 123037004;
    /// Anatomical structure
    pub const ANATOMICAL_STRUCTURE: SctId = 91723000;
    /// Anatomical or acquired body structure
    pub const ANATOMICAL_OR_ACQUIRED_BODY_STRUCTURE: SctId = 442083009;
    /// Body region structure
    pub const BODY_REGION_STRUCTURE: SctId = 818983003;
    /// Body part structure
    pub const BODY_PART_STRUCTURE: SctId = 38866009;
    /// Body system structure
    pub const BODY_SYSTEM_STRUCTURE: SctId = 91689009;
    /// Body organ structure
    pub const BODY_ORGAN_STRUCTURE: SctId = 113343008;
    /// Entire body as a whole
    pub const ENTIRE_BODY_AS_A_WHOLE: SctId = 38266002;

    /// Broad anatomical divisions that are never useful as a site description.
    pub const ANATOMICAL_STOP_LIST: &[SctId] = &[
        BODY_STRUCTURE,
        ANATOMICAL_STRUCTURE,
        ANATOMICAL_OR_ACQUIRED_BODY_STRUCTURE,
        BODY_REGION_STRUCTURE,
        BODY_PART_STRUCTURE,
        BODY_SYSTEM_STRUCTURE,
        BODY_ORGAN_STRUCTURE,
        ENTIRE_BODY_AS_A_WHOLE,
    ];
}

/// Trait for stores the renderer can read concept definitions from.
///
/// This trait abstracts the underlying SNOMED store implementation. All
/// methods are read-only; rendering never writes to the store.
///
/// # Required Methods
///
/// - [`concept`](Self::concept) - Look up a concept (FSN, status)
/// - [`active_outbound_relationships`](Self::active_outbound_relationships) - Outbound facts
/// - [`isa_parents`](Self::isa_parents) - Direct IS_A parents
/// - [`part_of`](Self::part_of) - Single-hop part-of targets
///
/// # Optional Methods (with defaults)
///
/// - [`stop_list`](Self::stop_list) - Anatomical stop-list for part-of walks
pub trait TerminologyStore: Send + Sync {
    /// Looks up a concept by id.
    fn concept(&self, concept_id: SctId) -> Option<Concept>;

    /// Gets the active outbound relationships of a concept.
    ///
    /// May include IS_A relationships; the renderer filters them out.
    fn active_outbound_relationships(&self, concept_id: SctId) -> Vec<Relationship>;

    /// Gets the direct IS_A parents of a concept with their FSNs.
    fn isa_parents(&self, concept_id: SctId) -> Vec<ConceptRef>;

    /// Gets the concepts this concept is directly "part of" (single hop).
    fn part_of(&self, concept_id: SctId) -> Vec<SctId>;

    /// Gets the concepts at which part-of walks stop.
    fn stop_list(&self) -> HashSet<SctId> {
        well_known::ANATOMICAL_STOP_LIST.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Mock store for testing the TerminologyStore trait.
    struct MockStore {
        concepts: HashMap<SctId, Concept>,
        part_of: HashMap<SctId, Vec<SctId>>,
    }

    impl TerminologyStore for MockStore {
        fn concept(&self, concept_id: SctId) -> Option<Concept> {
            self.concepts.get(&concept_id).cloned()
        }

        fn active_outbound_relationships(&self, _concept_id: SctId) -> Vec<Relationship> {
            Vec::new()
        }

        fn isa_parents(&self, _concept_id: SctId) -> Vec<ConceptRef> {
            Vec::new()
        }

        fn part_of(&self, concept_id: SctId) -> Vec<SctId> {
            self.part_of.get(&concept_id).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_default_stop_list() {
        let store = MockStore {
            concepts: HashMap::new(),
            part_of: HashMap::new(),
        };
        let stop_list = store.stop_list();
        assert!(stop_list.contains(&well_known::BODY_STRUCTURE));
        assert_eq!(stop_list.len(), well_known::ANATOMICAL_STOP_LIST.len());
    }

    #[test]
    fn test_mock_store_lookup() {
        let mut concepts = HashMap::new();
        concepts.insert(71341001, Concept::new(71341001, "Femur structure (body structure)"));
        let mut part_of = HashMap::new();
        part_of.insert(71341001, vec![62413002]);
        let store = MockStore { concepts, part_of };

        assert_eq!(store.concept(71341001).map(|c| c.id), Some(71341001));
        assert!(store.concept(1).is_none());
        assert_eq!(store.part_of(71341001), vec![62413002]);
        assert!(store.part_of(62413002).is_empty());
    }
}
