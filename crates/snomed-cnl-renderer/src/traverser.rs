//! Part-of traversal for site rendering.
//!
//! This module provides the `PartOfTraverser` struct for walking the
//! anatomical "part of" links of a body structure using BFS.

use std::collections::{HashSet, VecDeque};

use snomed_cnl::SctId;

use crate::traits::TerminologyStore;

/// Walks outbound part-of links breadth-first.
///
/// Concepts in the stop-list are neither collected nor expanded, and a
/// visited set bounds the walk on cyclic data.
///
/// # Example
///
/// ```ignore
/// use snomed_cnl_renderer::PartOfTraverser;
///
/// let stop_list = store.stop_list();
/// let traverser = PartOfTraverser::new(&store, &stop_list);
///
/// // Femur structure, then the structures it is part of
/// let closure = traverser.closure(71341001);
/// ```
pub struct PartOfTraverser<'a> {
    store: &'a dyn TerminologyStore,
    stop_list: &'a HashSet<SctId>,
}

impl<'a> PartOfTraverser<'a> {
    /// Creates a new traverser over the given store and stop-list.
    pub fn new(store: &'a dyn TerminologyStore, stop_list: &'a HashSet<SctId>) -> Self {
        Self { store, stop_list }
    }

    /// Gets the part-of closure of a concept, in discovery order.
    ///
    /// The concept itself is always the first member, even when it is in the
    /// stop-list; it is only expanded when it is not.
    pub fn closure(&self, concept_id: SctId) -> Vec<SctId> {
        let mut members = vec![concept_id];
        let mut visited = HashSet::with_capacity(16);
        let mut queue = VecDeque::with_capacity(8);

        visited.insert(concept_id);
        if !self.stop_list.contains(&concept_id) {
            queue.push_back(concept_id);
        }

        while let Some(current) = queue.pop_front() {
            for whole in self.store.part_of(current) {
                if self.stop_list.contains(&whole) || !visited.insert(whole) {
                    continue;
                }
                members.push(whole);
                queue.push_back(whole);
            }
        }

        members
    }

    /// Gets the part-of ancestors of a concept, excluding the concept itself.
    pub fn ancestors(&self, concept_id: SctId) -> Vec<SctId> {
        let mut closure = self.closure(concept_id);
        closure.remove(0);
        closure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snomed_cnl::{Concept, ConceptRef, Relationship};
    use std::collections::HashMap;

    /// Mock store holding only part-of links.
    struct MockStore {
        part_of: HashMap<SctId, Vec<SctId>>,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                part_of: HashMap::new(),
            }
        }

        fn add_part_of(&mut self, part: SctId, whole: SctId) {
            self.part_of.entry(part).or_default().push(whole);
        }
    }

    impl TerminologyStore for MockStore {
        fn concept(&self, _concept_id: SctId) -> Option<Concept> {
            None
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

    /// Creates a test anatomy:
    /// ```text
    ///   100 (stop)
    ///    |
    ///   200
    ///  /   \
    /// 300  400
    ///  \   /
    ///   500
    /// ```
    fn create_test_anatomy() -> MockStore {
        let mut store = MockStore::new();
        store.add_part_of(200, 100);
        store.add_part_of(300, 200);
        store.add_part_of(400, 200);
        store.add_part_of(500, 300);
        store.add_part_of(500, 400);
        store
    }

    fn stop_list() -> HashSet<SctId> {
        [100].into_iter().collect()
    }

    #[test]
    fn test_closure_discovery_order() {
        let store = create_test_anatomy();
        let stop = stop_list();
        let traverser = PartOfTraverser::new(&store, &stop);

        assert_eq!(traverser.closure(500), vec![500, 300, 400, 200]);
    }

    #[test]
    fn test_closure_of_leaf_is_self() {
        let store = create_test_anatomy();
        let stop = stop_list();
        let traverser = PartOfTraverser::new(&store, &stop);

        assert_eq!(traverser.closure(999), vec![999]);
        assert!(traverser.ancestors(999).is_empty());
    }

    #[test]
    fn test_stop_list_not_collected() {
        let store = create_test_anatomy();
        let stop = stop_list();
        let traverser = PartOfTraverser::new(&store, &stop);

        assert_eq!(traverser.closure(200), vec![200]);
    }

    #[test]
    fn test_stop_listed_start_is_kept_but_not_expanded() {
        let mut store = create_test_anatomy();
        store.add_part_of(100, 50);
        let stop = stop_list();
        let traverser = PartOfTraverser::new(&store, &stop);

        assert_eq!(traverser.closure(100), vec![100]);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut store = MockStore::new();
        store.add_part_of(1, 2);
        store.add_part_of(2, 3);
        store.add_part_of(3, 1);
        let stop = HashSet::new();
        let traverser = PartOfTraverser::new(&store, &stop);

        assert_eq!(traverser.closure(1), vec![1, 2, 3]);
        assert_eq!(traverser.ancestors(1), vec![2, 3]);
    }
}
