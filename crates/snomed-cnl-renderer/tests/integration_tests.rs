//! End-to-end tests for definition rendering.
//!
//! These tests render whole concepts from a mock terminology store and check
//! the composed sentences.

use std::collections::HashMap;

use snomed_cnl::attributes::*;
use snomed_cnl_renderer::{
    Concept, ConceptRef, ContextKind, ControlledEnglishGenerator, NameCacheConfig, Relationship,
    RenderError, RendererConfig, SctId, TerminologyStore,
};

/// Mock SNOMED CT store for integration testing.
struct IntegrationTestStore {
    concepts: HashMap<SctId, Concept>,
    parents: HashMap<SctId, Vec<SctId>>,
    relationships: HashMap<SctId, Vec<Relationship>>,
    part_of: HashMap<SctId, Vec<SctId>>,
    next_relationship_id: SctId,
}

impl IntegrationTestStore {
    fn new() -> Self {
        let mut store = IntegrationTestStore {
            concepts: HashMap::new(),
            parents: HashMap::new(),
            relationships: HashMap::new(),
            part_of: HashMap::new(),
            next_relationship_id: 1000,
        };

        // Anatomy
        store.add_concept(123037004, "Body structure (body structure)");
        store.add_concept(71341001, "Femur structure (body structure)");
        store.add_concept(272673000, "Bone structure of lower limb (body structure)");
        store.add_concept(61685007, "Lower limb structure (body structure)");
        store.add_part_of(71341001, 272673000);
        store.add_part_of(272673000, 61685007);
        store.add_part_of(61685007, 123037004);

        // Findings
        store.add_concept(404684003, "Clinical finding (finding)");
        store.add_concept(125605004, "Fracture of bone (disorder)");
        store.add_parent(125605004, 404684003);

        // 71620000 - Fracture of femur
        store.add_concept(71620000, "Fracture of femur (disorder)");
        store.add_parent(71620000, 125605004);

        store
    }

    fn add_concept(&mut self, id: SctId, fsn: &str) {
        self.concepts.insert(id, Concept::new(id, fsn));
    }

    fn add_parent(&mut self, child: SctId, parent: SctId) {
        self.parents.entry(child).or_default().push(parent);
    }

    fn add_part_of(&mut self, part: SctId, whole: SctId) {
        self.part_of.entry(part).or_default().push(whole);
    }

    fn add_relationship(&mut self, source: SctId, type_id: SctId, destination_fsn: &str, group: u16) {
        let destination = self
            .concepts
            .values()
            .find(|c| c.fsn == destination_fsn)
            .map(|c| c.id)
            .unwrap_or(self.next_relationship_id + 500_000);
        self.next_relationship_id += 1;
        let relationship = Relationship::new(
            self.next_relationship_id,
            source,
            type_id,
            destination,
            destination_fsn,
            group,
        );
        self.relationships.entry(source).or_default().push(relationship);
    }
}

impl TerminologyStore for IntegrationTestStore {
    fn concept(&self, concept_id: SctId) -> Option<Concept> {
        self.concepts.get(&concept_id).cloned()
    }

    fn active_outbound_relationships(&self, concept_id: SctId) -> Vec<Relationship> {
        self.relationships
            .get(&concept_id)
            .map(|rels| rels.iter().filter(|r| r.active).cloned().collect())
            .unwrap_or_default()
    }

    fn isa_parents(&self, concept_id: SctId) -> Vec<ConceptRef> {
        self.parents
            .get(&concept_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.concepts.get(id))
                    .map(Concept::to_ref)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn part_of(&self, concept_id: SctId) -> Vec<SctId> {
        self.part_of.get(&concept_id).cloned().unwrap_or_default()
    }
}

fn render(store: &IntegrationTestStore, concept_id: SctId) -> Result<String, RenderError> {
    ControlledEnglishGenerator::new(store).render_definition(concept_id, false)
}

// ==================== Classification ====================

#[test]
fn test_classification_only() {
    let store = IntegrationTestStore::new();
    assert_eq!(
        render(&store, 125605004),
        Ok("Fracture of bone is a clinical finding.".to_string())
    );
}

#[test]
fn test_concept_without_parents_or_relationships() {
    let store = IntegrationTestStore::new();
    assert_eq!(
        render(&store, 404684003),
        Ok("Clinical finding.".to_string())
    );
}

#[test]
fn test_multiple_parents() {
    let mut store = IntegrationTestStore::new();
    store.add_concept(64572001, "Disease (disorder)");
    store.add_parent(71620000, 64572001);
    assert_eq!(
        render(&store, 71620000),
        Ok("Fracture of femur is a fracture of bone, and a disease.".to_string())
    );
}

#[test]
fn test_missing_concept() {
    let store = IntegrationTestStore::new();
    assert_eq!(render(&store, 1), Err(RenderError::ConceptNotFound(1)));
}

// ==================== Sites ====================

#[test]
fn test_finding_site_without_part_of() {
    let mut store = IntegrationTestStore::new();
    store.add_concept(84667006, "Structure of neck of femur (body structure)");
    store.add_relationship(71620000, FINDING_SITE, "Structure of neck of femur (body structure)", 0);
    assert_eq!(
        render(&store, 71620000),
        Ok("Fracture of femur is a fracture of bone.  It is located in a structure of neck of femur.".to_string())
    );
}

#[test]
fn test_finding_site_with_part_of_is_lengthy() {
    let mut store = IntegrationTestStore::new();
    store.add_concept(49872002, "Virus (organism)");
    store.add_relationship(71620000, FINDING_SITE, "Femur structure (body structure)", 0);
    store.add_relationship(71620000, CAUSATIVE_AGENT, "Virus (organism)", 0);
    assert_eq!(
        render(&store, 71620000),
        Ok("Fracture of femur is a fracture of bone.  It is caused by virus.  \
            It is located in a femur structure, a bone structure of lower limb, and a lower limb structure."
            .to_string())
    );
}

#[test]
fn test_missing_part_of_ancestor_aborts() {
    let mut store = IntegrationTestStore::new();
    store.add_part_of(61685007, 999);
    store.add_relationship(71620000, FINDING_SITE, "Femur structure (body structure)", 0);
    assert_eq!(render(&store, 71620000), Err(RenderError::ConceptNotFound(999)));
}

// ==================== Complex renderers ====================

#[test]
fn test_pathophysiology_claims_finding_site() {
    let mut store = IntegrationTestStore::new();
    store.add_relationship(71620000, FINDING_SITE, "Femur structure (body structure)", 1);
    store.add_relationship(71620000, ASSOCIATED_MORPHOLOGY, "Fracture (morphologic abnormality)", 1);
    assert_eq!(
        render(&store, 71620000),
        Ok("Fracture of femur is a fracture of bone.  \
            It is characterized in form by a fracture located in a femur structure."
            .to_string())
    );
}

#[test]
fn test_unknown_situation_context() {
    let mut store = IntegrationTestStore::new();
    store.add_concept(373573001, "Clinical finding present (situation)");
    store.add_concept(195967001, "Asthma (disorder)");
    store.add_concept(12345, "Someday (qualifier value)");
    store.add_relationship(373573001, ASSOCIATED_FINDING, "Asthma (disorder)", 1);
    store.add_relationship(373573001, TEMPORAL_CONTEXT, "Someday (qualifier value)", 1);
    assert_eq!(
        render(&store, 373573001),
        Err(RenderError::UnknownContextConcept {
            context: ContextKind::Temporal,
            concept_id: 12345,
        })
    );
}

#[test]
fn test_situation_finding() {
    let mut store = IntegrationTestStore::new();
    store.add_concept(195967001, "Asthma (disorder)");
    store.add_concept(15240007, "Current (qualifier value)");
    store.add_concept(415684004, "Suspected (qualifier value)");
    store.add_concept(72705000, "Mother (person)");
    store.add_concept(2, "Suspected asthma in mother (situation)");
    store.add_relationship(2, ASSOCIATED_FINDING, "Asthma (disorder)", 1);
    store.add_relationship(2, TEMPORAL_CONTEXT, "Current (qualifier value)", 1);
    store.add_relationship(2, FINDING_CONTEXT, "Suspected (qualifier value)", 1);
    store.add_relationship(2, SUBJECT_RELATIONSHIP_CONTEXT, "Mother (person)", 1);
    assert_eq!(
        render(&store, 2),
        Ok("Suspected asthma in mother.  It is a current, suspected finding of asthma in a mother.".to_string())
    );
}

// ==================== Role pairs ====================

#[test]
fn test_method_consumes_sites_and_objects() {
    let mut store = IntegrationTestStore::new();
    store.add_concept(3, "Excision of lesion of skin (procedure)");
    store.add_relationship(3, METHOD, "Excision - action (qualifier value)", 1);
    store.add_relationship(3, DIRECT_MORPHOLOGY, "Lesion (morphologic abnormality)", 1);
    store.add_relationship(3, PROCEDURE_SITE_DIRECT, "Skin structure (body structure)", 1);
    store.add_relationship(3, USING_DEVICE, "Laser, device (physical object)", 1);
    assert_eq!(
        render(&store, 3),
        Ok("Excision of lesion of skin.  \
            It is an excision using a laser of a lesion occurring directly in a skin structure."
            .to_string())
    );
}

#[test]
fn test_malformed_interpretation_aborts() {
    let mut store = IntegrationTestStore::new();
    store.add_concept(4, "Heart rate abnormal (finding)");
    store.add_relationship(4, INTERPRETS, "Heart rate (observable entity)", 1);
    store.add_relationship(4, HAS_INTERPRETATION, "High (qualifier value)", 1);
    store.add_relationship(4, HAS_INTERPRETATION, "Low (qualifier value)", 1);
    assert!(matches!(
        render(&store, 4),
        Err(RenderError::MalformedExpression {
            attribute: HAS_INTERPRETATION,
            group: 1,
            count: 2,
        })
    ));
}

// ==================== Options ====================

#[test]
fn test_embedded_ids() {
    let mut store = IntegrationTestStore::new();
    store.add_concept(84667006, "Structure of neck of femur (body structure)");
    store.add_relationship(71620000, FINDING_SITE, "Structure of neck of femur (body structure)", 0);
    let generator = ControlledEnglishGenerator::new(&store);
    assert_eq!(
        generator.render_definition(71620000, true),
        Ok("Fracture of femur is a fracture of bone (125605004).  \
            It is located in a structure of neck of femur (84667006)."
            .to_string())
    );
}

#[test]
fn test_warm_cache_matches_cold_render() {
    let mut store = IntegrationTestStore::new();
    store.add_relationship(71620000, FINDING_SITE, "Femur structure (body structure)", 0);

    let cold = render(&store, 71620000);

    let config = RendererConfig::builder()
        .with_name_cache(NameCacheConfig { max_entries: 1_000 })
        .build();
    let generator = ControlledEnglishGenerator::with_config(&store, config);
    let first = generator.render_definition(71620000, false);
    let warm = generator.render_definition(71620000, false);

    assert_eq!(first, cold);
    assert_eq!(warm, cold);
    let stats = generator.cache().map(|c| c.stats());
    assert!(stats.is_some_and(|s| s.hits > 0));
}

#[test]
fn test_custom_stop_list_extends_site() {
    let mut store = IntegrationTestStore::new();
    store.add_relationship(71620000, FINDING_SITE, "Femur structure (body structure)", 0);
    let config = RendererConfig::builder().with_stop_list([272673000]).build();
    let generator = ControlledEnglishGenerator::with_config(&store, config);
    assert_eq!(
        generator.render_definition(71620000, false),
        Ok("Fracture of femur is a fracture of bone.  It is located in a femur structure.".to_string())
    );
}
