//! Claim resolution.
//!
//! Complex and role-pair renderers consume several relationships at once.
//! Before the generic loop runs, every relationship such a renderer will
//! consume (other than the one that triggers it) is claimed, and claimed
//! relationships are never dispatched on their own.

use std::collections::HashSet;

use snomed_cnl::{Relationship, SctId};
use tracing::{debug, warn};

use crate::render::{ComplexKind, RolePairKind};

/// The outcome of claim resolution for one concept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Claims {
    claimed: HashSet<SctId>,
    active_complex: Vec<ComplexKind>,
}

impl Claims {
    /// Returns true if the relationship is claimed.
    pub fn is_claimed(&self, relationship_id: SctId) -> bool {
        self.claimed.contains(&relationship_id)
    }

    /// Ids of all claimed relationships.
    pub fn claimed_ids(&self) -> &HashSet<SctId> {
        &self.claimed
    }

    /// Complex renderers active for the concept, in dispatch order.
    pub fn active_complex(&self) -> &[ComplexKind] {
        &self.active_complex
    }
}

/// Works out which relationships are claimed by complex and role-pair renderers.
pub struct ClaimResolver;

impl ClaimResolver {
    /// Resolves the claims over a concept's non-ISA relationships.
    ///
    /// Where a renderer has several possible targets, the one with the lowest
    /// relationship id stays unclaimed.
    pub fn resolve(relationships: &[Relationship]) -> Claims {
        let mut claims = Claims::default();

        for kind in ComplexKind::ALL {
            let candidates = kind.candidates(relationships);
            let Some(target) = candidates.iter().min_by_key(|r| r.id) else {
                continue;
            };
            if candidates.len() > 1 {
                warn!(
                    renderer = kind.name(),
                    candidates = candidates.len(),
                    target = target.id,
                    "several complex renderer targets, using the lowest relationship id"
                );
            }

            let attributes = kind.attributes();
            claims.claimed.extend(
                relationships
                    .iter()
                    .filter(|r| r.id != target.id && r.has_type_in(attributes))
                    .map(|r| r.id),
            );
            claims.active_complex.push(kind);
            debug!(renderer = kind.name(), target = target.id, "complex renderer active");
        }

        for kind in RolePairKind::ALL {
            let target_type = kind.target_type();
            let Some(lowest) = relationships
                .iter()
                .filter(|r| r.type_id == target_type)
                .map(|r| r.id)
                .min()
            else {
                continue;
            };

            claims.claimed.extend(
                relationships
                    .iter()
                    .filter(|r| {
                        r.has_type_in(kind.object_types()) || r.has_type_in(kind.consumed_types())
                    })
                    .map(|r| r.id),
            );
            claims.claimed.extend(
                relationships
                    .iter()
                    .filter(|r| r.type_id == target_type && r.id != lowest)
                    .map(|r| r.id),
            );
            debug!(renderer = kind.name(), target = lowest, "role pair active");
        }

        claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::rel;
    use snomed_cnl::attributes::*;

    #[test]
    fn test_no_claims_for_plain_roles() {
        let rels = vec![
            rel(1, FINDING_SITE, 10, "Femur structure (body structure)", 0),
            rel(2, CAUSATIVE_AGENT, 11, "Virus (organism)", 0),
        ];
        let claims = ClaimResolver::resolve(&rels);
        assert!(claims.claimed_ids().is_empty());
        assert!(claims.active_complex().is_empty());
    }

    #[test]
    fn test_pathophysiology_claims_all_but_target() {
        let rels = vec![
            rel(7, FINDING_SITE, 10, "Femur structure (body structure)", 1),
            rel(5, ASSOCIATED_MORPHOLOGY, 11, "Fracture (morphologic abnormality)", 1),
            rel(3, ASSOCIATED_MORPHOLOGY, 12, "Lesion (morphologic abnormality)", 2),
            rel(9, CAUSATIVE_AGENT, 13, "Virus (organism)", 0),
        ];
        let claims = ClaimResolver::resolve(&rels);
        assert_eq!(claims.active_complex(), &[ComplexKind::Pathophysiology]);
        assert!(!claims.is_claimed(3));
        assert!(claims.is_claimed(5));
        assert!(claims.is_claimed(7));
        assert!(!claims.is_claimed(9));
    }

    #[test]
    fn test_inactive_complex_claims_nothing() {
        let rels = vec![rel(1, HAS_UNIT_OF_PRESENTATION, 10, "Tablet (unit of presentation)", 0)];
        let claims = ClaimResolver::resolve(&rels);
        assert!(claims.active_complex().is_empty());
        assert!(!claims.is_claimed(1));
    }

    #[test]
    fn test_method_claims_objects_sites_and_extra_targets() {
        let rels = vec![
            rel(4, METHOD, 10, "Excision - action (qualifier value)", 1),
            rel(2, METHOD, 11, "Incision - action (qualifier value)", 2),
            rel(3, DIRECT_MORPHOLOGY, 12, "Lesion (morphologic abnormality)", 1),
            rel(5, PROCEDURE_SITE_DIRECT, 13, "Skin structure (body structure)", 1),
            rel(6, USING_DEVICE, 14, "Scalpel, device (physical object)", 2),
            rel(8, HAS_INTENT, 15, "Therapeutic intent (qualifier value)", 0),
        ];
        let claims = ClaimResolver::resolve(&rels);
        assert!(!claims.is_claimed(2));
        for id in [3, 4, 5, 6, 8] {
            assert!(claims.is_claimed(id), "relationship {} should be claimed", id);
        }
    }

    #[test]
    fn test_interpretation_objects_claimed_only_with_target() {
        let rels = vec![rel(1, HAS_INTERPRETATION, 10, "Abnormal (qualifier value)", 1)];
        assert!(!ClaimResolver::resolve(&rels).is_claimed(1));

        let rels = vec![
            rel(1, HAS_INTERPRETATION, 10, "Abnormal (qualifier value)", 1),
            rel(2, INTERPRETS, 11, "Heart rate (observable entity)", 1),
        ];
        let claims = ClaimResolver::resolve(&rels);
        assert!(claims.is_claimed(1));
        assert!(!claims.is_claimed(2));
    }
}
