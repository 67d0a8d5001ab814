//! Multi-attribute renderers.
//!
//! A complex renderer reads several attributes of a concept at once and
//! renders them as one clause. It is active for a concept when one of its
//! identifying attributes is present; its other attributes are then claimed
//! so the generic loop does not render them again.

use snomed_cnl::attributes::*;
use snomed_cnl::{by_group, Relationship, SctId};

use super::{Phrase, RenderContext};
use crate::error::RenderResult;

mod clinical_drug;
mod dose_form;
mod measurable_product;
mod pathophysiology;
mod situation;
mod specimen;

/// The complex renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComplexKind {
    /// Specimen collection and source.
    Specimen,
    /// Situation with explicit context.
    Situation,
    /// Morphology, pathological process, occurrence and site of a disorder.
    Pathophysiology,
    /// Strength and ingredients of a medicinal product.
    MeasurableProduct,
    /// Dose form and unit of presentation of a clinical drug.
    ClinicalDrug,
    /// Administration of a pharmaceutical dose form.
    DoseForm,
}

impl ComplexKind {
    /// All complex renderers, in dispatch order.
    pub const ALL: [ComplexKind; 6] = [
        ComplexKind::Specimen,
        ComplexKind::Situation,
        ComplexKind::Pathophysiology,
        ComplexKind::MeasurableProduct,
        ComplexKind::ClinicalDrug,
        ComplexKind::DoseForm,
    ];

    /// Short name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            ComplexKind::Specimen => "specimen",
            ComplexKind::Situation => "situation",
            ComplexKind::Pathophysiology => "pathophysiology",
            ComplexKind::MeasurableProduct => "measurable product",
            ComplexKind::ClinicalDrug => "clinical drug",
            ComplexKind::DoseForm => "dose form",
        }
    }

    /// Every attribute type this renderer reads.
    pub fn attributes(self) -> &'static [SctId] {
        match self {
            ComplexKind::Specimen => &[
                SPECIMEN_PROCEDURE,
                SPECIMEN_SOURCE_TOPOGRAPHY,
                SPECIMEN_SOURCE_MORPHOLOGY,
                SPECIMEN_SUBSTANCE,
                SPECIMEN_SOURCE_IDENTITY,
            ],
            ComplexKind::Situation => &[
                PROCEDURE_CONTEXT,
                ASSOCIATED_PROCEDURE,
                SUBJECT_RELATIONSHIP_CONTEXT,
                FINDING_CONTEXT,
                ASSOCIATED_FINDING,
                TEMPORAL_CONTEXT,
            ],
            ComplexKind::Pathophysiology => &[
                ASSOCIATED_MORPHOLOGY,
                FINDING_SITE,
                PATHOLOGICAL_PROCESS,
                OCCURRENCE,
            ],
            ComplexKind::MeasurableProduct => &[
                HAS_BASIS_OF_STRENGTH_SUBSTANCE,
                HAS_PRECISE_ACTIVE_INGREDIENT,
                HAS_CONCENTRATION_STRENGTH_NUMERATOR_UNIT,
                HAS_CONCENTRATION_STRENGTH_DENOMINATOR_UNIT,
                HAS_PRESENTATION_STRENGTH_NUMERATOR_UNIT,
                HAS_PRESENTATION_STRENGTH_DENOMINATOR_UNIT,
            ],
            ComplexKind::ClinicalDrug => &[HAS_UNIT_OF_PRESENTATION, HAS_DOSE_FORM],
            ComplexKind::DoseForm => &[
                HAS_DOSE_FORM_INTENDED_SITE,
                HAS_DOSE_FORM_TRANSFORMATION,
                HAS_BASIC_DOSE_FORM,
                HAS_DOSE_FORM_ADMINISTRATION_METHOD,
                HAS_DOSE_FORM_RELEASE_CHARACTERISTIC,
            ],
        }
    }

    /// Attribute types whose presence activates this renderer.
    ///
    /// Empty means any of [`attributes`](Self::attributes) activates it.
    pub fn identifying_properties(self) -> &'static [SctId] {
        match self {
            ComplexKind::Specimen => &[],
            ComplexKind::Situation => &[ASSOCIATED_FINDING, ASSOCIATED_PROCEDURE],
            ComplexKind::Pathophysiology => &[ASSOCIATED_MORPHOLOGY, PATHOLOGICAL_PROCESS],
            ComplexKind::MeasurableProduct => {
                &[HAS_BASIS_OF_STRENGTH_SUBSTANCE, HAS_PRECISE_ACTIVE_INGREDIENT]
            }
            ComplexKind::ClinicalDrug => &[HAS_DOSE_FORM],
            ComplexKind::DoseForm => &[
                HAS_DOSE_FORM_ADMINISTRATION_METHOD,
                HAS_DOSE_FORM_RELEASE_CHARACTERISTIC,
            ],
        }
    }

    /// Gets the relationships that may serve as this renderer's target.
    pub fn candidates<'r>(self, relationships: &'r [Relationship]) -> Vec<&'r Relationship> {
        let attributes = self.attributes();
        if !relationships.iter().any(|r| r.has_type_in(attributes)) {
            return Vec::new();
        }
        let identifying = match self.identifying_properties() {
            [] => attributes,
            identifying => identifying,
        };
        relationships
            .iter()
            .filter(|r| r.has_type_in(identifying))
            .collect()
    }

    /// Renders the concept's relationships of this renderer's attribute types.
    pub fn render(self, ctx: RenderContext<'_>, relationships: &[Relationship]) -> RenderResult<Phrase> {
        let attributes = self.attributes();
        let own: Vec<Relationship> = relationships
            .iter()
            .filter(|r| r.has_type_in(attributes))
            .cloned()
            .collect();

        let text = match self {
            ComplexKind::Specimen => specimen::render(ctx, &own),
            ComplexKind::Situation => situation::render(ctx, &own)?,
            ComplexKind::Pathophysiology => pathophysiology::render(ctx, &own)?,
            ComplexKind::MeasurableProduct => measurable_product::render(ctx, &own)?,
            ComplexKind::ClinicalDrug => clinical_drug::render(ctx, &own)?,
            ComplexKind::DoseForm => dose_form::render(ctx, &own),
        };
        Ok(Phrase::brief(text))
    }
}

/// Groups of `relationships` holding at least one of `identifying`, in group order.
fn identified_groups(
    relationships: &[Relationship],
    identifying: &[SctId],
) -> Vec<(u16, Vec<Relationship>)> {
    by_group(relationships)
        .into_iter()
        .filter(|(_, rels)| rels.iter().any(|r| r.has_type_in(identifying)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::rel;

    #[test]
    fn test_attributes_include_identifying() {
        for kind in ComplexKind::ALL {
            for id in kind.identifying_properties() {
                assert!(kind.attributes().contains(id), "{:?} misses {}", kind, id);
            }
        }
    }

    #[test]
    fn test_candidates_need_identifying_property() {
        let rels = vec![rel(1, FINDING_SITE, 10, "Femur structure (body structure)", 0)];
        assert!(ComplexKind::Pathophysiology.candidates(&rels).is_empty());

        let rels = vec![
            rel(1, FINDING_SITE, 10, "Femur structure (body structure)", 1),
            rel(2, ASSOCIATED_MORPHOLOGY, 11, "Fracture (morphologic abnormality)", 1),
        ];
        let ids: Vec<SctId> = ComplexKind::Pathophysiology
            .candidates(&rels)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_candidates_without_identifying_properties() {
        let rels = vec![
            rel(4, SPECIMEN_SUBSTANCE, 10, "Blood (substance)", 0),
            rel(5, FINDING_SITE, 11, "Femur structure (body structure)", 0),
        ];
        let ids: Vec<SctId> = ComplexKind::Specimen
            .candidates(&rels)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![4]);
    }
}
