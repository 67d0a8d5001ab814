//! Attribute (relationship type) catalogue.
//!
//! SNOMED CT international ids for every relationship type the renderer
//! knows about, plus the human-readable attribute names used when no
//! dedicated phrase exists.

use crate::SctId;

/// Is a (subsumption).
pub const ISA: SctId = 116680003;
/// Part of.
pub const PART_OF: SctId = 123005000;

// =============================================================================
// Clinical finding attributes
// =============================================================================

/// Finding site
pub const FINDING_SITE: SctId = 363698007;
/// Associated morphology
pub const ASSOCIATED_MORPHOLOGY: SctId = 116676008;
/// Associated with
pub const ASSOCIATED_WITH: SctId = 47429007;
/// After
pub const AFTER: SctId = 255234002;
/// Before
pub const BEFORE: SctId = 288556008;
/// Due to
pub const DUE_TO: SctId = 42752001;
/// Causative agent
pub const CAUSATIVE_AGENT: SctId = 246075003;
/// Severity
pub const SEVERITY: SctId = 246112005;
/// Clinical course
pub const CLINICAL_COURSE: SctId = 263502005;
/// Episodicity
pub const EPISODICITY: SctId = 246456000;
/// Interprets
pub const INTERPRETS: SctId = 363714003;
/// Has interpretation
pub const HAS_INTERPRETATION: SctId = 363713009;
/// Pathological process
pub const PATHOLOGICAL_PROCESS: SctId = 370135005;
/// Has definitional manifestation
pub const HAS_DEFINITIONAL_MANIFESTATION: SctId = 363705008;
/// Occurrence
pub const OCCURRENCE: SctId = 246454002;
/// During
pub const DURING: SctId = 371881003;
/// Finding method
pub const FINDING_METHOD: SctId = 418775008;
/// Finding informer
pub const FINDING_INFORMER: SctId = 419066007;
/// Inherent location
pub const INHERENT_LOCATION: SctId = 718497002;
/// Temporally related to
pub const TEMPORALLY_RELATED_TO: SctId = 726633004;

// =============================================================================
// Procedure attributes
// =============================================================================

/// Procedure site
pub const PROCEDURE_SITE: SctId = 363704007;
/// Procedure site - Direct
pub const PROCEDURE_SITE_DIRECT: SctId = 405813007;
/// Procedure site - Indirect
pub const PROCEDURE_SITE_INDIRECT: SctId = 405814001;
/// Procedure morphology
pub const PROCEDURE_MORPHOLOGY: SctId = 405816004;
/// Direct morphology
pub const DIRECT_MORPHOLOGY: SctId = 363700003;
/// Indirect morphology
pub const INDIRECT_MORPHOLOGY: SctId = 363709002;
/// Method
pub const METHOD: SctId = 260686004;
/// Procedure device
pub const PROCEDURE_DEVICE: SctId = 405815000;
/// Direct device
pub const DIRECT_DEVICE: SctId = 363699004;
/// Using device
pub const USING_DEVICE: SctId = 424226004;
/// Using access device
pub const USING_ACCESS_DEVICE: SctId = 425391005;
/// Access
pub const ACCESS: SctId = 260507000;
/// Direct substance
pub const DIRECT_SUBSTANCE: SctId = 363701004;
/// Priority
pub const PRIORITY: SctId = 260870009;
/// Has focus
pub const HAS_FOCUS: SctId = 363702006;
/// Has intent
pub const HAS_INTENT: SctId = 363703001;
/// Recipient category
pub const RECIPIENT_CATEGORY: SctId = 370131001;
/// Revision status
pub const REVISION_STATUS: SctId = 246513007;
/// Route of administration
pub const ROUTE_OF_ADMINISTRATION: SctId = 410675002;
/// Surgical approach
pub const SURGICAL_APPROACH: SctId = 424876005;
/// Using substance
pub const USING_SUBSTANCE: SctId = 424361007;
/// Using energy
pub const USING_ENERGY: SctId = 424244007;
/// Has specimen
pub const HAS_SPECIMEN: SctId = 116686009;
/// Technique
pub const TECHNIQUE: SctId = 246501002;

// =============================================================================
// Evaluation / observable attributes
// =============================================================================

/// Component
pub const COMPONENT: SctId = 246093002;
/// Time aspect
pub const TIME_ASPECT: SctId = 370134009;
/// Property
pub const PROPERTY: SctId = 370130000;
/// Scale type
pub const SCALE_TYPE: SctId = 370132008;
/// Measurement method
pub const MEASUREMENT_METHOD: SctId = 370129005;
/// Units
pub const UNITS: SctId = 246514001;
/// Relative to part of
pub const RELATIVE_TO_PART_OF: SctId = 719715003;
/// Precondition
pub const PRECONDITION: SctId = 704326004;
/// Process duration
pub const PROCESS_DURATION: SctId = 704323007;
/// Process output
pub const PROCESS_OUTPUT: SctId = 704324001;
/// Process acts on
pub const PROCESS_ACTS_ON: SctId = 1003735000;
/// Process extends to
pub const PROCESS_EXTENDS: SctId = 1003703000;
/// Realization
pub const REALIZATION: SctId = 719722006;
/// Plays role
pub const PLAYS_ROLE: SctId = 766939001;

// =============================================================================
// Specimen attributes
// =============================================================================

/// Specimen procedure
pub const SPECIMEN_PROCEDURE: SctId = 118171006;
/// Specimen source topography
pub const SPECIMEN_SOURCE_TOPOGRAPHY: SctId = 118169006;
/// Specimen source morphology
pub const SPECIMEN_SOURCE_MORPHOLOGY: SctId = 118168003;
/// Specimen substance
pub const SPECIMEN_SUBSTANCE: SctId = 370133003;
/// Specimen source identity
pub const SPECIMEN_SOURCE_IDENTITY: SctId = 118170007;

// =============================================================================
// Body structure / device attributes
// =============================================================================

/// Laterality
pub const LATERALITY: SctId = 272741003;
/// Device intended site
pub const DEVICE_INTENDED_SITE: SctId = 836358009;
/// Has compositional material
pub const HAS_COMPOSITIONAL_MATERIAL: SctId = 840560000;
/// Has surface texture
pub const HAS_SURFACE_TEXTURE: SctId = 1148968002;
/// Has filling
pub const HAS_FILLING: SctId = 827081001;
/// Has coating material
pub const HAS_COATING_MATERIAL: SctId = 1148967007;
/// Has absorbability
pub const HAS_ABSORBABILITY: SctId = 1148969005;
/// Has target population
pub const HAS_TARGET_POPULATION: SctId = 1149367008;

// =============================================================================
// Pharmaceutical / biologic product attributes
// =============================================================================

/// Has active ingredient
pub const HAS_ACTIVE_INGREDIENT: SctId = 127489000;
/// Has precise active ingredient
pub const HAS_PRECISE_ACTIVE_INGREDIENT: SctId = 762949000;
/// Has basis of strength substance
pub const HAS_BASIS_OF_STRENGTH_SUBSTANCE: SctId = 732943007;
/// Has manufactured dose form
pub const HAS_DOSE_FORM: SctId = 411116001;
/// Has unit of presentation
pub const HAS_UNIT_OF_PRESENTATION: SctId = 763032000;
/// Has concentration strength numerator unit
pub const HAS_CONCENTRATION_STRENGTH_NUMERATOR_UNIT: SctId = 733725009;
/// Has concentration strength denominator unit
pub const HAS_CONCENTRATION_STRENGTH_DENOMINATOR_UNIT: SctId = 733722007;
/// Has presentation strength numerator unit
pub const HAS_PRESENTATION_STRENGTH_NUMERATOR_UNIT: SctId = 732945000;
/// Has presentation strength denominator unit
pub const HAS_PRESENTATION_STRENGTH_DENOMINATOR_UNIT: SctId = 732947008;
/// Has dose form administration method
pub const HAS_DOSE_FORM_ADMINISTRATION_METHOD: SctId = 736472000;
/// Has dose form transformation
pub const HAS_DOSE_FORM_TRANSFORMATION: SctId = 736473005;
/// Has dose form intended site
pub const HAS_DOSE_FORM_INTENDED_SITE: SctId = 736474004;
/// Has dose form release characteristic
pub const HAS_DOSE_FORM_RELEASE_CHARACTERISTIC: SctId = 736475003;
/// Has basic dose form
pub const HAS_BASIC_DOSE_FORM: SctId = 736476002;
/// Is modification of
pub const IS_MODIFICATION_OF: SctId = 738774007;
/// Has state of matter
pub const HAS_STATE_OF_MATTER: SctId = 736518005;

// =============================================================================
// Situation with explicit context attributes
// =============================================================================

/// Associated finding
pub const ASSOCIATED_FINDING: SctId = 246090004;
/// Finding context
pub const FINDING_CONTEXT: SctId = 408729009;
/// Associated procedure
pub const ASSOCIATED_PROCEDURE: SctId = 363589002;
/// Procedure context
pub const PROCEDURE_CONTEXT: SctId = 408730004;
/// Temporal context
pub const TEMPORAL_CONTEXT: SctId = 408731000;
/// Subject relationship context
pub const SUBJECT_RELATIONSHIP_CONTEXT: SctId = 408732007;

/// Human-readable attribute names, keyed by relationship type id.
static ATTRIBUTE_NAMES: &[(SctId, &str)] = &[
    (FINDING_SITE, "Finding site"),
    (ASSOCIATED_MORPHOLOGY, "Associated morphology"),
    (ASSOCIATED_WITH, "Associated with"),
    (AFTER, "After"),
    (DUE_TO, "Due to"),
    (CAUSATIVE_AGENT, "Causative agent"),
    (SEVERITY, "Severity"),
    (CLINICAL_COURSE, "Clinical course"),
    (EPISODICITY, "Episodicity"),
    (INTERPRETS, "Interprets"),
    (HAS_INTERPRETATION, "Has interpretation"),
    (PATHOLOGICAL_PROCESS, "Pathological process"),
    (HAS_DEFINITIONAL_MANIFESTATION, "Has definitional manifestation"),
    (OCCURRENCE, "Occurrence"),
    (FINDING_METHOD, "Finding method"),
    (FINDING_INFORMER, "Finding informer"),
    (PROCEDURE_SITE, "Procedure site"),
    (PROCEDURE_MORPHOLOGY, "Procedure morphology"),
    (METHOD, "Method"),
    (PROCEDURE_DEVICE, "Procedure device"),
    (ACCESS, "Access"),
    (DIRECT_SUBSTANCE, "Direct substance"),
    (PRIORITY, "Priority"),
    (HAS_FOCUS, "Has focus"),
    (HAS_INTENT, "Has intent"),
    (RECIPIENT_CATEGORY, "Recipient category"),
    (REVISION_STATUS, "Revision status"),
    (ROUTE_OF_ADMINISTRATION, "Route of administration"),
    (SURGICAL_APPROACH, "Surgical approach"),
    (USING_SUBSTANCE, "Using substance"),
    (USING_ENERGY, "Using energy"),
    (HAS_SPECIMEN, "Has specimen"),
    (COMPONENT, "Component"),
    (TIME_ASPECT, "Time aspect"),
    (PROPERTY, "Property"),
    (SCALE_TYPE, "Scale type"),
    (MEASUREMENT_METHOD, "Measurement method"),
    (SPECIMEN_PROCEDURE, "Specimen procedure"),
    (SPECIMEN_SOURCE_TOPOGRAPHY, "Specimen source topography"),
    (SPECIMEN_SOURCE_MORPHOLOGY, "Specimen source morphology"),
    (SPECIMEN_SUBSTANCE, "Specimen substance"),
    (SPECIMEN_SOURCE_IDENTITY, "Specimen source identity"),
    (LATERALITY, "Laterality"),
    (HAS_ACTIVE_INGREDIENT, "Has active ingredient"),
    (HAS_DOSE_FORM, "Has dose form"),
    (ASSOCIATED_FINDING, "Associated finding"),
    (FINDING_CONTEXT, "Finding context"),
    (ASSOCIATED_PROCEDURE, "Associated procedure"),
    (PROCEDURE_CONTEXT, "Procedure context"),
    (TEMPORAL_CONTEXT, "Temporal context"),
    (SUBJECT_RELATIONSHIP_CONTEXT, "Subject relationship context"),
    (ISA, "Is a"),
    (PART_OF, "Part of"),
    (USING_DEVICE, "Using device"),
    (DIRECT_DEVICE, "Direct device"),
    (DIRECT_MORPHOLOGY, "Direct morphology"),
    (INDIRECT_MORPHOLOGY, "Indirect morphology"),
    (USING_ACCESS_DEVICE, "Using access device"),
    (PROCEDURE_SITE_DIRECT, "Procedure site direct"),
    (PROCEDURE_SITE_INDIRECT, "Procedure site indirect"),
    (RELATIVE_TO_PART_OF, "Relative to part of"),
];

/// Returns the human-readable name of a well-known attribute.
///
/// Returns `None` for relationship types outside the catalogue; callers fall
/// back to the type concept's own name.
pub fn human_readable_name(type_id: SctId) -> Option<&'static str> {
    ATTRIBUTE_NAMES
        .iter()
        .find(|(id, _)| *id == type_id)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_readable_name_known() {
        assert_eq!(human_readable_name(FINDING_SITE), Some("Finding site"));
        assert_eq!(human_readable_name(EPISODICITY), Some("Episodicity"));
    }

    #[test]
    fn test_human_readable_name_unknown() {
        assert_eq!(human_readable_name(999_999_999), None);
    }
}
