//! Single-relationship renderers.
//!
//! Includes the generic role renderer and its specialisations: occurrence,
//! "is"-style, alternative name, and fixed-verb roles such as "is caused by".

use snomed_cnl::attributes::*;
use snomed_cnl::{join_list, Relationship, SctId};

use super::{Phrase, RenderContext};
use crate::error::{RenderError, RenderResult};

/// Toddler (life stage)
pub const TODDLER_PERIOD: SctId = 713153009;
/// Neonatal (qualifier value)
pub const NEONATAL_PERIOD: SctId = 255407002;
/// Congenital (qualifier value)
pub const CONGENITAL: SctId = 255399007;

/// Phrase templates for well-known roles: (type, template, object takes an article).
///
/// `{}` marks where the object goes.
static ROLE_PHRASES: &[(SctId, &str, bool)] = &[
    (REALIZATION, "is realized as {}", true),
    (COMPONENT, "comprises {}", true),
    (HAS_COMPOSITIONAL_MATERIAL, "comprises {}", false),
    (ASSOCIATED_WITH, "is associated with {}", true),
    (PROCEDURE_DEVICE, "involves {}", true),
    (DEVICE_INTENDED_SITE, "is intended for use in {}", true),
    (PROCEDURE_MORPHOLOGY, "involves {}", true),
    (PROCEDURE_SITE, "occurs in {}", true),
    (FINDING_METHOD, "is a finding by {}", true),
    (FINDING_INFORMER, "is a finding informed by {}", true),
    (HAS_FOCUS, "is focused on {}", true),
    (RECIPIENT_CATEGORY, "benefits {}", true),
    (ROUTE_OF_ADMINISTRATION, "is administered via {}", true),
    (HAS_SPECIMEN, "evaluates {}", true),
    (LATERALITY, "is located on {}", true),
    (HAS_ACTIVE_INGREDIENT, "contains {}", false),
    (HAS_TARGET_POPULATION, "targets {}", true),
    (PLAYS_ROLE, "plays {}", true),
    (HAS_DOSE_FORM_RELEASE_CHARACTERISTIC, "is administered via {}", false),
    (UNITS, "has units that are {}", true),
    (PRECONDITION, "requires {}", true),
    (HAS_PRECISE_ACTIVE_INGREDIENT, "contains {}", false),
    (PROCESS_DURATION, "lasts for {}", false),
    (TECHNIQUE, "involves {}", true),
    (IS_MODIFICATION_OF, "is a modification of {}", false),
    (HAS_STATE_OF_MATTER, "is {}", true),
    (PROCESS_OUTPUT, "produces {}", true),
    (PROPERTY, "is {}", true),
    (PROCESS_ACTS_ON, "involves {}", true),
    (BEFORE, "precedes {}", true),
    (HAS_SURFACE_TEXTURE, "has {} surface texture", true),
    (HAS_FILLING, "has {} filling", true),
    (TEMPORALLY_RELATED_TO, "is temporarily related to {}", true),
    (HAS_COATING_MATERIAL, "has {} coating", true),
];

/// Looks up the phrase template of a role type.
pub fn role_phrase(type_id: SctId) -> Option<(&'static str, bool)> {
    ROLE_PHRASES
        .iter()
        .find(|(id, _, _)| *id == type_id)
        .map(|(_, template, article)| (*template, *article))
}

/// Renders a role from the template table, or as "<attribute> some <object>".
pub fn role(ctx: RenderContext<'_>, relationship: &Relationship) -> RenderResult<Phrase> {
    if let Some((template, with_article)) = role_phrase(relationship.type_id) {
        let object = ctx.names.destination(relationship, with_article);
        return Ok(Phrase::brief(template.replacen("{}", &object, 1)));
    }

    let attribute = attribute_name(ctx, relationship.type_id)?;
    Ok(Phrase::brief(format!(
        "{} some {}",
        attribute,
        ctx.names.destination(relationship, false)
    )))
}

/// Renders a role with a fixed verb phrase and an article object.
pub fn verb_role(ctx: RenderContext<'_>, verb: &str, relationship: &Relationship) -> Phrase {
    Phrase::brief(format!("{} {}", verb, ctx.names.destination(relationship, true)))
}

/// Renders an occurrence or "during" relationship.
pub fn occurs(ctx: RenderContext<'_>, relationship: &Relationship) -> Phrase {
    let text = match relationship.destination_id {
        TODDLER_PERIOD => "occurs as a toddler".to_string(),
        NEONATAL_PERIOD => "occurs during neonatal period".to_string(),
        CONGENITAL => "is congenital".to_string(),
        _ => format!("occurs during {}", ctx.names.destination(relationship, true)),
    };
    Phrase::brief(text)
}

/// Renders relationships as though they were further classifications.
///
/// Every relationship passed in is folded into one "is x, and y" clause.
pub fn isa_style(ctx: RenderContext<'_>, relationships: &[&Relationship]) -> Phrase {
    let objects = distinct(relationships.iter().map(|r| ctx.names.destination(r, false)));
    Phrase::brief(format!("is {}", join_list(&objects, ", and ")))
}

/// Renders relationships under an alternative role name, objects with articles.
pub fn alternative_name(
    ctx: RenderContext<'_>,
    role_name: &str,
    relationships: &[&Relationship],
) -> Phrase {
    let objects = distinct(relationships.iter().map(|r| ctx.names.destination(r, true)));
    Phrase::brief(format!("{} {}", role_name, join_list(&objects, ", and ")))
}

fn attribute_name(ctx: RenderContext<'_>, type_id: SctId) -> RenderResult<String> {
    if let Some(name) = human_readable_name(type_id) {
        return Ok(name.to_lowercase());
    }
    let concept = ctx
        .store
        .concept(type_id)
        .ok_or(RenderError::ConceptNotFound(type_id))?;
    Ok(concept.name().to_lowercase())
}

/// Keeps the first occurrence of each rendered object.
pub(crate) fn distinct(rendered: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for text in rendered {
        if !seen.contains(&text) {
            seen.push(text);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{rel, with_context, TestStore};
    use rstest::rstest;

    #[rstest]
    #[case(LATERALITY, "Left (qualifier value)", "is located on a left")]
    #[case(HAS_ACTIVE_INGREDIENT, "Aspirin (substance)", "contains aspirin")]
    #[case(HAS_SURFACE_TEXTURE, "Smooth (qualifier value)", "has a smooth surface texture")]
    #[case(FINDING_METHOD, "Palpation (procedure)", "is a finding by a palpation")]
    #[case(ASSOCIATED_WITH, "Influenza (disorder)", "is associated with an influenza")]
    fn test_role_templates(#[case] type_id: SctId, #[case] fsn: &str, #[case] expected: &str) {
        let store = TestStore::default();
        let phrase = with_context(&store, |ctx| role(ctx, &rel(1, type_id, 10, fsn, 0)));
        assert_eq!(phrase, Ok(Phrase::brief(expected)));
    }

    #[test]
    fn test_role_generic_uses_catalogue_name() {
        let store = TestStore::default();
        let relationship = rel(1, EPISODICITY, 10, "First episode (qualifier value)", 0);
        let phrase = with_context(&store, |ctx| role(ctx, &relationship));
        assert_eq!(
            phrase.map(|p| p.text),
            Ok("episodicity some first episode".to_string())
        );
    }

    #[test]
    fn test_role_generic_falls_back_to_store() {
        let mut store = TestStore::default();
        store.add_concept(99, "Has realization mode (attribute)");
        let phrase = with_context(&store, |ctx| role(ctx, &rel(1, 99, 10, "Fast (qualifier value)", 0)));
        assert_eq!(
            phrase.map(|p| p.text),
            Ok("has realization mode some fast".to_string())
        );
    }

    #[test]
    fn test_role_generic_unknown_type() {
        let store = TestStore::default();
        let phrase = with_context(&store, |ctx| role(ctx, &rel(1, 99, 10, "Fast (qualifier value)", 0)));
        assert_eq!(phrase, Err(RenderError::ConceptNotFound(99)));
    }

    #[rstest]
    #[case(TODDLER_PERIOD, "Toddler (life stage)", "occurs as a toddler")]
    #[case(NEONATAL_PERIOD, "Neonatal (qualifier value)", "occurs during neonatal period")]
    #[case(CONGENITAL, "Congenital (qualifier value)", "is congenital")]
    #[case(255398004, "Childhood (qualifier value)", "occurs during a childhood")]
    fn test_occurs(#[case] destination: SctId, #[case] fsn: &str, #[case] expected: &str) {
        let store = TestStore::default();
        let phrase = with_context(&store, |ctx| occurs(ctx, &rel(1, OCCURRENCE, destination, fsn, 0)));
        assert_eq!(phrase.text, expected);
    }

    #[test]
    fn test_verb_role() {
        let store = TestStore::default();
        let relationship = rel(1, CAUSATIVE_AGENT, 10, "Influenza virus (organism)", 0);
        let phrase = with_context(&store, |ctx| verb_role(ctx, "is caused by", &relationship));
        assert_eq!(phrase.text, "is caused by influenza virus");
    }

    #[test]
    fn test_isa_style_collapses() {
        let store = TestStore::default();
        let a = rel(1, SEVERITY, 10, "Severe (severity modifier)", 0);
        let b = rel(2, SEVERITY, 11, "Acute (qualifier value)", 1);
        let c = rel(3, SEVERITY, 10, "Severe (severity modifier)", 2);
        let phrase = with_context(&store, |ctx| isa_style(ctx, &[&a, &b, &c]));
        assert_eq!(phrase.text, "is severe, and acute");
    }

    #[test]
    fn test_alternative_name() {
        let store = TestStore::default();
        let a = rel(1, HAS_INTENT, 10, "Diagnostic intent (qualifier value)", 0);
        let phrase = with_context(&store, |ctx| alternative_name(ctx, "is intended as/for", &[&a]));
        assert_eq!(phrase.text, "is intended as/for a diagnostic intent");
    }
}
