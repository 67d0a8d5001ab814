//! Pathophysiology renderer.

use snomed_cnl::attributes::*;
use snomed_cnl::{by_group, first_of_type, join_list, Relationship, SctId};
use tracing::debug;

use super::ComplexKind;
use crate::error::{RenderError, RenderResult};
use crate::render::{role, RenderContext};

/// Occurrences that read as a modifier in front of the noun.
pub const OCCURRENCES_AS_MODIFIERS: &[SctId] = &[
    255398004, // childhood
    255399007, // congenital
    255407002, // neonatal
    255410009, // maternal postpartum
];

/// Renders each relationship group as one clause.
///
/// Groups without a process, morphology or occurrence are skipped. When no
/// group can be rendered, the whole set is rendered as a single group.
pub(super) fn render(ctx: RenderContext<'_>, relationships: &[Relationship]) -> RenderResult<String> {
    let mut phrases = Vec::new();
    for (group, rels) in by_group(relationships) {
        match render_group(ctx, group, &rels) {
            Ok(phrase) => phrases.push(phrase),
            Err(err) => debug!(group, error = %err, "skipping pathophysiology group"),
        }
    }

    if phrases.is_empty() && !relationships.is_empty() {
        phrases.push(render_group(ctx, 0, relationships)?);
    }
    Ok(join_list(&phrases, ", and "))
}

fn render_group(ctx: RenderContext<'_>, group: u16, rels: &[Relationship]) -> RenderResult<String> {
    let process = first_of_type(rels, PATHOLOGICAL_PROCESS);
    let morphology = first_of_type(rels, ASSOCIATED_MORPHOLOGY);
    let occurrence = first_of_type(rels, OCCURRENCE);
    let location = first_of_type(rels, FINDING_SITE);

    let occurrence_phrase = occurrence.map(|occ| {
        (
            OCCURRENCES_AS_MODIFIERS.contains(&occ.destination_id),
            ctx.names.destination(occ, true),
        )
    });

    let mut parts = Vec::new();
    if let Some(process) = process {
        parts.push(match &occurrence_phrase {
            Some((true, occ)) => format!("is {} {}", occ, ctx.names.destination(process, false)),
            Some((false, occ)) => format!(
                "is {} occurring during {}",
                ctx.names.destination(process, true),
                occ
            ),
            None => format!("is {}", ctx.names.destination(process, true)),
        });
        if let Some(morphology) = morphology {
            parts.push(format!(
                "characterized in form by {}",
                ctx.names.destination(morphology, true)
            ));
        }
    } else if let Some(morphology) = morphology {
        parts.push(match &occurrence_phrase {
            Some((true, occ)) => format!(
                "is characterized in form by {} {}",
                occ,
                ctx.names.destination(morphology, false)
            ),
            Some((false, occ)) => format!(
                "is characterized in form by {} occurring during {}",
                ctx.names.destination(morphology, true),
                occ
            ),
            None => format!(
                "is characterized in form by {}",
                ctx.names.destination(morphology, true)
            ),
        });
    } else if let Some(occurrence) = occurrence {
        return Ok(role::occurs(ctx, occurrence).text);
    } else {
        return Err(RenderError::UnhandledCombination {
            renderer: ComplexKind::Pathophysiology.name(),
            group,
        });
    }

    if let Some(location) = location {
        parts.push(format!("located in {}", ctx.names.destination(location, true)));
    }
    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{rel, with_context, TestStore};

    #[test]
    fn test_morphology_with_site() {
        let store = TestStore::default();
        let rels = vec![
            rel(1, ASSOCIATED_MORPHOLOGY, 10, "Fracture (morphologic abnormality)", 1),
            rel(2, FINDING_SITE, 11, "Femur structure (body structure)", 1),
        ];
        let text = with_context(&store, |ctx| render(ctx, &rels));
        assert_eq!(
            text,
            Ok("is characterized in form by a fracture located in a femur structure".to_string())
        );
    }

    #[test]
    fn test_process_with_morphology_and_occurrence() {
        let store = TestStore::default();
        let rels = vec![
            rel(1, PATHOLOGICAL_PROCESS, 10, "Infectious process (qualifier value)", 1),
            rel(2, ASSOCIATED_MORPHOLOGY, 11, "Inflammation (morphologic abnormality)", 1),
            rel(3, OCCURRENCE, 12, "Adulthood (qualifier value)", 1),
        ];
        let text = with_context(&store, |ctx| render(ctx, &rels));
        assert_eq!(
            text,
            Ok("is an infectious process occurring during an adulthood characterized in form by an inflammation".to_string())
        );
    }

    #[test]
    fn test_modifier_occurrence() {
        let store = TestStore::default();
        let rels = vec![
            rel(1, ASSOCIATED_MORPHOLOGY, 10, "Malformation (morphologic abnormality)", 1),
            rel(2, OCCURRENCE, 255399007, "Congenital (qualifier value)", 1),
        ];
        let text = with_context(&store, |ctx| render(ctx, &rels));
        assert_eq!(
            text,
            Ok("is characterized in form by a congenital malformation".to_string())
        );
    }

    #[test]
    fn test_groups_joined_and_unhandled_skipped() {
        let store = TestStore::default();
        let rels = vec![
            rel(1, ASSOCIATED_MORPHOLOGY, 10, "Ulcer (morphologic abnormality)", 1),
            rel(2, FINDING_SITE, 11, "Stomach structure (body structure)", 2),
            rel(3, OCCURRENCE, 12, "Childhood (qualifier value)", 3),
        ];
        let text = with_context(&store, |ctx| render(ctx, &rels));
        assert_eq!(
            text,
            Ok("is characterized in form by an ulcer, and occurs during a childhood".to_string())
        );
    }

    #[test]
    fn test_all_groups_fail_reprocesses_whole_set() {
        let store = TestStore::default();
        let rels = vec![rel(1, FINDING_SITE, 11, "Stomach structure (body structure)", 2)];
        let text = with_context(&store, |ctx| render(ctx, &rels));
        assert_eq!(
            text,
            Err(RenderError::UnhandledCombination {
                renderer: "pathophysiology",
                group: 0,
            })
        );
    }
}
