//! Dose form renderer.

use snomed_cnl::attributes::*;
use snomed_cnl::{first_of_type, join_list, with_indefinite_article, Relationship, SctId};

use super::{identified_groups, ComplexKind};
use crate::render::RenderContext;

/// No transformation (qualifier value)
pub const NO_TRANSFORMATION: SctId = 761954006;

/// Transformations whose past tense reads badly.
static TRANSFORMATION_MODIFIERS: &[(SctId, &str)] = &[(764779004, "dispersed or dissolved")];

fn past_tense(verb: &str) -> String {
    if verb.ends_with('e') {
        format!("{}d", verb)
    } else {
        format!("{}ed", verb)
    }
}

/// Renders the administration clauses of every group holding an
/// administration method or release characteristic.
pub(super) fn render(ctx: RenderContext<'_>, relationships: &[Relationship]) -> String {
    let mut phrases = Vec::new();
    for (_, group) in identified_groups(relationships, ComplexKind::DoseForm.identifying_properties()) {
        render_group(ctx, &group, &mut phrases);
    }
    join_list(&phrases, ", and ")
}

fn render_group(ctx: RenderContext<'_>, group: &[Relationship], phrases: &mut Vec<String>) {
    if let Some(method) = first_of_type(group, HAS_DOSE_FORM_ADMINISTRATION_METHOD) {
        phrases.push(format!("is administered via {}", ctx.names.destination(method, false)));
    }
    if let Some(release) = first_of_type(group, HAS_DOSE_FORM_RELEASE_CHARACTERISTIC) {
        phrases.push(format!("is given by {}", ctx.names.destination(release, false)));
    }
    if let Some(site) = first_of_type(group, HAS_DOSE_FORM_INTENDED_SITE) {
        phrases.push(format!(
            "is given by {} administration",
            ctx.names.destination(site, false)
        ));
    }

    let Some(basic_form) = first_of_type(group, HAS_BASIC_DOSE_FORM) else {
        return;
    };
    let administered_as = match first_of_type(group, HAS_DOSE_FORM_TRANSFORMATION) {
        Some(transformation) if transformation.destination_id != NO_TRANSFORMATION => {
            let modifier = TRANSFORMATION_MODIFIERS
                .iter()
                .find(|(id, _)| *id == transformation.destination_id)
                .map(|(_, text)| text.to_string())
                .unwrap_or_else(|| {
                    let name = ctx.names.render(
                        transformation.destination_id,
                        &transformation.destination_fsn,
                        false,
                        true,
                    );
                    past_tense(&name)
                });
            with_indefinite_article(&format!(
                "{}, {}",
                modifier,
                ctx.names.destination(basic_form, false)
            ))
        }
        _ => ctx.names.destination(basic_form, true),
    };
    phrases.push(format!("is administered as {}", administered_as));
}
