//! Measurable product renderer.

use snomed_cnl::attributes::*;
use snomed_cnl::{first_of_type, join_list, Relationship, SctId};

use super::{identified_groups, ComplexKind};
use crate::error::{RenderError, RenderResult};
use crate::render::RenderContext;

/// Renders the strength clauses of every group holding a basis of strength
/// or a precise active ingredient.
///
/// Both are mandatory within such a group.
pub(super) fn render(ctx: RenderContext<'_>, relationships: &[Relationship]) -> RenderResult<String> {
    let mut phrases = Vec::new();
    for (group, rels) in identified_groups(relationships, ComplexKind::MeasurableProduct.identifying_properties()) {
        render_group(ctx, group, &rels, &mut phrases)?;
    }
    Ok(join_list(&phrases, ", and "))
}

fn render_group(
    ctx: RenderContext<'_>,
    group: u16,
    rels: &[Relationship],
    phrases: &mut Vec<String>,
) -> RenderResult<()> {
    let unhandled = || RenderError::UnhandledCombination {
        renderer: ComplexKind::MeasurableProduct.name(),
        group,
    };
    let basis = first_of_type(rels, HAS_BASIS_OF_STRENGTH_SUBSTANCE).ok_or_else(unhandled)?;
    let ingredient = first_of_type(rels, HAS_PRECISE_ACTIVE_INGREDIENT).ok_or_else(unhandled)?;

    phrases.push(format!(
        "has {} as its basis of strength",
        ctx.names.destination(basis, false)
    ));
    phrases.push(format!("contains {}", ctx.names.destination(ingredient, false)));

    let strength = |label: &str, numerator: SctId, denominator: SctId| {
        let numerator = first_of_type(rels, numerator)?;
        let denominator = first_of_type(rels, denominator)?;
        Some(format!(
            "has a {} measured in units of {} per {}",
            label,
            ctx.names.destination(numerator, false),
            ctx.names.destination(denominator, false)
        ))
    };
    let clause = strength(
        "concentration",
        HAS_CONCENTRATION_STRENGTH_NUMERATOR_UNIT,
        HAS_CONCENTRATION_STRENGTH_DENOMINATOR_UNIT,
    )
    .or_else(|| {
        strength(
            "presentation strength",
            HAS_PRESENTATION_STRENGTH_NUMERATOR_UNIT,
            HAS_PRESENTATION_STRENGTH_DENOMINATOR_UNIT,
        )
    });
    phrases.extend(clause);
    Ok(())
}
