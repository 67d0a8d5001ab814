//! Clinical drug renderer.

use snomed_cnl::attributes::{HAS_DOSE_FORM, HAS_UNIT_OF_PRESENTATION};
use snomed_cnl::{first_of_type, Relationship};

use super::ComplexKind;
use crate::error::{RenderError, RenderResult};
use crate::render::RenderContext;

/// Renders "is presented as [<unit> and ]<dose form>".
pub(super) fn render(ctx: RenderContext<'_>, relationships: &[Relationship]) -> RenderResult<String> {
    let dose_form = first_of_type(relationships, HAS_DOSE_FORM).ok_or(RenderError::UnhandledCombination {
        renderer: ComplexKind::ClinicalDrug.name(),
        group: 0,
    })?;
    let dose_form = ctx.names.destination(dose_form, true);

    Ok(match first_of_type(relationships, HAS_UNIT_OF_PRESENTATION) {
        Some(unit) => format!(
            "is presented as {} and {}",
            ctx.names.destination(unit, true),
            dose_form
        ),
        None => format!("is presented as {}", dose_form),
    })
}
