//! Relationship dispatch.
//!
//! Chooses a renderer for every unclaimed relationship of a concept and
//! collects the resulting phrases.

use std::collections::HashSet;

use snomed_cnl::attributes::*;
use snomed_cnl::{Relationship, SctId};
use tracing::debug;

use crate::claims::ClaimResolver;
use crate::error::RenderResult;
use crate::render::site::{LOCATED_IN, PERFORMED_IN};
use crate::render::{role, site, ComplexKind, Phrase, RenderContext, RolePairKind};

/// The renderer chosen for a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Renderer {
    /// "occurs during ..." and its special cases.
    Occurs,
    /// Objects listed under an alternative role name.
    AlternativeName(&'static str),
    /// "is ..." as though the object were a further classification.
    IsaStyle,
    /// "is caused by ..."
    CausedBy,
    /// "follows ..."
    Follows,
    /// A role pair rendering all of its targets.
    RolePair(RolePairKind),
    /// "is performed in ..." with part-of closure.
    ProcedureSite,
    /// "is located in ..." with part-of closure.
    Site,
    /// A complex renderer rendering the whole relationship set.
    Complex(ComplexKind),
    /// The template table, or "<attribute> some <object>".
    Role,
}

impl Renderer {
    /// Selects the renderer for a relationship; the first matching rule wins.
    pub fn select(relationship: &Relationship, active_complex: &[ComplexKind]) -> Self {
        let type_id = relationship.type_id;
        match type_id {
            OCCURRENCE | DURING => Renderer::Occurs,
            HAS_INTENT => Renderer::AlternativeName("is intended as/for"),
            HAS_INTERPRETATION | CLINICAL_COURSE | SEVERITY | PRIORITY | SCALE_TYPE
            | HAS_ABSORBABILITY => Renderer::IsaStyle,
            DUE_TO | CAUSATIVE_AGENT => Renderer::CausedBy,
            INTERPRETS => Renderer::RolePair(RolePairKind::Interpretation),
            METHOD => Renderer::RolePair(RolePairKind::Method),
            AFTER => Renderer::Follows,
            PROCEDURE_SITE | PROCEDURE_SITE_DIRECT | PROCEDURE_SITE_INDIRECT => {
                Renderer::ProcedureSite
            }
            FINDING_SITE | INHERENT_LOCATION | PROCESS_EXTENDS => Renderer::Site,
            _ => active_complex
                .iter()
                .find(|kind| kind.attributes().contains(&type_id))
                .map_or(Renderer::Role, |kind| Renderer::Complex(*kind)),
        }
    }

    /// Returns true if one phrase covers every relationship of the same type.
    pub fn collapses(&self) -> bool {
        matches!(
            self,
            Renderer::AlternativeName(_)
                | Renderer::IsaStyle
                | Renderer::ProcedureSite
                | Renderer::Site
        )
    }
}

/// Renders a concept's non-ISA relationships into phrases, in relationship order.
///
/// Complex and role-pair renderers render at most once; collapsing renderers
/// render once per relationship type.
pub fn render_relationships(
    ctx: RenderContext<'_>,
    relationships: &[Relationship],
) -> RenderResult<Vec<Phrase>> {
    let claims = ClaimResolver::resolve(relationships);
    let pool: Vec<&Relationship> = relationships
        .iter()
        .filter(|r| !claims.is_claimed(r.id))
        .collect();

    let mut collapsed: HashSet<(Renderer, SctId)> = HashSet::new();
    let mut rendered_sets: HashSet<Renderer> = HashSet::new();
    let mut phrases = Vec::with_capacity(pool.len());

    for relationship in &pool {
        let renderer = Renderer::select(relationship, claims.active_complex());
        debug!(
            relationship_id = relationship.id,
            type_id = relationship.type_id,
            renderer = ?renderer,
            "dispatching relationship"
        );

        if renderer.collapses() && !collapsed.insert((renderer, relationship.type_id)) {
            continue;
        }
        let same_type = || {
            pool.iter()
                .copied()
                .filter(|r| r.type_id == relationship.type_id)
                .collect::<Vec<_>>()
        };

        let phrase = match renderer {
            Renderer::Occurs => role::occurs(ctx, relationship),
            Renderer::AlternativeName(role_name) => {
                role::alternative_name(ctx, role_name, &same_type())
            }
            Renderer::IsaStyle => role::isa_style(ctx, &same_type()),
            Renderer::CausedBy => role::verb_role(ctx, "is caused by", relationship),
            Renderer::Follows => role::verb_role(ctx, "follows", relationship),
            Renderer::RolePair(kind) => {
                if !rendered_sets.insert(renderer) {
                    continue;
                }
                kind.render(ctx, relationships)?
            }
            Renderer::ProcedureSite => site::site(ctx, PERFORMED_IN, &same_type())?,
            Renderer::Site => site::site(ctx, LOCATED_IN, &same_type())?,
            Renderer::Complex(kind) => {
                if !rendered_sets.insert(renderer) {
                    continue;
                }
                kind.render(ctx, relationships)?
            }
            Renderer::Role => role::role(ctx, relationship)?,
        };
        phrases.push(phrase);
    }

    Ok(phrases)
}
