//! Role-pair renderers.
//!
//! A role pair is a target attribute (interprets, method) whose meaning is
//! only complete together with the object attributes in the same group.

use std::collections::BTreeMap;

use snomed_cnl::attributes::*;
use snomed_cnl::{join_list, Relationship, SctId};

use super::{Phrase, RenderContext};
use crate::error::{RenderError, RenderResult};

/// Object attributes of the method role pair.
const METHOD_OBJECTS: &[SctId] = &[
    DIRECT_SUBSTANCE,
    DIRECT_MORPHOLOGY,
    DIRECT_DEVICE,
    USING_ACCESS_DEVICE,
    PROCEDURE_DEVICE,
    SURGICAL_APPROACH,
    PROCEDURE_MORPHOLOGY,
    ACCESS,
    HAS_INTENT,
    USING_SUBSTANCE,
    USING_ENERGY,
    MEASUREMENT_METHOD,
    REVISION_STATUS,
    INDIRECT_MORPHOLOGY,
];

/// Relationships the method phrase consumes beyond its objects.
const METHOD_CONSUMED: &[SctId] = &[
    PROCEDURE_SITE_DIRECT,
    PROCEDURE_SITE_INDIRECT,
    PROCEDURE_SITE,
    USING_DEVICE,
];

const USING_DEVICE_RELATIONS: &[SctId] = &[USING_DEVICE, USING_ACCESS_DEVICE];

const PROCEDURE_SITES: &[SctId] = &[PROCEDURE_SITE_DIRECT, PROCEDURE_SITE_INDIRECT, PROCEDURE_SITE];

/// Method object phrasing: (type, preposition, object takes an article).
static METHOD_OBJECT_PHRASES: &[(SctId, &str, bool)] = &[
    (DIRECT_SUBSTANCE, "of", true),
    (DIRECT_DEVICE, "of", true),
    (PROCEDURE_DEVICE, "involving", true),
    (DIRECT_MORPHOLOGY, "of", true),
    (SURGICAL_APPROACH, "via", true),
    (PROCEDURE_MORPHOLOGY, "involving", true),
    (INDIRECT_MORPHOLOGY, "involving", true),
    (ACCESS, "via", true),
    (HAS_INTENT, "intended as/for", true),
    (USING_SUBSTANCE, "using", true),
    (USING_ENERGY, "using", false),
    (MEASUREMENT_METHOD, "collected via", true),
    (REVISION_STATUS, "that is", true),
];

/// The role-pair renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RolePairKind {
    /// interprets + has interpretation
    Interpretation,
    /// method + its objects, sites and device
    Method,
}

impl RolePairKind {
    /// All role pairs.
    pub const ALL: [RolePairKind; 2] = [RolePairKind::Interpretation, RolePairKind::Method];

    /// Gets the role pair whose target has the given type.
    pub fn for_target(type_id: SctId) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.target_type() == type_id)
    }

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            RolePairKind::Interpretation => "interpretation",
            RolePairKind::Method => "method",
        }
    }

    /// The target attribute type.
    pub fn target_type(self) -> SctId {
        match self {
            RolePairKind::Interpretation => INTERPRETS,
            RolePairKind::Method => METHOD,
        }
    }

    /// The object attribute types.
    pub fn object_types(self) -> &'static [SctId] {
        match self {
            RolePairKind::Interpretation => &[HAS_INTERPRETATION],
            RolePairKind::Method => METHOD_OBJECTS,
        }
    }

    /// Further attribute types the pair's phrase consumes.
    pub fn consumed_types(self) -> &'static [SctId] {
        match self {
            RolePairKind::Interpretation => &[],
            RolePairKind::Method => METHOD_CONSUMED,
        }
    }

    /// Renders every target of this pair in the relationship set.
    pub fn render(self, ctx: RenderContext<'_>, relationships: &[Relationship]) -> RenderResult<Phrase> {
        match self {
            RolePairKind::Interpretation => interpretation(ctx, relationships),
            RolePairKind::Method => method(ctx, relationships),
        }
    }
}

/// Groups the targets of a role pair by relationship group.
fn targets_by_group(relationships: &[Relationship], target_type: SctId) -> BTreeMap<u16, Vec<&Relationship>> {
    let mut grouping: BTreeMap<u16, Vec<&Relationship>> = BTreeMap::new();
    for target in relationships.iter().filter(|r| r.type_id == target_type) {
        grouping.entry(target.group).or_default().push(target);
    }
    grouping
}

fn in_group<'r>(
    relationships: &'r [Relationship],
    types: &'r [SctId],
    group: u16,
) -> impl Iterator<Item = &'r Relationship> + 'r {
    relationships
        .iter()
        .filter(move |r| r.group == group && r.has_type_in(types))
}

/// Renders "is an interpretation of X as Y" for each interprets relationship.
///
/// Each group may interpret its target as at most one object.
pub fn interpretation(ctx: RenderContext<'_>, relationships: &[Relationship]) -> RenderResult<Phrase> {
    let mut phrases: Vec<String> = Vec::new();

    for (group, targets) in targets_by_group(relationships, INTERPRETS) {
        let objects: Vec<&Relationship> = in_group(relationships, &[HAS_INTERPRETATION], group).collect();
        if objects.len() > 1 {
            return Err(RenderError::MalformedExpression {
                attribute: HAS_INTERPRETATION,
                group,
                count: objects.len(),
            });
        }

        for target in targets {
            let prefix = if phrases.is_empty() { "is " } else { "" };
            let interpreted = ctx.names.destination(target, false);
            let outcome = objects
                .first()
                .map(|object| format!(" as {}", ctx.names.destination(object, false)))
                .unwrap_or_default();
            phrases.push(format!("{}an interpretation of {}{}", prefix, interpreted, outcome));
        }
    }

    Ok(Phrase::brief(join_list(&phrases, ", and ")))
}

/// Renders "is <method> using <device> <prep> <object> occurring in <site>"
/// for each method relationship.
pub fn method(ctx: RenderContext<'_>, relationships: &[Relationship]) -> RenderResult<Phrase> {
    let object_types: Vec<SctId> = METHOD_OBJECTS
        .iter()
        .copied()
        .filter(|t| !USING_DEVICE_RELATIONS.contains(t))
        .collect();
    let mut phrases: Vec<String> = Vec::new();

    for (group, targets) in targets_by_group(relationships, METHOD) {
        let devices: Vec<&Relationship> = in_group(relationships, USING_DEVICE_RELATIONS, group).collect();
        if devices.len() > 1 {
            return Err(RenderError::MalformedExpression {
                attribute: devices[1].type_id,
                group,
                count: devices.len(),
            });
        }
        let using = devices
            .first()
            .map(|device| format!(" using {}", ctx.names.destination(device, true)))
            .unwrap_or_default();

        let objects: String = in_group(relationships, &object_types, group)
            .map(|object| {
                let (preposition, with_article) = method_object_phrase(object.type_id);
                format!(" {} {}", preposition, ctx.names.destination(object, with_article))
            })
            .collect();

        let locations: Vec<String> = in_group(relationships, PROCEDURE_SITES, group)
            .map(|site| {
                let modifier = match site.type_id {
                    PROCEDURE_SITE_DIRECT => "directly ",
                    PROCEDURE_SITE_INDIRECT => "indirectly ",
                    _ => "",
                };
                format!("{}in {}", modifier, ctx.names.destination(site, true))
            })
            .collect();
        let occurring = if locations.is_empty() {
            String::new()
        } else {
            format!(" occurring {}", join_list(&locations, ", and "))
        };

        for target in targets {
            let prefix = if phrases.is_empty() { "is " } else { "" };
            phrases.push(format!(
                "{}{}{}{}{}",
                prefix,
                ctx.names.destination(target, true),
                using,
                objects,
                occurring
            ));
        }
    }

    Ok(Phrase::brief(join_list(&phrases, ", and ")))
}

fn method_object_phrase(type_id: SctId) -> (&'static str, bool) {
    METHOD_OBJECT_PHRASES
        .iter()
        .find(|(id, _, _)| *id == type_id)
        .map(|(_, preposition, article)| (*preposition, *article))
        .unwrap_or(("of", true))
}
