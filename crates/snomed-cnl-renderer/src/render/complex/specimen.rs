//! Specimen renderer.

use snomed_cnl::attributes::*;
use snomed_cnl::{join_list, Relationship, SctId};

use crate::render::RenderContext;

/// How a specimen was collected: (type, preposition).
static COLLECTION_PHRASES: &[(SctId, &str)] = &[(SPECIMEN_PROCEDURE, "via"), (SPECIMEN_SOURCE_TOPOGRAPHY, "from")];

/// What a specimen is or comes from: (type, verb phrase).
static OTHER_PHRASES: &[(SctId, &str)] = &[
    (SPECIMEN_SOURCE_MORPHOLOGY, "is"),
    (SPECIMEN_SUBSTANCE, "is"),
    (SPECIMEN_SOURCE_IDENTITY, "is taken from"),
];

fn lookup(table: &[(SctId, &'static str)], type_id: SctId) -> Option<&'static str> {
    table.iter().find(|(id, _)| *id == type_id).map(|(_, text)| *text)
}

/// Renders "is collected via X, and from Y, and is Z".
pub(super) fn render(ctx: RenderContext<'_>, relationships: &[Relationship]) -> String {
    let collection: Vec<String> = relationships
        .iter()
        .filter_map(|r| {
            lookup(COLLECTION_PHRASES, r.type_id)
                .map(|preposition| format!("{} {}", preposition, ctx.names.destination(r, true)))
        })
        .collect();

    let mut phrases = Vec::new();
    if !collection.is_empty() {
        phrases.push(format!("is collected {}", join_list(&collection, ", and ")));
    }
    phrases.extend(relationships.iter().filter_map(|r| {
        lookup(OTHER_PHRASES, r.type_id).map(|verb| format!("{} {}", verb, ctx.names.destination(r, true)))
    }));

    join_list(&phrases, ", and ")
}
