//! Anatomical site renderers.

use snomed_cnl::{join_list, Relationship};

use super::{Phrase, RenderContext};
use crate::error::RenderResult;
use crate::traverser::PartOfTraverser;

/// Lead-in for finding sites, inherent locations and process extents.
pub const LOCATED_IN: &str = "is located in";
/// Lead-in for procedure sites.
pub const PERFORMED_IN: &str = "is performed in";

/// Renders site relationships together with the structures they are part of.
///
/// Each destination is followed by its part-of closure. Members are rendered
/// with an indefinite article and deduplicated by rendered text. A single
/// member gives an inline clause; more than one gives a lengthy clause.
pub fn site(
    ctx: RenderContext<'_>,
    lead_in: &str,
    relationships: &[&Relationship],
) -> RenderResult<Phrase> {
    let traverser = PartOfTraverser::new(ctx.store, ctx.stop_list);
    let mut members: Vec<String> = Vec::new();

    for relationship in relationships {
        let mut rendered = vec![ctx.names.destination(relationship, true)];
        for whole in traverser.ancestors(relationship.destination_id) {
            rendered.push(ctx.names.lookup(ctx.store, whole, true)?);
        }
        for text in rendered {
            if !members.contains(&text) {
                members.push(text);
            }
        }
    }

    let text = format!("{} {}", lead_in, join_list(&members, ", and "));
    if members.len() > 1 {
        Ok(Phrase::lengthy(text))
    } else {
        Ok(Phrase::brief(text))
    }
}
