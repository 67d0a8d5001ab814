//! Situation renderer.
//!
//! Situations wrap a finding or procedure in explicit context: when it
//! happened (temporal context), how certain it is (finding context) or what
//! state it is in (procedure context), and who it concerns (subject
//! relationship context).

use snomed_cnl::attributes::*;
use snomed_cnl::{first_of_type, with_indefinite_article, Relationship, SctId};

use crate::error::{ContextKind, RenderError, RenderResult};
use crate::render::RenderContext;

/// A temporal phrase and whether it already carries its own article.
type TemporalPhrase = (Option<&'static str>, bool);

/// Temporal context: (concept, procedure phrasing, finding phrasing).
static TEMPORAL_CONTEXT_PHRASES: &[(SctId, TemporalPhrase, TemporalPhrase)] = &[
    (6493001, (Some("a recent"), true), (Some("was"), false)), // recent
    (15240007, (Some("a current"), true), (Some("is a current"), true)), // current
    (410510008, (None, false), (None, false)), // temporal context value
    (410511007, (Some("a current"), true), (Some("is a current"), true)), // current or past (actual)
    (410512000, (Some("a current"), true), (Some("is a current"), true)), // current or specified time
    (410513005, (Some("a prior"), true), (Some("was"), false)), // in the past
    (410584005, (Some("a current"), true), (Some("is a current"), true)), // current - time specified
    (410585006, (Some("a current"), true), (Some("is a current"), true)), // current - time unspecified
    (410586007, (Some(""), false), (Some("is"), false)), // specified time
    (410587003, (Some("a prior"), true), (Some("is a prior"), true)), // past - time specified
    (410588008, (Some("a prior"), true), (Some("was"), false)), // past - time unspecified
    (410589000, (Some("a prior"), true), (Some("was"), false)), // all times past
    (708353007, (Some(""), false), (Some("is"), false)), // since last encounter
];

/// Finding context: (concept, (article, modifier)).
static FINDING_CONTEXT_PHRASES: &[(SctId, Option<(&str, &str)>)] = &[
    (36692007, Some(("a", ""))),                // known
    (261665006, None),                          // unknown
    (410514004, None),                          // finding context value
    (410515003, Some(("a", ""))),               // known present
    (410516002, Some(("an", "absent"))),        // known absent
    (410519009, Some(("an", "at-risk"))),       // at risk
    (410590009, Some(("a", "possible"))),       // known possible
    (410592001, Some(("a", "probable"))),       // probably present
    (410593006, Some(("a", "probably absent"))), // probably not present
    (410605003, Some(("a", ""))),               // confirmed present
    (415684004, Some(("a", "suspected"))),      // suspected
    (428263003, None),                          // not suspected
];

/// Procedure context reworded as a modifier.
static PROCEDURE_CONTEXT_PHRASES: &[(SctId, &str)] = &[
    (410522006, "pending"),
    (410523001, "initiated"),
    (410528005, "unwanted"),
    (410529002, "optional"),
    (410537005, "unknown"),
    (410543007, "unattended"),
    (410545000, "cancelled"),
    (385658003, "completed"),
    (385643006, "pending"),
    (385649005, "organized"),
    (385651009, "ongoing"),
    (385653007, "long running"),
    (385660001, "incomplete"),
    (385661002, "considered"),
];

fn unknown(context: ContextKind, concept_id: SctId) -> RenderError {
    RenderError::UnknownContextConcept {
        context,
        concept_id,
    }
}

fn temporal_phrases(temporal: Option<&Relationship>) -> RenderResult<(TemporalPhrase, TemporalPhrase)> {
    let Some(temporal) = temporal else {
        return Ok(((None, false), (None, false)));
    };
    TEMPORAL_CONTEXT_PHRASES
        .iter()
        .find(|(id, _, _)| *id == temporal.destination_id)
        .map(|(_, procedure, finding)| (*procedure, *finding))
        .ok_or_else(|| unknown(ContextKind::Temporal, temporal.destination_id))
}

fn finding_context(context: Option<&Relationship>) -> RenderResult<(&'static str, &'static str)> {
    let Some(context) = context else {
        return Ok(("a", ""));
    };
    FINDING_CONTEXT_PHRASES
        .iter()
        .find(|(id, _)| *id == context.destination_id)
        .map(|(_, phrase)| phrase.unwrap_or(("a", "")))
        .ok_or_else(|| unknown(ContextKind::Finding, context.destination_id))
}

fn procedure_context(context: Option<&Relationship>) -> RenderResult<Option<&'static str>> {
    let Some(context) = context else {
        return Ok(None);
    };
    PROCEDURE_CONTEXT_PHRASES
        .iter()
        .find(|(id, _)| *id == context.destination_id)
        .map(|(_, phrase)| Some(*phrase))
        .ok_or_else(|| unknown(ContextKind::Procedure, context.destination_id))
}

/// Renders a situation around its associated procedure, or else its
/// associated finding.
pub(super) fn render(ctx: RenderContext<'_>, relationships: &[Relationship]) -> RenderResult<String> {
    let (procedure_temporal, finding_temporal) =
        temporal_phrases(first_of_type(relationships, TEMPORAL_CONTEXT))?;
    let subject = first_of_type(relationships, SUBJECT_RELATIONSHIP_CONTEXT)
        .map(|subject| ctx.names.destination(subject, true));

    if let Some(procedure) = first_of_type(relationships, ASSOCIATED_PROCEDURE) {
        let reworded = procedure_context(first_of_type(relationships, PROCEDURE_CONTEXT))?;
        let procedure_phrase = match (procedure_temporal, reworded) {
            ((Some(temporal), true), Some(reworded)) => format!(
                "{}, {} {}",
                temporal,
                reworded,
                ctx.names.destination(procedure, false)
            ),
            ((Some(temporal), true), None) => {
                format!("{} {}", temporal, ctx.names.destination(procedure, false))
            }
            (_, Some(reworded)) => format!(
                "{} {}",
                with_indefinite_article(reworded),
                ctx.names.destination(procedure, false)
            ),
            (_, None) => ctx.names.destination(procedure, true),
        };
        return Ok(match subject {
            Some(subject) => format!(
                "is a situation involving {} and {}",
                subject, procedure_phrase
            ),
            None => format!("is a situation involving {}", procedure_phrase),
        });
    }

    let (article, modifier) = finding_context(first_of_type(relationships, FINDING_CONTEXT))?;
    let prefix = match finding_temporal {
        (Some(temporal), true) if !modifier.is_empty() => format!("{}, {}", temporal, modifier),
        (Some(temporal), true) => temporal.to_string(),
        (Some(temporal), false) if !temporal.is_empty() => format!("{} {} {}", temporal, article, modifier),
        _ => format!("is {} {}", article, modifier),
    };
    let mut text = format!("{} finding", prefix.trim_end());
    if let Some(finding) = first_of_type(relationships, ASSOCIATED_FINDING) {
        text.push_str(" of ");
        text.push_str(&ctx.names.destination(finding, false));
    }
    if let Some(subject) = subject {
        text.push_str(" in ");
        text.push_str(&subject);
    }
    Ok(text)
}
