//! Error types for definition rendering.

use std::fmt;

use snomed_cnl::SctId;
use thiserror::Error;

/// Which situation context table a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// Temporal context (e.g. current, past).
    Temporal,
    /// Finding context (e.g. known present, suspected).
    Finding,
    /// Procedure context (e.g. done, planned).
    Procedure,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContextKind::Temporal => "temporal",
            ContextKind::Finding => "finding",
            ContextKind::Procedure => "procedure",
        })
    }
}

/// Errors that can occur while rendering a definition.
///
/// Rendering is all-or-nothing: any of these aborts the concept and no
/// partial sentence is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A role-pair group holds the wrong number of object relationships.
    #[error("Malformed expression: {count} relationships of type {attribute} in group {group}, expected at most one")]
    MalformedExpression {
        /// The over-represented attribute type.
        attribute: SctId,
        /// Relationship group number.
        group: u16,
        /// Number of relationships found.
        count: usize,
    },

    /// A complex renderer met a relationship group it has no phrasing for.
    #[error("Unhandled attribute combination for {renderer} renderer in group {group}")]
    UnhandledCombination {
        /// Name of the complex renderer.
        renderer: &'static str,
        /// Relationship group number.
        group: u16,
    },

    /// A situation context concept is missing from its lookup table.
    #[error("Unknown {context} context concept: {concept_id}")]
    UnknownContextConcept {
        /// The table that was consulted.
        context: ContextKind,
        /// The context concept id.
        concept_id: SctId,
    },

    /// A concept needed for rendering is not in the store.
    #[error("Concept not found: {0}")]
    ConceptNotFound(SctId),
}

/// Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
