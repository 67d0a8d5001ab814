//! The renderer catalogue.
//!
//! Every renderer is a function from one relationship, or from the concept's
//! whole relationship set, to a [`Phrase`]. Which renderer runs for which
//! relationship is decided by [`crate::dispatch`].

use std::collections::HashSet;

use snomed_cnl::SctId;

use crate::names::NameRenderer;
use crate::traits::TerminologyStore;

pub mod complex;
pub mod role;
pub mod role_pair;
pub mod site;

pub use complex::ComplexKind;
pub use role_pair::RolePairKind;

/// A rendered clause of a definition, without its leading "It".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    /// Clause text, e.g. "is located in a femur structure".
    pub text: String,
    /// Lengthy clauses become standalone trailing sentences.
    pub lengthy: bool,
}

impl Phrase {
    /// Creates an inline clause.
    pub fn brief(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lengthy: false,
        }
    }

    /// Creates a clause rendered as its own sentence.
    pub fn lengthy(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lengthy: true,
        }
    }

    /// Returns true if the clause has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Everything a renderer may consult while rendering one concept.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Store used for part-of walks and name lookups.
    pub store: &'a dyn TerminologyStore,
    /// Noun phrase renderer.
    pub names: NameRenderer<'a>,
    /// Concepts at which part-of walks stop.
    pub stop_list: &'a HashSet<SctId>,
}

impl<'a> RenderContext<'a> {
    /// Creates a render context.
    pub fn new(
        store: &'a dyn TerminologyStore,
        names: NameRenderer<'a>,
        stop_list: &'a HashSet<SctId>,
    ) -> Self {
        Self {
            store,
            names,
            stop_list,
        }
    }
}
