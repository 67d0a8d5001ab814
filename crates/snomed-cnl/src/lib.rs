//! # snomed-cnl
//!
//! SNOMED CT concept and relationship model for rendering definitions as
//! controlled natural language (CNL).
//!
//! This crate provides:
//! - **Model**: [`Concept`], [`Relationship`] and relationship-group helpers
//! - **Attribute catalogue**: relationship type ids and their readable names
//! - **FSN parsing**: split a Fully Specified Name into name and semantic tag
//! - **Noun phrases**: normalized names, indefinite articles, list joining
//!
//! The rendering engine itself lives in `snomed-cnl-renderer`.
//!
//! ## Usage
//!
//! ```rust
//! use snomed_cnl::{join_list, NormalizedName};
//!
//! let heart = NormalizedName::from_fsn("Heart structure (body structure)");
//! let aorta = NormalizedName::from_fsn("Aortic structure (body structure)");
//!
//! let sites = [
//!     heart.phrase(true, None).to_string(),
//!     aorta.phrase(true, None).to_string(),
//! ];
//! assert_eq!(
//!     join_list(&sites, ", and "),
//!     "a heart structure, and an aortic structure"
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod attributes;
mod fsn;
mod model;
mod noun;

pub use fsn::{strip_semantic_tag, Fsn};
pub use model::{
    by_group, first_of_type, of_types, CharacteristicType, Concept, ConceptRef,
    DefinitionStatus, Relationship,
};
pub use noun::{join_list, with_indefinite_article, Article, NormalizedName, NounPhrase, MASS_NOUN_TAGS};

/// SNOMED CT Identifier type (64-bit unsigned integer).
pub type SctId = u64;
