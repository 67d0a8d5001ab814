//! # snomed-cnl-renderer
//!
//! Controlled natural language rendering engine for SNOMED CT.
//!
//! This crate turns a concept's stated definition (its ISA parents and
//! attribute relationships) into readable English sentences. It reads
//! concepts through the [`TerminologyStore`] trait, so any backing store can
//! be used.
//!
//! ## Key Features
//!
//! - **Zero store dependencies** - implement [`TerminologyStore`] for your own store
//! - **Role renderers** - dedicated phrasing for sites, methods, situations, drugs, ...
//! - **Configurable caching** - LRU cache of normalized concept names
//! - **All-or-nothing** - a concept renders completely or returns a [`RenderError`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use snomed_cnl_renderer::ControlledEnglishGenerator;
//!
//! let generator = ControlledEnglishGenerator::new(&store);
//!
//! let text = generator.render_definition(71620000, false)?;
//! // "Fracture of femur is a fracture of bone.  It is located in a femur structure."
//! ```
//!
//! ## With Configuration
//!
//! ```ignore
//! use snomed_cnl_renderer::{ControlledEnglishGenerator, NameCacheConfig, RendererConfig};
//!
//! let config = RendererConfig::builder()
//!     .with_name_cache(NameCacheConfig { max_entries: 50_000 })
//!     .with_stop_list([123037004, 91723000])
//!     .build();
//!
//! let generator = ControlledEnglishGenerator::with_config(&store, config);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    snomed-cnl-renderer                        │
//! │                                                               │
//! │  ControlledEnglishGenerator                                   │
//! │  ├── load concept, ISA parents, relationships (store trait)  │
//! │  ├── resolve claims of complex and role-pair renderers       │
//! │  ├── dispatch unclaimed relationships to role renderers      │
//! │  └── compose classification and role phrases into sentences  │
//! │                                                               │
//! │  Dependencies:                                                │
//! │  └── snomed-cnl - Concept/Relationship model, noun phrases   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cache;
mod claims;
mod composer;
mod config;
mod dispatch;
mod error;
mod generator;
mod names;
pub mod render;
mod traits;
mod traverser;

// Public re-exports
pub use cache::{CacheStats, NameCache};
pub use claims::{ClaimResolver, Claims};
pub use composer::compose;
pub use config::{NameCacheConfig, RendererConfig, RendererConfigBuilder};
pub use dispatch::{render_relationships, Renderer};
pub use error::{ContextKind, RenderError, RenderResult};
pub use generator::ControlledEnglishGenerator;
pub use names::NameRenderer;
pub use render::{ComplexKind, Phrase, RenderContext, RolePairKind};
pub use traits::{well_known, TerminologyStore};
pub use traverser::PartOfTraverser;

// Re-export commonly used types from dependencies for convenience
pub use snomed_cnl::{Concept, ConceptRef, Relationship, SctId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // Verify all public types are accessible
        let _: Option<NameCacheConfig> = None;
        let _: Option<RendererConfig> = None;
        let _: Option<CacheStats> = None;
        let _: Option<Phrase> = None;
        let _: Option<RenderResult<()>> = None;
    }

    #[test]
    fn test_re_exports() {
        let _id: SctId = 71620000;
        let concept = Concept::new(71620000, "Fracture of femur (disorder)");
        assert_eq!(concept.name(), "Fracture of femur");
    }
}
