//! # snomed-cnl-batch
//!
//! Batch rendering for the `snomed-cnl-renderer` crate.
//!
//! Renders many concept definitions with one shared name cache. A concept
//! that fails to render is recorded with its error and the batch continues.
//!
//! ## Features
//!
//! - **`parallel`**: Render concepts on the rayon thread pool
//!
//! ## Quick Start
//!
//! ```ignore
//! use snomed_cnl_batch::{BatchConfig, BatchRenderer};
//!
//! let batch = BatchRenderer::with_config(&store, BatchConfig::builder().with_parallel(true).build());
//!
//! let report = batch.render_all(&[71620000, 195967001]);
//! for definition in &report.rendered {
//!     println!("{}: {}", definition.concept_id, definition.text);
//! }
//! for failure in &report.failures {
//!     eprintln!("{}: {}", failure.concept_id, failure.error);
//! }
//! println!("{}", report.stats);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod service;

pub use error::{BatchError, BatchResult};
pub use service::{
    BatchConfig, BatchConfigBuilder, BatchRenderer, BatchReport, BatchStats, RenderFailure,
    RenderedDefinition,
};
