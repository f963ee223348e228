//! # Showcase Core
//!
//! The sample catalog behind the Showcase page: the data model, the
//! one-shot loader, and the pure filter engine. No view code lives here.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod loader;

// Re-export the main types so users can just use `showcase_core::Catalog`
pub use catalog::{Catalog, LinkKind, Links, Sample, Special};
pub use config::ShowcaseConfig;
pub use filter::{FilterState, Selection, StatusLine, filter_indices, filter_samples};
pub use loader::{CatalogSource, LoadError, load_catalog};
