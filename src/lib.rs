//! # Design Patterns Catalogue
//!
//! Runnable examples of the classic object-oriented patterns, one binary per
//! pattern. This library only carries what the examples share:
//!
//! - [`console`]: narration helpers (banners, steps, outcomes, diagnostics)
//! - [`error`]: the error taxonomy used across examples
//! - [`catalog`]: the embedded pattern catalogue with "when to use" notes
//!
//! ## Behavioural
//! - Chain of Responsibility, Command, Iterator, Observer
//! - State (light switch, canvas tools), Strategy
//! - Template Method (cake recipes, data parsers)
//!
//! ## Creational
//! - Abstract Factory, Builder, Factory, Prototype, Singleton
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin observer
//! cargo run --bin catalog -- observer
//! ```

pub mod catalog;
pub mod console;
pub mod error;

pub use catalog::{Catalog, Category, PatternEntry};
pub use error::{CatalogError, PatternError};
