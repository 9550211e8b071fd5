//! Core generation engine.
//!
//! Turns `.properties` translation files into typed interface sources:
//!
//! 1. **Parse**: read entries in declaration order (`parsers`)
//! 2. **Derive**: namespace from the file location, one method per key
//!    (`namespace`, `methods`)
//! 3. **Emit**: render the interface through a pluggable dialect (`emit`)
//!
//! `generator` runs these steps for one file, with the staleness and root
//! checks in front; `batch` drives many files and aggregates errors.
//!
//! ## Module Structure
//!
//! - `batch`: Multi-file driver with per-file error isolation
//! - `data`: Entries, namespaces and method descriptions
//! - `emit`: Dialects that spell the generated source
//! - `error`: `GenerationError`
//! - `file_scanner`: Discovery of properties files under a root
//! - `generator`: Single-file generation
//! - `methods`: Key-to-method mapping and placeholder counting
//! - `namespace`: Namespace inference from paths
//! - `parsers`: `.properties` parser

pub mod batch;
pub mod data;
pub mod emit;
pub mod error;
pub mod file_scanner;
pub mod generator;
pub mod methods;
pub mod namespace;
pub mod parsers;

pub use data::*;
pub use error::{GenerationError, GenerationResult};
