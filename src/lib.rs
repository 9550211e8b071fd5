//! i18nsync - typed message interfaces from `.properties` files
//!
//! i18nsync is a CLI tool and library that converts `.properties` translation
//! files into GWT `Messages` interfaces: one accessor method per key, with one
//! `String` parameter per `{N}` placeholder. The package of each interface is
//! inferred from the file's location under a source root, and files are only
//! regenerated when their properties file is newer than the existing output.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit statuses)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, derivation and emission engine
//! - `issues`: Diagnostics for skipped and failed files

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
