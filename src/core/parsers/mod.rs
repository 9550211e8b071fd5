//! File parsers for translation sources.
//!
//! - `properties`: `.properties` key/value parser that preserves declaration order

pub mod properties;
