//! Core data types shared by the parser, the generator, and the emitters.
//!
//! ## Module Structure
//!
//! - `message`: Translation entries read from `.properties` files
//! - `interface`: The derived interface description (namespace + methods)

pub mod interface;
pub mod message;

pub use interface::{GeneratedInterfaceSpec, MethodSpec, NameCollision, NamespaceDescriptor};
pub use message::{TranslationEntry, TranslationFile};
