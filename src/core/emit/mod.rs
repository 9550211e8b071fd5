//! Source emission for generated interfaces.
//!
//! A [`Dialect`] knows how to spell one target framework's message bundle:
//! the file header with its namespace and marker supertype, the per-key tag
//! on each method, and the closing of the declaration. Key and namespace
//! derivation never depend on the dialect.
//!
//! ## Module Structure
//!
//! - `gwt`: GWT `Messages` interfaces in Java

pub mod gwt;

use std::fmt::{self, Write};

use crate::core::{GeneratedInterfaceSpec, MethodSpec, NamespaceDescriptor};

pub use gwt::GwtMessages;

pub trait Dialect {
    /// Extension of generated files, without the leading dot.
    fn output_extension(&self) -> &str;

    /// Comment naming the generating tool and time.
    fn write_banner(&self, out: &mut dyn Write, tool: &str, timestamp: &str) -> fmt::Result;

    /// Namespace declaration and the opening of the interface, including the
    /// marker supertype.
    fn write_header(&self, out: &mut dyn Write, namespace: &NamespaceDescriptor) -> fmt::Result;

    /// One accessor method tagged with its translation key.
    fn write_method(&self, out: &mut dyn Write, method: &MethodSpec) -> fmt::Result;

    fn write_footer(&self, out: &mut dyn Write) -> fmt::Result;
}

/// Render a complete source file for `spec`.
pub fn render(
    dialect: &dyn Dialect,
    spec: &GeneratedInterfaceSpec,
    tool: &str,
    timestamp: &str,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = render_to(dialect, spec, tool, timestamp, &mut out);
    out
}

pub fn render_to(
    dialect: &dyn Dialect,
    spec: &GeneratedInterfaceSpec,
    tool: &str,
    timestamp: &str,
    out: &mut dyn Write,
) -> fmt::Result {
    dialect.write_banner(out, tool, timestamp)?;
    dialect.write_header(out, &spec.namespace)?;

    for (idx, method) in spec.methods.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        dialect.write_method(out, method)?;
    }

    dialect.write_footer(out)
}
