use std::fmt::{self, Write};

use crate::core::{MethodSpec, NamespaceDescriptor, emit::Dialect};

pub const DEFAULT_MARKER_TYPE: &str = "com.google.gwt.i18n.client.Messages";
pub const DEFAULT_KEY_ANNOTATION: &str = "Key";

/// Java interfaces for GWT's `Messages` i18n support.
///
/// ```text
/// package com.app;
///
/// public interface Foo
///     extends com.google.gwt.i18n.client.Messages
/// {
///     @Key("foo.bar")
///     String foo_bar (String arg0);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GwtMessages {
    pub marker_type: String,
    pub key_annotation: String,
}

impl Default for GwtMessages {
    fn default() -> Self {
        Self {
            marker_type: DEFAULT_MARKER_TYPE.to_string(),
            key_annotation: DEFAULT_KEY_ANNOTATION.to_string(),
        }
    }
}

impl GwtMessages {
    pub fn new(marker_type: impl Into<String>, key_annotation: impl Into<String>) -> Self {
        Self {
            marker_type: marker_type.into(),
            key_annotation: key_annotation.into(),
        }
    }
}

impl Dialect for GwtMessages {
    fn output_extension(&self) -> &str {
        "java"
    }

    fn write_banner(&self, out: &mut dyn Write, tool: &str, timestamp: &str) -> fmt::Result {
        writeln!(out, "//")?;
        writeln!(out, "// Generated by {} on {}", tool, timestamp)?;
        writeln!(out)
    }

    fn write_header(&self, out: &mut dyn Write, namespace: &NamespaceDescriptor) -> fmt::Result {
        // Default package: Java has no `package ;` declaration
        if !namespace.namespace_path.is_empty() {
            writeln!(out, "package {};", namespace.namespace())?;
            writeln!(out)?;
        }
        writeln!(out, "public interface {}", namespace.interface_name)?;
        writeln!(out, "    extends {}", self.marker_type)?;
        writeln!(out, "{{")
    }

    fn write_method(&self, out: &mut dyn Write, method: &MethodSpec) -> fmt::Result {
        writeln!(
            out,
            "    @{}(\"{}\")",
            self.key_annotation,
            java_string_literal(&method.key_literal)
        )?;

        let params: Vec<String> = (0..method.arg_count)
            .map(|idx| format!("String arg{}", idx))
            .collect();
        writeln!(out, "    String {} ({});", method.name, params.join(", "))
    }

    fn write_footer(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "}}")
    }
}

/// Escape `text` for use between double quotes in Java source.
fn java_string_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\u{:04x}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}
