//! Derivation of accessor methods from translation entries.

use std::collections::HashMap;

use crate::core::{MethodSpec, NameCollision, TranslationEntry};

/// Convert a translation key into a method identifier.
///
/// ```
/// use i18nsync::core::methods::key_to_method;
///
/// assert_eq!(key_to_method("foo.bar.baz"), "foo_bar_baz");
/// assert_eq!(key_to_method("plain"), "plain");
/// ```
pub fn key_to_method(key: &str) -> String {
    key.replace('.', "_")
}

/// Count the placeholders used contiguously from `{0}`.
///
/// Index `N` counts as present when the value contains `{N}` or a
/// format-typed `{N,...}` placeholder. Counting stops at the first missing
/// index, so a value that only uses `{1}` takes no arguments.
///
/// ```
/// use i18nsync::core::methods::count_placeholders;
///
/// assert_eq!(count_placeholders("Hello {0}, you have {1} items"), 2);
/// assert_eq!(count_placeholders("Hello"), 0);
/// assert_eq!(count_placeholders("Only {1}"), 0);
/// ```
pub fn count_placeholders(value: &str) -> usize {
    (0..)
        .take_while(|&idx| has_placeholder(value, idx))
        .count()
}

fn has_placeholder(value: &str, idx: usize) -> bool {
    value.contains(&format!("{{{}}}", idx)) || value.contains(&format!("{{{},", idx))
}

pub fn method_for(entry: &TranslationEntry) -> MethodSpec {
    MethodSpec {
        name: key_to_method(&entry.key),
        key_literal: entry.key.clone(),
        arg_count: count_placeholders(&entry.raw_value),
    }
}

/// Find method names shared by more than one key.
///
/// Collisions are returned in the order their method name first appears.
pub fn find_collisions(methods: &[MethodSpec]) -> Vec<NameCollision> {
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<NameCollision> = Vec::new();

    for method in methods {
        match by_name.get(method.name.as_str()) {
            Some(&idx) => groups[idx].keys.push(method.key_literal.clone()),
            None => {
                by_name.insert(&method.name, groups.len());
                groups.push(NameCollision {
                    method_name: method.name.clone(),
                    keys: vec![method.key_literal.clone()],
                });
            }
        }
    }

    groups.retain(|group| group.keys.len() > 1);
    groups
}
