/// Target namespace of a generated interface.
///
/// Derived from the output file location relative to the source root:
/// `<root>/com/app/Foo.java` gives namespace `["com", "app"]` and
/// interface name `Foo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDescriptor {
    pub namespace_path: Vec<String>,
    pub interface_name: String,
}

impl NamespaceDescriptor {
    /// Dotted namespace, empty for files directly under the root.
    pub fn namespace(&self) -> String {
        self.namespace_path.join(".")
    }

    /// Fully qualified interface name (e.g., `com.app.Foo`).
    pub fn qualified_name(&self) -> String {
        if self.namespace_path.is_empty() {
            self.interface_name.clone()
        } else {
            format!("{}.{}", self.namespace(), self.interface_name)
        }
    }
}

/// One accessor method of a generated interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Method identifier (`foo.bar` -> `foo_bar`).
    pub name: String,
    /// The translation key as it appears in the properties file.
    pub key_literal: String,
    /// Number of `String` parameters (`arg0`, `arg1`, ...).
    pub arg_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInterfaceSpec {
    pub namespace: NamespaceDescriptor,
    pub methods: Vec<MethodSpec>,
}

/// Distinct keys that map onto the same method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    pub method_name: String,
    /// Colliding keys in emission order.
    pub keys: Vec<String>,
}
