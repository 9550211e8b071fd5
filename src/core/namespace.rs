//! Namespace inference from file locations.

use std::path::{Component, Path, PathBuf};

use crate::core::NamespaceDescriptor;

/// Derive the namespace of `output_file` relative to `source_root`.
///
/// Both paths are expected to be absolute. `.` and `..` components are
/// resolved lexically before comparing. Returns `None` when the output file
/// does not live under the root. Containment is checked component-wise, so
/// `/src2/Foo.java` is not considered to be inside `/src`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use i18nsync::core::namespace::infer_namespace;
///
/// let ns = infer_namespace(Path::new("/src"), Path::new("/src/com/app/Foo.java")).unwrap();
/// assert_eq!(ns.namespace(), "com.app");
/// assert_eq!(ns.interface_name, "Foo");
///
/// assert!(infer_namespace(Path::new("/src"), Path::new("/other/Foo.java")).is_none());
/// assert!(infer_namespace(Path::new("/src"), Path::new("/src/../other/Foo.java")).is_none());
/// ```
pub fn infer_namespace(source_root: &Path, output_file: &Path) -> Option<NamespaceDescriptor> {
    let source_root = normalize(source_root);
    let output_file = normalize(output_file);
    let relative = output_file.strip_prefix(&source_root).ok()?;
    let interface_name = relative.file_stem()?.to_string_lossy().to_string();

    let namespace_path = match relative.parent() {
        Some(dir) => dir
            .components()
            .map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy().to_string()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?,
        None => Vec::new(),
    };

    Some(NamespaceDescriptor {
        namespace_path,
        interface_name,
    })
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` at the filesystem root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            _ => normalized.push(component),
        }
    }
    normalized
}
