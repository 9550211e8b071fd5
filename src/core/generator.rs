//! Generation of one interface source file from one properties file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{
    config::KeyOrder,
    core::{
        GeneratedInterfaceSpec, GenerationError, GenerationResult, NameCollision,
        batch::validate_root,
        emit::{Dialect, GwtMessages, render},
        methods::{find_collisions, method_for},
        namespace::infer_namespace,
        parsers::properties::parse_properties_file,
    },
};

pub const PROPERTIES_EXTENSION: &str = "properties";

/// Name written into the banner of every generated file.
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Why a file was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The input name does not end in `.properties`.
    NonPropertiesFile,
    /// The output is at least as new as the input.
    UpToDate,
    /// The output would land outside the source root.
    OutsideRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub output: PathBuf,
    /// Fully qualified interface name (e.g., `com.app.Foo`).
    pub qualified_name: String,
    pub collisions: Vec<NameCollision>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(Generated),
    Skipped { reason: SkipReason, output: Option<PathBuf> },
}

impl Outcome {
    fn skipped(reason: SkipReason, output: Option<PathBuf>) -> Self {
        Outcome::Skipped { reason, output }
    }
}

/// Converts properties files under one source root into interface sources.
pub struct Generator {
    source_root: PathBuf,
    dialect: Box<dyn Dialect>,
    key_order: KeyOrder,
}

impl Generator {
    /// Create a generator for `source_root`.
    ///
    /// Fails with [`GenerationError::InvalidRoot`] if the root is not a directory.
    pub fn new(source_root: &Path, dialect: Box<dyn Dialect>) -> GenerationResult<Self> {
        Ok(Self {
            source_root: validate_root(source_root)?,
            dialect,
            key_order: KeyOrder::default(),
        })
    }

    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Absolute path of the source root.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Generated file path for `properties_file`: same directory, dialect extension.
    pub fn output_path(&self, properties_file: &Path) -> PathBuf {
        properties_file.with_extension(self.dialect.output_extension())
    }

    /// Regenerate the interface for `properties_file` if it is stale.
    pub fn process_file(&self, properties_file: &Path) -> GenerationResult<Outcome> {
        if !is_properties_file(properties_file) {
            return Ok(Outcome::skipped(SkipReason::NonPropertiesFile, None));
        }

        let output = self.output_path(properties_file);
        if is_up_to_date(properties_file, &output)? {
            return Ok(Outcome::skipped(SkipReason::UpToDate, Some(output)));
        }

        let absolute_output =
            std::path::absolute(&output).map_err(|source| GenerationError::io(&output, source))?;
        let Some(namespace) = infer_namespace(&self.source_root, &absolute_output) else {
            return Ok(Outcome::skipped(SkipReason::OutsideRoot, Some(output)));
        };

        let translations = parse_properties_file(properties_file)?;
        let methods: Vec<_> = translations
            .ordered(self.key_order)
            .into_iter()
            .map(method_for)
            .collect();
        let collisions = find_collisions(&methods);

        let spec = GeneratedInterfaceSpec { namespace, methods };
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let source = render(self.dialect.as_ref(), &spec, TOOL_NAME, &timestamp);

        fs::write(&output, source).map_err(|source| GenerationError::io(&output, source))?;

        Ok(Outcome::Generated(Generated {
            output,
            qualified_name: spec.namespace.qualified_name(),
            collisions,
        }))
    }
}

/// Generate a GWT `Messages` interface for `properties_file`, with default settings.
pub fn process_file(source_root: &Path, properties_file: &Path) -> GenerationResult<Outcome> {
    Generator::new(source_root, Box::new(GwtMessages::default()))?.process_file(properties_file)
}

/// True when `path` has a non-empty stem and the `.properties` extension.
///
/// A file named just `.properties` has no stem to name an interface after.
pub fn is_properties_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == PROPERTIES_EXTENSION)
}

/// True when `output` exists and is not older than `input`.
///
/// A missing output is treated as infinitely old.
fn is_up_to_date(input: &Path, output: &Path) -> GenerationResult<bool> {
    let input_modified = fs::metadata(input)
        .and_then(|meta| meta.modified())
        .map_err(|source| GenerationError::io(input, source))?;
    let output_modified = fs::metadata(output).and_then(|meta| meta.modified()).ok();

    Ok(output_modified.is_some_and(|modified| input_modified <= modified))
}
