use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use clap::ValueEnum;
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::emit::{
    GwtMessages,
    gwt::{DEFAULT_KEY_ANNOTATION, DEFAULT_MARKER_TYPE},
};

pub const CONFIG_FILE_NAME: &str = ".i18nsyncrc.json";

/// Order in which methods are emitted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum KeyOrder {
    /// Order in which keys are first declared in the properties file
    #[default]
    File,
    /// Lexical order of the keys
    Sorted,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub key_order: KeyOrder,
    #[serde(default = "default_marker_type")]
    pub marker_type: String,
    #[serde(default = "default_key_annotation")]
    pub key_annotation: String,
    /// Glob patterns (relative to the root) excluded from `--scan`.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_marker_type() -> String {
    DEFAULT_MARKER_TYPE.to_string()
}

fn default_key_annotation() -> String {
    DEFAULT_KEY_ANNOTATION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_order: KeyOrder::default(),
            marker_type: default_marker_type(),
            key_annotation: default_key_annotation(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` or for marker
    /// and annotation names that are not Java (qualified) identifiers.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if !is_qualified_identifier(&self.marker_type) {
            bail!(
                "Invalid 'markerType': \"{}\" is not a qualified type name",
                self.marker_type
            );
        }
        if !is_qualified_identifier(&self.key_annotation) {
            bail!(
                "Invalid 'keyAnnotation': \"{}\" is not a qualified type name",
                self.key_annotation
            );
        }

        Ok(())
    }

    pub fn dialect(&self) -> GwtMessages {
        GwtMessages::new(&self.marker_type, &self.key_annotation)
    }
}

fn is_qualified_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file the values came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
