//! CLI argument definitions using clap.
//!
//! The tool takes a source root followed by the properties files to convert:
//!
//! ```text
//! i18nsync <ROOT_DIR> <ROOT_DIR/com/mypackage/Foo.properties> [.../Bar.properties ...]
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::KeyOrder;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source root; generated namespaces are inferred relative to it
    pub root_dir: PathBuf,

    /// Properties files to convert (e.g. ROOT_DIR/com/mypackage/Foo.properties)
    pub files: Vec<PathBuf>,

    /// Also convert every .properties file found under ROOT_DIR
    #[arg(long)]
    pub scan: bool,

    /// Method order in generated interfaces (overrides config file)
    #[arg(long, value_enum)]
    pub key_order: Option<KeyOrder>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// True when there is nothing to process.
    pub fn is_missing_inputs(&self) -> bool {
        self.files.is_empty() && !self.scan
    }
}
