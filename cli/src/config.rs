//! Input and output locations for an extraction run.
//!
//! Every field has a built-in default, so a run with no configuration reads
//! the module sources from their usual place in the content repository.
//! A YAML file may override any subset of fields:
//!
//! ```yaml
//! format_path: "../../MyBible Modules Format.txt"
//! plan_db: ../../RMMC-p.plan.SQLite3
//! output_dir: ../src/data
//! books_file: books.json
//! plan_file: plan.json
//! ```
//!
//! Relative paths are resolved against the working directory.

use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_FORMAT_PATH: &str = "../../MyBible Modules Format.txt";
pub const DEFAULT_PLAN_DB: &str = "../../RMMC-p.plan.SQLite3";
pub const DEFAULT_OUTPUT_DIR: &str = "../src/data";
pub const DEFAULT_BOOKS_FILE: &str = "books.json";
pub const DEFAULT_PLAN_FILE: &str = "plan.json";

/// Locations used by one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Module format text file holding the book blocks.
    pub format_path: PathBuf,
    /// SQLite reading-plan database.
    pub plan_db: PathBuf,
    /// Directory receiving the JSON files; created if missing.
    pub output_dir: PathBuf,
    /// File name of the book table inside `output_dir`.
    pub books_file: String,
    /// File name of the plan document inside `output_dir`.
    pub plan_file: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            format_path: PathBuf::from(DEFAULT_FORMAT_PATH),
            plan_db: PathBuf::from(DEFAULT_PLAN_DB),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            books_file: DEFAULT_BOOKS_FILE.to_string(),
            plan_file: DEFAULT_PLAN_FILE.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Loads configuration from a YAML file; absent fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| format!("Failed to open config '{}': {e}", path.display()))?;
        serde_yaml::from_reader(BufReader::new(file))
            .map_err(|e| format!("Invalid config '{}': {e}", path.display()))
    }

    pub fn books_path(&self) -> PathBuf {
        self.output_dir.join(&self.books_file)
    }

    pub fn plan_path(&self) -> PathBuf {
        self.output_dir.join(&self.plan_file)
    }
}
