// Record of a boilerplate file written by the seeder

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A boilerplate file written by the seeder: its default filename and the
/// path it was written to.
///
/// The seeder returns these in a fixed order (servlet, JSP, HTML) and the
/// rename prompter walks them in that order. The record is never updated
/// after a rename; the path reflects where the file was originally written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededFile {
    pub default_name: String,
    pub path: PathBuf,
}

impl SeededFile {
    pub fn new(default_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            default_name: default_name.into(),
            path: path.into(),
        }
    }
}
