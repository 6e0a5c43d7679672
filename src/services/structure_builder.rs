// Directory structure creation for generated projects

use tokio::fs;

use crate::models::ProjectLayout;
use crate::utils::error::{Result, ScaffoldError};

/// Creates the fixed directory structure of a project.
#[derive(Debug, Clone, Default)]
pub struct StructureBuilder;

impl StructureBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Create the four project directories, idempotently.
    ///
    /// Uses `create_dir_all`, so already-present directories are not an
    /// error and a second run over the same project name succeeds. On
    /// failure, directories created before the error remain on disk; no
    /// rollback is attempted and the caller must treat the failure as
    /// terminal for the rest of the pipeline.
    pub async fn create(&self, layout: &ProjectLayout) -> Result<Vec<std::path::PathBuf>> {
        let directories = layout.directories();

        for dir in &directories {
            fs::create_dir_all(dir)
                .await
                .map_err(ScaffoldError::Directory)?;
        }

        Ok(directories)
    }
}
