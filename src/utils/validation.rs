// Common validation utilities for TPG CLI commands

use crate::utils::error::{Result, ScaffoldError};

/// Validate the user-supplied project name.
///
/// The name is used verbatim as the root directory name, so the only rule
/// is that it must be non-empty. No normalization or sanitization is
/// performed beyond that.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::Validation(
            "Project name cannot be empty. Exiting.".to_string(),
        ));
    }

    Ok(())
}
