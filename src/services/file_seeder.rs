// Boilerplate file seeding for generated projects

use tokio::fs;

use crate::models::layout::{HTML_FILE_NAME, JSP_FILE_NAME, SERVLET_FILE_NAME};
use crate::models::{ProjectLayout, SeededFile};
use crate::utils::error::{Result, ScaffoldError};

/// Fixed servlet boilerplate (class `MyServlet` in package `com.example`,
/// mapped to `/MyServlet`). Stored under `templates/` so the content can be
/// changed without touching control logic; reproduced byte-for-byte.
pub const SERVLET_TEMPLATE: &str = include_str!("../../templates/MyServlet.java");
/// Fixed JSP boilerplate with a UTF-8 page directive.
pub const JSP_TEMPLATE: &str = include_str!("../../templates/index.jsp");
/// Fixed static HTML boilerplate.
pub const HTML_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Writes the three boilerplate files into an existing project layout.
#[derive(Debug, Clone, Default)]
pub struct FileSeeder;

impl FileSeeder {
    pub fn new() -> Self {
        Self
    }

    /// Write the servlet, JSP, and HTML boilerplate files.
    ///
    /// The directory structure is assumed to already exist. Returns the
    /// seeded-file records in servlet, JSP, HTML order. The first write
    /// error aborts the whole batch; files written before the error remain
    /// on disk (no all-or-nothing guarantee).
    pub async fn seed(&self, layout: &ProjectLayout) -> Result<Vec<SeededFile>> {
        let files = vec![
            (SERVLET_FILE_NAME, layout.servlet_path(), SERVLET_TEMPLATE),
            (JSP_FILE_NAME, layout.jsp_path(), JSP_TEMPLATE),
            (HTML_FILE_NAME, layout.html_path(), HTML_TEMPLATE),
        ];

        let mut seeded = Vec::with_capacity(files.len());
        for (default_name, path, content) in files {
            fs::write(&path, content)
                .await
                .map_err(ScaffoldError::Seed)?;
            seeded.push(SeededFile::new(default_name, path));
        }

        Ok(seeded)
    }
}
