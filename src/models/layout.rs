// Fixed directory and file layout of a generated project

use std::path::PathBuf;

/// Default name of the seeded servlet source file.
pub const SERVLET_FILE_NAME: &str = "MyServlet.java";
/// Default name of the seeded JSP page.
pub const JSP_FILE_NAME: &str = "index.jsp";
/// Default name of the seeded HTML page.
pub const HTML_FILE_NAME: &str = "index.html";

/// The fixed Maven-style layout of a Smart Tomcat project, rooted at the
/// user-supplied project name.
///
/// The project name is used verbatim as the root path segment. The layout
/// only computes paths; it never touches the filesystem.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(project_name: &str) -> Self {
        Self {
            root: PathBuf::from(project_name),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Java source directory including the `com/example` package path.
    pub fn java_package_dir(&self) -> PathBuf {
        self.root
            .join("src")
            .join("main")
            .join("java")
            .join("com")
            .join("example")
    }

    pub fn webapp_dir(&self) -> PathBuf {
        self.root.join("src").join("main").join("webapp")
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.root.join("src").join("main").join("resources")
    }

    pub fn web_inf_dir(&self) -> PathBuf {
        self.webapp_dir().join("WEB-INF")
    }

    /// All directories the structure builder must create, in creation order.
    pub fn directories(&self) -> Vec<PathBuf> {
        vec![
            self.java_package_dir(),
            self.webapp_dir(),
            self.resources_dir(),
            self.web_inf_dir(),
        ]
    }

    pub fn servlet_path(&self) -> PathBuf {
        self.java_package_dir().join(SERVLET_FILE_NAME)
    }

    pub fn jsp_path(&self) -> PathBuf {
        self.webapp_dir().join(JSP_FILE_NAME)
    }

    pub fn html_path(&self) -> PathBuf {
        self.webapp_dir().join(HTML_FILE_NAME)
    }
}
