// CLI module for command-line interface

pub mod new;

use clap::{Parser, Subcommand};
use crate::utils::error::Result;

use self::new::NewCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "tpg")]
#[command(about = "A scaffolding tool for Smart Tomcat servlet projects")]
#[command(long_about = r#"TPG (Tomcat Project Generator) scaffolds the fixed Maven-style layout of a
Smart Tomcat servlet project and seeds it with boilerplate files.

Features:
  • Maven-style src/main layout with WEB-INF and resources directories
  • Servlet, JSP, and HTML boilerplate seeded into the right places
  • Interactive rename of the seeded files, keeping their extensions
  • JSON output for scripting

Examples:
  tpg new                       Scaffold a project, prompting for its name
  tpg new --name demo           Scaffold a project named demo
  tpg new --name demo --json    Scaffold non-interactively, emit JSON"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new Smart Tomcat servlet project
    #[command(long_about = r#"Scaffold a new Smart Tomcat servlet project.

Creates the project folder with the fixed directory layout:
  <project>/src/main/java/com/example
  <project>/src/main/webapp
  <project>/src/main/resources
  <project>/src/main/webapp/WEB-INF

and seeds MyServlet.java, index.jsp, and index.html into it, then offers to
rename each seeded file while keeping its extension.

Examples:
  tpg new                               Prompt for the project name
  tpg new --name demo                   Use 'demo' as the project folder
  tpg new --name demo --json            Non-interactive, JSON response"#)]
    New {
        /// Project folder name (default: prompt on standard input)
        #[arg(long)]
        name: Option<String>,

        /// Output JSON instead of human-readable text (skips rename prompts)
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::New { name, json } => {
                let cmd = NewCommand { name, json };
                cmd.run().await
            }
        }
    }
}
