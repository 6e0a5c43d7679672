use clap::Args;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::models::{ProjectLayout, SeededFile};
use crate::services::{FileSeeder, RenamePrompter, StructureBuilder};
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::validate_project_name;

/// Scaffold a new Smart Tomcat servlet project
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Project folder name (default: prompt on standard input)
    #[arg(long)]
    pub name: Option<String>,

    /// Output JSON instead of human-readable text (skips rename prompts)
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the new command
#[derive(Debug, Serialize, Deserialize)]
pub struct NewResponse {
    pub status: String,
    pub project_name: String,
    pub directories: Vec<String>,
    pub files: Vec<SeededFile>,
}

impl NewCommand {
    /// Execute the new command: build the directory structure, seed the
    /// boilerplate files, then offer to rename them.
    pub async fn run(&self) -> Result<()> {
        if !self.json {
            println!("--- Smart Tomcat Project Generator ---");
        }

        let project_name = match &self.name {
            Some(name) => name.clone(),
            None => prompt_project_name()?,
        };
        validate_project_name(&project_name)?;

        let layout = ProjectLayout::new(&project_name);

        if !self.json {
            println!("Creating project folder '{project_name}'...");
        }
        let directories = StructureBuilder::new().create(&layout).await?;
        if !self.json {
            println!("Folder structure created successfully:");
            for dir in &directories {
                println!("  - {}", dir.display());
            }
        }

        let files = FileSeeder::new().seed(&layout).await?;

        if self.json {
            let response = NewResponse {
                status: "success".to_string(),
                project_name,
                directories: directories
                    .iter()
                    .map(|dir| dir.display().to_string())
                    .collect(),
                files,
            };

            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                ScaffoldError::Validation(format!("Failed to serialize JSON response: {e}"))
            })?;

            println!("{json_output}");
            return Ok(());
        }

        println!("Default files created:");
        for file in &files {
            println!("  - {}", file.path.display());
        }

        let stdin = io::stdin();
        let mut prompter = RenamePrompter::new(stdin.lock(), io::stdout());
        prompter.run(&files)?;

        println!("\nProject setup complete! You can now open the new folder in IntelliJ.");
        Ok(())
    }
}

/// Prompt for the project folder name on standard input.
///
/// Only the line ending is stripped; the name is otherwise used verbatim.
fn prompt_project_name() -> Result<String> {
    print!("Enter the name for your project folder: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
