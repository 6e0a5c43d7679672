// Interactive rename pass over the seeded files

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::models::SeededFile;
use crate::utils::error::{Result, ScaffoldError};

/// Walks the seeded files and offers to rename each one, keeping the
/// original extension.
///
/// Generic over its input and output streams so tests can drive it with
/// in-memory buffers instead of a terminal. Renames are strictly a side
/// effect on disk; the `SeededFile` records are never updated, so their
/// paths go stale after a successful rename.
pub struct RenamePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> RenamePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the rename dialogue over the seeded files.
    ///
    /// No-op for an empty list. Asks once whether to rename anything; only
    /// the exact answer `yes` (trimmed, case-insensitive) affirms. Per
    /// file, a declined prompt leaves the default name, and a failed rename
    /// is reported and skipped without blocking the remaining entries.
    /// Only prompt-stream I/O errors propagate.
    pub fn run(&mut self, files: &[SeededFile]) -> Result<()> {
        if files.is_empty() {
            return Ok(());
        }

        writeln!(
            self.output,
            "\nDo you want to rename any of the created files? (yes/no)"
        )?;
        if self.read_answer()? != "yes" {
            writeln!(self.output, "Okay, keeping the default filenames.")?;
            return Ok(());
        }

        for file in files {
            writeln!(
                self.output,
                "\nDo you want to rename '{}'? (yes/no)",
                file.default_name
            )?;
            if self.read_answer()? != "yes" {
                continue;
            }

            write!(
                self.output,
                "Enter the new name for '{}': ",
                file.default_name
            )?;
            self.output.flush()?;
            let typed_name = self.read_line()?;

            let (new_name, appended) = apply_extension_policy(&file.default_name, &typed_name);
            if let Some(ext) = appended {
                writeln!(
                    self.output,
                    "New filename must end with '{ext}'. Appending extension..."
                )?;
            }

            let new_path = file
                .path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(&new_name);

            match fs::rename(&file.path, &new_path) {
                Ok(()) => writeln!(
                    self.output,
                    "File successfully renamed from '{}' to '{}'.",
                    file.default_name, new_name
                )?,
                Err(err) => writeln!(self.output, "{}", ScaffoldError::Rename(err))?,
            }
        }

        Ok(())
    }

    /// Read a yes/no answer behind a `> ` prompt, trimmed and lowercased.
    fn read_answer(&mut self) -> Result<String> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(self.read_line()?.trim().to_lowercase())
    }

    /// Read one line with the line ending stripped, nothing else trimmed.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Enforce that a new filename keeps the default filename's extension.
///
/// If the new name's extension is missing or differs from the default's,
/// the default's extension is appended and returned as the second element.
/// A mismatched extension is appended to, not replaced, so `report.txt`
/// for a `.jsp` default becomes `report.txt.jsp`.
pub fn apply_extension_policy(default_name: &str, new_name: &str) -> (String, Option<String>) {
    let default_ext = Path::new(default_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    let new_ext = Path::new(new_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    if new_ext.is_empty() || new_ext != default_ext {
        (format!("{new_name}{default_ext}"), Some(default_ext))
    } else {
        (new_name.to_string(), None)
    }
}
