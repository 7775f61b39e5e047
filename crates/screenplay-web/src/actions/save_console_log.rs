//! Save the browser's console log.

use super::delivery_error;
use super::save_screenshot::filename_of;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, AttachTheFile, Performable};
use crate::driver::LogEntry;
use crate::pacing::beat;
use crate::result::{ScreenplayError, ScreenplayResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Write the `browser` log, one JSON entry per line
///
/// Chrome only records it when the session was created with
/// `goog:loggingPrefs = {"browser": "ALL"}`.
#[derive(Debug, Clone)]
pub struct SaveConsoleLog {
    path: PathBuf,
    filename: String,
    attach_options: Option<BTreeMap<String, String>>,
}

impl SaveConsoleLog {
    pub fn as_(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            filename: filename_of(&path),
            path,
            attach_options: None,
        }
    }

    #[must_use]
    pub fn and_attach_it(self) -> Self {
        self.and_attach_it_with(BTreeMap::new())
    }

    #[must_use]
    pub fn and_attach_it_with(mut self, options: BTreeMap<String, String>) -> Self {
        self.attach_options = Some(options);
        self
    }
}

fn render(entries: &[LogEntry]) -> ScreenplayResult<String> {
    let lines = entries
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ScreenplayError::delivery(format!("Could not serialize the console log: {e}")))?;
    Ok(lines.join("\n"))
}

impl Performable for SaveConsoleLog {
    fn describe(&self) -> String {
        format!("Save browser console log as {}", self.filename)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!(
            "{actor} saves their browser's console log as {}",
            self.filename
        ));
        let entries = BrowseTheWeb::browser_of(actor)?.logs("browser").map_err(|e| {
            delivery_error(format!("save the console log as {}", self.filename), &e)
        })?;
        std::fs::write(&self.path, render(&entries)?)?;
        if let Some(options) = &self.attach_options {
            actor.attempts_to(&[&AttachTheFile::new(&self.path, options.clone())])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::perry;
    use tempfile::TempDir;

    fn entry(level: &str, message: &str) -> LogEntry {
        LogEntry {
            level: level.to_string(),
            message: message.to_string(),
            timestamp: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_writes_one_line_per_entry() {
        let (actor, mock) = perry();
        mock.add_log("browser", entry("SEVERE", "Uncaught TypeError"));
        mock.add_log("browser", entry("INFO", "loaded"));
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("console.txt");
        let save = SaveConsoleLog::as_(&path).and_attach_it();
        assert_eq!(save.describe(), "Save browser console log as console.txt");
        actor.attempts_to(&[&save]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: LogEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, entry("SEVERE", "Uncaught TypeError"));
        assert_eq!(actor.attachments().len(), 1);
    }

    #[test]
    fn test_empty_log_writes_empty_file() {
        let (actor, _) = perry();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("console.txt");
        actor.attempts_to(&[&SaveConsoleLog::as_(&path)]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
