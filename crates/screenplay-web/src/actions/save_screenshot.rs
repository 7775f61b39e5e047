//! Save a screenshot of the browser.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, AttachTheFile, Performable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Last component of `path`, used in log lines
pub(super) fn filename_of(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Write a PNG of the current page to a file
///
/// ```text
/// actor.attempts_to(&[&SaveScreenshot::as_("screenshot.png")])?;
/// actor.attempts_to(&[&SaveScreenshot::as_(path).and_attach_it()])?;
/// ```
#[derive(Debug, Clone)]
pub struct SaveScreenshot {
    path: PathBuf,
    filename: String,
    attach_options: Option<BTreeMap<String, String>>,
}

impl SaveScreenshot {
    /// Where to write the PNG; a bare name lands in the working directory
    pub fn as_(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            filename: filename_of(&path),
            path,
            attach_options: None,
        }
    }

    /// Also attach the file to the actor's reports
    #[must_use]
    pub fn and_attach_it(self) -> Self {
        self.and_attach_it_with(BTreeMap::new())
    }

    /// Attach with options passed through to report adapters
    #[must_use]
    pub fn and_attach_it_with(mut self, options: BTreeMap<String, String>) -> Self {
        self.attach_options = Some(options);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Performable for SaveScreenshot {
    fn describe(&self) -> String {
        format!("Save screenshot as {}", self.filename)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} saves a screenshot as {}", self.filename));
        let png = BrowseTheWeb::browser_of(actor)?
            .screenshot_png()
            .map_err(|e| delivery_error(format!("save a screenshot as {}", self.filename), &e))?;
        std::fs::write(&self.path, png)?;
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
    use crate::result::ScreenplayError;
    use tempfile::TempDir;

    #[test]
    fn test_describe_uses_filename() {
        let save = SaveScreenshot::as_("shots/login/screenshot.png");
        assert_eq!(save.describe(), "Save screenshot as screenshot.png");
    }

    #[test]
    fn test_writes_png_bytes() {
        let (actor, mock) = perry();
        mock.set_screenshot(vec![0x89, b'P', b'N', b'G', 1, 2, 3]);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.png");
        actor.attempts_to(&[&SaveScreenshot::as_(&path)]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0x89, b'P', b'N', b'G', 1, 2, 3]);
        assert!(actor.attachments().is_empty());
    }

    #[test]
    fn test_attaches_with_options() {
        let (actor, _) = perry();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.png");
        let mut options = BTreeMap::new();
        options.insert("attachment_type".to_string(), "PNG".to_string());
        actor
            .attempts_to(&[&SaveScreenshot::as_(&path).and_attach_it_with(options.clone())])
            .unwrap();
        let attachments = actor.attachments();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].path, path);
        assert_eq!(attachments[0].options, options);
    }

    #[test]
    fn test_unwritable_path() {
        let (actor, _) = perry();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("page.png");
        let err = actor.attempts_to(&[&SaveScreenshot::as_(path)]).unwrap_err();
        assert!(matches!(err, ScreenplayError::Io(_)));
    }
}
