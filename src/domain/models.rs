use std::path::{Path, PathBuf};

/// A file picked by the selector: its base name and the directory holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub name: String,
    pub directory: PathBuf,
}

impl FileSpec {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct ZiplogConfig {
    pub specs: String,
    pub max_age_minutes: u64,
    pub output_path: PathBuf,
    pub verbose: bool,
}

impl ZiplogConfig {
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a completed archive run.
///
/// `selected` counts every file handed to the archiver, including the ones
/// that could not be opened and ended up in `skipped`.
#[derive(Debug, Default)]
pub struct ArchiveReport {
    pub selected: usize,
    pub archived: usize,
    pub bytes_written: u64,
    pub skipped: Vec<SkippedFile>,
}

impl ArchiveReport {
    pub fn new(selected: usize) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    pub fn skip(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            path,
            reason: reason.into(),
        });
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}
