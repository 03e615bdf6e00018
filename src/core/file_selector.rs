use crate::domain::error::{Result, ZiplogError};
use crate::domain::models::FileSpec;
use crate::infra::file_system::list_directory;
use glob::{MatchOptions, Pattern};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A single glob from the `;`-separated spec list: a literal directory and a
/// wildcard pattern for the file name inside it.
#[derive(Debug)]
pub struct GlobSpec {
    directory: PathBuf,
    pattern: Pattern,
}

impl GlobSpec {
    pub fn parse(index: usize, spec: &str) -> Result<Self> {
        let path = Path::new(spec);
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ZiplogError::InvalidSpec {
                index,
                spec: spec.to_string(),
            })?;

        let pattern = Pattern::new(name).map_err(|source| ZiplogError::Pattern {
            index,
            spec: spec.to_string(),
            source,
        })?;

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self { directory, pattern })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches_with(file_name, MATCH_OPTIONS)
    }
}

/// The `(now - max_age, now]` interval a file's modification time has to
/// fall into. A zero-minute window is empty.
#[derive(Debug, Clone, Copy)]
pub struct RecencyWindow {
    cutoff: Option<SystemTime>,
}

impl RecencyWindow {
    pub fn new(max_age_minutes: u64, now: SystemTime) -> Self {
        if max_age_minutes == 0 {
            return Self { cutoff: None };
        }

        let age = Duration::from_secs(max_age_minutes.saturating_mul(60));
        let cutoff = now.checked_sub(age).unwrap_or(UNIX_EPOCH);
        Self {
            cutoff: Some(cutoff),
        }
    }

    pub fn contains(&self, modified: SystemTime) -> bool {
        self.cutoff.is_some_and(|cutoff| modified > cutoff)
    }
}

/// Splits a spec list on `;`, dropping blank pieces.
pub fn split_specs(specs: &str) -> Vec<&str> {
    specs
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Selects every file matching one of the `;`-separated glob specs and
/// modified within the last `max_age_minutes`.
///
/// Results keep spec order, then file-name order within each directory. The
/// first invalid spec or unreadable directory aborts the whole selection.
pub fn select(specs: &str, max_age_minutes: u64) -> Result<Vec<FileSpec>> {
    let window = RecencyWindow::new(max_age_minutes, SystemTime::now());
    select_within(specs, &window)
}

pub fn select_within(specs: &str, window: &RecencyWindow) -> Result<Vec<FileSpec>> {
    let mut selected = Vec::new();

    for (index, spec) in split_specs(specs).into_iter().enumerate() {
        debug!("Processing file spec #{}: {}", index, spec);
        let glob = GlobSpec::parse(index, spec)?;

        for file in list_directory(glob.directory())? {
            if !glob.matches(&file.name) {
                continue;
            }
            if !window.contains(file.modified) {
                debug!("Skipping {}: too old", file.name);
                continue;
            }

            debug!("Selected {} in {}", file.name, glob.directory().display());
            selected.push(FileSpec::new(file.name, glob.directory()));
        }
    }

    info!("Selected {} files", selected.len());
    Ok(selected)
}
