use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run. Sources that merely fail to open are not
/// errors; they are recorded in the archive report instead.
#[derive(Error, Debug)]
pub enum ZiplogError {
    #[error("file spec #{index} '{spec}' has no file name pattern")]
    InvalidSpec { index: usize, spec: String },

    #[error("file spec #{index} '{spec}' is not a valid pattern: {source}")]
    Pattern {
        index: usize,
        spec: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot list directory {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create archive {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read metadata of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write entry '{name}': {source}")]
    WriteEntry {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot finish archive {}: {source}", path.display())]
    Finish {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

pub type Result<T> = std::result::Result<T, ZiplogError>;
