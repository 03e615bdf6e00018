use crate::domain::error::{Result, ZiplogError};
use log::{debug, warn};
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// One non-directory entry found directly inside a listed directory.
#[derive(Debug, Clone)]
pub struct ListedFile {
    pub name: String,
    pub modified: SystemTime,
}

fn listing_error(dir: &Path, source: io::Error) -> ZiplogError {
    ZiplogError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    }
}

/// Lists the files directly inside `dir`, sorted by file name.
///
/// Sub-directories (and links to them) are left out, as are entries whose
/// names are not valid UTF-8. A directory that is missing or unreadable,
/// or an entry whose metadata cannot be read, fails the whole listing.
pub fn list_directory(dir: &Path) -> Result<Vec<ListedFile>> {
    debug!("Listing directory: {}", dir.display());

    let root = std::fs::metadata(dir).map_err(|e| listing_error(dir, e))?;
    if !root.is_dir() {
        return Err(listing_error(
            dir,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let mut result = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| listing_error(dir, e.into()))?;
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!(
                "Ignoring {}: file name is not valid UTF-8",
                entry.path().display()
            );
            continue;
        };

        let metadata = entry.metadata().map_err(|e| listing_error(dir, e.into()))?;
        let modified = metadata.modified().map_err(|e| listing_error(dir, e))?;

        result.push(ListedFile {
            name: name.to_string(),
            modified,
        });
    }

    debug!("Found {} files in {}", result.len(), dir.display());
    Ok(result)
}

/// Opens a selected file for reading.
pub fn open_source(path: &Path) -> io::Result<File> {
    debug!("Opening source file: {}", path.display());
    File::open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_directory_skips_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.log"), "b").unwrap();
        fs::write(temp_dir.path().join("a.log"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("nested.log")).unwrap();

        let files = list_directory(temp_dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["a.log", "b.log"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_directory_skips_links_to_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("real"),
            temp_dir.path().join("linked.log"),
        )
        .unwrap();
        fs::write(temp_dir.path().join("a.log"), "a").unwrap();

        let files = list_directory(temp_dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["a.log"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_list_directory_ignores_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(OsStr::from_bytes(b"bad\xff.log")), "x").unwrap();
        fs::write(temp_dir.path().join("good.log"), "g").unwrap();

        let files = list_directory(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "good.log");
        assert!(temp_dir.path().join(&files[0].name).exists());
    }

    #[test]
    fn test_list_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = list_directory(&missing).unwrap_err();
        assert!(matches!(err, ZiplogError::ListDirectory { .. }));
    }

    #[test]
    fn test_list_file_instead_of_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(list_directory(&file).is_err());
    }

    #[test]
    fn test_open_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(open_source(&temp_dir.path().join("gone.log")).is_err());
    }
}
