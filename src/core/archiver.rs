use crate::domain::error::{Result, ZiplogError};
use crate::domain::models::{ArchiveReport, FileSpec};
use crate::infra::file_system::open_source;
use chrono::{Datelike, Local, Timelike};
use log::{debug, info, warn};
use std::fs::{File, Metadata};
use std::io::{self, Seek, Write};
use std::path::Path;
use std::time::SystemTime;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writes every selected file into a fresh zip archive at `output`.
///
/// Files that cannot be opened are skipped and recorded in the report. Any
/// other failure aborts the run, but the archive's central directory is still
/// written once so that the entries completed so far remain readable.
pub fn archive(output: &Path, files: &[FileSpec]) -> Result<ArchiveReport> {
    info!("Creating archive {}", output.display());
    let file = File::create(output).map_err(|source| ZiplogError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let mut zip = ZipWriter::new(file);
    let mut report = ArchiveReport::new(files.len());

    let written = write_entries(&mut zip, files, &mut report);
    let finished = zip.finish().map_err(|source| ZiplogError::Finish {
        path: output.to_path_buf(),
        source,
    });

    written?;
    finished?;

    info!(
        "Archived {} of {} selected files ({} bytes)",
        report.archived, report.selected, report.bytes_written
    );
    Ok(report)
}

fn write_entries<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    files: &[FileSpec],
    report: &mut ArchiveReport,
) -> Result<()> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for spec in files {
        let path = spec.path();
        let mut source = match open_source(&path) {
            Ok(source) => source,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                report.skip(path, e.to_string());
                continue;
            }
        };

        let metadata = source.metadata().map_err(|source| ZiplogError::Metadata {
            path: path.clone(),
            source,
        })?;
        debug!("Adding {} ({} bytes)", spec.name, metadata.len());

        let entry_options = entry_options(options, &metadata);
        zip.start_file(spec.name.as_str(), entry_options)
            .map_err(|e| write_error(&spec.name, io::Error::other(e)))?;

        let copied = io::copy(&mut source, zip).map_err(|e| write_error(&spec.name, e))?;

        report.archived += 1;
        report.bytes_written += copied;
    }

    Ok(())
}

fn write_error(name: &str, source: io::Error) -> ZiplogError {
    ZiplogError::WriteEntry {
        name: name.to_string(),
        source,
    }
}

fn entry_options(options: SimpleFileOptions, metadata: &Metadata) -> SimpleFileOptions {
    let options = match metadata.modified() {
        Ok(modified) => options.last_modified_time(zip_timestamp(modified)),
        Err(_) => options,
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    }
    #[cfg(not(unix))]
    {
        options
    }
}

/// Converts a modification time to the local calendar time zip entries store.
/// Times outside the DOS range (1980-2107) fall back to the zip default.
fn zip_timestamp(modified: SystemTime) -> DateTime {
    let local: chrono::DateTime<Local> = modified.into();
    let Ok(year) = u16::try_from(local.year()) else {
        return DateTime::default();
    };

    DateTime::from_date_and_time(
        year,
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
    )
    .unwrap_or_default()
}
