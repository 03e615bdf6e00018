use crate::core::archiver::archive;
use crate::core::file_selector::select;
use crate::domain::models::ZiplogConfig;
use crate::infra::logger::{print_banner, setup_logger};
use crate::infra::output::print_summary;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ziplog", version)]
#[command(about = "Zip files matching glob specs that changed in the last N minutes", long_about = None)]
pub struct Cli {
    /// File spec(s) to process, separated by semicolons
    #[arg(long, default_value = "*.log")]
    pub files: String,

    /// Only take files modified within this many minutes
    #[arg(long, default_value_t = 60)]
    pub minutes: u64,

    /// Output file (zip format)
    #[arg(long, default_value = "ziplog.zip")]
    pub output: PathBuf,

    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> ZiplogConfig {
        ZiplogConfig {
            specs: self.files,
            max_age_minutes: self.minutes,
            output_path: self.output,
            verbose: self.verbose,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();

    setup_logger(config.verbose)?;
    print_banner()?;

    debug!(
        "Parameters: files={}, minutes={}, output={}, verbose={}",
        config.specs,
        config.max_age_minutes,
        config.output_path.display(),
        config.verbose
    );

    zip_recent_files(&config)
}

fn zip_recent_files(config: &ZiplogConfig) -> anyhow::Result<()> {
    info!("Selecting files matching {}", config.specs);
    let selected = select(&config.specs, config.max_age_minutes)?;

    let report = archive(config.output_path(), &selected)?;

    print_summary(&report, config.output_path())?;
    Ok(())
}
