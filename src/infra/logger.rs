use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor, Stylize},
};
use env_logger::Builder;
use log::{Level, debug};
use std::io::{self, Write};

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "ziplog=debug" } else { "ziplog=info" }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Cyan,
        Level::Trace => Color::Magenta,
    }
}

/// Installs the stderr logger. `ZIPLOG_LOG_LEVEL` takes precedence over the
/// `--verbose` default.
pub fn setup_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or("ZIPLOG_LOG_LEVEL", default_filter(verbose));

    Builder::from_env(env)
        .format(|buf, record| {
            let tag = format!("[{}]", record.level()).with(level_color(record.level()));
            writeln!(
                buf,
                "{} [{}] {}: {}",
                tag,
                buf.timestamp(),
                record.target(),
                record.args()
            )
        })
        .format_timestamp_secs()
        .try_init()
}

pub fn print_banner() -> io::Result<()> {
    let mut stdout = io::stdout();

    stdout.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(
        stdout,
        "ziplog - Logfiles zipper (but not only) - v{}",
        env!("CARGO_PKG_VERSION")
    )?;
    stdout.execute(ResetColor)?;

    debug!("Debug logging enabled");
    Ok(())
}
