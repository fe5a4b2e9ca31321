use std::fs::File;

/// The TUI owns the terminal, so diagnostics go to this file instead of stderr
pub const LOG_FILE: &str = "space_invaders.log";

/// Installs the file logger when `RUST_LOG` is set.
///
/// Without `RUST_LOG` no logger is installed and no file is created; the
/// `log` macros throughout the crate then discard their output.
pub fn init() -> color_eyre::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create(LOG_FILE)?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("space_invaders=info"),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .format_timestamp_millis()
    .try_init()?;

    log::info!("logging to {LOG_FILE}");
    Ok(())
}
