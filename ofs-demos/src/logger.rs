//! Log output for the demos.
//!
//! Records go to stderr and, when the platform has a local data directory, are appended to
//! `demos.log` inside it.

use std::path::PathBuf;

use ofs_core::config::APP_DIR_NAME;

const LOG_FILE_NAME: &str = "demos.log";

/// Where the log file is written, if anywhere.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Installs the global logger. Must be called at most once per process.
pub fn init(level: log::LevelFilter) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    let mut file_error = None;
    if let Some(path) = log_file_path() {
        let opened = path
            .parent()
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|_| fern::log_file(&path));
        match opened {
            Ok(file) => dispatch = dispatch.chain(file),
            Err(e) => file_error = Some((path, e)),
        }
    }

    dispatch.apply()?;

    if let Some((path, e)) = file_error {
        log::warn!("not logging to {}: {e}", path.display());
    }
    Ok(())
}
