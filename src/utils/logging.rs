use std::path::{Path, PathBuf};

use ftlog::{
    LevelFilter, LoggerGuard,
    appender::{FileAppender, Period},
};

/// Initialises the global logger.
///
/// With `log_dir` set, records go to `<log_dir>/<file_name>.log`, rotated
/// daily, and the appender's own diagnostics to `<file_name>.err.log`.
/// Without it, records go to stderr. The returned guard must be kept alive
/// until the program exits so buffered records are flushed.
///
/// # Errors
///
/// - If the logs directory could not be created.
/// - If a global logger was already installed.
pub fn configure_logger(
    file_name: &str,
    log_dir: Option<&Path>,
    level: LevelFilter,
) -> Result<(LoggerGuard, Option<PathBuf>), String> {
    let Some(dir) = log_dir else {
        let guard = ftlog::Builder::new()
            .max_log_level(level)
            .try_init()
            .map_err(|e| e.to_string())?;
        return Ok((guard, None));
    };

    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    }
    let log_path = dir.join(format!("{file_name}.log"));
    let writer = FileAppender::builder()
        .path(&log_path)
        .rotate(Period::Day)
        .build();

    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        .max_log_level(level)
        .root(writer)
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, Some(log_path)))
}
