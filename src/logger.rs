use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const LOG_PATH_ENV: &str = "KANA_DRILL_LOG";
pub const DEFAULT_LOG_PATH: &str = "kana_drill.log";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

pub fn log_path() -> PathBuf {
    resolve_log_path(std::env::var_os(LOG_PATH_ENV))
}

fn resolve_log_path(value: Option<OsString>) -> PathBuf {
    value
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH))
}

pub fn init() {
    init_with_path(&log_path());
}

/// Opens the log file once; later calls keep the first file.
pub fn init_with_path(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

/// Writes `[YYYY-MM-DD HH:MM:SS] message` followed by a newline.
fn write_line(out: &mut impl Write, message: &str) -> io::Result<()> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(out, "[{}] {}", timestamp, message)
}

pub fn log(message: &str) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Some(file) = logger.as_mut() {
        let _ = write_line(file, message);
    }
}
