use std::fmt::Arguments;
use std::fs::{OpenOptions, create_dir_all, metadata, remove_file};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use chrono::Local;
use once_cell::sync::Lazy;

/// Log files are dropped and restarted past this size (10 MB).
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

#[derive(PartialEq, PartialOrd, Clone, Debug)]
pub enum Level {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    fn label(&self) -> &'static str {
        match self {
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m", // Red
            Level::Warn => "\x1b[33m",  // Yellow
            Level::Info => "\x1b[36m",  // Cyan
            Level::Debug => "\x1b[90m", // Gray
        }
    }
}

const RESET_COLOR: &str = "\x1b[0m";

pub struct LoggerConfig {
    pub level: Level,
    pub use_colors: bool,
}

pub static GLOBAL_CONFIG: Lazy<Mutex<LoggerConfig>> = Lazy::new(|| {
    Mutex::new(LoggerConfig {
        level: Level::Info,
        use_colors: atty::is(atty::Stream::Stdout),
    })
});

static SESSION_SEPARATOR: Once = Once::new();

/// Set verbose/debug mode.
pub fn set_verbose(enabled: bool) {
    let mut config = GLOBAL_CONFIG.lock().unwrap();
    config.level = if enabled { Level::Debug } else { Level::Info };
}

/// Set the minimum log level.
pub fn set_level(level: Level) {
    let mut config = GLOBAL_CONFIG.lock().unwrap();
    config.level = level;
}

/// Core logging function; prefer the `vinfo!`/`vwarn!`/... macros.
pub fn log_message(level: Level, prefix: &str, args: Arguments) {
    let config = GLOBAL_CONFIG.lock().unwrap();

    if level > config.level {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let file_line = format!("[{}][{}][{}] {}", timestamp, level.label(), prefix, args);

    let console_line = if config.use_colors {
        format!(
            "{}●{} [{}][{}] {}",
            level.color(),
            RESET_COLOR,
            timestamp,
            prefix,
            args
        )
    } else {
        file_line.clone()
    };

    if let Err(e) = write_line_to_log(&file_line) {
        eprintln!("Failed to write log: {}", e);
    }

    // Console output only in debug mode, errors always.
    if config.level == Level::Debug || level == Level::Error {
        match level {
            Level::Error => eprintln!("{}", console_line),
            _ => println!("{}", console_line),
        }
    }
}

/// Flexible macro to allow formatted logging.
#[macro_export]
macro_rules! vlog {
    ($level:expr, $prefix:expr, $($arg:tt)*) => {
        $crate::log::log_message($level, $prefix, format_args!($($arg)*))
    };
}

/// Convenience macros
#[macro_export]
macro_rules! vinfo {
    ($prefix:expr, $($arg:tt)*) => { $crate::vlog!($crate::log::Level::Info, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! vwarn {
    ($prefix:expr, $($arg:tt)*) => { $crate::vlog!($crate::log::Level::Warn, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! verror {
    ($prefix:expr, $($arg:tt)*) => { $crate::vlog!($crate::log::Level::Error, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! vdebug {
    ($prefix:expr, $($arg:tt)*) => { $crate::vlog!($crate::log::Level::Debug, $prefix, $($arg)*) };
}

/// Get log file path.
pub fn log_path() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    path.push("vigil");
    if !path.exists() {
        let _ = create_dir_all(&path);
    }
    path.push("vigil.log");
    path
}

fn rotate_log_if_needed(path: &PathBuf) {
    if let Ok(meta) = metadata(path) {
        if meta.len() >= MAX_LOG_SIZE {
            let _ = remove_file(path);
        }
    }
}

/// Blank separator line, once per process, so runs are easy to tell apart.
fn ensure_session_newline_once(path: &PathBuf) {
    SESSION_SEPARATOR.call_once(|| {
        if let Ok(meta) = metadata(path) {
            if meta.len() > 0 {
                if let Ok(mut file) = OpenOptions::new().append(true).open(path) {
                    let _ = writeln!(file);
                }
            }
        }
    });
}

fn write_line_to_log(line: &str) -> std::io::Result<()> {
    let path = log_path();
    rotate_log_if_needed(&path);
    ensure_session_newline_once(&path);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    writeln!(file, "{}", line)?;
    Ok(())
}
