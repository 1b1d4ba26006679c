use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use env_logger::Env;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// UTF-8 byte order mark, written at the start of text files by some spreadsheet exports
pub const BOM: char = '\u{feff}';

/// Create a BufReader that reads from a file denoted by its path
pub fn open_read(pb: &Path) -> Result<BufReader<File>> {
    let file = OpenOptions::new()
        .read(true)
        .open(pb)
        .with_context(|| format!("Failed to open file \"{}\" for reading", pb.display()))?;
    Ok(BufReader::new(file))
}

/// Create a BufWriter that writes to a file denoted by its path.
/// The file is created if needed and truncated otherwise.
pub fn open_write(pb: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(pb)
        .with_context(|| format!("Failed to open file \"{}\" for writing", pb.display()))?;
    Ok(BufWriter::new(file))
}

/// Read a whole UTF-8 file into memory
pub fn read_to_string(pb: &Path) -> Result<String> {
    let mut content = String::new();
    open_read(pb)?
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read \"{}\" as UTF-8 text", pb.display()))?;
    Ok(content)
}

pub fn now() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

pub fn now_str() -> String {
    let n = now() / 1000;
    let dt: DateTime<Utc> = SystemTime::now().into();
    format!("{} ({})", n, dt.format("%Y-%m-%d %H:%M:%S"))
}

/// Send log records to stderr, prefixed with the same timestamp the progress lines use.
/// Defaults to `info`, `RUST_LOG` overrides it.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(buf, "[{}] {} {}", now_str(), record.level(), record.args())
        })
        .try_init();
}
