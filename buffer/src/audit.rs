//! Audit log sinks.
//!
//! The buffer emits one line per completed operation. Sinks are
//! append-only and must serialize concurrent appends so lines are
//! never interleaved mid-line, and must flush before returning so a
//! crash immediately after an event does not lose its record.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Line-oriented audit sink shared by producer and consumer threads.
///
/// Implementations own their serialization: `append` may be called
/// concurrently from both threads and each call must write exactly one
/// complete line and flush it before returning.
pub trait AuditSink: Send + Sync {
    /// Appends one line (without trailing newline) to the log.
    fn append(&self, line: &str) -> io::Result<()>;
}

/// File-backed audit log.
///
/// Created truncating, so each run starts with a fresh log. Each
/// `append` writes the line plus a newline and flushes, keeping the
/// on-disk file current with completed operations.
pub struct FileAuditLog {
    writer: Mutex<BufWriter<File>>,
}

impl FileAuditLog {
    /// Opens (creating or truncating) the log file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(FileAuditLog {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Flushes any buffered output for the final time.
    pub fn close(&self) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap();
        writer.flush()
    }
}

impl AuditSink for FileAuditLog {
    fn append(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

/// In-memory capture sink, for tests and embedders.
#[derive(Default)]
pub struct MemoryAuditLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all lines appended so far, in append order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl AuditSink for MemoryAuditLog {
    fn append(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_log_writes_lines_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("audit.txt");

        let log = FileAuditLog::create(&path).unwrap();
        log.append("first").unwrap();
        log.append("second").unwrap();
        log.close().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_file_log_flushes_per_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("audit.txt");

        let log = FileAuditLog::create(&path).unwrap();
        log.append("durable").unwrap();

        // Visible on disk before close
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "durable\n");
    }

    #[test]
    fn test_file_log_truncates_on_create() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("audit.txt");
        fs::write(&path, "stale contents\n").unwrap();

        let log = FileAuditLog::create(&path).unwrap();
        log.append("fresh").unwrap();
        log.close().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "fresh\n");
    }

    #[test]
    fn test_memory_log_captures_in_order() {
        let log = MemoryAuditLog::new();
        log.append("a").unwrap();
        log.append("b").unwrap();
        assert_eq!(log.lines(), vec!["a".to_string(), "b".to_string()]);
    }
}
