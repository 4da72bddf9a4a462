use ferrous_pdns_application::ports::OutputSink;
use ferrous_pdns_domain::{DnsSchema, DomainError};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

use super::JSON_FORMAT;

/// Appends rows as JSON lines to `<directory>/<prefix><epoch>.jsonl`.
pub struct JsonFileSink {
    directory: PathBuf,
    file_prefix: String,
    writer: Mutex<Option<BufWriter<File>>>,
    path: Mutex<Option<PathBuf>>,
}

impl JsonFileSink {
    pub fn new(directory: impl AsRef<Path>, file_prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            file_prefix: file_prefix.into(),
            writer: Mutex::new(None),
            path: Mutex::new(None),
        }
    }

    /// Path of the file opened by the last setup, if any.
    pub fn path(&self) -> Option<PathBuf> {
        self.path.lock().ok().and_then(|path| path.clone())
    }

    fn lock_writer(&self) -> Result<std::sync::MutexGuard<'_, Option<BufWriter<File>>>, DomainError> {
        self.writer
            .lock()
            .map_err(|_| DomainError::sink(JSON_FORMAT, "writer lock poisoned"))
    }
}

impl OutputSink for JsonFileSink {
    fn setup(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.directory).map_err(|e| DomainError::sink(JSON_FORMAT, e))?;

        let epoch = chrono::Utc::now().timestamp();
        let path = self
            .directory
            .join(format!("{}{}.jsonl", self.file_prefix, epoch));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| DomainError::sink(JSON_FORMAT, format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), "JSON output opened");
        *self.lock_writer()? = Some(BufWriter::new(file));
        if let Ok(mut current) = self.path.lock() {
            *current = Some(path);
        }
        Ok(())
    }

    fn emit(&self, row: &DnsSchema) -> Result<(), DomainError> {
        let mut guard = self.lock_writer()?;
        let writer = guard
            .as_mut()
            .ok_or_else(|| DomainError::sink(JSON_FORMAT, "emit called before setup"))?;

        serde_json::to_writer(&mut *writer, row).map_err(|e| DomainError::sink(JSON_FORMAT, e))?;
        writer
            .write_all(b"\n")
            .map_err(|e| DomainError::sink(JSON_FORMAT, e))
    }

    fn teardown(&self) -> Result<(), DomainError> {
        let writer = self.lock_writer()?.take();
        if let Some(mut writer) = writer {
            writer.flush().map_err(|e| DomainError::sink(JSON_FORMAT, e))?;
        }
        Ok(())
    }
}
