use crate::error::{HarvestError, Result};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// How an existing output file is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create, or empty an existing file
    Truncate,
    /// Create, or add to the end of an existing file
    Append,
}

/// Picks the write mode for `path`.
///
/// Without an explicit choice an existing file is refused rather than
/// overwritten, and a new file is created.
pub fn resolve_write_mode(path: &Path, requested: Option<WriteMode>) -> Result<WriteMode> {
    match requested {
        Some(mode) => Ok(mode),
        None if path.exists() => Err(HarvestError::OutputExists(path.display().to_string())),
        None => Ok(WriteMode::Truncate),
    }
}

/// Line-delimited output opened once per run.
///
/// Every line is flushed as it is written so an aborted run keeps
/// everything emitted before the failure.
pub struct LineStore {
    path: PathBuf,
    writer: BufWriter<File>,
    written: usize,
}

impl LineStore {
    pub fn open(path: impl AsRef<Path>, mode: WriteMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| HarvestError::io(parent, e))?;
            }
        }

        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let file = options.open(&path).map_err(|e| HarvestError::io(&path, e))?;
        ::log::info!("Opened {} ({:?})", path.display(), mode);

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// Serializes `record` as one JSON line
    pub fn append<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.append_line(&line)
    }

    /// Writes one raw line
    pub fn append_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")
            .and_then(|_| self.writer.flush())
            .map_err(|e| HarvestError::io(&self.path, e))?;
        self.written += 1;
        Ok(())
    }

    /// Lines written through this handle
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
