use crate::csv_processor::reader::UTF8_BOM;
use crate::utils::{FillError, Result};
use csv::{Writer, WriterBuilder};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes a BOM-prefixed CSV next to `target` and renames it over the target
/// only in [`finish`](Self::finish); dropping the writer early leaves the
/// target untouched.
pub struct AtomicCsvWriter {
    target: PathBuf,
    writer: Option<Writer<NamedTempFile>>,
    rows_written: usize,
}

impl AtomicCsvWriter {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            writer: None,
            rows_written: 0,
        }
    }

    pub fn initialize(&mut self) -> Result<()> {
        let mut temp = NamedTempFile::new_in(parent_dir(&self.target))?;
        temp.write_all(UTF8_BOM)?;

        let writer = WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::CRLF)
            .from_writer(temp);
        self.writer = Some(writer);
        Ok(())
    }

    pub fn write_row<I, T>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let writer = self.writer.as_mut().ok_or_else(|| {
            FillError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "Writer not initialized",
            ))
        })?;

        let mut fields = row.into_iter().peekable();
        if fields.peek().is_none() {
            // `write_record` would emit `""` for an empty record.
            writer.flush()?;
            writer.get_ref().as_file().write_all(b"\r\n")?;
        } else {
            writer.write_record(fields)?;
        }
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_rows<'a, I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a csv::StringRecord>,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Flushes, syncs and atomically replaces the target file.
    pub fn finish(mut self) -> Result<usize> {
        let Some(writer) = self.writer.take() else {
            return Ok(0);
        };

        let temp = writer
            .into_inner()
            .map_err(|e| FillError::IoError(e.into_error()))?;

        if let Ok(metadata) = std::fs::metadata(&self.target) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.target).map_err(|e| FillError::IoError(e.error))?;

        tracing::debug!(
            path = %self.target.display(),
            rows_written = self.rows_written,
            "Replaced output file"
        );
        Ok(self.rows_written)
    }

}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
