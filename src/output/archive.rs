//! Single-entry zip output writer.
//!
//! The output artifact is a fresh archive with one entry whose name matches
//! the snapshot source. Any pre-existing file at the output path is deleted
//! first; there are no merge or append semantics.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Writer for the filtered snapshot archive
///
/// **Public** - created by the filter command, one per run
pub struct ArchiveWriter {
    writer: ZipWriter<File>,
}

impl ArchiveWriter {
    /// Create the output archive and open its single entry.
    ///
    /// **Public** - main entry point for output writing
    ///
    /// # Arguments
    /// * `path` - output archive path (overwritten if present)
    /// * `entry_name` - name of the one entry to write
    ///
    /// # Errors
    /// * `OutputError::Io` - existing file cannot be removed or the new one created
    /// * `OutputError::Archive` - entry cannot be started
    pub fn create(path: &Path, entry_name: &str) -> Result<Self, OutputError> {
        if path.exists() {
            debug!("Removing existing output file: {}", path.display());
            std::fs::remove_file(path)?;
        }

        info!("Writing archive entry '{}' to: {}", entry_name, path.display());

        let mut writer = ZipWriter::new(File::create(path)?);
        writer.start_file(entry_name, SimpleFileOptions::default())?;
        Ok(Self { writer })
    }

    /// Write one filtered line, newline-terminated.
    ///
    /// Uses `\n` regardless of platform so outputs diff clean everywhere.
    pub fn write_line(&mut self, line: &str) -> Result<(), OutputError> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Close the entry and finalize the archive.
    ///
    /// Must be called for a complete archive; on early error paths the
    /// partially written file is abandoned.
    pub fn finish(self) -> Result<(), OutputError> {
        self.writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_single_entry(path: &Path) -> (String, String) {
        let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_index(0).unwrap();
        let name = entry.name().to_string();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        (name, content)
    }

    #[test]
    fn test_write_lines_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.zip");

        let mut writer = ArchiveWriter::create(&path, "snap.txt").unwrap();
        writer.write_line("a;b 1").unwrap();
        writer.write_line("c;d 2").unwrap();
        writer.finish().unwrap();

        let (name, content) = read_single_entry(&path);
        assert_eq!(name, "snap.txt");
        assert_eq!(content, "a;b 1\nc;d 2\n");
    }

    #[test]
    fn test_create_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.zip");
        std::fs::write(&path, "not a zip").unwrap();

        let mut writer = ArchiveWriter::create(&path, "snap.txt").unwrap();
        writer.write_line("x 1").unwrap();
        writer.finish().unwrap();

        let (_, content) = read_single_entry(&path);
        assert_eq!(content, "x 1\n");
    }

    #[test]
    fn test_empty_archive_is_still_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.zip");

        let writer = ArchiveWriter::create(&path, "snap.txt").unwrap();
        writer.finish().unwrap();

        let (name, content) = read_single_entry(&path);
        assert_eq!(name, "snap.txt");
        assert_eq!(content, "");
    }
}
