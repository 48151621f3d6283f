//! Snapshot source resolution.
//!
//! A snapshot is either a plain collapsed-stack text file or a zip archive
//! wrapping exactly one such file. Both resolve to the same thing: an entry
//! name (reused for the output archive) and a buffered line reader.

use crate::utils::config::ENTRY_PREVIEW_LIMIT;
use crate::utils::error::SourceError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Lines, Read};
use std::path::Path;
use zip::ZipArchive;

/// A resolved snapshot source
///
/// **Public** - produced by [`Snapshot::open`], consumed by the filter command
pub struct Snapshot {
    /// Entry name for the output archive (base file name or the sole
    /// archive entry's name)
    pub entry_name: String,

    reader: Box<dyn BufRead>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("entry_name", &self.entry_name)
            .field("reader", &"Box<dyn BufRead>")
            .finish()
    }
}

impl Snapshot {
    /// Open a snapshot at `path`.
    ///
    /// **Public** - main entry point for source resolution
    ///
    /// A literal `.zip` extension (case-sensitive, no content sniffing)
    /// selects archive handling; anything else is read as plain text.
    ///
    /// # Errors
    /// * `SourceError::Io` - file cannot be opened
    /// * `SourceError::Archive` - archive cannot be decoded
    /// * `SourceError::EntryCount` - archive entry count is not exactly 1
    /// * `SourceError::InvalidPath` - path has no base file name
    pub fn open(path: &Path) -> Result<Snapshot, SourceError> {
        if path.extension().is_some_and(|ext| ext == "zip") {
            Self::open_archive(path)
        } else {
            Self::open_plain(path)
        }
    }

    /// Iterate the snapshot's lines in source order.
    ///
    /// End of stream is the normal termination condition, not an error;
    /// per-line `Err` means an I/O or text-decoding failure.
    pub fn lines(self) -> Lines<Box<dyn BufRead>> {
        self.reader.lines()
    }

    fn open_plain(path: &Path) -> Result<Snapshot, SourceError> {
        let entry_name = path
            .file_name()
            .ok_or_else(|| SourceError::InvalidPath(path.display().to_string()))?
            .to_string_lossy()
            .into_owned();

        debug!("Reading plain snapshot: {}", path.display());

        let reader = BufReader::new(File::open(path)?);
        Ok(Snapshot {
            entry_name,
            reader: Box::new(reader),
        })
    }

    fn open_archive(path: &Path) -> Result<Snapshot, SourceError> {
        debug!("Reading snapshot archive: {}", path.display());

        let mut archive = ZipArchive::new(File::open(path)?)?;
        if archive.len() != 1 {
            let names: Vec<&str> = archive.file_names().take(ENTRY_PREVIEW_LIMIT).collect();
            return Err(SourceError::EntryCount {
                count: archive.len(),
                names: names.join(", "),
            });
        }

        // The entry borrows the archive, so decompress it up front rather
        // than holding the borrow across the whole scan.
        let mut entry = archive.by_index(0)?;
        let entry_name = entry.name().to_owned();
        let mut content = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut content)?;

        debug!(
            "Archive entry '{}': {} decompressed bytes",
            entry_name,
            content.len()
        );

        Ok(Snapshot {
            entry_name,
            reader: Box::new(Cursor::new(content)),
        })
    }
}
