//! Data Doctor - Memory-mapped data file access
//!
//! Opens candidate files without copying them and validates that the bytes
//! decode as UTF-8 before any parsing happens.

use anyhow::{anyhow, Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Storage backend for a data file
enum DataStorage {
    /// Memory-mapped file (zero-copy)
    Mmap(Mmap),
    /// Empty files cannot be mapped
    Empty,
}

impl DataStorage {
    fn as_bytes(&self) -> &[u8] {
        match self {
            DataStorage::Mmap(m) => m.as_ref(),
            DataStorage::Empty => &[],
        }
    }
}

/// A data file opened for a single read-only pass
pub struct DataFile {
    storage: DataStorage,
    /// File path for display
    pub path: String,
    /// File size in bytes
    pub size: u64,
}

impl DataFile {
    /// Memory-map a file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref)
            .with_context(|| format!("Failed to open file: {}", path_ref.display()))?;

        let size = file.metadata()?.len();

        let storage = if size == 0 {
            DataStorage::Empty
        } else {
            // SAFETY: the map is read-only and dropped before the audit ends;
            // concurrent truncation by another process is not guarded against.
            let mmap = unsafe { Mmap::map(&file) }
                .with_context(|| format!("Failed to map file: {}", path_ref.display()))?;
            DataStorage::Mmap(mmap)
        };

        Ok(Self {
            storage,
            path: path_ref.display().to_string(),
            size,
        })
    }

    /// Raw file bytes
    pub fn bytes(&self) -> &[u8] {
        self.storage.as_bytes()
    }

    /// File contents as UTF-8 text
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(self.bytes()).map_err(|e| {
            anyhow!("Invalid UTF-8 at byte position {}", e.valid_up_to())
        })
    }

    /// Get formatted file size string
    pub fn size_human(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if self.size >= GB {
            format!("{:.2} GB", self.size as f64 / GB as f64)
        } else if self.size >= MB {
            format!("{:.2} MB", self.size as f64 / MB as f64)
        } else if self.size >= KB {
            format!("{:.2} KB", self.size as f64 / KB as f64)
        } else {
            format!("{} B", self.size)
        }
    }
}

/// Whether `c` ends a line: `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL, and the Unicode line and paragraph
/// separators.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines on every line boundary, treating `\r\n` as one.
///
/// A trailing boundary does not produce a final empty line, so `"a\n"` is
/// one line and `""` is none.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                end = j + 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
