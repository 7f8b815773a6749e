//! Line-oriented file helpers.
//!
//! All helpers read or write the whole file in one pass; none of them keep a
//! handle open past the call.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Line, word, and character counts for one file.
///
/// `characters` counts Unicode scalar values, not bytes; `words` counts
/// whitespace-separated tokens across the entire file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Number of lines.
    pub lines: usize,
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Number of Unicode characters, line terminators included.
    pub characters: usize,
}

/// Count lines, words, and characters in a file.
///
/// The file is read into memory once.
///
/// # Examples
///
/// ```rust
/// # use praxis_util::io::{count_file_stats, write_lines};
/// # fn example() -> praxis_util::error::Result<()> {
/// # let dir = std::env::temp_dir();
/// # let path = dir.join("praxis-doc-stats.txt");
/// write_lines(&path, &["hello world", "second line"])?;
/// let stats = count_file_stats(&path)?;
/// assert_eq!(stats.lines, 2);
/// assert_eq!(stats.words, 4);
/// # std::fs::remove_file(&path).ok();
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn count_file_stats(path: impl AsRef<Path>) -> Result<FileStats> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileStats {
        lines: content.lines().count(),
        words: content.split_whitespace().count(),
        characters: content.chars().count(),
    })
}

/// Read all lines from a file, in order, with terminators stripped.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_owned).collect())
}

/// Write lines to a file, overwriting it.
///
/// Each entry is terminated with `\n`.
pub fn write_lines(path: impl AsRef<Path>, lines: &[impl AsRef<str>]) -> Result<()> {
    let path = path.as_ref();
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }

    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
