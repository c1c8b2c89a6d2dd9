//! Locating and loading `vulkan_core.h`.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Location of the core header relative to the root of a Vulkan SDK install.
pub const SDK_HEADER_PATH: &str = "Include/vulkan/vulkan_core.h";

/// A single line of header text along with its 0-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub index: usize,
    pub text: String,
}

impl RawLine {
    #[inline]
    pub fn contains(&self, pat: &str) -> bool {
        self.text.contains(pat)
    }

    /// The `n`th whitespace separated token of the line.
    #[inline]
    pub fn token(&self, n: usize) -> Option<&str> {
        self.text.split_whitespace().nth(n)
    }

    /// The 1-based line number, as an editor would show it.
    #[inline]
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Picks the header to scan. An explicit header path always wins over the SDK root.
pub fn resolve_header_path(header: Option<&Path>, sdk: Option<&Path>) -> Result<PathBuf> {
    match (header, sdk) {
        (Some(header), _) => Ok(header.to_path_buf()),
        (None, Some(sdk)) => Ok(sdk.join(SDK_HEADER_PATH)),
        (None, None) => Err(Error::MissingSdk),
    }
}

/// Reads the whole header into memory. The file is closed before the lines are returned.
pub fn load_header<P: AsRef<Path>>(path: P) -> Result<Vec<RawLine>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = parse_header(&text);
    info!(path = %path.display(), lines = lines.len(), "loaded header");
    Ok(lines)
}

pub fn parse_header(text: &str) -> Vec<RawLine> {
    text.lines()
        .enumerate()
        .map(|(index, text)| RawLine {
            index,
            text: text.to_owned(),
        })
        .collect()
}
