use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that stop generation. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no header given and VULKAN_SDK is not set")]
    MissingSdk,
    #[error("could not read header '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("struct declaration on line {line} is the last line of the header")]
    TruncatedStruct { line: usize },
    #[error("struct declaration on line {line} has no type name")]
    MissingStructName { line: usize },
    #[error("`{declaration}` not found in header")]
    EnumNotFound { declaration: &'static str },
    #[error("line {line} of the structure type enum has no constant name")]
    MissingConstantName { line: usize },
    #[error("structure type enum declared on line {line} is never terminated")]
    UnterminatedEnum { line: usize },
    #[error("failed to write generated initializers")]
    Write(#[from] io::Error),
}
