use std::path::PathBuf;

use thiserror::Error;

use crate::header::NES_HEADER_LEN;

#[derive(Debug, Error)]
pub enum Error {
    /// Fewer than 16 bytes were available for the header.
    #[error("header expected {} bytes, got {actual}", NES_HEADER_LEN)]
    TooShort { actual: usize },

    /// Magic number ("NES<EOF>") is missing. Carries the bytes found instead.
    #[error("invalid iNES magic: {}", .0.escape_ascii())]
    InvalidMagic([u8; 4]),

    /// A bit accessor was asked for a position outside `0..=7`.
    ///
    /// This is a caller bug, not malformed input.
    #[error("bit position must be between 0 and 7, got {0}")]
    InvalidBitPosition(i32),

    /// A PRG/CHR region is shorter than the header advertises (strict mode only).
    #[error("{region} region expected {expected} bytes, got {actual}")]
    TruncatedRegion {
        region: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A dump artifact could not be created or written.
    #[error("failed to write {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading ROM data from an already opened stream failed.
    #[error("i/o error while reading ROM data")]
    Read(#[from] std::io::Error),

    /// The cartridge image could not be opened or read.
    #[error("i/o error while reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
