//! iNES cartridge inspection.
//!
//! Decode the 16-byte header of a `.nes` image with [`Header::parse`], pull the
//! PRG/CHR regions out with [`extract()`], and summarise both with [`Report`].
//! [`inspect_file`] runs the whole pipeline against a file on disk.

pub mod bits;
pub mod error;
pub mod extract;
pub mod header;
pub mod inspect;
pub mod mapper;
pub mod report;

pub use error::Error;
pub use extract::{DumpPaths, ExtractOptions, Extraction, Region, dump_paths, extract};
pub use header::{Header, Mirroring, NES_HEADER_LEN, TvSystem};
pub use inspect::{RomInfo, inspect_bytes, inspect_file};
pub use mapper::Mapper;
pub use report::Report;
