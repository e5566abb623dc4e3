//! File-level pipeline: header pass, then a separate pass over the regions.

use std::{
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use crate::{
    error::Error,
    extract::{ExtractOptions, Extraction, extract},
    header::{Header, NES_HEADER_LEN},
};

/// Everything learned about one cartridge image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomInfo {
    pub path: PathBuf,
    pub header: Header,
    pub extraction: Extraction,
}

/// Decode the header of the file at `path`, then reopen it at offset 16 and
/// extract the PRG/CHR regions.
///
/// Both file handles are closed before this returns.
pub fn inspect_file(path: &Path, options: &ExtractOptions) -> Result<RomInfo, Error> {
    let header = read_header(path)?;

    let extraction = {
        let mut file = open(path)?;
        file.seek(SeekFrom::Start(NES_HEADER_LEN as u64))
            .map_err(|source| io_error(path, source))?;
        extract(&header, BufReader::new(file), options).map_err(|err| attach_path(err, path))?
    };

    Ok(RomInfo {
        path: path.to_path_buf(),
        header,
        extraction,
    })
}

/// Same pipeline as [`inspect_file`] over an image already in memory.
/// `path` is only used as a label.
pub fn inspect_bytes(
    path: impl Into<PathBuf>,
    bytes: &[u8],
    options: &ExtractOptions,
) -> Result<RomInfo, Error> {
    let header = Header::parse(bytes)?;
    let extraction = extract(&header, &bytes[NES_HEADER_LEN..], options)?;

    Ok(RomInfo {
        path: path.into(),
        header,
        extraction,
    })
}

fn read_header(path: &Path) -> Result<Header, Error> {
    let file = open(path)?;
    let mut buf = Vec::with_capacity(NES_HEADER_LEN);
    file.take(NES_HEADER_LEN as u64)
        .read_to_end(&mut buf)
        .map_err(|source| io_error(path, source))?;
    Header::parse(&buf)
}

fn open(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn attach_path(err: Error, path: &Path) -> Error {
    match err {
        Error::Read(source) => io_error(path, source),
        other => other,
    }
}
