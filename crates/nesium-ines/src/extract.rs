//! PRG/CHR bank extraction.
//!
//! The byte stream right after the 16-byte header holds the PRG ROM followed
//! by the CHR ROM. [`extract`] reads both regions using the sizes from a
//! decoded [`Header`] and checksums each one with CRC-32.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{error::Error, header::Header};

/// Size of the optional trainer block that may precede PRG ROM.
pub const TRAINER_SIZE: usize = 512;

/// Extension given to the PRG dump, replacing the source's last extension.
pub const PRG_DUMP_EXTENSION: &str = "prg.bin";
/// Extension given to the CHR dump, replacing the source's last extension.
pub const CHR_DUMP_EXTENSION: &str = "chr.bin";

/// Knobs for [`extract`]. `Default` reads regions straight after the header
/// and accepts short regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Skip the 512 byte trainer before PRG ROM when the header says one is present.
    pub skip_trainer: bool,
    /// Fail with [`Error::TruncatedRegion`] instead of keeping a short region.
    pub strict: bool,
}

/// One extracted ROM region and its checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub bytes: Vec<u8>,
    pub crc32: u32,
    /// Length the header advertised for this region.
    pub expected_len: usize,
}

impl Region {
    fn new(bytes: Vec<u8>, expected_len: usize) -> Self {
        let crc32 = crc32fast::hash(&bytes);
        Self {
            bytes,
            crc32,
            expected_len,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when the stream ended before the advertised length.
    pub fn is_short(&self) -> bool {
        self.bytes.len() < self.expected_len
    }
}

/// PRG and CHR regions pulled out of a cartridge image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub prg: Region,
    pub chr: Region,
}

/// Target paths for a dump of `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpPaths {
    pub prg: PathBuf,
    pub chr: PathBuf,
}

/// Paths the PRG/CHR dumps of `source` are written to: `game.nes` becomes
/// `game.prg.bin` and `game.chr.bin` in the same directory.
pub fn dump_paths(source: &Path) -> DumpPaths {
    DumpPaths {
        prg: source.with_extension(PRG_DUMP_EXTENSION),
        chr: source.with_extension(CHR_DUMP_EXTENSION),
    }
}

impl Extraction {
    /// Write both regions next to `source`, see [`dump_paths`].
    pub fn persist(&self, source: &Path) -> Result<DumpPaths, Error> {
        let paths = dump_paths(source);
        write_region(&paths.prg, &self.prg)?;
        write_region(&paths.chr, &self.chr)?;
        Ok(paths)
    }
}

fn write_region(path: &Path, region: &Region) -> Result<(), Error> {
    fs::write(path, &region.bytes).map_err(|source| Error::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = region.len(), "wrote region dump");
    Ok(())
}

/// Read the PRG then CHR regions described by `header` from `reader`.
///
/// `reader` must be positioned right after the 16-byte header. A stream that
/// ends early is not an error unless [`ExtractOptions::strict`] is set.
pub fn extract<R: Read>(
    header: &Header,
    mut reader: R,
    options: &ExtractOptions,
) -> Result<Extraction, Error> {
    if options.skip_trainer && header.trainer_present() {
        let skipped = read_up_to(&mut reader, TRAINER_SIZE)?.len();
        debug!(skipped, "skipped trainer");
    }

    let prg = read_region(&mut reader, "PRG", header.prg_rom_size(), options)?;
    let chr = read_region(&mut reader, "CHR", header.chr_rom_size(), options)?;

    debug!(
        prg_len = prg.len(),
        prg_crc = %format!("{:x}", prg.crc32),
        chr_len = chr.len(),
        chr_crc = %format!("{:x}", chr.crc32),
        "extracted regions"
    );

    Ok(Extraction { prg, chr })
}

fn read_region<R: Read>(
    reader: &mut R,
    name: &'static str,
    expected: usize,
    options: &ExtractOptions,
) -> Result<Region, Error> {
    let bytes = read_up_to(reader, expected)?;
    let region = Region::new(bytes, expected);

    if region.is_short() {
        if options.strict {
            return Err(Error::TruncatedRegion {
                region: name,
                expected,
                actual: region.len(),
            });
        }
        warn!(
            region = name,
            expected,
            actual = region.len(),
            "region shorter than header advertises; keeping what was read"
        );
    }

    Ok(region)
}

/// Read at most `len` bytes, stopping early at end of stream.
fn read_up_to<R: Read>(reader: &mut R, len: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len);
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    Ok(buf)
}
