//! iNES header decoding.
//!
//! The first 16 bytes of every `.nes` ROM are the *iNES header*. It stores how
//! much PRG/CHR data follows, which mapper board the cartridge uses and a few
//! wiring flags. [`Header::parse`] turns those bytes into a [`Header`] value
//! that keeps every raw field, reserved ones included, and exposes the derived
//! views (mapper, mirroring, region sizes) as methods.
//!
//! Layout (byte offsets):
//! - 0..4   magic `NES\x1A`
//! - 4      PRG ROM size in 16 KiB units
//! - 5      CHR ROM size in 8 KiB units (0 means the board uses CHR RAM)
//! - 6      flags 6
//! - 7      flags 7
//! - 8      PRG RAM size in 8 KiB units
//! - 9      flags 9
//! - 10..16 reserved, expected to be zero
//!
//! Reserved content is surfaced for diagnostics and never rejected.

use tracing::{debug, warn};

use crate::{bits::high_nibble, error::Error, mapper::Mapper};

mod flags6;
mod flags7;
mod flags9;
mod mirroring;
mod tv_system;

pub use flags6::Flags6;
pub use flags7::Flags7;
pub use flags9::Flags9;
pub use mirroring::Mirroring;
pub use tv_system::TvSystem;

pub const NES_MAGIC: &[u8; 4] = b"NES\x1A";

/// Size of the fixed iNES header in bytes.
pub const NES_HEADER_LEN: usize = 16;

/// Size of one PRG ROM bank.
pub const PRG_BANK_SIZE: usize = 16 * 1024;
/// Size of one CHR ROM bank.
pub const CHR_BANK_SIZE: usize = 8 * 1024;
/// Size of one PRG RAM bank.
pub const PRG_RAM_BANK_SIZE: usize = 8 * 1024;

/// Decoded iNES header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    pub magic: [u8; 4],
    /// PRG ROM size in 16 KiB banks.
    pub prg_rom_banks: u8,
    /// CHR ROM size in 8 KiB banks.
    pub chr_rom_banks: u8,
    pub flags6: Flags6,
    pub flags7: Flags7,
    /// PRG RAM size in 8 KiB banks. Most dumps leave this at 0.
    pub prg_ram_banks: u8,
    pub flags9: Flags9,
    /// Header bytes 10..16.
    pub reserved_tail: [u8; 6],
}

impl Header {
    /// Parse an iNES header from the start of `bytes`.
    ///
    /// Only the first [`NES_HEADER_LEN`] bytes are looked at, so a whole ROM
    /// image may be passed in.
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        let Some(bytes) = bytes.first_chunk::<NES_HEADER_LEN>() else {
            return Err(Error::TooShort {
                actual: bytes.len(),
            });
        };

        let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
        if &magic != NES_MAGIC {
            return Err(Error::InvalidMagic(magic));
        }

        let mut reserved_tail = [0u8; 6];
        reserved_tail.copy_from_slice(&bytes[10..16]);

        let header = Self {
            magic,
            prg_rom_banks: bytes[4],
            chr_rom_banks: bytes[5],
            flags6: Flags6::from_bits_retain(bytes[6]),
            flags7: Flags7::from_bits_retain(bytes[7]),
            prg_ram_banks: bytes[8],
            flags9: Flags9::from_bits_retain(bytes[9]),
            reserved_tail,
        };

        debug!(
            prg_banks = header.prg_rom_banks,
            chr_banks = header.chr_rom_banks,
            mapper = header.mapper_id(),
            "decoded iNES header"
        );
        if header.has_reserved_content() {
            warn!(
                flags7 = header.flags7_reserved(),
                flags9 = header.flags9_reserved(),
                tail = ?header.reserved_tail,
                "iNES header has non-zero reserved content"
            );
        }

        Ok(header)
    }

    /// Mapper id: low nibble from flags 6, high nibble from flags 7.
    pub fn mapper_id(&self) -> u8 {
        high_nibble(self.flags6.bits()) | (self.flags7.bits() & Flags7::MAPPER_HIGH_MASK.bits())
    }

    pub fn mapper(&self) -> Mapper {
        Mapper::from_id(self.mapper_id())
    }

    pub fn mirroring(&self) -> Mirroring {
        Mirroring::from_flags6(self.flags6)
    }

    /// Battery bit: PRG RAM at $6000-$7FFF survives power-off.
    pub fn battery_backed_ram(&self) -> bool {
        self.flags6.contains(Flags6::BATTERY)
    }

    /// Whether a 512 byte trainer sits between the header and PRG data.
    pub fn trainer_present(&self) -> bool {
        self.flags6.contains(Flags6::TRAINER)
    }

    pub fn four_screen(&self) -> bool {
        self.flags6.contains(Flags6::FOUR_SCREEN)
    }

    pub fn vs_system(&self) -> bool {
        self.flags7.contains(Flags7::VS_SYSTEM)
    }

    pub fn tv_system(&self) -> TvSystem {
        TvSystem::from_flags9(self.flags9)
    }

    /// Raw value of flags 7 bits 1..=3, in place.
    pub fn flags7_reserved(&self) -> u8 {
        self.flags7.bits() & Flags7::RESERVED.bits()
    }

    /// Raw value of flags 9 bits 1..=7, in place.
    pub fn flags9_reserved(&self) -> u8 {
        self.flags9.bits() & Flags9::RESERVED.bits()
    }

    pub fn has_reserved_content(&self) -> bool {
        self.flags7_reserved() != 0
            || self.flags9_reserved() != 0
            || self.reserved_tail.iter().any(|&b| b != 0)
    }

    /// PRG ROM size in bytes.
    pub fn prg_rom_size(&self) -> usize {
        self.prg_rom_banks as usize * PRG_BANK_SIZE
    }

    /// CHR ROM size in bytes. Zero for CHR RAM boards.
    pub fn chr_rom_size(&self) -> usize {
        self.chr_rom_banks as usize * CHR_BANK_SIZE
    }

    pub fn prg_ram_size(&self) -> usize {
        self.prg_ram_banks as usize * PRG_RAM_BANK_SIZE
    }
}
