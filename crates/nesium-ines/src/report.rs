//! Human readable summary of a decoded cartridge.
//!
//! Each entry renders as its label plus `:` left-justified to 40 columns,
//! followed by the value.

use std::fmt;

use crate::{bits::bit_at, error::Error, inspect::RomInfo};

/// Column width of the `label:` part of a report line.
pub const LABEL_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: &'static str,
    pub value: String,
}

/// Ordered list of labelled fields describing one ROM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn new(info: &RomInfo) -> Result<Self, Error> {
        let header = &info.header;
        let flags6 = header.flags6.bits();
        let flags7 = header.flags7.bits();
        let prg = header.prg_rom_banks as usize;
        let chr = header.chr_rom_banks as usize;
        let ram = header.prg_ram_banks as usize;

        let mut entries = Vec::with_capacity(17);
        let mut push = |label: &'static str, value: String| entries.push(Entry { label, value });

        push("File", info.path.display().to_string());
        push("Magic", header.magic.escape_ascii().to_string());
        push("16KiB ROM Banks (PRG)", format!("{prg} ({} KiB)", prg * 16));
        push("8KiB VROM Banks (CHR)", format!("{chr} ({} KiB)", chr * 8));
        push("Mapper", header.mapper().to_string());
        push("Mirroring", header.mirroring().to_string());
        push(
            "Battery RAM at 0x6000-0x7FFF",
            bit_at(flags6, 1)?.to_string(),
        );
        push(
            "512 bytes trainer at 0x7000-0x71FF",
            bit_at(flags6, 2)?.to_string(),
        );
        push("Four screen VRAM layout", bit_at(flags6, 3)?.to_string());
        push("VS-System cartridge", bit_at(flags7, 0)?.to_string());
        push("Reserved (must be zero)", header.flags7_reserved().to_string());
        push(
            "8KiB RAM Banks",
            if ram == 0 {
                "0".to_owned()
            } else {
                format!("{ram} ({} KiB)", ram * 8)
            },
        );
        push("Video mode", header.tv_system().to_string());
        push("Reserved (must be zero)", header.flags9_reserved().to_string());
        push(
            "Reserved (must be zeroes)",
            header
                .reserved_tail
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect::<Vec<_>>()
                .join(" "),
        );
        push("PRG CRC32", format!("{:x}", info.extraction.prg.crc32));
        push("CHR CRC32", format!("{:x}", info.extraction.chr.crc32));

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Value of the first entry with `label`.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            let label = format!("{}:", entry.label);
            writeln!(f, "{label:<LABEL_WIDTH$}{}", entry.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        extract::ExtractOptions,
        header::{NES_HEADER_LEN, NES_MAGIC},
        inspect::inspect_bytes,
    };

    fn info(header: [u8; 12], body_len: usize) -> RomInfo {
        let mut bytes = NES_MAGIC.to_vec();
        bytes.extend_from_slice(&header);
        bytes.extend(std::iter::repeat_n(0xA5u8, body_len));
        assert_eq!(bytes.len(), NES_HEADER_LEN + body_len);
        inspect_bytes("game.nes", &bytes, &ExtractOptions::default()).unwrap()
    }

    #[test]
    fn labels_come_out_in_fixed_order() {
        let report = Report::new(&info([1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 24 * 1024)).unwrap();
        let labels: Vec<_> = report.entries().iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            [
                "File",
                "Magic",
                "16KiB ROM Banks (PRG)",
                "8KiB VROM Banks (CHR)",
                "Mapper",
                "Mirroring",
                "Battery RAM at 0x6000-0x7FFF",
                "512 bytes trainer at 0x7000-0x71FF",
                "Four screen VRAM layout",
                "VS-System cartridge",
                "Reserved (must be zero)",
                "8KiB RAM Banks",
                "Video mode",
                "Reserved (must be zero)",
                "Reserved (must be zeroes)",
                "PRG CRC32",
                "CHR CRC32",
            ]
        );
    }

    #[test]
    fn renders_nrom_values() {
        let report = Report::new(&info([1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 24 * 1024)).unwrap();

        assert_eq!(report.value("File"), Some("game.nes"));
        assert_eq!(report.value("Magic"), Some("NES\\x1a"));
        assert_eq!(report.value("16KiB ROM Banks (PRG)"), Some("1 (16 KiB)"));
        assert_eq!(report.value("8KiB VROM Banks (CHR)"), Some("1 (8 KiB)"));
        assert_eq!(report.value("Mapper"), Some("NROM (0)"));
        assert_eq!(report.value("Mirroring"), Some("Horizontal"));
        assert_eq!(report.value("Battery RAM at 0x6000-0x7FFF"), Some("false"));
        assert_eq!(report.value("8KiB RAM Banks"), Some("0"));
        assert_eq!(report.value("Video mode"), Some("NTSC"));
        assert_eq!(
            report.value("Reserved (must be zeroes)"),
            Some("00 00 00 00 00 00")
        );
    }

    #[test]
    fn renders_flags_and_unnamed_mapper() {
        // flags6: vertical, battery, trainer, four-screen, mapper low nibble F
        // flags7: VS, reserved bit 1, mapper high nibble F
        let report = Report::new(&info(
            [0, 0, 0xFF, 0xF3, 2, 0x03, 0, 0, 0, 0, 0, 0x10],
            0,
        ))
        .unwrap();

        assert_eq!(report.value("Mapper"), Some("255"));
        assert_eq!(report.value("Mirroring"), Some("Vertical"));
        assert_eq!(report.value("Battery RAM at 0x6000-0x7FFF"), Some("true"));
        assert_eq!(
            report.value("512 bytes trainer at 0x7000-0x71FF"),
            Some("true")
        );
        assert_eq!(report.value("Four screen VRAM layout"), Some("true"));
        assert_eq!(report.value("VS-System cartridge"), Some("true"));
        assert_eq!(report.value("8KiB RAM Banks"), Some("2 (16 KiB)"));
        assert_eq!(report.value("Video mode"), Some("PAL"));

        let reserved: Vec<_> = report
            .entries()
            .iter()
            .filter(|e| e.label.starts_with("Reserved"))
            .map(|e| e.value.as_str())
            .collect();
        assert_eq!(reserved, ["2", "2", "00 00 00 00 00 10"]);

        assert_eq!(report.value("PRG CRC32"), Some("0"));
        assert_eq!(report.value("CHR CRC32"), Some("0"));
    }

    #[test]
    fn lines_are_padded_to_label_width() {
        let report = Report::new(&info([0; 12], 0)).unwrap();
        let text = report.to_string();
        let first = text.lines().next().unwrap();

        assert_eq!(first, format!("{:<40}game.nes", "File:"));
        assert_eq!(text.lines().count(), report.entries().len());
        for line in text.lines() {
            assert!(line.len() >= LABEL_WIDTH);
        }
    }
}
