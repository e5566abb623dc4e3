use std::path::PathBuf;

use clap::Parser;
use nesium_ines::ExtractOptions;
use tracing::Level;

/// Print the iNES header of a NES ROM and checksum its PRG/CHR banks
#[derive(Parser, Debug)]
#[command(name = "nes-info", version, about, long_about = None)]
pub struct Args {
    /// Write the PRG and CHR banks to `<name>.prg.bin` / `<name>.chr.bin`
    #[arg(short = 'd', long = "dump")]
    pub dump: bool,

    /// Skip the 512 byte trainer before PRG when the header flags one
    #[arg(short = 't', long)]
    pub skip_trainer: bool,

    /// Fail when the file is shorter than the header advertises
    #[arg(long)]
    pub strict: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: Level,

    /// Path to the NES ROM file
    #[arg(required = true)]
    pub rom: PathBuf,
}

impl Args {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            skip_trainer: self.skip_trainer,
            strict: self.strict,
        }
    }
}
