mod args;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use nesium_ines::{Report, inspect_file};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let rom_info = inspect_file(&args.rom, &args.extract_options())
        .with_context(|| format!("inspecting {}", args.rom.display()))?;
    let report = Report::new(&rom_info)?;

    // Printed before dumping so a failed dump never retracts the summary.
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{report}")?;
    stdout.flush()?;

    if args.dump {
        let paths = rom_info.extraction.persist(&args.rom)?;
        info!(
            prg = %paths.prg.display(),
            chr = %paths.chr.display(),
            "dumped PRG/CHR banks"
        );
    }

    Ok(())
}
