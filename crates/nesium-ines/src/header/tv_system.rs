use std::fmt;

use super::Flags9;

/// Video timing hint embedded in header byte 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvSystem {
    /// NTSC (60Hz) timing.
    Ntsc,
    /// PAL (50Hz) timing.
    Pal,
}

impl TvSystem {
    pub(super) fn from_flags9(flags9: Flags9) -> Self {
        if flags9.contains(Flags9::PAL) {
            Self::Pal
        } else {
            Self::Ntsc
        }
    }
}

impl fmt::Display for TvSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ntsc => "NTSC",
            Self::Pal => "PAL",
        })
    }
}
