use std::fmt;

use super::Flags6;

/// Nametable arrangement selected by header bit 6.0.
///
/// The four-screen bit is reported separately and does not change this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirroring {
    /// Bit clear.
    Horizontal,
    /// Bit set.
    Vertical,
}

impl Mirroring {
    pub(super) fn from_flags6(flags6: Flags6) -> Self {
        if flags6.contains(Flags6::VERTICAL_MIRRORING) {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

impl fmt::Display for Mirroring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
        })
    }
}
