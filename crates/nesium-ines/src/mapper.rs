use std::fmt;

/// Board names for the mapper ids that have one, indexed by id.
pub const MAPPER_NAMES: [&str; 11] = [
    "NROM",
    "MMC1",
    "UxROM",
    "CNROM",
    "MMC3",
    "MMC5",
    "FFE F4xxx",
    "AxROM",
    "FFE F3xxx",
    "MMC2",
    "MMC4",
];

/// Mapper identified by an iNES header.
///
/// Any 8-bit id is valid. Ids past the end of [`MAPPER_NAMES`] are simply
/// reported as [`Mapper::Unnamed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mapper {
    Named { id: u8, name: &'static str },
    Unnamed(u8),
}

impl Mapper {
    pub fn from_id(id: u8) -> Self {
        match MAPPER_NAMES.get(id as usize) {
            Some(&name) => Self::Named { id, name },
            None => Self::Unnamed(id),
        }
    }

    pub fn id(&self) -> u8 {
        match *self {
            Self::Named { id, .. } | Self::Unnamed(id) => id,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Self::Named { name, .. } => Some(name),
            Self::Unnamed(_) => None,
        }
    }
}

impl From<u8> for Mapper {
    fn from(id: u8) -> Self {
        Self::from_id(id)
    }
}

impl fmt::Display for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { id, name } => write!(f, "{name} ({id})"),
            Self::Unnamed(id) => write!(f, "{id}"),
        }
    }
}
