use bitflags::bitflags;

bitflags! {
    /// Header byte 9: TV system plus seven reserved bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags9: u8 {
        const PAL      = 0b0000_0001;
        const RESERVED = 0b1111_1110;
    }
}
