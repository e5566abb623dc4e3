use bitflags::bitflags;

bitflags! {
    /// Header byte 7: VS-System bit, reserved bits and the mapper high nibble.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags7: u8 {
        const VS_SYSTEM        = 0b0000_0001;
        const RESERVED         = 0b0000_1110;
        const MAPPER_HIGH_MASK = 0b1111_0000;
    }
}
