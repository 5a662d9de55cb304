pub const HEADER_SIZE: usize = 14;
pub const MAGIC: [u8; 4] = *b"qoif";
pub const END_MARKER: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01];

pub const OP_RGB: u8 = 0b1111_1110;
pub const OP_RGBA: u8 = 0b1111_1111;

pub const TAG_MASK: u8 = 0b1100_0000;
pub const DATA_MASK: u8 = 0b0011_1111;
pub const OP_INDEX: u8 = 0b0000_0000;
pub const OP_DIFF: u8 = 0b0100_0000;
pub const OP_LUMA: u8 = 0b1000_0000;
pub const OP_RUN: u8 = 0b1100_0000;

pub const CACHE_SIZE: usize = 64;
pub const MAX_RUN_LENGTH: u8 = 62;
