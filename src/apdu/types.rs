pub const PACKET_SIZE: usize = 64;
pub const CHANNEL_ID: u16 = 0x0101;
pub const TAG_APDU: u8 = 0x05;

pub const INIT_HEADER_SIZE: usize = 7;
pub const CONT_HEADER_SIZE: usize = 5;
pub const INIT_DATA_SIZE: usize = PACKET_SIZE - INIT_HEADER_SIZE;
pub const CONT_DATA_SIZE: usize = PACKET_SIZE - CONT_HEADER_SIZE;

pub const STATUS_WORD_SIZE: usize = 2;

pub const SW_OK: u16 = 0x9000;
pub const SW_WRONG_PARAM: u16 = 0x6B00;
pub const SW_WRONG_LENGTH: u16 = 0x6C00;
pub const SW_INVALID_INS: u16 = 0x6D00;
pub const SW_WRONG_LENGTH_FOR_INS: u16 = 0x917E;
pub const SW_REJECT: u16 = 0x6985;
pub const SW_PARSE_ERROR: u16 = 0x9405;
