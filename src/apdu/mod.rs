pub mod packet;
pub mod status;
pub mod transport;
pub mod types;

pub use status::{status_error, StatusError};
pub use transport::{exchange, Response};

use crate::hid::HidError;

#[derive(Debug, thiserror::Error)]
pub enum ApduError {
    #[error("APDU too long: {0} bytes, max {max} bytes", max = types::INIT_DATA_SIZE)]
    TooLong(usize),
    #[error("packet write error: {0}")]
    Write(#[source] HidError),
    #[error("incomplete packet write: wrote {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
    #[error("read packet seq {seq}: {source}")]
    Read {
        seq: u16,
        #[source]
        source: HidError,
    },
    #[error("packet seq {seq} incomplete: got {got} of {expected} bytes")]
    ShortRead { seq: u16, got: usize, expected: usize },
    #[error("unexpected tag in packet seq {seq}: got {got:#x}, expected {expected:#x}", expected = types::TAG_APDU)]
    BadTag { seq: u16, got: u8 },
    #[error("unexpected sequence: got {got}, expected {expected}")]
    BadSequence { got: u16, expected: u16 },
    #[error("invalid APDU length {0}")]
    InvalidLength(u16),
    #[error("APDU response too short to contain status word")]
    MissingStatusWord,
}
