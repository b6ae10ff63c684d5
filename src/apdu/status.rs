use super::types::*;

/// Non-success status words returned by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("ledger response - wrong parameter")]
    WrongParameter,
    #[error("ledger response - wrong length")]
    WrongLength,
    #[error("ledger response - invalid instruction")]
    InvalidInstruction,
    #[error("ledger response - wrong length for instruction")]
    WrongLengthForInstruction,
    #[error("ledger response - rejected")]
    Rejected,
    #[error("ledger response - parse error")]
    ParseError,
    #[error("ledger response - unknown error - {0:#x}")]
    Unknown(u16),
}

impl StatusError {
    /// The raw status word this error was mapped from.
    pub fn code(&self) -> u16 {
        match self {
            Self::WrongParameter => SW_WRONG_PARAM,
            Self::WrongLength => SW_WRONG_LENGTH,
            Self::InvalidInstruction => SW_INVALID_INS,
            Self::WrongLengthForInstruction => SW_WRONG_LENGTH_FOR_INS,
            Self::Rejected => SW_REJECT,
            Self::ParseError => SW_PARSE_ERROR,
            Self::Unknown(code) => *code,
        }
    }
}

/// Map a status word to its error, `None` meaning success.
pub fn status_error(word: u16) -> Option<StatusError> {
    match word {
        SW_OK => None,
        SW_WRONG_PARAM => Some(StatusError::WrongParameter),
        SW_WRONG_LENGTH => Some(StatusError::WrongLength),
        SW_INVALID_INS => Some(StatusError::InvalidInstruction),
        SW_WRONG_LENGTH_FOR_INS => Some(StatusError::WrongLengthForInstruction),
        SW_REJECT => Some(StatusError::Rejected),
        SW_PARSE_ERROR => Some(StatusError::ParseError),
        other => Some(StatusError::Unknown(other)),
    }
}
