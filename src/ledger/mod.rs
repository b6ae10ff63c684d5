//! The Tezos Ledger app's commands on top of the APDU transport.

pub mod commands;
pub mod curve;
pub mod path;
pub mod response;
pub mod session;

pub use curve::Curve;
pub use path::{hard, DerivationPath, PathTooDeep};
pub use response::DecodeError;
pub use session::Ledger;

use crate::apdu::{ApduError, StatusError};

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Transport(#[from] ApduError),
    #[error(transparent)]
    Device(#[from] StatusError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
