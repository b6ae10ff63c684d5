use super::curve::Curve;
use super::path::unhard;
use crate::identity::{AddressEncoder, Identity, KeyType, Namer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("{what} response too short: need {needed} bytes, got {got}")]
    TooShort {
        what: &'static str,
        needed: usize,
        got: usize,
    },
    #[error("public key response carries no key material")]
    EmptyKey,
    #[error("unknown curve {0:#04x}")]
    UnknownCurve(u8),
}

fn require(what: &'static str, data: &[u8], needed: usize) -> Result<(), DecodeError> {
    if data.len() < needed {
        return Err(DecodeError::TooShort {
            what,
            needed,
            got: data.len(),
        });
    }
    Ok(())
}

/// Key material of a get-public-key response, with the leading format
/// byte removed.
pub fn decode_public_key(data: &[u8]) -> Result<&[u8], DecodeError> {
    require("public key", data, 1)?;
    let key_len = data[0] as usize;
    require("public key", data, 1 + key_len)?;
    match &data[1..1 + key_len] {
        [] => Err(DecodeError::EmptyKey),
        [_prefix, key @ ..] => Ok(key),
    }
}

/// Decode a get-public-key response straight into the ledger identity.
pub fn decode_ledger_id<E, N>(data: &[u8], identity: &Identity<E, N>) -> Result<String, DecodeError>
where
    E: AddressEncoder,
    N: Namer,
{
    let key = decode_public_key(data)?;
    Ok(identity.identify(KeyType::Ed25519, key))
}

/// `major.minor.patch` from bytes 1..4 (byte 0 is the app class).
pub fn decode_version(data: &[u8]) -> Result<String, DecodeError> {
    require("version", data, 4)?;
    Ok(format!("{}.{}.{}", data[1], data[2], data[3]))
}

/// `curve:c0/c1/...` with hardened bits cleared.
pub fn decode_authorized_path(data: &[u8]) -> Result<String, DecodeError> {
    require("authorized path", data, 2)?;
    let curve = Curve::from_byte(data[0]).ok_or(DecodeError::UnknownCurve(data[0]))?;
    let count = data[1] as usize;
    require("authorized path", data, 2 + 4 * count)?;

    let components: Vec<String> = data[2..2 + 4 * count]
        .chunks_exact(4)
        .map(|c| unhard(u32::from_be_bytes([c[0], c[1], c[2], c[3]])).to_string())
        .collect();
    Ok(format!("{curve}:{}", components.join("/")))
}
