use super::{ApduError, StatusError, packet, status_error};
use crate::hid::Channel;

/// A reassembled response: status word plus the data preceding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub data: Vec<u8>,
}

impl Response {
    /// Data if the status word is success, the mapped error otherwise.
    pub fn into_result(self) -> Result<Vec<u8>, StatusError> {
        match status_error(self.status) {
            None => Ok(self.data),
            Some(err) => Err(err),
        }
    }
}

/// Send one APDU and wait for its complete response.
///
/// The write always precedes the read, and the response is fully
/// reassembled before this returns, so a channel never carries more
/// than one exchange at a time.
pub fn exchange<C: Channel + ?Sized>(channel: &mut C, apdu: &[u8]) -> Result<Response, ApduError> {
    packet::write_apdu(channel, apdu)?;
    let (status, data) = packet::read_apdu(channel)?;
    tracing::debug!(
        ins = format!("{:#04x}", apdu.get(1).copied().unwrap_or_default()),
        status = format!("{status:#06x}"),
        len = data.len(),
        "APDU exchange"
    );
    Ok(Response { status, data })
}
