use hidapi::HidDevice;
use super::{Channel, HidError};
use crate::apdu::types::PACKET_SIZE;

/// Report id prepended to every output report; Ledger devices use none.
const REPORT_ID: u8 = 0x00;

/// [`Channel`] over an opened hidapi device.
pub struct HidChannel {
    device: HidDevice,
}

impl HidChannel {
    pub fn new(device: HidDevice) -> Self {
        Self { device }
    }
}

impl Channel for HidChannel {
    fn write(&mut self, data: &[u8]) -> Result<usize, HidError> {
        let mut report = [0u8; PACKET_SIZE + 1];
        let len = data.len().min(PACKET_SIZE);
        report[0] = REPORT_ID;
        report[1..1 + len].copy_from_slice(&data[..len]);
        let written = self
            .device
            .write(&report[..1 + len])
            .map_err(|e| HidError::Write(e.to_string()))?;
        tracing::trace!(written, "HID tx");
        // hidapi counts the report id byte
        Ok(written.saturating_sub(1))
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, HidError> {
        let n = self
            .device
            .read(buf)
            .map_err(|e| HidError::Read(e.to_string()))?;
        tracing::trace!(n, "HID rx");
        Ok(n)
    }
}
