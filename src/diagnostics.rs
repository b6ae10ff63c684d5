use hidapi::HidApi;
use crate::hid::HidError;

/// Bring up the HID backend, explaining the usual fixes when it fails.
pub fn check() -> anyhow::Result<HidApi> {
    match HidApi::new().map_err(|e| HidError::Init(e.to_string())) {
        Ok(api) => Ok(api),
        Err(e) => {
            eprintln!(
                "ERROR: {e}\n  \
                 → install the Ledger udev rules: https://github.com/LedgerHQ/udev-rules\n  \
                 → and add yourself to the 'plugdev' group: sudo usermod -aG plugdev $USER"
            );
            anyhow::bail!("HID preflight check failed");
        }
    }
}
