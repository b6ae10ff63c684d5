use std::ffi::CString;
use hidapi::{DeviceInfo, HidApi};
use super::{HidChannel, HidError};
use crate::config::{Config, LEDGER_INTERFACE};

/// An enumerated HID interface that may be a Ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub vendor_id: u16,
    pub product_id: u16,
    pub interface: i32,
    pub path: CString,
}

impl Candidate {
    pub fn from_info(info: &DeviceInfo) -> Self {
        Self {
            vendor_id: info.vendor_id(),
            product_id: info.product_id(),
            interface: info.interface_number(),
            path: info.path().to_owned(),
        }
    }

    fn path_parts(&self) -> Vec<&str> {
        self.path.to_str().map(|p| p.split(':').collect()).unwrap_or_default()
    }

    /// First component of the `bus:address:interface` path.
    pub fn bus(&self) -> &str {
        self.path_parts().first().copied().unwrap_or("")
    }

    /// Second component of the `bus:address:interface` path.
    pub fn address(&self) -> &str {
        self.path_parts().get(1).copied().unwrap_or("")
    }

    pub fn open(&self, api: &HidApi) -> Result<HidChannel, HidError> {
        let device = api.open_path(&self.path).map_err(|e| HidError::Open {
            path: self.path.to_string_lossy().into_owned(),
            reason: e.to_string(),
        })?;
        Ok(HidChannel::new(device))
    }
}

/// Which enumerated interfaces are worth talking to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFilter {
    pub vendor_ids: Vec<u16>,
    pub interface: i32,
    pub buses: Vec<u64>,
    pub addresses: Vec<u64>,
}

impl DeviceFilter {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            vendor_ids: cfg.vendor_ids.clone(),
            interface: LEDGER_INTERFACE,
            buses: cfg.bus.clone(),
            addresses: cfg.address.clone(),
        }
    }

    pub fn is_recognized(&self, vendor_id: u16) -> bool {
        self.vendor_ids.contains(&vendor_id)
    }

    /// Whether `candidate` passes the filter. Errors only when a bus or
    /// address filter is set and the device path cannot be parsed.
    pub fn accepts(&self, candidate: &Candidate) -> Result<bool, HidError> {
        if !self.is_recognized(candidate.vendor_id) {
            return Ok(false);
        }
        if candidate.interface != self.interface {
            tracing::debug!(
                vendor_id = format!("{:#06x}", candidate.vendor_id),
                interface = candidate.interface,
                "skipping non default interface"
            );
            return Ok(false);
        }
        let parts = candidate.path_parts();
        if parts.len() < 3 {
            tracing::debug!(
                vendor_id = format!("{:#06x}", candidate.vendor_id),
                path = ?candidate.path,
                "skipping invalid path"
            );
            return Ok(false);
        }
        if !matches_hex("bus", parts[0], &self.buses)? {
            tracing::debug!(bus = parts[0], "skipping bus");
            return Ok(false);
        }
        if !matches_hex("address", parts[1], &self.addresses)? {
            tracing::debug!(address = parts[1], "skipping address");
            return Ok(false);
        }
        Ok(true)
    }
}

fn matches_hex(field: &'static str, value: &str, wanted: &[u64]) -> Result<bool, HidError> {
    if wanted.is_empty() {
        return Ok(true);
    }
    let parsed = u64::from_str_radix(value, 16).map_err(|source| HidError::BadPath {
        field,
        value: value.to_string(),
        source,
    })?;
    Ok(wanted.contains(&parsed))
}

/// Enumerate every HID interface the backend currently knows about.
pub fn enumerate(api: &HidApi) -> Vec<Candidate> {
    api.device_list().map(Candidate::from_info).collect()
}
