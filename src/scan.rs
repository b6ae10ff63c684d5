use std::fmt;
use std::io::Write;
use crate::error;
use crate::hid::{Candidate, Channel, DeviceFilter, HidError};
use crate::identity::{AddressEncoder, Identity, Namer};
use crate::ledger::Ledger;

const MISSING: &str = "-";

/// What one device reported. Failed fields hold `-,<error>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub ledger_id: String,
    pub app_version: String,
    pub authorized_path: String,
}

impl Report {
    /// `id;version;path;bus:address`
    pub fn line(&self, bus: &str, address: &str) -> String {
        format!("{self};{bus}:{address}")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.ledger_id, self.app_version, self.authorized_path)
    }
}

fn failed(e: impl fmt::Display) -> String {
    format!("{MISSING},{e}")
}

/// Query one device. Returns `None` when `wanted_ids` is non-empty and the
/// device's id is not in it or could not be read.
pub fn probe<C, E, N>(ledger: &mut Ledger<C>, identity: &Identity<E, N>, wanted_ids: &[String]) -> Option<Report>
where
    C: Channel,
    E: AddressEncoder,
    N: Namer,
{
    let ledger_id = match ledger.ledger_id(identity) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!("failed to get ledger id: {e}");
            if !wanted_ids.is_empty() {
                return None;
            }
            return Some(Report {
                ledger_id: failed(e),
                app_version: MISSING.to_string(),
                authorized_path: MISSING.to_string(),
            });
        }
    };

    if !wanted_ids.is_empty() && !wanted_ids.contains(&ledger_id) {
        tracing::debug!(ledger_id = %ledger_id, "skipping unwanted ledger id");
        return None;
    }

    let app_version = ledger.app_version().unwrap_or_else(|e| {
        tracing::debug!("failed to get app version: {e}");
        failed(e)
    });
    let authorized_path = ledger.authorized_path().unwrap_or_else(|e| {
        tracing::debug!("failed to get authorized path: {e}");
        failed(e)
    });

    Some(Report {
        ledger_id,
        app_version,
        authorized_path,
    })
}

/// Probe every accepted candidate in order, writing one line per reported
/// device to `out` as soon as it is known.
///
/// Devices that fail to open are skipped. A bus/address filter hitting an
/// unparsable device path stops the scan; lines already written stay.
/// Returns the number of lines written.
pub fn scan<I, O, C, E, N, W>(
    candidates: I,
    filter: &DeviceFilter,
    mut open: O,
    identity: &Identity<E, N>,
    wanted_ids: &[String],
    out: &mut W,
) -> error::Result<usize>
where
    I: IntoIterator<Item = Candidate>,
    O: FnMut(&Candidate) -> Result<C, HidError>,
    C: Channel,
    E: AddressEncoder,
    N: Namer,
    W: Write,
{
    let candidates: Vec<Candidate> = candidates.into_iter().collect();
    tracing::info!(count = candidates.len(), "scanning HID devices");

    let mut reported = 0usize;
    for candidate in &candidates {
        let accepted = filter.accepts(candidate).map_err(|e| {
            tracing::error!(
                vendor_id = format!("{:#06x}", candidate.vendor_id),
                path = ?candidate.path,
                "cannot apply device filter: {e}"
            );
            e
        })?;
        if !accepted {
            continue;
        }
        tracing::debug!(
            vendor_id = format!("{:#06x}", candidate.vendor_id),
            product_id = format!("{:#06x}", candidate.product_id),
            bus = candidate.bus(),
            address = candidate.address(),
            "probing device"
        );

        let channel = match open(candidate) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(
                    vendor_id = format!("{:#06x}", candidate.vendor_id),
                    bus = candidate.bus(),
                    address = candidate.address(),
                    "failed to open device: {e}"
                );
                continue;
            }
        };

        let mut ledger = Ledger::new(channel);
        if let Some(report) = probe(&mut ledger, identity, wanted_ids) {
            writeln!(out, "{}", report.line(candidate.bus(), candidate.address()))?;
            out.flush()?;
            reported += 1;
        }
    }
    tracing::info!(reported, "scan complete");
    Ok(reported)
}
