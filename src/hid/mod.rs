pub mod device;
pub mod discovery;

pub use device::HidChannel;
pub use discovery::{Candidate, DeviceFilter};

#[derive(Debug, thiserror::Error)]
pub enum HidError {
    #[error("HID backend unavailable: {0}")]
    Init(String),
    #[error("Failed to open HID device {path}: {reason}")]
    Open { path: String, reason: String },
    #[error("HID read error: {0}")]
    Read(String),
    #[error("HID write error: {0}")]
    Write(String),
    #[error("failed to parse device {field} {value:?}: {source}")]
    BadPath {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// A byte channel moving one fixed-size packet per call.
///
/// Both calls block until the device answers or the handle is closed.
pub trait Channel {
    fn write(&mut self, data: &[u8]) -> Result<usize, HidError>;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, HidError>;
}

impl<C: Channel + ?Sized> Channel for &mut C {
    fn write(&mut self, data: &[u8]) -> Result<usize, HidError> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, HidError> {
        (**self).read(buf)
    }
}
