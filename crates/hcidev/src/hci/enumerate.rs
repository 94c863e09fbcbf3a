//! HCI device enumeration
//!
//! Lists the HCI devices known to the kernel and reads the info record of
//! each one. Every call opens its own control socket, so enumerations on
//! different threads do not share any state.

use crate::error::EnumerationError;
use crate::hci::constants::HCI_MAX_DEV;
use crate::hci::socket::{ControlSocket, HciControlSocket};
use crate::hci::types::DeviceInfo;
use log::{debug, trace, warn};

/// Enumerates HCI devices
///
/// # Example
///
/// ```no_run
/// use hcidev::Enumerator;
///
/// let devices = Enumerator::new().max_devices(4).enumerate()?;
/// for dev in &devices {
///     println!("{} {}", dev.name().trim_end_matches('\0'), dev.address());
/// }
/// # Ok::<(), hcidev::EnumerationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerator {
    max_devices: usize,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self {
            max_devices: HCI_MAX_DEV,
        }
    }
}

impl Enumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of devices requested from the kernel.
    ///
    /// The value is clamped to `1..=HCI_MAX_DEV`; the kernel rejects a
    /// request for zero devices.
    pub fn max_devices(mut self, max: usize) -> Self {
        self.max_devices = max.clamp(1, HCI_MAX_DEV);
        self
    }

    /// The number of devices that will be requested.
    pub fn ceiling(&self) -> usize {
        self.max_devices
    }

    /// Open a control socket and enumerate the devices behind it.
    ///
    /// The socket is closed before this returns, whether or not the
    /// enumeration succeeded.
    pub fn enumerate(&self) -> Result<Vec<DeviceInfo>, EnumerationError> {
        let socket = HciControlSocket::open()?;
        self.enumerate_with(&socket)
    }

    /// Enumerate devices through an already open control socket.
    ///
    /// Devices are queried in ascending id order, one request at a time. A
    /// failed info request stops the enumeration; the devices read up to
    /// that point are returned inside the error.
    pub fn enumerate_with<S>(&self, socket: &S) -> Result<Vec<DeviceInfo>, EnumerationError>
    where
        S: ControlSocket + ?Sized,
    {
        let list = socket.device_list(self.max_devices)?;

        let mut count = list.dev_num as usize;
        if count > self.max_devices {
            warn!(
                "Kernel reported {} HCI devices but only {} were requested",
                count, self.max_devices
            );
            count = self.max_devices;
        }
        debug!("Found {} HCI device(s)", count);

        let mut devices = Vec::with_capacity(count);
        for dev_id in 0..count as u16 {
            match socket.device_info(dev_id) {
                Ok(info) => {
                    trace!("hci{}: name {:?}, address {}", dev_id, info.name(), info.address());
                    devices.push(info);
                }
                Err(error) => {
                    warn!("Stopping HCI enumeration: {}", error);
                    return Err(EnumerationError::new(devices, error));
                }
            }
        }

        Ok(devices)
    }
}

/// Enumerate up to [`HCI_MAX_DEV`] HCI devices.
pub fn enumerate() -> Result<Vec<DeviceInfo>, EnumerationError> {
    Enumerator::default().enumerate()
}
