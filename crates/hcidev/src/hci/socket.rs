//! HCI control socket
//!
//! A raw `BTPROTO_HCI` socket that is never bound to a device. The kernel
//! accepts the device-list and device-info ioctls on such a socket, which
//! makes it usable for enumerating adapters before any of them is opened.

use crate::error::{ControlRequest, HciError};
use crate::hci::constants::*;
use crate::hci::ioctl;
use crate::hci::types::{DeviceInfo, DeviceListRequest};
use log::debug;
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// The two control requests needed to enumerate HCI devices.
///
/// Both calls block until the kernel has answered and write the reply
/// into the record passed in.
pub trait ControlSocket {
    /// Issue `HCIGETDEVLIST`. `request.dev_num` must hold the number of
    /// slots on entry; it holds the number of devices on return.
    fn get_device_list(&self, request: &mut DeviceListRequest) -> io::Result<()>;

    /// Issue `HCIGETDEVINFO` for `info.dev_id`, overwriting `info`.
    fn get_device_info(&self, info: &mut DeviceInfo) -> io::Result<()>;

    /// Fetch the device list, with up to `max` entries.
    fn device_list(&self, max: usize) -> Result<DeviceListRequest, HciError> {
        let mut request = DeviceListRequest::new(max);
        self.get_device_list(&mut request)
            .map_err(|source| HciError::ControlTransferError {
                request: ControlRequest::GetDeviceList,
                source,
            })?;
        Ok(request)
    }

    /// Fetch the info record of device `dev_id`.
    fn device_info(&self, dev_id: u16) -> Result<DeviceInfo, HciError> {
        let mut info = DeviceInfo::new(dev_id);
        self.get_device_info(&mut info)
            .map_err(|source| HciError::ControlTransferError {
                request: ControlRequest::GetDeviceInfo { dev_id },
                source,
            })?;
        Ok(info)
    }
}

/// Represents an unbound raw HCI socket
///
/// The descriptor is closed when the value is dropped.
#[derive(Debug)]
pub struct HciControlSocket {
    fd: RawFd,
}

impl HciControlSocket {
    /// Opens a new raw HCI socket
    ///
    /// Fails with [`HciError::EndpointError`] when the kernel has no
    /// Bluetooth support or the process lacks the required privilege.
    pub fn open() -> Result<Self, HciError> {
        let fd = unsafe { libc::socket(AF_BLUETOOTH, libc::SOCK_RAW | libc::SOCK_CLOEXEC, BTPROTO_HCI) };

        if fd < 0 {
            return Err(HciError::EndpointError(io::Error::last_os_error()));
        }

        debug!("Opened HCI control socket (fd {})", fd);
        Ok(HciControlSocket { fd })
    }

    /// Gets the raw file descriptor for the socket
    pub fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl ControlSocket for HciControlSocket {
    fn get_device_list(&self, request: &mut DeviceListRequest) -> io::Result<()> {
        unsafe { ioctl::hci_get_dev_list(self.fd, request)? };
        Ok(())
    }

    fn get_device_info(&self, info: &mut DeviceInfo) -> io::Result<()> {
        unsafe { ioctl::hci_get_dev_info(self.fd, info)? };
        Ok(())
    }
}

impl AsRawFd for HciControlSocket {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for HciControlSocket {
    fn drop(&mut self) {
        debug!("Closing HCI control socket (fd {})", self.fd);
        unsafe {
            libc::close(self.fd);
        }
    }
}
