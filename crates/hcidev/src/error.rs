//! Error types for the hcidev library
//!
//! This module defines the error types used throughout the library.

use crate::hci::DeviceInfo;
use std::fmt;
use thiserror::Error;

/// The HCI control request that was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    GetDeviceList,
    GetDeviceInfo { dev_id: u16 },
}

impl fmt::Display for ControlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlRequest::GetDeviceList => write!(f, "HCIGETDEVLIST"),
            ControlRequest::GetDeviceInfo { dev_id } => write!(f, "HCIGETDEVINFO(hci{})", dev_id),
        }
    }
}

/// Errors that can occur when querying the HCI control socket
#[derive(Error, Debug)]
pub enum HciError {
    #[error("Failed to open HCI control socket")]
    EndpointError(#[source] std::io::Error),

    #[error("{request} failed")]
    ControlTransferError {
        request: ControlRequest,
        #[source]
        source: std::io::Error,
    },
}

impl HciError {
    /// The OS error behind this failure.
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            HciError::EndpointError(err) => err,
            HciError::ControlTransferError { source, .. } => source,
        }
    }
}

/// A failed enumeration, together with any devices read before the failure.
///
/// `devices` is empty unless an `HCIGETDEVINFO` request failed part way
/// through the device list.
#[derive(Error, Debug)]
#[error("HCI device enumeration failed after {} device(s)", .devices.len())]
pub struct EnumerationError {
    pub devices: Vec<DeviceInfo>,
    #[source]
    pub error: HciError,
}

impl EnumerationError {
    pub fn new(devices: Vec<DeviceInfo>, error: HciError) -> Self {
        Self { devices, error }
    }

    pub fn devices(&self) -> &[DeviceInfo] {
        &self.devices
    }

    pub fn error(&self) -> &HciError {
        &self.error
    }

    /// Whether some devices were read before the failure.
    pub fn is_partial(&self) -> bool {
        !self.devices.is_empty()
    }

    pub fn into_parts(self) -> (Vec<DeviceInfo>, HciError) {
        (self.devices, self.error)
    }
}

impl From<HciError> for EnumerationError {
    fn from(error: HciError) -> Self {
        Self::new(Vec::new(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_endpoint_error_has_no_devices() {
        let os_error = io::Error::from_raw_os_error(libc::EAFNOSUPPORT);
        let err = EnumerationError::from(HciError::EndpointError(os_error));

        assert!(err.devices().is_empty());
        assert!(!err.is_partial());
        assert_eq!(err.error().io_error().raw_os_error(), Some(libc::EAFNOSUPPORT));
        assert!(matches!(err.error(), HciError::EndpointError(_)));
    }

    #[test]
    fn test_os_error_is_reported_once() {
        let err = EnumerationError::from(HciError::ControlTransferError {
            request: ControlRequest::GetDeviceList,
            source: io::Error::from_raw_os_error(libc::EPERM),
        });
        let os_message = io::Error::from_raw_os_error(libc::EPERM).to_string();

        let mut chain = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }

        assert_eq!(chain.len(), 3);
        assert_eq!(chain[1], "HCIGETDEVLIST failed");
        assert_eq!(chain.iter().filter(|m| m.contains(&os_message)).count(), 1);
    }
}
