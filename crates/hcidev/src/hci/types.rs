//! Kernel HCI device records
//!
//! These mirror `struct hci_dev_req`, `struct hci_dev_list_req`,
//! `struct hci_dev_stats` and `struct hci_dev_info` from the Linux
//! `hci.h` header. The kernel copies them to and from user space byte for
//! byte, so field order and widths must not change.

use crate::hci::constants::*;
use static_assertions::{assert_eq_align, assert_eq_size};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A Bluetooth device address as stored by the kernel (`bdaddr_t`).
///
/// The bytes are kept least-significant first, the reverse of the usual
/// `xx:xx:xx:xx:xx:xx` notation.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BdAddr {
    pub bytes: [u8; BD_ADDR_LEN],
}

impl BdAddr {
    pub fn new(bytes: [u8; BD_ADDR_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.bytes[5],
            self.bytes[4],
            self.bytes[3],
            self.bytes[2],
            self.bytes[1],
            self.bytes[0]
        )
    }
}

/// Errors from parsing a textual Bluetooth address
#[derive(Error, Debug, PartialEq)]
pub enum AddressParseError {
    #[error("Expected 6 colon-separated octets, got {0}")]
    InvalidLength(usize),

    #[error("Invalid octet {0:?}")]
    InvalidOctet(String),

    #[error("Invalid hex in address")]
    HexError(#[from] hex::FromHexError),
}

impl FromStr for BdAddr {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let octets: Vec<&str> = s.split(':').collect();
        if octets.len() != BD_ADDR_LEN {
            return Err(AddressParseError::InvalidLength(octets.len()));
        }
        if let Some(bad) = octets.iter().find(|o| o.len() != 2) {
            return Err(AddressParseError::InvalidOctet(bad.to_string()));
        }

        let cleaned: String = octets.concat();
        let mut bytes = [0u8; BD_ADDR_LEN];
        hex::decode_to_slice(&cleaned, &mut bytes)?;
        bytes.reverse();

        Ok(Self { bytes })
    }
}

/// One slot of an `HCIGETDEVLIST` reply (`struct hci_dev_req`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceRequest {
    pub dev_id: u16,
    pub dev_opt: u32,
}

/// Argument of `HCIGETDEVLIST` (`struct hci_dev_list_req`).
///
/// `dev_num` goes in as the number of slots available and comes back as
/// the number of slots the kernel filled.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceListRequest {
    pub dev_num: u16,
    pub dev_req: [DeviceRequest; HCI_MAX_DEV],
}

impl DeviceListRequest {
    /// A zeroed request asking for up to `max` devices.
    ///
    /// `max` is clamped to the number of slots in the record.
    pub fn new(max: usize) -> Self {
        Self {
            dev_num: max.min(HCI_MAX_DEV) as u16,
            dev_req: [DeviceRequest::default(); HCI_MAX_DEV],
        }
    }

    /// The slots the kernel reported as filled.
    pub fn requests(&self) -> &[DeviceRequest] {
        let filled = (self.dev_num as usize).min(HCI_MAX_DEV);
        &self.dev_req[..filled]
    }
}

/// Traffic counters kept by the kernel for one device (`struct hci_dev_stats`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStats {
    pub err_rx: u32,
    pub err_tx: u32,
    pub cmd_tx: u32,
    pub evt_rx: u32,
    pub acl_tx: u32,
    pub acl_rx: u32,
    pub sco_tx: u32,
    pub sco_rx: u32,
    pub byte_rx: u32,
    pub byte_tx: u32,
}

/// Identity and capabilities of one HCI device (`struct hci_dev_info`).
///
/// Set `dev_id` and pass the record to `HCIGETDEVINFO`; the kernel
/// overwrites the rest. Flags, features and link bitmasks are exposed
/// as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub dev_id: u16,
    pub(crate) name: [u8; HCI_DEV_NAME_LEN],
    pub(crate) bdaddr: BdAddr,
    pub flags: u32,
    pub dev_type: u8,
    pub features: [u8; HCI_FEATURES_LEN],
    pub pkt_type: u32,
    pub link_policy: u32,
    pub link_mode: u32,
    pub acl_mtu: u16,
    pub acl_pkts: u16,
    pub sco_mtu: u16,
    pub sco_pkts: u16,
    pub stats: DeviceStats,
}

impl DeviceInfo {
    /// An empty record ready to be filled in for device `dev_id`.
    pub fn new(dev_id: u16) -> Self {
        Self {
            dev_id,
            ..Default::default()
        }
    }

    pub fn dev_id(&self) -> u16 {
        self.dev_id
    }

    /// The interface name (e.g. `hci0`) as text.
    ///
    /// All 8 bytes are kept, including trailing NULs. Bytes that are not
    /// valid UTF-8 are replaced with U+FFFD, so the string is only 8 bytes
    /// long for ASCII names; use [`raw_name`](Self::raw_name) for the exact
    /// bytes.
    pub fn name(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }

    pub fn raw_name(&self) -> &[u8; HCI_DEV_NAME_LEN] {
        &self.name
    }

    pub fn bdaddr(&self) -> BdAddr {
        self.bdaddr
    }

    /// The device address in `xx:xx:xx:xx:xx:xx` form.
    pub fn address(&self) -> String {
        self.bdaddr.to_string()
    }

    pub fn stats(&self) -> &DeviceStats {
        &self.stats
    }

    /// The LMP feature bytes as lowercase hex, in stored order.
    pub fn features_hex(&self) -> String {
        hex::encode(self.features)
    }

    #[cfg(test)]
    pub(crate) fn with_identity(
        dev_id: u16,
        name: [u8; HCI_DEV_NAME_LEN],
        bdaddr: [u8; BD_ADDR_LEN],
    ) -> Self {
        Self {
            dev_id,
            name,
            bdaddr: BdAddr::new(bdaddr),
            ..Default::default()
        }
    }
}

// Sizes of the kernel structures on Linux
assert_eq_size!(BdAddr, [u8; 6]);
assert_eq_size!(DeviceRequest, [u8; 8]);
assert_eq_size!(DeviceListRequest, [u8; 4 + 8 * HCI_MAX_DEV]);
assert_eq_size!(DeviceStats, [u8; 40]);
assert_eq_size!(DeviceInfo, [u8; 92]);
assert_eq_align!(DeviceInfo, u32);
