//! Bluetooth HCI (Host Controller Interface) device enumeration
//!
//! This module provides functionality for discovering HCI devices and
//! reading their kernel info records.

pub mod constants;
pub mod enumerate;
mod ioctl;
pub mod socket;
pub mod types;


pub use enumerate::{enumerate, Enumerator};
pub use socket::{ControlSocket, HciControlSocket};
pub use types::{AddressParseError, BdAddr, DeviceInfo, DeviceListRequest, DeviceRequest, DeviceStats};
