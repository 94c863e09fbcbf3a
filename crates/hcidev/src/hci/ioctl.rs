//! HCI control ioctls
//!
//! Both requests are declared with an `int` argument in `hci.h`, so the
//! size encoded in the request number does not match the record passed in.

use crate::hci::constants::{HCIGETDEVINFO, HCIGETDEVLIST};
use crate::hci::types::{DeviceInfo, DeviceListRequest};
use nix::ioctl_read_bad;

ioctl_read_bad!(hci_get_dev_list, HCIGETDEVLIST, DeviceListRequest);
ioctl_read_bad!(hci_get_dev_info, HCIGETDEVINFO, DeviceInfo);
