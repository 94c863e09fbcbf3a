//! HCI control constants
//!
//! Socket and ioctl constants from the Linux `bluetooth.h` and `hci.h`
//! headers used to enumerate HCI devices.

use nix::sys::ioctl::ioctl_num_type;

// Bluetooth socket constants
pub const AF_BLUETOOTH: i32 = 31;
pub const BTPROTO_HCI: i32 = 1;

/// Upper bound on the number of devices requested in one `HCIGETDEVLIST`
/// call. Adapters beyond this index are not reported.
pub const HCI_MAX_DEV: usize = 16;

// HCI ioctl family ('H')
pub const HCI_IOC_MAGIC: u8 = b'H';
pub const HCI_IOC_GETDEVLIST: u8 = 210;
pub const HCI_IOC_GETDEVINFO: u8 = 211;

// The kernel headers declare both requests with an `int` argument even
// though the real payloads are larger.
pub const HCI_IOC_ARG_SIZE: usize = std::mem::size_of::<libc::c_int>();

/// `_IOR('H', 210, int)`
pub const HCIGETDEVLIST: ioctl_num_type =
    nix::request_code_read!(HCI_IOC_MAGIC, HCI_IOC_GETDEVLIST, HCI_IOC_ARG_SIZE);
/// `_IOR('H', 211, int)`
pub const HCIGETDEVINFO: ioctl_num_type =
    nix::request_code_read!(HCI_IOC_MAGIC, HCI_IOC_GETDEVINFO, HCI_IOC_ARG_SIZE);

// Length of the fixed-size fields in `struct hci_dev_info`
pub const HCI_DEV_NAME_LEN: usize = 8;
pub const HCI_FEATURES_LEN: usize = 8;
pub const BD_ADDR_LEN: usize = 6;
