//! Example: Listing HCI devices
//!
//! This example demonstrates how to enumerate the Bluetooth adapters known
//! to the kernel. Run with `RUST_LOG=debug` to see each control request.

use hcidev::{DeviceInfo, Enumerator};

fn print_device(dev: &DeviceInfo) {
    let stats = dev.stats();
    println!("{}", dev.name().trim_end_matches('\0'));
    println!("  id:       {}", dev.dev_id());
    println!("  address:  {}", dev.address());
    println!("  type:     {:#04x}", dev.dev_type);
    println!("  flags:    {:#010x}", dev.flags);
    println!("  features: {}", dev.features_hex());
    println!("  ACL MTU:  {}:{}  SCO MTU: {}:{}", dev.acl_mtu, dev.acl_pkts, dev.sco_mtu, dev.sco_pkts);
    println!(
        "  RX bytes: {} acl:{} sco:{} events:{} errors:{}",
        stats.byte_rx, stats.acl_rx, stats.sco_rx, stats.evt_rx, stats.err_rx
    );
    println!(
        "  TX bytes: {} acl:{} sco:{} commands:{} errors:{}",
        stats.byte_tx, stats.acl_tx, stats.sco_tx, stats.cmd_tx, stats.err_tx
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    match Enumerator::new().enumerate() {
        Ok(devices) => {
            if devices.is_empty() {
                println!("No HCI devices found.");
            }
            for dev in &devices {
                print_device(dev);
            }
        }
        Err(err) => {
            for dev in err.devices() {
                print_device(dev);
            }
            eprintln!("Failed to enumerate HCI devices: {}: {}", err.error(), err.error().io_error());
            eprintln!("This might be because:");
            eprintln!("1. The kernel was built without Bluetooth support");
            eprintln!("2. An adapter was removed while it was being queried");
            return Err(err.into());
        }
    }

    Ok(())
}
