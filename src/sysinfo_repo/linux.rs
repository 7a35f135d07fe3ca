// Linux-specific helpers: kernel interface statistics under /sys/class/net.

use crate::models::InterfaceCounters;

/// Read cumulative rx/tx byte counters from /sys/class/net/<interface>/statistics (Linux).
/// Returns None when the statistics directory is unavailable; a missing or
/// unreadable counter file leaves that field None.
pub(super) fn read_sysfs_counters(interface_name: &str) -> Option<InterfaceCounters> {
    #[cfg(target_os = "linux")]
    {
        let dir = std::path::Path::new("/sys/class/net")
            .join(interface_name)
            .join("statistics");
        if !dir.is_dir() {
            return None;
        }
        let read = |file: &str| -> Option<u64> {
            std::fs::read_to_string(dir.join(file))
                .ok()?
                .trim()
                .parse()
                .ok()
        };
        return Some(InterfaceCounters {
            rx_bytes: read("rx_bytes"),
            tx_bytes: read("tx_bytes"),
        });
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = interface_name;
        None
    }
}
