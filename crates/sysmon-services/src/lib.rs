mod collector;
mod monitor;
mod platform;

pub use collector::{Collector, SystemCollector};
pub use monitor::Monitor;
pub use platform::{
    detect_platform, parse_millidegrees, read_thermal_zone, GenericPlatform, LinuxPlatform,
    PlatformError, PlatformOps, UnixPlatform, WindowsPlatform,
};

// Re-export core types so the binary only needs one import path
pub use sysmon_core::MonitorConfig;
