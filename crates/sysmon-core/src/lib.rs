pub mod config;
pub mod error;
pub mod format;
pub mod metrics;
pub mod report;

pub use config::{MonitorConfig, CPU_SAMPLE_WINDOW, REFRESH_INTERVAL, THERMAL_ZONE_PATH};
pub use error::{Result, SysmonError};
pub use format::{format_bytes, format_celsius, format_float, format_percent};
pub use metrics::{
    CpuMetrics, DiskUsage, LoadAverage, MemoryMetrics, MetricsSnapshot, NetworkInterface,
};
pub use report::{render_report, Report};
