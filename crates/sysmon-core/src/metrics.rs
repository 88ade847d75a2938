#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuMetrics {
    pub model: String,
    pub cores: usize,
    /// `None` when the sampling window produced no usable reading
    pub usage_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryMetrics {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub used_percent: f64,
}

impl MemoryMetrics {
    /// Build from raw counters, clamping `used` to `total`.
    pub fn from_counters(total_bytes: u64, available_bytes: u64, used_bytes: u64) -> Self {
        let used_bytes = used_bytes.min(total_bytes);
        Self {
            total_bytes,
            available_bytes: available_bytes.min(total_bytes),
            used_bytes,
            used_percent: percent_of(used_bytes, total_bytes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskUsage {
    pub mount_path: String,
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub used_percent: f64,
}

impl DiskUsage {
    /// Build an entry from total and available space on a mount point.
    pub fn from_space(mount_path: impl Into<String>, total_bytes: u64, available_bytes: u64) -> Self {
        let used_bytes = total_bytes.saturating_sub(available_bytes);
        Self {
            mount_path: mount_path.into(),
            used_bytes,
            total_bytes,
            used_percent: percent_of(used_bytes, total_bytes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkInterface {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

impl NetworkInterface {
    pub fn is_active(&self) -> bool {
        self.bytes_sent > 0 || self.bytes_received > 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadAverage {
    pub one_minute: f64,
    pub five_minute: f64,
    pub fifteen_minute: f64,
}

impl LoadAverage {
    /// Negative or non-finite readings are reported as zero.
    pub fn new(one_minute: f64, five_minute: f64, fifteen_minute: f64) -> Self {
        Self {
            one_minute: non_negative(one_minute),
            five_minute: non_negative(five_minute),
            fifteen_minute: non_negative(fifteen_minute),
        }
    }
}

/// One point-in-time reading of every tracked subsystem
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub cpu: CpuMetrics,
    pub memory: MemoryMetrics,
    pub disks: Vec<DiskUsage>,
    pub network_interfaces: Vec<NetworkInterface>,
    pub cpu_temperature_celsius: Option<f64>,
    pub load_average: LoadAverage,
}

impl MetricsSnapshot {
    /// Interfaces that have sent or received at least one byte
    pub fn active_interfaces(&self) -> impl Iterator<Item = &NetworkInterface> {
        self.network_interfaces.iter().filter(|iface| iface.is_active())
    }
}

fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64) * 100.0
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
