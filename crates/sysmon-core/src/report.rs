//! Text rendering of a snapshot into the dashboard layout

use std::fmt;

use crate::format::{format_bytes, format_celsius, format_float, format_percent};
use crate::metrics::MetricsSnapshot;

const UNKNOWN_MODEL: &str = "unknown";
const NOT_AVAILABLE: &str = "N/A";

/// Renders the full dashboard for one snapshot.
///
/// Sections appear in a fixed order separated by a blank line. The
/// temperature section is left out when no reading is present and idle
/// network interfaces are skipped.
pub struct Report<'a> {
    snapshot: &'a MetricsSnapshot,
}

impl<'a> Report<'a> {
    pub fn new(snapshot: &'a MetricsSnapshot) -> Self {
        Self { snapshot }
    }

    fn write_cpu(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = &self.snapshot.cpu;
        let model = if cpu.model.is_empty() {
            UNKNOWN_MODEL
        } else {
            cpu.model.as_str()
        };

        writeln!(f, "=== CPU ===")?;
        writeln!(f, "Model: {}", model)?;
        writeln!(f, "Cores: {}", cpu.cores)?;
        match cpu.usage_percent {
            Some(usage) => writeln!(f, "Usage: {}", format_percent(usage)),
            None => writeln!(f, "Usage: {}", NOT_AVAILABLE),
        }
    }

    fn write_memory(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let memory = &self.snapshot.memory;
        writeln!(f, "=== Memory ===")?;
        writeln!(f, "Total: {}", format_bytes(memory.total_bytes))?;
        writeln!(f, "Available: {}", format_bytes(memory.available_bytes))?;
        writeln!(
            f,
            "Used: {} ({})",
            format_bytes(memory.used_bytes),
            format_percent(memory.used_percent)
        )
    }

    fn write_disks(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Disk ===")?;
        for disk in &self.snapshot.disks {
            writeln!(
                f,
                "[{}] {}/{} ({})",
                disk.mount_path,
                format_bytes(disk.used_bytes),
                format_bytes(disk.total_bytes),
                format_percent(disk.used_percent)
            )?;
        }
        Ok(())
    }

    fn write_network(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Network ===")?;
        for iface in self.snapshot.active_interfaces() {
            writeln!(f, "{}:", iface.name)?;
            writeln!(f, "  Sent: {}", format_bytes(iface.bytes_sent))?;
            writeln!(f, "  Recv: {}", format_bytes(iface.bytes_received))?;
        }
        Ok(())
    }

    fn write_load(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let load = &self.snapshot.load_average;
        writeln!(f, "=== System Load ===")?;
        writeln!(
            f,
            "1m: {}, 5m: {}, 15m: {}",
            format_float(load.one_minute),
            format_float(load.five_minute),
            format_float(load.fifteen_minute)
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_cpu(f)?;
        writeln!(f)?;
        self.write_memory(f)?;
        writeln!(f)?;
        self.write_disks(f)?;
        writeln!(f)?;
        self.write_network(f)?;
        if let Some(celsius) = self.snapshot.cpu_temperature_celsius {
            writeln!(f)?;
            writeln!(f, "=== Temperature ===")?;
            writeln!(f, "CPU: {}", format_celsius(celsius))?;
        }
        writeln!(f)?;
        self.write_load(f)
    }
}

pub fn render_report(snapshot: &MetricsSnapshot) -> String {
    Report::new(snapshot).to_string()
}
