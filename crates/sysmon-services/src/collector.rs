use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use sysinfo::{
    CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System,
    MINIMUM_CPU_UPDATE_INTERVAL,
};
use sysmon_core::{
    CpuMetrics, DiskUsage, LoadAverage, MemoryMetrics, MetricsSnapshot, NetworkInterface,
};
use tracing::{debug, instrument, trace};

use crate::platform::PlatformOps;

/// Source of metric snapshots for the refresh loop
#[async_trait]
pub trait Collector: Send {
    /// Always yields a snapshot; unavailable readings are left absent or zero.
    async fn collect(&mut self) -> MetricsSnapshot;
}

/// Collects host metrics through `sysinfo`.
///
/// Keeps its `sysinfo` handles between calls so CPU usage has a baseline and
/// disk/network lists are not reallocated on every refresh.
pub struct SystemCollector {
    system: System,
    disks: Disks,
    networks: Networks,
    platform: Arc<dyn PlatformOps>,
    sample_window: Duration,
}

impl SystemCollector {
    pub fn new(platform: Arc<dyn PlatformOps>, sample_window: Duration) -> Self {
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );

        Self {
            system,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            platform,
            sample_window,
        }
    }

    async fn cpu_metrics(&mut self) -> CpuMetrics {
        let usage_percent = if sysinfo::IS_SUPPORTED_SYSTEM {
            self.system.refresh_cpu_usage();
            tokio::time::sleep(self.sample_window.max(MINIMUM_CPU_UPDATE_INTERVAL)).await;
            self.system.refresh_cpu_usage();

            if self.system.cpus().is_empty() {
                debug!("CPU sampling reported no processors");
                None
            } else {
                usage_reading(self.system.global_cpu_usage())
            }
        } else {
            debug!("CPU sampling not supported on this host");
            None
        };

        let model = cpu_model(self.system.cpus().first().map(|cpu| cpu.brand()));

        let cores = match self.system.cpus().len() {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        };

        CpuMetrics {
            model,
            cores,
            usage_percent,
        }
    }

    fn memory_metrics(&mut self) -> MemoryMetrics {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            debug!("Memory query returned no data");
            return MemoryMetrics::default();
        }

        MemoryMetrics::from_counters(
            total,
            self.system.available_memory(),
            self.system.used_memory(),
        )
    }

    fn disk_metrics(&mut self) -> Vec<DiskUsage> {
        self.disks.refresh_list();
        self.disks
            .list()
            .iter()
            .filter_map(|disk| {
                disk_usage(
                    &disk.mount_point().display().to_string(),
                    disk.total_space(),
                    disk.available_space(),
                )
            })
            .collect()
    }

    fn network_metrics(&mut self) -> Vec<NetworkInterface> {
        self.networks.refresh_list();
        let interfaces = self
            .networks
            .list()
            .iter()
            .map(|(name, data)| NetworkInterface {
                name: name.clone(),
                bytes_sent: data.total_transmitted(),
                bytes_received: data.total_received(),
            })
            .collect();
        sorted_by_name(interfaces)
    }
}

#[async_trait]
impl Collector for SystemCollector {
    #[instrument(skip(self))]
    async fn collect(&mut self) -> MetricsSnapshot {
        let cpu = self.cpu_metrics().await;
        let memory = self.memory_metrics();
        let disks = self.disk_metrics();
        let network_interfaces = self.network_metrics();
        let cpu_temperature_celsius = self.platform.cpu_temperature();
        let load_average = load_average();

        trace!(
            platform = self.platform.name(),
            disks = disks.len(),
            interfaces = network_interfaces.len(),
            "Snapshot collected"
        );

        MetricsSnapshot {
            cpu,
            memory,
            disks,
            network_interfaces,
            cpu_temperature_celsius,
            load_average,
        }
    }
}

fn load_average() -> LoadAverage {
    let load = System::load_average();
    LoadAverage::new(load.one, load.five, load.fifteen)
}

/// Brand string with surrounding whitespace removed; empty when unknown.
fn cpu_model(brand: Option<&str>) -> String {
    brand.map(str::trim).unwrap_or_default().to_string()
}

fn usage_reading(raw: f32) -> Option<f64> {
    let usage = raw as f64;
    if !usage.is_finite() {
        debug!("CPU sampling produced a non-finite reading");
        return None;
    }
    Some(usage.clamp(0.0, 100.0))
}

/// Usage entry for one mount point; a zero-sized disk is skipped.
fn disk_usage(mount_path: &str, total: u64, available: u64) -> Option<DiskUsage> {
    if total == 0 {
        trace!(mount = mount_path, "Skipping disk with no reported size");
        return None;
    }
    Some(DiskUsage::from_space(mount_path, total, available))
}

fn sorted_by_name(mut interfaces: Vec<NetworkInterface>) -> Vec<NetworkInterface> {
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    interfaces
}
