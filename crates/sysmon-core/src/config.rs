use std::path::PathBuf;
use std::time::Duration;

/// Pause between the end of one refresh and the start of the next
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(2);

/// Window over which CPU utilisation is sampled
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Thermal zone exposed by Linux, in millidegrees Celsius
pub const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    pub refresh_interval: Duration,
    pub cpu_sample_window: Duration,
    pub thermal_zone_path: PathBuf,
    /// Stop after this many refreshes; `None` runs until terminated
    pub max_iterations: Option<u64>,
    pub clear_screen: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            refresh_interval: REFRESH_INTERVAL,
            cpu_sample_window: CPU_SAMPLE_WINDOW,
            thermal_zone_path: PathBuf::from(THERMAL_ZONE_PATH),
            max_iterations: None,
            clear_screen: true,
        }
    }
}

impl MonitorConfig {
    pub fn with_max_iterations(mut self, max_iterations: Option<u64>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.refresh_interval, Duration::from_secs(2));
        assert_eq!(config.cpu_sample_window, Duration::from_secs(1));
        assert_eq!(
            config.thermal_zone_path,
            PathBuf::from("/sys/class/thermal/thermal_zone0/temp")
        );
        assert_eq!(config.max_iterations, None);
        assert!(config.clear_screen);
    }
}
