//! Per-OS-family operations: screen clearing and the CPU thermal sensor

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Arc;
use sysmon_core::MonitorConfig;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Failed to execute clear command: {0}")]
    ClearFailed(#[from] std::io::Error),
    #[error("{0} not found")]
    CommandNotFound(&'static str),
    #[error("Clear command exited with {status}: {stderr}")]
    ClearStatus { status: ExitStatus, stderr: String },
}

/// Operations whose availability depends on the host OS family.
///
/// One implementation is picked at startup by [`detect_platform`].
pub trait PlatformOps: Send + Sync {
    fn name(&self) -> &'static str;

    /// Wipe the terminal before the next render
    fn clear_screen(&self) -> Result<(), PlatformError>;

    /// CPU temperature in degrees Celsius, `None` when unsupported or unreadable
    fn cpu_temperature(&self) -> Option<f64>;
}

/// Linux: `clear` plus the sysfs thermal zone
pub struct LinuxPlatform {
    thermal_zone: PathBuf,
}

impl LinuxPlatform {
    pub fn new(thermal_zone: impl Into<PathBuf>) -> Self {
        Self {
            thermal_zone: thermal_zone.into(),
        }
    }
}

impl PlatformOps for LinuxPlatform {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn clear_screen(&self) -> Result<(), PlatformError> {
        run_clear_command("clear", &[])
    }

    fn cpu_temperature(&self) -> Option<f64> {
        read_thermal_zone(&self.thermal_zone)
    }
}

/// Other Unix-like systems: `clear`, no thermal sensor
pub struct UnixPlatform;

impl PlatformOps for UnixPlatform {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn clear_screen(&self) -> Result<(), PlatformError> {
        run_clear_command("clear", &[])
    }

    fn cpu_temperature(&self) -> Option<f64> {
        None
    }
}

pub struct WindowsPlatform;

impl PlatformOps for WindowsPlatform {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn clear_screen(&self) -> Result<(), PlatformError> {
        run_clear_command("cmd", &["/c", "cls"])
    }

    fn cpu_temperature(&self) -> Option<f64> {
        None
    }
}

/// Fallback for hosts with no known clear command
pub struct GenericPlatform;

impl PlatformOps for GenericPlatform {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn clear_screen(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    fn cpu_temperature(&self) -> Option<f64> {
        None
    }
}

/// Pick the platform implementation for the OS this binary was built for.
pub fn detect_platform(config: &MonitorConfig) -> Arc<dyn PlatformOps> {
    let platform: Arc<dyn PlatformOps> = if cfg!(target_os = "linux") {
        Arc::new(LinuxPlatform::new(config.thermal_zone_path.clone()))
    } else if cfg!(windows) {
        Arc::new(WindowsPlatform)
    } else if cfg!(unix) {
        Arc::new(UnixPlatform)
    } else {
        Arc::new(GenericPlatform)
    };
    debug!(platform = platform.name(), "Selected platform ops");
    platform
}

/// Run a clear command against the terminal.
///
/// Only stdout reaches the terminal; the child's stderr is captured into the
/// error so a failing clear leaves nothing on screen.
fn run_clear_command(program: &'static str, args: &[&str]) -> Result<(), PlatformError> {
    let output = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PlatformError::CommandNotFound(program));
        }
        Err(e) => return Err(PlatformError::ClearFailed(e)),
    };

    if output.status.success() {
        Ok(())
    } else {
        Err(PlatformError::ClearStatus {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Read a thermal zone file holding millidegrees Celsius.
pub fn read_thermal_zone(path: &Path) -> Option<f64> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            trace!(path = %path.display(), "Thermal zone unreadable: {}", e);
            return None;
        }
    };

    let celsius = parse_millidegrees(&raw);
    if celsius.is_none() {
        debug!(path = %path.display(), "Thermal zone held unparsable value: {:?}", raw.trim());
    }
    celsius
}

pub fn parse_millidegrees(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|millidegrees| millidegrees / 1000.0)
}
