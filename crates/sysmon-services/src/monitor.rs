use std::io::Write;
use std::sync::Arc;
use sysmon_core::{render_report, MonitorConfig, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::collector::Collector;
use crate::platform::PlatformOps;

/// Sequential refresh loop: clear, collect, render, wait.
pub struct Monitor<C, W> {
    collector: C,
    platform: Arc<dyn PlatformOps>,
    out: W,
    config: MonitorConfig,
    clear_failing: bool,
}

impl<C: Collector, W: Write> Monitor<C, W> {
    pub fn new(collector: C, platform: Arc<dyn PlatformOps>, out: W, config: MonitorConfig) -> Self {
        Self {
            collector,
            platform,
            out,
            config,
            clear_failing: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Run until cancelled or the configured iteration count is reached.
    ///
    /// Returns the number of completed refreshes. Only a failure to write to
    /// the output ends the loop with an error.
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<u64> {
        info!(
            platform = self.platform.name(),
            interval_ms = self.config.refresh_interval.as_millis() as u64,
            max_iterations = ?self.config.max_iterations,
            "Starting monitor loop"
        );

        let mut completed = 0u64;
        loop {
            if cancel.is_cancelled() {
                break;
            }

            if !self.refresh(&cancel).await? {
                break;
            }
            completed += 1;

            if self
                .config
                .max_iterations
                .is_some_and(|max| completed >= max)
            {
                debug!(completed, "Iteration limit reached");
                break;
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.config.refresh_interval) => {}
            }
        }

        info!(completed, "Monitor loop stopped");
        Ok(completed)
    }

    /// One clear/collect/render pass. Returns `false` if cancelled mid-collection.
    async fn refresh(&mut self, cancel: &CancellationToken) -> Result<bool> {
        if self.config.clear_screen {
            self.clear_screen();
        }

        let snapshot = tokio::select! {
            _ = cancel.cancelled() => return Ok(false),
            snapshot = self.collector.collect() => snapshot,
        };

        self.out.write_all(render_report(&snapshot).as_bytes())?;
        self.out.flush()?;
        Ok(true)
    }

    fn clear_screen(&mut self) {
        // output written so far must land before the clear command runs
        if let Err(e) = self.out.flush() {
            debug!("Flush before clear failed: {}", e);
        }

        match self.platform.clear_screen() {
            Ok(()) => {
                if self.clear_failing {
                    debug!("Screen clearing recovered");
                    self.clear_failing = false;
                }
            }
            // cosmetic: never reaches the default log level
            Err(e) => {
                if !self.clear_failing {
                    debug!("Screen clear failed: {}", e);
                    self.clear_failing = true;
                } else {
                    trace!("Screen clear still failing: {}", e);
                }
            }
        }
    }
}
