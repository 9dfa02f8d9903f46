use crate::registry::Registry;
use anyhow::Result;
use prometheus::{opts, GaugeVec, IntGaugeVec, Registry as MetricsRegistry, TextEncoder};
use tracing::debug;

// Metrics struct to hold the Prometheus view of a timer registry
pub struct TimerMetrics {
    registry: MetricsRegistry,
    pub timer_elapsed: GaugeVec,  // Total elapsed seconds
    pub timer_samples: IntGaugeVec, // Number of samples
    pub timer_active: IntGaugeVec,  // 1 while running
    pub timer_sample_seconds: GaugeVec,
}

impl TimerMetrics {
    pub fn new() -> Result<Self> {
        let registry = MetricsRegistry::new();

        let timer_elapsed = GaugeVec::new(
            opts!("timeup_timer_elapsed_seconds", "Total elapsed time in seconds"),
            &["timer"],
        )?;

        let timer_samples = IntGaugeVec::new(
            opts!("timeup_timer_samples", "Number of timing samples"),
            &["timer"],
        )?;

        let timer_active = IntGaugeVec::new(
            opts!("timeup_timer_active", "Timer state (1 = running, 0 = stopped)"),
            &["timer"],
        )?;

        let timer_sample_seconds = GaugeVec::new(
            opts!(
                "timeup_timer_sample_seconds",
                "Sample statistics in seconds (min, max, mean, median, p95)"
            ),
            &["timer", "stat"],
        )?;

        // Register metrics with the registry
        registry.register(Box::new(timer_elapsed.clone()))?;
        registry.register(Box::new(timer_samples.clone()))?;
        registry.register(Box::new(timer_active.clone()))?;
        registry.register(Box::new(timer_sample_seconds.clone()))?;

        Ok(Self {
            registry,
            timer_elapsed,
            timer_samples,
            timer_active,
            timer_sample_seconds,
        })
    }

    /// Sets every gauge from the current state of `timers`
    pub fn observe(&self, timers: &Registry) -> Result<()> {
        for timer in timers.all_timers() {
            let name = timer.name().to_string();
            let stats = timer.stats();

            self.timer_elapsed
                .with_label_values(&[name.as_str()])
                .set(stats.elapsed);

            self.timer_samples
                .with_label_values(&[name.as_str()])
                .set(i64::try_from(stats.count)?);

            self.timer_active
                .with_label_values(&[name.as_str()])
                .set(i64::from(timer.active()));

            let samples = [
                ("min", stats.min),
                ("max", stats.max),
                ("mean", stats.mean),
                ("median", stats.median),
                ("p95", stats.p95),
            ];

            // absent statistics are left out instead of exported as zero
            for (stat, value) in samples {
                if let Some(value) = value {
                    self.timer_sample_seconds
                        .with_label_values(&[name.as_str(), stat])
                        .set(value);
                }
            }
        }

        Ok(())
    }

    /// Encodes the gathered metrics in the Prometheus text format
    pub fn encode(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut metrics_str = String::new();
        encoder.encode_utf8(&metric_families, &mut metrics_str)?;

        debug!("Metrics encoded successfully.");

        Ok(metrics_str)
    }
}
