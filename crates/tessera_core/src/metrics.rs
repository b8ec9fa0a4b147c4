//! Tick metrics and logging setup.
//!
//! Drivers record every completed step here. Each step logs at `debug`, and
//! every [`LOG_EVERY`] ticks a summary line goes out at `info`.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Interval, in ticks, between periodic progress log lines.
pub const LOG_EVERY: u64 = 100;

/// Per-driver step statistics.
#[derive(Debug)]
pub struct Metrics {
    tick_count: AtomicU64,
    last_step_micros: AtomicU64,
    total_step_micros: AtomicU64,
    counters: Mutex<HashMap<String, u64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            last_step_micros: AtomicU64::new(0),
            total_step_micros: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed step and its duration.
    pub fn record_tick(&self, label: &'static str, duration: Duration) {
        let micros = duration.as_micros() as u64;
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.last_step_micros.store(micros, Ordering::Relaxed);
        self.total_step_micros.fetch_add(micros, Ordering::Relaxed);

        if tick.is_multiple_of(LOG_EVERY) {
            tracing::info!(
                automaton = label,
                tick = tick,
                step_us = micros,
                mean_step_us = self.mean_step_micros(),
                "Simulation tick"
            );
        } else {
            tracing::debug!(automaton = label, tick = tick, step_us = micros, "Step");
        }
    }

    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        *counters.entry(name.to_string()).or_insert(0) += 1;
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_step(&self) -> Duration {
        Duration::from_micros(self.last_step_micros.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn mean_step_micros(&self) -> u64 {
        let ticks = self.tick_count();
        if ticks == 0 {
            0
        } else {
            self.total_step_micros.load(Ordering::Relaxed) / ticks
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs the global `tracing` subscriber.
///
/// Output goes to stderr so the terminal UI and JSON reports on stdout stay
/// clean. The filter honours `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

/// Like [`init_logging`], but appends plain-text lines to `path`.
///
/// Used while the terminal UI owns the screen.
pub fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish(),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.mean_step_micros(), 0);
    }

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new();
        metrics.record_tick("line", Duration::from_micros(40));
        metrics.record_tick("line", Duration::from_micros(60));
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.last_step(), Duration::from_micros(60));
        assert_eq!(metrics.mean_step_micros(), 50);
    }

    #[derive(Clone, Default)]
    struct Capture(std::sync::Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged_steps(level: tracing::Level, ticks: usize) -> usize {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let metrics = Metrics::new();
            for _ in 0..ticks {
                metrics.record_tick("lattice", Duration::from_micros(10));
            }
        });
        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        output.lines().filter(|line| line.contains("Step")).count()
    }

    #[test]
    fn test_every_tick_logged_at_debug() {
        assert_eq!(logged_steps(tracing::Level::DEBUG, 3), 3);
        assert_eq!(logged_steps(tracing::Level::INFO, 3), 0);
    }

    #[test]
    fn test_counters() {
        let metrics = Metrics::new();
        metrics.increment_counter("reset");
        metrics.increment_counter("reset");
        assert_eq!(metrics.counter("reset"), 2);
        assert_eq!(metrics.counter("missing"), 0);
    }
}
