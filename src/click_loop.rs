//! Click-loop lifecycle
//!
//! A run captures the pointer position once, then moves back to it and
//! clicks until its running flag is cleared. The flag is checked before
//! every iteration, so a stop is observed within one click.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::config::Config;
use crate::input_simulator::MouseControl;
use crate::ClickerError;

/// Throughput over one reporting window
#[derive(Debug, Clone, PartialEq)]
pub struct RateSample {
    /// Clicks since the run started
    pub total_clicks: u64,
    /// Clicks covered by this sample
    pub window_clicks: u64,
    pub elapsed: Duration,
    pub ms_per_click: f64,
    pub clicks_per_second: f64,
}

/// Summary of one finished run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Position captured at start, used for every click
    pub position: (i32, i32),
    pub clicks: u64,
    pub first_sample: Option<RateSample>,
    pub last_sample: Option<RateSample>,
}

/// Counts clicks and emits a sample every `every` clicks
struct RateWindow {
    every: u64,
    remaining: u64,
    started: Instant,
}

impl RateWindow {
    fn new(every: u64, now: Instant) -> Self {
        Self {
            every,
            remaining: every,
            started: now,
        }
    }

    fn record(&mut self, total_clicks: u64, now: Instant) -> Option<RateSample> {
        self.remaining -= 1;
        if self.remaining > 0 {
            return None;
        }

        let elapsed = now.duration_since(self.started);
        let secs = elapsed.as_secs_f64();
        let window_clicks = self.every;
        let clicks_per_second = if secs > 0.0 {
            window_clicks as f64 / secs
        } else {
            f64::INFINITY
        };

        self.remaining = self.every;
        self.started = now;

        Some(RateSample {
            total_clicks,
            window_clicks,
            elapsed,
            ms_per_click: secs * 1000.0 / window_clicks as f64,
            clicks_per_second,
        })
    }
}

struct ActiveRun {
    running: Arc<AtomicBool>,
    handle: thread::JoinHandle<Result<RunReport, ClickerError>>,
}

impl ActiveRun {
    fn join(self) -> Result<RunReport, ClickerError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => Err(ClickerError::Worker("click loop panicked".to_string())),
        }
    }
}

/// Owns the running/stopped state and at most one click thread
pub struct ClickLoop {
    mouse: Arc<dyn MouseControl>,
    log_every: u64,
    click_wait: Duration,
    active: Option<ActiveRun>,
}

impl ClickLoop {
    pub fn new(mouse: Arc<dyn MouseControl>, config: &Config) -> Self {
        Self {
            mouse,
            log_every: config.log_every.max(1),
            click_wait: Duration::from_millis(config.click_wait_ms),
            active: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|run| run.running.load(Ordering::SeqCst))
    }

    /// Spawn a click run unless one is already running
    ///
    /// Returns true when a new run was started. A previous run that was
    /// stopped but not yet reaped is joined first, so two click threads
    /// never overlap.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            debug!("Click loop already running");
            return false;
        }

        if let Some(previous) = self.active.take() {
            log_outcome(previous.join());
        }

        if self.click_wait.is_zero() {
            info!("Starting to click as fast as possible");
        } else {
            info!(
                "Starting to click every {:?} (approx {:.1} clicks per second)",
                self.click_wait,
                1.0 / self.click_wait.as_secs_f64()
            );
        }

        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();
        let mouse = self.mouse.clone();
        let log_every = self.log_every;
        let click_wait = self.click_wait;

        let handle = thread::spawn(move || {
            let result = run_clicks(mouse.as_ref(), &flag, log_every, click_wait);
            if result.is_err() {
                flag.store(false, Ordering::SeqCst);
            }
            result
        });

        self.active = Some(ActiveRun { running, handle });
        true
    }

    /// Signal the current run to stop
    ///
    /// Returns true when a running loop was signalled; stopping a stopped
    /// loop is a no-op.
    pub fn stop(&mut self) -> bool {
        match &self.active {
            Some(run) => run.running.swap(false, Ordering::SeqCst),
            None => false,
        }
    }

    /// Stop and join the current run, if any
    pub fn finish(&mut self) -> Option<Result<RunReport, ClickerError>> {
        self.stop();
        self.active.take().map(ActiveRun::join)
    }
}

impl Drop for ClickLoop {
    fn drop(&mut self) {
        if let Some(result) = self.finish() {
            log_outcome(result);
        }
    }
}

fn log_outcome(result: Result<RunReport, ClickerError>) {
    match result {
        Ok(report) => debug!("Reaped click run: {} clicks", report.clicks),
        Err(e) => error!("Click loop failed: {}", e),
    }
}

fn run_clicks(
    mouse: &dyn MouseControl,
    running: &AtomicBool,
    log_every: u64,
    click_wait: Duration,
) -> Result<RunReport, ClickerError> {
    let position = mouse.position()?;
    let (x, y) = position;
    info!("Started clicking at ({}, {})", x, y);

    let mut report = RunReport {
        position,
        clicks: 0,
        first_sample: None,
        last_sample: None,
    };
    let mut window = RateWindow::new(log_every, Instant::now());

    while running.load(Ordering::SeqCst) {
        mouse.move_to(x, y)?;
        mouse.click()?;
        report.clicks += 1;

        if let Some(sample) = window.record(report.clicks, Instant::now()) {
            info!(
                "Clicked: {}. Elapsed: {:?} for {} clicks which is {:.3}ms per click and {:.3} clicks per second",
                sample.total_clicks,
                sample.elapsed,
                sample.window_clicks,
                sample.ms_per_click,
                sample.clicks_per_second
            );
            if report.first_sample.is_none() {
                report.first_sample = Some(sample.clone());
            }
            report.last_sample = Some(sample);
        }

        if !click_wait.is_zero() {
            thread::sleep(click_wait);
        }
    }

    info!("Stopped clicking, clicked: {}", report.clicks);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_window_reports_every_n_clicks() {
        let start = Instant::now();
        let mut window = RateWindow::new(3, start);

        assert!(window.record(1, start + Duration::from_millis(10)).is_none());
        assert!(window.record(2, start + Duration::from_millis(20)).is_none());

        let sample = window
            .record(3, start + Duration::from_millis(30))
            .expect("sample after 3 clicks");
        assert_eq!(sample.total_clicks, 3);
        assert_eq!(sample.window_clicks, 3);
        assert_eq!(sample.elapsed, Duration::from_millis(30));
        assert!((sample.ms_per_click - 10.0).abs() < 1e-9);
        assert!((sample.clicks_per_second - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_rate_window_resets_after_sample() {
        let start = Instant::now();
        let mut window = RateWindow::new(2, start);

        window.record(1, start);
        window.record(2, start + Duration::from_millis(100));

        let later = start + Duration::from_millis(100);
        assert!(window.record(3, later + Duration::from_millis(5)).is_none());
        let sample = window.record(4, later + Duration::from_millis(40)).unwrap();
        assert_eq!(sample.total_clicks, 4);
        assert_eq!(sample.elapsed, Duration::from_millis(40));
    }

    #[test]
    fn test_rate_window_zero_elapsed() {
        let start = Instant::now();
        let mut window = RateWindow::new(1, start);
        let sample = window.record(1, start).unwrap();
        assert_eq!(sample.ms_per_click, 0.0);
        assert!(sample.clicks_per_second.is_infinite());
    }
}
