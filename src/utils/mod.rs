use std::time::Instant;
use tracing::info;

/// Logs how long a command took and how many draws it produced.
pub struct RunTimer {
    label: &'static str,
    start: Instant,
    lotteries: usize,
    draws: usize,
}

impl RunTimer {
    pub fn start(label: &'static str) -> Self {
        info!("⏱  Starting: {}", label);
        Self {
            label,
            start: Instant::now(),
            lotteries: 0,
            draws: 0,
        }
    }

    /// Count one extracted page and its draws.
    pub fn record(&mut self, draws: usize) {
        self.lotteries += 1;
        self.draws += draws;
    }

    fn summary(&self) -> String {
        format!(
            "{}: {} pages, {} draws",
            self.label, self.lotteries, self.draws
        )
    }
}

impl Drop for RunTimer {
    fn drop(&mut self) {
        info!(
            "⏱  Finished: {} (took {:.2?})",
            self.summary(),
            self.start.elapsed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_timer_counts_draws() {
        let mut timer = RunTimer::start("fetch");
        assert_eq!(timer.summary(), "fetch: 0 pages, 0 draws");

        timer.record(2);
        timer.record(0);
        timer.record(5);
        assert_eq!(timer.summary(), "fetch: 3 pages, 7 draws");
    }
}
