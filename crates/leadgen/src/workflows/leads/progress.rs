use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

pub const PHASE_LABELS: [&str; 6] = [
    "Analyzing business criteria...",
    "Searching Google Places API...",
    "Filtering by quality metrics...",
    "Enriching business data...",
    "Generating CSV file...",
    "Preparing download...",
];

pub const COMPLETE_LABEL: &str = "Complete!";

const STEP_PERCENT: u8 = 20;

/// Cosmetic progress sequence shown while a submission is "processed".
///
/// Starts at 0% on phase 0. Every tick adds 20% and moves to phase
/// `percent / 20`; the tick that reaches 100% reports the last phase and
/// finishes the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSimulator {
    percent: u8,
    finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressUpdate {
    pub percent: u8,
    pub phase: usize,
    pub label: &'static str,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ProgressState {
    Running { phase: usize, percent: u8 },
    Complete,
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSimulator {
    pub const fn new() -> Self {
        Self {
            percent: 0,
            finished: false,
        }
    }

    pub fn state(&self) -> ProgressState {
        if self.finished {
            ProgressState::Complete
        } else {
            ProgressState::Running {
                phase: self.phase(),
                percent: self.percent,
            }
        }
    }

    pub fn phase(&self) -> usize {
        usize::from(self.percent / STEP_PERCENT).min(PHASE_LABELS.len() - 1)
    }

    pub fn label(&self) -> &'static str {
        if self.finished {
            COMPLETE_LABEL
        } else {
            PHASE_LABELS[self.phase()]
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one step. Returns `None` once the run has finished.
    pub fn tick(&mut self) -> Option<ProgressUpdate> {
        if self.finished {
            return None;
        }

        self.percent = self.percent.saturating_add(STEP_PERCENT).min(100);
        let update = ProgressUpdate {
            percent: self.percent,
            phase: self.phase(),
            label: PHASE_LABELS[self.phase()],
            finished: self.percent >= 100,
        };
        self.finished = update.finished;
        Some(update)
    }
}

/// Timer seam driving the simulator between steps.
pub trait Pacer {
    fn wait(&mut self) -> impl Future<Output = ()> + Send;
}

/// Fixed-cadence pacer backed by a tokio interval.
#[derive(Debug)]
pub struct IntervalPacer {
    interval: Interval,
}

impl IntervalPacer {
    pub fn new(period: Duration) -> Self {
        // first step lands one full period after start, not immediately
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl Pacer for IntervalPacer {
    fn wait(&mut self) -> impl Future<Output = ()> + Send {
        async move {
            self.interval.tick().await;
        }
    }
}

/// Pacer that never suspends; counts how often it was asked to wait.
#[derive(Debug, Default, Clone)]
pub struct ImmediatePacer {
    waits: usize,
}

impl ImmediatePacer {
    pub fn waits(&self) -> usize {
        self.waits
    }
}

impl Pacer for ImmediatePacer {
    fn wait(&mut self) -> impl Future<Output = ()> + Send {
        self.waits += 1;
        std::future::ready(())
    }
}

/// Runs the simulator to completion, then hands control to `on_complete` once.
pub async fn run_progress<P, U, C, T>(pacer: &mut P, mut on_update: U, on_complete: C) -> T
where
    P: Pacer,
    U: FnMut(ProgressUpdate),
    C: FnOnce() -> T,
{
    let mut simulator = ProgressSimulator::new();
    while !simulator.is_finished() {
        pacer.wait().await;
        if let Some(update) = simulator.tick() {
            tracing::trace!(percent = update.percent, label = update.label, "progress");
            on_update(update);
        }
    }

    on_complete()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulator_starts_on_first_phase() {
        let simulator = ProgressSimulator::new();
        assert_eq!(
            simulator.state(),
            ProgressState::Running {
                phase: 0,
                percent: 0
            }
        );
        assert_eq!(simulator.label(), "Analyzing business criteria...");
    }

    #[test]
    fn simulator_walks_five_steps_then_stops() {
        let mut simulator = ProgressSimulator::new();
        let updates: Vec<_> = std::iter::from_fn(|| simulator.tick()).collect();

        let percents: Vec<_> = updates.iter().map(|update| update.percent).collect();
        assert_eq!(percents, vec![20, 40, 60, 80, 100]);
        let phases: Vec<_> = updates.iter().map(|update| update.phase).collect();
        assert_eq!(phases, vec![1, 2, 3, 4, 5]);
        assert_eq!(updates[4].label, "Preparing download...");
        assert_eq!(
            updates.iter().filter(|update| update.finished).count(),
            1
        );

        assert_eq!(simulator.state(), ProgressState::Complete);
        assert_eq!(simulator.label(), COMPLETE_LABEL);
        assert!(simulator.tick().is_none());
    }

    #[tokio::test]
    async fn run_progress_completes_once_without_real_delays() {
        let mut pacer = ImmediatePacer::default();
        let mut seen = Vec::new();
        let mut completions = 0;

        let outcome = run_progress(
            &mut pacer,
            |update| seen.push(update.percent),
            || {
                completions += 1;
                "rendered"
            },
        )
        .await;

        assert_eq!(outcome, "rendered");
        assert_eq!(completions, 1);
        assert_eq!(seen, vec![20, 40, 60, 80, 100]);
        assert_eq!(pacer.waits(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_pacer_spaces_steps_by_period() {
        let start = Instant::now();
        let mut pacer = IntervalPacer::new(Duration::from_millis(1000));
        assert_eq!(pacer.period(), Duration::from_millis(1000));

        run_progress(&mut pacer, |_| {}, || ()).await;

        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }
}
