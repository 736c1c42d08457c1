//! Simulated analysis runs.
//!
//! A "run" here performs no computation: it sleeps for the configured
//! delay on a worker thread, then reports completion. Frontends flip
//! the `ran` flag in their parameter set when the completion message
//! arrives, which is what actually swaps the datasets.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::info;

/// Delay the production UI uses for a simulated run.
pub const DEFAULT_RUN_DELAY: Duration = Duration::from_millis(1500);

/// Which page's run button was pressed. Only the label differs; every
/// run behaves the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Prediction,
    FareCalculation,
    Forecast,
    Optimization,
}

impl RunKind {
    pub fn label(self) -> &'static str {
        match self {
            RunKind::Prediction => "Run Prediction",
            RunKind::FareCalculation => "Calculate Optimal Fare",
            RunKind::Forecast => "Generate Forecast",
            RunKind::Optimization => "Run Optimization",
        }
    }

    /// Button caption while the run is in flight.
    pub fn running_label(self) -> &'static str {
        match self {
            RunKind::Prediction => "Running...",
            RunKind::FareCalculation => "Calculating...",
            RunKind::Forecast => "Generating...",
            RunKind::Optimization => "Optimizing...",
        }
    }
}

#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Complete { kind: RunKind },
    Error { message: String },
}

/// Background worker for a single simulated run.
pub struct RunWorker {
    rx: Receiver<WorkerMessage>,
    _handle: JoinHandle<()>,
}

impl RunWorker {
    /// Start a run. Pass [`DEFAULT_RUN_DELAY`] for production behavior
    /// or [`Duration::ZERO`] to complete on the next poll.
    pub fn start(kind: RunKind, delay: Duration) -> Self {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            if let Err(e) = Self::simulate(kind, delay, &tx) {
                let _ = tx.send(WorkerMessage::Error {
                    message: format!("Worker error: {e}"),
                });
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    fn simulate(
        kind: RunKind,
        delay: Duration,
        tx: &Sender<WorkerMessage>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        info!(kind = kind.label(), "simulated run complete");
        tx.send(WorkerMessage::Complete { kind })?;
        Ok(())
    }

    /// Poll for a message without blocking. Returns `None` while the
    /// worker is still sleeping.
    pub fn try_message(&self) -> Option<WorkerMessage> {
        match self.rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(WorkerMessage::Error {
                message: "worker disconnected".to_string(),
            }),
        }
    }

    /// Block until the worker reports. Used by the CLI.
    pub fn wait(self) -> WorkerMessage {
        match self.rx.recv() {
            Ok(message) => message,
            Err(_) => WorkerMessage::Error {
                message: "worker disconnected".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delay_run_completes() {
        let worker = RunWorker::start(RunKind::Prediction, Duration::ZERO);
        match worker.wait() {
            WorkerMessage::Complete { kind } => assert_eq!(kind, RunKind::Prediction),
            WorkerMessage::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[test]
    fn polling_eventually_sees_completion() {
        let worker = RunWorker::start(RunKind::Forecast, Duration::from_millis(10));
        let mut message = None;
        for _ in 0..200 {
            if let Some(m) = worker.try_message() {
                message = Some(m);
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        assert!(matches!(
            message,
            Some(WorkerMessage::Complete {
                kind: RunKind::Forecast
            })
        ));
    }

    #[test]
    fn labels_match_the_buttons() {
        assert_eq!(RunKind::FareCalculation.label(), "Calculate Optimal Fare");
        assert_eq!(RunKind::Optimization.running_label(), "Optimizing...");
    }
}
