// ============================================================================
// bionify-core/src/progress.rs
// ============================================================================
//
// PROGRESS INDICATOR: Cosmetic "work in progress" ticker
//
// The indicator runs on one scoped background thread for as long as a piece
// of work runs on the calling thread. It goes Idle -> Running -> Stopped and
// cannot be restarted. The stop signal is the drop of a channel sender, so
// the ticker is told to stop on every exit path of the work (including a
// panic), and the thread scope joins it before `run_while` returns.

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};
use crate::reporting::Reporter;

// ---- Standard library imports ----
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Default time between spinner frames.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Lifecycle of a [`ProgressIndicator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    /// Constructed, not yet started.
    Idle,
    /// Ticker thread is emitting frames.
    Running,
    /// Ticker has stopped and been joined. Terminal.
    Stopped,
}

/// Emits periodic ticks to a [`Reporter`] while work runs.
pub struct ProgressIndicator<'r> {
    message: String,
    interval: Duration,
    reporter: &'r dyn Reporter,
    state: IndicatorState,
}

impl<'r> ProgressIndicator<'r> {
    pub fn new(message: impl Into<String>, reporter: &'r dyn Reporter) -> Self {
        Self {
            message: message.into(),
            interval: DEFAULT_TICK_INTERVAL,
            reporter,
            state: IndicatorState::Idle,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn state(&self) -> IndicatorState {
        self.state
    }

    /// Runs `work` on the current thread with the ticker running beside it.
    ///
    /// The ticker has stopped and its thread has been joined by the time this
    /// returns, whether `work` returned normally or panicked.
    ///
    /// # Errors
    ///
    /// `CoreError::IndicatorAlreadyStarted` if the indicator is not idle.
    pub fn run_while<T, F>(&mut self, work: F) -> CoreResult<T>
    where
        F: FnOnce() -> T,
    {
        if self.state != IndicatorState::Idle {
            return Err(CoreError::IndicatorAlreadyStarted);
        }
        self.state = IndicatorState::Running;

        let reporter = self.reporter;
        let message = self.message.as_str();
        let interval = self.interval;
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let output = thread::scope(|scope| {
            let ticker = scope.spawn(move || {
                reporter.indicator_started(message);
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => reporter.indicator_tick(),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                reporter.indicator_stopped();
            });

            // Moved in so that unwinding out of `work` also drops it.
            let stop_tx = stop_tx;
            let output = work();
            drop(stop_tx);

            if ticker.join().is_err() {
                log::warn!("Progress indicator thread panicked");
            }
            output
        });

        self.state = IndicatorState::Stopped;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Frame {
        Started,
        Tick,
        Stopped,
    }

    #[derive(Default)]
    struct FrameRecorder {
        frames: Mutex<Vec<Frame>>,
    }

    impl FrameRecorder {
        fn frames(&self) -> Vec<Frame> {
            self.frames.lock().unwrap().clone()
        }
    }

    impl Reporter for FrameRecorder {
        fn indicator_started(&self, _message: &str) {
            self.frames.lock().unwrap().push(Frame::Started);
        }
        fn indicator_tick(&self) {
            self.frames.lock().unwrap().push(Frame::Tick);
        }
        fn indicator_stopped(&self) {
            self.frames.lock().unwrap().push(Frame::Stopped);
        }
    }

    #[test]
    fn test_indicator_lifecycle() {
        let recorder = FrameRecorder::default();
        let mut indicator =
            ProgressIndicator::new("Working", &recorder).with_interval(Duration::from_millis(5));
        assert_eq!(indicator.state(), IndicatorState::Idle);

        let value = indicator
            .run_while(|| {
                thread::sleep(Duration::from_millis(60));
                42
            })
            .unwrap();

        assert_eq!(value, 42);
        assert_eq!(indicator.state(), IndicatorState::Stopped);

        let frames = recorder.frames();
        assert_eq!(frames.first(), Some(&Frame::Started));
        assert_eq!(frames.last(), Some(&Frame::Stopped));
        assert_eq!(frames.iter().filter(|f| **f == Frame::Started).count(), 1);
        assert_eq!(frames.iter().filter(|f| **f == Frame::Stopped).count(), 1);
        assert!(frames.contains(&Frame::Tick), "expected at least one tick: {:?}", frames);
    }

    #[test]
    fn test_indicator_cannot_restart() {
        let recorder = FrameRecorder::default();
        let mut indicator = ProgressIndicator::new("Working", &recorder);
        indicator.run_while(|| ()).unwrap();

        let second = indicator.run_while(|| ());
        assert!(matches!(second, Err(CoreError::IndicatorAlreadyStarted)));
        assert_eq!(indicator.state(), IndicatorState::Stopped);

        let started = recorder
            .frames()
            .iter()
            .filter(|f| **f == Frame::Started)
            .count();
        assert_eq!(started, 1);
    }

    #[test]
    fn test_indicator_stops_when_work_panics() {
        let recorder = FrameRecorder::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut indicator = ProgressIndicator::new("Working", &recorder)
                .with_interval(Duration::from_millis(5));
            indicator.run_while(|| panic!("conversion blew up")).unwrap();
        }));

        assert!(result.is_err());
        assert_eq!(recorder.frames().last(), Some(&Frame::Stopped));
    }
}
