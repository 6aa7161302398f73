//! Small scheduling primitive: coalesce calls arriving within a window
//! into the last call, executed after the window closes.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Default window applied to search input.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Stateful callback wrapper. Rapid calls collapse into the most recent
/// one, delivered once the window elapses without a newer call.
pub struct Debouncer<T: Send + 'static> {
    tx: mpsc::Sender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(window: Duration, on_settle: impl Fn(T) + Send + 'static) -> Self {
        let (tx, rx) = mpsc::channel::<T>();
        thread::spawn(move || {
            let mut pending: Option<T> = None;
            loop {
                if pending.is_some() {
                    match rx.recv_timeout(window) {
                        Ok(value) => pending = Some(value),
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(value) = pending.take() {
                                on_settle(value);
                            }
                        }
                        Err(RecvTimeoutError::Disconnected) => {
                            // Flush the last call so a keystroke right
                            // before teardown is not lost.
                            if let Some(value) = pending.take() {
                                on_settle(value);
                            }
                            break;
                        }
                    }
                } else {
                    match rx.recv() {
                        Ok(value) => pending = Some(value),
                        Err(_) => break,
                    }
                }
            }
        });
        Self { tx }
    }

    /// Feeds one call into the current window.
    pub fn call(&self, value: T) {
        let _ = self.tx.send(value);
    }
}
