//! Background clipboard polling.
//!
//! One worker thread wakes on a fixed interval, reads the clipboard, and sends
//! an [`AppEvent::ClipboardChange`] on the channel whenever the content
//! differs from the last observed value. The worker never touches the
//! terminal; the receiving thread is the single writer. A read failure sends
//! one [`AppEvent::WatcherFailed`] and halts the loop rather than retrying.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::app::AppEvent;
use crate::input::{clipboard, LoadError};

pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Where the watcher reads text from. The production source is the system
/// clipboard; tests substitute a scripted one.
pub trait TextSource: Send + 'static {
    fn read_text(&mut self) -> Result<String, LoadError>;
}

pub struct ClipboardSource;

impl TextSource for ClipboardSource {
    fn read_text(&mut self) -> Result<String, LoadError> {
        clipboard::read_text()
    }
}

pub struct ClipboardWatcher {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ClipboardWatcher {
    /// Spawn the polling thread against the system clipboard.
    pub fn spawn(sender: Sender<AppEvent>) -> Self {
        Self::spawn_with(ClipboardSource, sender, POLL_INTERVAL)
    }

    pub fn spawn_with<S: TextSource>(
        mut source: S,
        sender: Sender<AppEvent>,
        interval: Duration,
    ) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::spawn(move || {
            // Seed with the current content so pre-existing text does not
            // fire a change event on startup.
            let mut last_content = source.read_text().unwrap_or_default();

            while flag.load(Ordering::Relaxed) {
                thread::sleep(interval);
                if !flag.load(Ordering::Relaxed) {
                    break;
                }
                match source.read_text() {
                    Ok(current) => {
                        if current != last_content {
                            last_content.clone_from(&current);
                            if sender.send(AppEvent::ClipboardChange(current)).is_err() {
                                break;
                            }
                        }
                    }
                    Err(err) => {
                        // One-shot failure report, then the loop halts itself.
                        let _ = sender.send(AppEvent::WatcherFailed(err.to_string()));
                        break;
                    }
                }
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Request shutdown. Takes effect on the next wake-up, so stopping has up
    /// to one poll interval of latency.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Stop and wait for the worker to exit.
    pub fn join(mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ClipboardWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
