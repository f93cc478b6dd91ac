use std::future::Future;
use std::io::Write;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::config::constants::SPINNER_FRAME_INTERVAL_MS;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner on stderr with an elapsed-seconds counter, shown while a backend
/// call is pending. There is no timeout, so a hung call stays visible.
pub struct AnimatedLogger {
    message: String,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    /// Spinner showing `message`. Call [`start`](Self::start) to show it.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stop_sender: None,
            task_handle: None,
        }
    }

    /// Starts drawing on a background task.
    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let started = Instant::now();
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(SPINNER_FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ({}s) ", message, FRAMES[frame], started.elapsed().as_secs());
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        eprint!("\r\x1b[K");
        let _ = std::io::stderr().flush();
    }

    /// Runs `future` with the spinner visible and clears the line afterwards.
    pub async fn while_pending<F: Future>(message: impl Into<String>, future: F) -> F::Output {
        let mut logger = Self::new(message);
        logger.start();
        let output = future.await;
        logger.halt().await;
        output
    }
}
