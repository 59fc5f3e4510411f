//! src/site/carousel.rs
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Cadence of the hero display.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2500);

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("A rotation needs at least one entry")]
    Empty,
}

/// A fixed sequence of headline fragments cycled in order, wrapping from the
/// last entry back to the first.
#[derive(Debug, Clone)]
pub struct RotatingText {
    texts: Vec<String>,
    index: usize,
}

impl RotatingText {
    pub fn new(texts: Vec<String>) -> Result<Self, Error> {
        if texts.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self { texts, index: 0 })
    }

    pub fn current(&self) -> &str {
        &self.texts[self.index]
    }

    /// Step to the next entry, wrapping after the last.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.texts.len();
        self.current()
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }
}

/// Timer-driven rotation: a task advances the state once per interval and
/// publishes the active entry on a watch channel. The first advance happens
/// one full interval after spawning, not immediately.
#[derive(Debug)]
pub struct Rotator {
    current: watch::Receiver<String>,
    handle: JoinHandle<()>,
}

impl Rotator {
    pub fn spawn(mut rotating: RotatingText, every: Duration) -> Self {
        let (tx, rx) = watch::channel(rotating.current().to_owned());
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + every;
            let mut interval = tokio::time::interval_at(start, every);
            loop {
                interval.tick().await;
                let next = rotating.advance().to_owned();
                if tx.send(next).is_err() {
                    // Nobody is listening anymore.
                    break;
                }
            }
        });
        Self {
            current: rx,
            handle,
        }
    }

    /// The entry currently on display.
    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    /// A receiver observing every advance; it reports closure once the
    /// rotation stops.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current.clone()
    }

    /// Tears the timer down and waits for the task to settle. No tick fires
    /// afterwards.
    pub async fn stop(mut self) {
        self.handle.abort();
        let _ = (&mut self.handle).await;
    }
}

impl Drop for Rotator {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
