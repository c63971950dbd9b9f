// Rotation state for slideshow-style views. Presentation only: nothing here
// touches preferences or the catalog.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    hovered: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            hovered: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.hovered
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jump to `index`; out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Timer step. Advances unless paused or there is nothing to rotate.
    pub fn tick(&mut self) -> Option<usize> {
        if self.hovered || self.len <= 1 {
            return None;
        }
        Some(self.next())
    }
}

fn lock(carousel: &Mutex<Carousel>) -> MutexGuard<'_, Carousel> {
    carousel.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Repeating timer that ticks a shared carousel. Stops on `cancel` or drop.
pub struct Autoplay {
    carousel: Arc<Mutex<Carousel>>,
    handle: JoinHandle<()>,
}

impl Autoplay {
    /// Start ticking every `interval`. `on_advance` receives the new index
    /// each time the carousel actually moves. Must be called inside a tokio
    /// runtime.
    pub fn spawn<F>(carousel: Arc<Mutex<Carousel>>, interval: Duration, mut on_advance: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        let shared = Arc::clone(&carousel);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let advanced = lock(&shared).tick();
                if let Some(index) = advanced {
                    debug!(operation = "autoplay_advance", index);
                    on_advance(index);
                }
            }
        });

        Self { carousel, handle }
    }

    pub fn pause(&self) {
        lock(&self.carousel).set_hovered(true);
    }

    pub fn resume(&self) {
        lock(&self.carousel).set_hovered(false);
    }

    pub fn current(&self) -> usize {
        lock(&self.carousel).current()
    }

    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
