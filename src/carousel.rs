//! Hero carousel state and autoplay.
//!
//! [`Carousel`] is the pure state machine: an active index over `len` items
//! and a playing/paused flag. [`Autoplay`] drives it from a tokio interval
//! and owns the timer task, aborting it on pause and on drop so no tick can
//! outlive the carousel.

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Time between automatic advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Playing,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carousel {
    len: usize,
    index: usize,
    state: PlaybackState,
}

impl Carousel {
    /// A carousel over `len` items, starting at the first item and playing.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            state: PlaybackState::Playing,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Navigation and autoplay controls exist only with more than one item.
    /// Zero or one item is a static, controls-free carousel.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// Whether the autoplay timer should be running.
    pub fn autoplay_active(&self) -> bool {
        self.has_controls() && self.state == PlaybackState::Playing
    }

    /// Advance one item, wrapping to the first. Playback state is untouched.
    pub fn next(&mut self) {
        if self.has_controls() {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Go back one item, wrapping to the last. Playback state is untouched.
    pub fn previous(&mut self) {
        if self.has_controls() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Flip between playing and paused. The index is kept.
    pub fn toggle_autoplay(&mut self) -> PlaybackState {
        if self.has_controls() {
            self.state = match self.state {
                PlaybackState::Playing => PlaybackState::Paused,
                PlaybackState::Paused => PlaybackState::Playing,
            };
        }
        self.state
    }

    /// Timer callback: advances only while autoplay is active.
    pub fn tick(&mut self) -> bool {
        if self.autoplay_active() {
            self.next();
            true
        } else {
            false
        }
    }
}

/// Owner of a carousel's autoplay timer.
#[derive(Debug)]
pub struct Autoplay {
    carousel: Arc<Mutex<Carousel>>,
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl Autoplay {
    /// Start autoplay with the standard 5 second interval.
    ///
    /// Must be called within a tokio runtime.
    pub fn start(carousel: Carousel) -> Self {
        Self::with_interval(carousel, AUTOPLAY_INTERVAL)
    }

    /// Start autoplay with a custom interval. A zero interval falls back to
    /// [`AUTOPLAY_INTERVAL`].
    pub fn with_interval(carousel: Carousel, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            warn!("Zero carousel interval, using {:?}", AUTOPLAY_INTERVAL);
            AUTOPLAY_INTERVAL
        } else {
            interval
        };
        let mut autoplay = Self {
            carousel: Arc::new(Mutex::new(carousel)),
            interval,
            task: None,
        };
        autoplay.sync_timer();
        autoplay
    }

    /// Current carousel state.
    pub fn snapshot(&self) -> Carousel {
        self.lock().clone()
    }

    /// Whether a timer task is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn next(&self) {
        self.lock().next();
    }

    pub fn previous(&self) {
        self.lock().previous();
    }

    /// Toggle playback, starting or cancelling the timer to match.
    pub fn toggle(&mut self) -> PlaybackState {
        let state = self.lock().toggle_autoplay();
        self.sync_timer();
        state
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Carousel> {
        self.carousel.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn sync_timer(&mut self) {
        let active = self.lock().autoplay_active();
        match (active, self.task.is_some()) {
            (true, false) => self.task = Some(self.spawn_timer()),
            (false, true) => self.cancel_timer(),
            _ => {}
        }
    }

    fn spawn_timer(&self) -> JoinHandle<()> {
        let carousel = Arc::clone(&self.carousel);
        let period = self.interval;
        debug!("Starting carousel autoplay every {:?}", period);

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                carousel
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .tick();
            }
        })
    }

    fn cancel_timer(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Cancelling carousel autoplay");
            task.abort();
        }
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== State Machine Tests ====================

    #[test]
    fn test_new_carousel_plays_from_first_item() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.state(), PlaybackState::Playing);
        assert!(carousel.has_controls());
        assert!(carousel.autoplay_active());
    }

    #[test]
    fn test_single_item_has_no_controls() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.has_controls());
        assert!(!carousel.autoplay_active());
        assert!(!carousel.tick());
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.toggle_autoplay(), PlaybackState::Playing);
    }

    #[test]
    fn test_next_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_previous_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_pause_keeps_index_and_stops_ticks() {
        let mut carousel = Carousel::new(4);
        carousel.tick();
        assert_eq!(carousel.toggle_autoplay(), PlaybackState::Paused);
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_manual_navigation_keeps_playback_state() {
        let mut carousel = Carousel::new(3);
        carousel.toggle_autoplay();
        carousel.next();
        assert_eq!(carousel.state(), PlaybackState::Paused);
        carousel.toggle_autoplay();
        carousel.previous();
        assert_eq!(carousel.state(), PlaybackState::Playing);
    }

    // ==================== Autoplay Timer Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_advances_every_interval() {
        let autoplay = Autoplay::start(Carousel::new(3));
        assert!(autoplay.is_running());

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(autoplay.snapshot().index(), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(autoplay.snapshot().index(), 1);

        tokio::time::sleep(AUTOPLAY_INTERVAL * 2).await;
        assert_eq!(autoplay.snapshot().index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_cancels_timer() {
        let mut autoplay = Autoplay::start(Carousel::new(3));
        assert_eq!(autoplay.toggle(), PlaybackState::Paused);
        assert!(!autoplay.is_running());

        tokio::time::sleep(AUTOPLAY_INTERVAL * 3).await;
        assert_eq!(autoplay.snapshot().index(), 0);

        assert_eq!(autoplay.toggle(), PlaybackState::Playing);
        assert!(autoplay.is_running());
        tokio::time::sleep(AUTOPLAY_INTERVAL + Duration::from_millis(100)).await;
        assert_eq!(autoplay.snapshot().index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_while_playing() {
        let autoplay = Autoplay::start(Carousel::new(4));
        autoplay.previous();
        assert_eq!(autoplay.snapshot().index(), 3);
        autoplay.next();
        autoplay.next();
        assert_eq!(autoplay.snapshot().index(), 1);
        assert_eq!(autoplay.snapshot().state(), PlaybackState::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_interval() {
        let autoplay = Autoplay::with_interval(Carousel::new(3), Duration::from_secs(2));
        tokio::time::sleep(Duration::from_millis(2_100)).await;
        assert_eq!(autoplay.snapshot().index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_uses_default() {
        let autoplay = Autoplay::with_interval(Carousel::new(3), Duration::ZERO);
        assert_eq!(autoplay.interval, AUTOPLAY_INTERVAL);
        assert!(autoplay.is_running());

        tokio::time::sleep(AUTOPLAY_INTERVAL + Duration::from_millis(100)).await;
        assert_eq!(autoplay.snapshot().index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_item_never_starts_timer() {
        let autoplay = Autoplay::start(Carousel::new(1));
        assert!(!autoplay.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticking() {
        let autoplay = Autoplay::start(Carousel::new(2));
        let shared = Arc::clone(&autoplay.carousel);
        drop(autoplay);

        tokio::time::sleep(AUTOPLAY_INTERVAL * 2).await;
        assert_eq!(shared.lock().unwrap().index(), 0);
        // The aborted task released its clone of the carousel.
        assert_eq!(Arc::strong_count(&shared), 1);
    }
}
