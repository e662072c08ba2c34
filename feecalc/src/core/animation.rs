// src/core/animation.rs
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Stops a running [`CountUp`] from another thread or a render callback.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counts a displayed number up from zero to `target`, easing out over
/// `duration`. Every instance animates exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: Decimal,
    duration: Duration,
    frames: u32,
}

impl CountUp {
    /// `frames` is at least one.
    #[must_use]
    pub fn new(target: Decimal, duration: Duration, frames: u32) -> Self {
        Self {
            target,
            duration,
            frames: frames.max(1),
        }
    }

    #[inline]
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        self.duration / self.frames
    }

    /// Value shown on `frame` (1-based). Intermediate frames are rounded to
    /// cents; the last frame is the exact target.
    #[must_use]
    pub fn value_at(&self, frame: u32) -> Decimal {
        if frame >= self.frames {
            return self.target;
        }
        let progress = Decimal::from(frame) / Decimal::from(self.frames);
        // ease-out quadratic
        let eased = progress * (Decimal::TWO - progress);
        (self.target * eased).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        (1..=self.frames).map(|frame| self.value_at(frame))
    }

    /// Renders every frame, sleeping between them. On cancellation the
    /// target is rendered immediately so the display never stops mid-way.
    ///
    /// Returns `false` if the animation was cancelled.
    pub fn play<F: FnMut(Decimal)>(&self, cancel: &CancelToken, mut render: F) -> bool {
        let delay = self.frame_delay();
        for frame in 1..=self.frames {
            if cancel.is_cancelled() {
                render(self.target);
                return false;
            }
            render(self.value_at(frame));
            if frame < self.frames {
                thread::sleep(delay);
            }
        }
        true
    }
}
