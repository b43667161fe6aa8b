//! Handoff between a recognizer worker and the detection core.

use core::time::Duration;

use crate::detect::Observation;

#[cfg(feature = "std")]
struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use spin::Mutex;

/// Latest-value cell for a single producer and a single consumer.
///
/// The recognizer worker publishes each reading with its timestamp; the
/// consumer takes it and feeds it to a
/// [`DetectionStabilizer`](crate::DetectionStabilizer). An untaken reading is
/// replaced by the next one, so a slow consumer only ever sees the newest.
pub struct ObservationSlot {
    latest: Mutex<Option<(Observation, Duration)>>,
}

impl ObservationSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: Mutex::new(None),
        }
    }

    /// Stores a reading, returning the one it replaced if it was never taken.
    pub fn publish(&self, observation: Observation, at: Duration) -> Option<(Observation, Duration)> {
        self.latest.lock().replace((observation, at))
    }

    /// Takes the newest reading, leaving the slot empty.
    pub fn take(&self) -> Option<(Observation, Duration)> {
        self.latest.lock().take()
    }

    /// Returns whether a reading is waiting.
    pub fn is_pending(&self) -> bool {
        self.latest.lock().is_some()
    }
}

impl Default for ObservationSlot {
    fn default() -> Self {
        Self::new()
    }
}
