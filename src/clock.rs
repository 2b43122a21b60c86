//! Millisecond time base.
//!
//! All controller timing works on a free-running `u32` millisecond
//! counter that wraps roughly every 49.7 days.  Durations are always
//! computed with wrapping subtraction (`now.since(earlier)`), which is
//! correct across the wrap as long as no measured window exceeds half
//! the counter range.  Raw counter values are never compared with `<`.

/// A point on the monotonic millisecond counter.
///
/// Two `Instant`s are only comparable when both were captured from the
/// same counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant(u32);

impl Instant {
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`.  Wraparound-safe.
    pub const fn since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// An instant `ms` milliseconds before this one.
    ///
    /// Used to seed "last event at" timestamps at boot so that interval
    /// checks fire (or deliberately don't fire) on the very first tick.
    pub const fn back_dated(self, ms: u32) -> Self {
        Self(self.0.wrapping_sub(ms))
    }

    /// An instant `ms` milliseconds after this one.
    pub const fn advanced(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

/// Current uptime from the 64-bit esp timer, truncated to the u32
/// millisecond domain the controllers work in.
#[cfg(target_os = "espidf")]
pub fn uptime() -> Instant {
    let micros = unsafe { esp_idf_sys::esp_timer_get_time() };
    Instant::from_millis((micros / 1000) as u32)
}
