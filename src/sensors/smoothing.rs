//! Fixed-size moving-average window for the noisy thermistor channel.
//!
//! A ring of `SMOOTHING_SLOTS` samples, every slot seeded invalid (NaN).
//! Only accepted samples are written — a failed read never overwrites a
//! stale-but-valid slot — so the mean is always taken over whatever
//! valid data the window currently holds.

/// Number of samples averaged for the smoothed external temperature.
pub const SMOOTHING_SLOTS: usize = 10;

pub struct SmoothingWindow {
    slots: [f32; SMOOTHING_SLOTS],
    head: usize,
}

impl SmoothingWindow {
    pub fn new() -> Self {
        Self {
            slots: [f32::NAN; SMOOTHING_SLOTS],
            head: 0,
        }
    }

    /// Accept one valid sample.  The write index advances modulo the
    /// window size; the oldest slot (valid or not) is overwritten.
    ///
    /// Callers must filter invalid readings before pushing — a NaN here
    /// would poison a slot for a full revolution.
    pub fn push(&mut self, sample: f32) {
        debug_assert!(sample.is_finite(), "invalid sample pushed into window");
        self.slots[self.head] = sample;
        self.head = (self.head + 1) % SMOOTHING_SLOTS;
    }

    /// Arithmetic mean of the currently valid slots, or `None` while the
    /// window has never held a valid sample.
    pub fn mean(&self) -> Option<f32> {
        let mut sum = 0.0f32;
        let mut count = 0usize;
        for slot in &self.slots {
            if slot.is_finite() {
                sum += slot;
                count += 1;
            }
        }
        if count == 0 { None } else { Some(sum / count as f32) }
    }
}

impl Default for SmoothingWindow {
    fn default() -> Self {
        Self::new()
    }
}
