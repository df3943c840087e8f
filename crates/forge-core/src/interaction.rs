use crate::constants::STRETCH_GAIN;

/// Smoothed pointer-press scalar in [0, 1].
///
/// Each frame moves the value a fixed fraction of the way toward 1 while the
/// pointer is held and toward 0 otherwise (first-order low-pass, gain 0.1).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StretchFactor {
    value: f32,
}

impl StretchFactor {
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advance one frame and return the new value.
    #[inline]
    pub fn step(&mut self, held: bool) -> f32 {
        let target = if held { 1.0 } else { 0.0 };
        self.value += (target - self.value) * STRETCH_GAIN;
        self.value
    }
}

/// Pointer state as seen by the animator, in viewport CSS pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub down: bool,
    pub x: f32,
    pub y: f32,
}
