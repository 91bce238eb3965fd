#[cfg(test)]
use mockall::automock;

/// Source of the random draws made during augmentation.
///
/// Injected per call so tests can pin the coin flips and the zoom amount.
#[cfg_attr(test, automock)]
pub trait RandomSource {
    /// A fair 0/1 draw, `true` meaning 1.
    fn coin_flip(&mut self) -> bool;

    /// Uniform draw from `[low, high)`.
    fn uniform(&mut self, low: f32, high: f32) -> f32;

    /// Uniform integer draw from `[low, high]`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;
}
