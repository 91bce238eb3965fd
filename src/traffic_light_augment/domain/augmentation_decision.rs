use crate::domain::random_source::RandomSource;

/// Which of the three augmentations are applied to one image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AugmentationDecision {
    pub brightness: bool,
    pub flip: bool,
    pub zoom: bool,
}

impl AugmentationDecision {
    /// Draws brightness, flip and zoom in that order.
    pub fn draw(rng: &mut dyn RandomSource) -> Self {
        let brightness = rng.coin_flip();
        let flip = rng.coin_flip();
        let zoom = rng.coin_flip();
        Self {
            brightness,
            flip,
            zoom,
        }
    }
}
