use crate::api::traits::Tinted;
use crate::components::color::Color;
use crate::extensions::random::Rng;

/// Renderer component — the material colour an entity is drawn with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Renderer {
    pub color: Color,
}

impl Renderer {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Replace the material colour with a random one (see [`Color::randomized`]).
    pub fn randomize_color(&mut self, rng: &mut Rng, with_alpha: bool, close_to_current: bool, jitter: f32) {
        self.color = self.color.randomized(rng, with_alpha, close_to_current, jitter);
    }
}

impl Tinted for Renderer {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// On-screen text attached to an entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub color: Color,
}

impl TextLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::WHITE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Tinted for TextLabel {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
