//! Decorative background: translucent drifting shapes behind the page.
//!
//! Parameters are drawn fresh on every render; nothing reads them back. The layer
//! carries inline `pointer-events: none`, so it never takes input even without
//! the stylesheet.

use rand::Rng;

use crate::view::theme::Palette;

pub const BUBBLE_COUNT: usize = 20;

const SIZE_PX: std::ops::Range<f32> = 50.0..150.0;
const POSITION_PCT: std::ops::Range<f32> = 0.0..100.0;
const DRIFT_PX: std::ops::Range<f32> = -15.0..15.0;
const DURATION_S: std::ops::Range<f32> = 10.0..20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub width_px: f32,
    pub height_px: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub drift_x_px: f32,
    pub drift_y_px: f32,
    pub duration_s: f32,
}

impl Bubble {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Bubble {
            width_px: rng.gen_range(SIZE_PX),
            height_px: rng.gen_range(SIZE_PX),
            left_pct: rng.gen_range(POSITION_PCT),
            top_pct: rng.gen_range(POSITION_PCT),
            drift_x_px: rng.gen_range(DRIFT_PX),
            drift_y_px: rng.gen_range(DRIFT_PX),
            duration_s: rng.gen_range(DURATION_S),
        }
    }

    /// Inline style consumed by the `bubble-drift` keyframes.
    pub fn style(&self) -> String {
        format!(
            "width: {:.1}px; height: {:.1}px; left: {:.2}%; top: {:.2}%; \
             --drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s;",
            self.width_px,
            self.height_px,
            self.left_pct,
            self.top_pct,
            self.drift_x_px,
            self.drift_y_px,
            self.duration_s
        )
    }
}

/// Rendered background layer. Only `class` depends on the theme.
#[derive(Debug, Clone)]
pub struct Background {
    pub class: &'static str,
    pub bubbles: Vec<Bubble>,
}

impl Background {
    pub fn render<R: Rng + ?Sized>(palette: &Palette, rng: &mut R) -> Self {
        Background {
            class: palette.bubble,
            bubbles: (0..BUBBLE_COUNT).map(|_| Bubble::random(rng)).collect(),
        }
    }
}
