//! Resolved drawable handles.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::resource::DrawableRef;

/// A drawable resolved from the toolkit, plus the decoration applied to it.
///
/// Tint and alpha are per-instance: decorating one handle never affects other
/// views showing the same resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    /// The resource this drawable came from.
    pub resource: DrawableRef,
    /// Intrinsic width in pixels.
    pub intrinsic_width: i32,
    /// Intrinsic height in pixels.
    pub intrinsic_height: i32,
    /// Tint filter color, if any.
    pub tint: Option<Color>,
    /// Opacity in [0.0, 1.0]. Zero still reserves the intrinsic bounds.
    pub alpha: f32,
}

impl Drawable {
    /// Create an undecorated drawable with the given intrinsic bounds.
    #[must_use]
    pub fn new(resource: DrawableRef, intrinsic_width: i32, intrinsic_height: i32) -> Self {
        Self {
            resource,
            intrinsic_width,
            intrinsic_height,
            tint: None,
            alpha: 1.0,
        }
    }

    /// Apply a tint filter.
    #[must_use]
    pub fn tinted(mut self, color: Color) -> Self {
        self.tint = Some(color);
        self
    }

    /// Set the opacity, clamped to [0.0, 1.0].
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Whether the drawable renders anything.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_untinted_and_opaque() {
        let d = Drawable::new(DrawableRef(1), 24, 24);
        assert_eq!(d.tint, None);
        assert_eq!(d.alpha, 1.0);
        assert!(d.is_visible());
    }

    #[test]
    fn tinted_sets_filter() {
        let d = Drawable::new(DrawableRef(1), 24, 24).tinted(Color::WHITE);
        assert_eq!(d.tint, Some(Color::WHITE));
    }

    #[test]
    fn zero_alpha_keeps_bounds() {
        let d = Drawable::new(DrawableRef(1), 24, 24).with_alpha(0.0);
        assert!(!d.is_visible());
        assert_eq!(d.intrinsic_width, 24);
        assert_eq!(d.intrinsic_height, 24);
    }

    #[test]
    fn alpha_is_clamped() {
        let d = Drawable::new(DrawableRef(1), 24, 24).with_alpha(3.0);
        assert_eq!(d.alpha, 1.0);
    }
}
