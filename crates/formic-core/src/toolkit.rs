//! The seam between the form builder and the host UI toolkit.

use crate::color::Color;
use crate::drawable::Drawable;
use crate::error::Result;
use crate::resource::{ColorRef, DimenRef, DrawableRef};
use crate::view::View;

/// Services the form builder consumes from the host toolkit.
///
/// All operations are synchronous and deterministic: one view tree per
/// `inflate` call, pure lookups for resources. Implementations report
/// unknown references with [`Error::InvalidResourceReference`] at the call
/// site, never later.
///
/// [`Error::InvalidResourceReference`]: crate::Error::InvalidResourceReference
pub trait Toolkit {
    /// Inflate a named template into a fresh view tree.
    fn inflate(&self, template: &str) -> Result<View>;

    /// Resolve a color reference.
    fn resolve_color(&self, color: ColorRef) -> Result<Color>;

    /// Resolve a dimension reference to a pixel size.
    fn resolve_dimension(&self, dimen: DimenRef) -> Result<i32>;

    /// Resolve a drawable reference.
    fn resolve_drawable(&self, drawable: DrawableRef) -> Result<Drawable>;

    /// Display density: how many device pixels one dp covers.
    fn density(&self) -> f32 {
        1.0
    }

    /// Convert density-independent pixels to device pixels.
    fn dp_to_px(&self, dp: f32) -> i32 {
        (dp * self.density()).round() as i32
    }
}

/// Template names the form builder inflates.
///
/// A backend may map these to whatever native widgets it likes, as long as
/// the returned view kinds line up with what the templates promise.
pub mod templates {
    /// Vertical spacer.
    pub const SPACE: &str = "formic/space";
    /// Separator line.
    pub const LINE: &str = "formic/line";
    /// Static text element.
    pub const TEXT: &str = "formic/text";
    /// Standard button.
    pub const BUTTON: &str = "formic/button";
    /// Button without the default background.
    pub const BUTTON_BORDERLESS: &str = "formic/button_borderless";
    /// Single-line text editor.
    pub const INPUT: &str = "formic/input";
    /// Text editor wrapped in a floating-hint layout.
    pub const TEXT_INPUT: &str = "formic/text_input";
    /// Completing text editor wrapped in a floating-hint layout.
    pub const AUTO_COMPLETE: &str = "formic/auto_complete";
    /// Labeled switch.
    pub const SWITCH: &str = "formic/switch";
}
