//! Cascading style defaults for a family of form items.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use formic_core::{Background, Color, Error, Length, Result, Toolkit, Typeface, View};

use crate::form::Form;

/// The resolved set of default styling values for a family of form items.
///
/// A `Config` is immutable once built. Every styleable property resolves in
/// cascade order: item-level override, then the `Config` value if set, then
/// the toolkit default. Properties that are `Option` distinguish "explicitly
/// set" from "inherit the platform default"; there are no sentinel values.
///
/// Bind a `Config` to a container with [`Config::bind`] to start generating
/// items. Binding never mutates the `Config`, and the same `Config` may be
/// bound to any number of containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub(crate) space_height: Length,
    pub(crate) space_background: Background,
    pub(crate) line_height: Length,
    pub(crate) line_background: Background,
    pub(crate) line_shown: bool,
    pub(crate) text_color: Color,
    pub(crate) text_size: Option<Length>,
    pub(crate) typeface: Option<Typeface>,
    pub(crate) padding: Option<Length>,
    pub(crate) icon_padding: Option<Length>,
    pub(crate) icon_color: Option<Color>,
    pub(crate) background: Option<Background>,
    pub(crate) input_background: Option<Background>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            space_height: Length::Dp(8.0),
            space_background: Background::Color(Color::TRANSPARENT),
            line_height: Length::Dp(0.5),
            // The classic light-gray hairline.
            line_background: Background::Color(Color {
                r: 238.0 / 255.0,
                g: 238.0 / 255.0,
                b: 238.0 / 255.0,
                a: 1.0,
            }),
            line_shown: true,
            text_color: Color::BLACK,
            text_size: None,
            typeface: None,
            padding: None,
            icon_padding: None,
            icon_color: None,
            background: None,
            input_background: None,
        }
    }
}

impl Config {
    /// Start building a `Config` from the toolkit defaults.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Derive a builder seeded with this `Config`'s values.
    ///
    /// The derived copy is fully independent: mutating it never changes any
    /// value read from the original.
    #[must_use]
    pub fn derive(&self) -> ConfigBuilder {
        ConfigBuilder {
            config: self.clone(),
        }
    }

    /// Bind this `Config` to a container, producing a [`Form`] that appends
    /// items to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullContainer`] when the view cannot hold children.
    pub fn bind(&self, toolkit: Rc<dyn Toolkit>, container: &View) -> Result<Form> {
        if !container.is_group() {
            return Err(Error::NullContainer);
        }
        debug!(container = ?container.kind(), "binding config to container");
        Ok(Form::new(toolkit, Rc::new(self.clone()), container.clone()))
    }

    /// Default spacer height.
    #[must_use]
    pub fn space_height(&self) -> Length {
        self.space_height
    }

    /// Default spacer background.
    #[must_use]
    pub fn space_background(&self) -> Background {
        self.space_background
    }

    /// Default separator height.
    #[must_use]
    pub fn line_height(&self) -> Length {
        self.line_height
    }

    /// Default separator background.
    #[must_use]
    pub fn line_background(&self) -> Background {
        self.line_background
    }

    /// Whether a separator follows each item by default.
    #[must_use]
    pub fn line_shown(&self) -> bool {
        self.line_shown
    }

    /// Default text color.
    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Default text size, `None` for the platform default.
    #[must_use]
    pub fn text_size(&self) -> Option<Length> {
        self.text_size
    }

    /// Default typeface, `None` for the platform default.
    #[must_use]
    pub fn typeface(&self) -> Option<Typeface> {
        self.typeface.clone()
    }

    /// Default uniform padding for text-bearing items.
    #[must_use]
    pub fn padding(&self) -> Option<Length> {
        self.padding
    }

    /// Default padding between text and its compound drawables.
    #[must_use]
    pub fn icon_padding(&self) -> Option<Length> {
        self.icon_padding
    }

    /// Default icon tint, `None` to leave drawables untinted.
    #[must_use]
    pub fn icon_color(&self) -> Option<Color> {
        self.icon_color
    }

    /// Default background for text-bearing items.
    #[must_use]
    pub fn background(&self) -> Option<Background> {
        self.background
    }

    /// Default background for input items.
    #[must_use]
    pub fn input_background(&self) -> Option<Background> {
        self.input_background
    }
}

/// Fluent builder for [`Config`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the spacer height.
    #[must_use]
    pub fn space_height(mut self, height: impl Into<Length>) -> Self {
        self.config.space_height = height.into();
        self
    }

    /// Set the spacer background.
    #[must_use]
    pub fn space_background(mut self, background: impl Into<Background>) -> Self {
        self.config.space_background = background.into();
        self
    }

    /// Set the separator height.
    #[must_use]
    pub fn line_height(mut self, height: impl Into<Length>) -> Self {
        self.config.line_height = height.into();
        self
    }

    /// Set the separator background.
    #[must_use]
    pub fn line_background(mut self, background: impl Into<Background>) -> Self {
        self.config.line_background = background.into();
        self
    }

    /// Show or hide the separator after each item.
    #[must_use]
    pub fn show_line(mut self, shown: bool) -> Self {
        self.config.line_shown = shown;
        self
    }

    /// Set the text color.
    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.config.text_color = color;
        self
    }

    /// Set the text size.
    #[must_use]
    pub fn text_size(mut self, size: impl Into<Length>) -> Self {
        self.config.text_size = Some(size.into());
        self
    }

    /// Set the typeface.
    #[must_use]
    pub fn typeface(mut self, typeface: Typeface) -> Self {
        self.config.typeface = Some(typeface);
        self
    }

    /// Set the uniform padding for text-bearing items.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Length>) -> Self {
        self.config.padding = Some(padding.into());
        self
    }

    /// Set the padding between text and its compound drawables.
    #[must_use]
    pub fn icon_padding(mut self, padding: impl Into<Length>) -> Self {
        self.config.icon_padding = Some(padding.into());
        self
    }

    /// Set the default icon tint.
    #[must_use]
    pub fn icon_color(mut self, color: Color) -> Self {
        self.config.icon_color = Some(color);
        self
    }

    /// Set the default background for text-bearing items.
    #[must_use]
    pub fn background(mut self, background: impl Into<Background>) -> Self {
        self.config.background = Some(background.into());
        self
    }

    /// Set the default background for input items.
    #[must_use]
    pub fn input_background(mut self, background: impl Into<Background>) -> Self {
        self.config.input_background = Some(background.into());
        self
    }

    /// Finish the builder.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formic_core::HeadlessToolkit;

    #[test]
    fn defaults_match_the_toolkit_conventions() {
        let config = Config::default();
        assert_eq!(config.space_height(), Length::Dp(8.0));
        assert_eq!(config.line_height(), Length::Dp(0.5));
        assert!(config.line_shown());
        assert_eq!(config.text_color(), Color::BLACK);
        assert_eq!(config.text_size(), None);
        assert_eq!(config.icon_color(), None);
        assert_eq!(
            config.line_background(),
            Background::Color(Color::from_hex("#eeeeee").unwrap())
        );
    }

    #[test]
    fn builder_sets_values() {
        let config = Config::builder()
            .text_color(Color::WHITE)
            .text_size(Length::Px(14))
            .show_line(false)
            .build();
        assert_eq!(config.text_color(), Color::WHITE);
        assert_eq!(config.text_size(), Some(Length::Px(14)));
        assert!(!config.line_shown());
    }

    #[test]
    fn derive_copies_are_isolated() {
        let base = Config::builder().text_color(Color::WHITE).build();
        let derived = base.derive().text_color(Color::BLACK).padding(4).build();

        assert_eq!(base.text_color(), Color::WHITE);
        assert_eq!(base.padding(), None);
        assert_eq!(derived.text_color(), Color::BLACK);
        assert_eq!(derived.padding(), Some(Length::Px(4)));
    }

    #[test]
    fn bind_rejects_non_container_views() {
        let toolkit = Rc::new(HeadlessToolkit::new());
        let not_a_container = View::new(formic_core::ViewKind::Text);
        let result = Config::default().bind(toolkit, &not_a_container);
        assert_eq!(result.err(), Some(Error::NullContainer));
    }

    #[test]
    fn bind_does_not_mutate_and_rebinding_is_allowed() {
        let toolkit: Rc<dyn Toolkit> = Rc::new(HeadlessToolkit::new());
        let config = Config::default();
        let before = config.clone();

        let first = View::new(formic_core::ViewKind::Group);
        let second = View::new(formic_core::ViewKind::Group);
        config.bind(Rc::clone(&toolkit), &first).unwrap();
        config.bind(Rc::clone(&toolkit), &second).unwrap();

        assert_eq!(config, before);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = Config::builder()
            .text_size(Length::Dp(16.0))
            .icon_color(Color::WHITE)
            .build();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
