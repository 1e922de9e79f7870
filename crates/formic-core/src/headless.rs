//! In-memory toolkit backend.
//!
//! Backs the form builder with plain hash-map resource tables and
//! property-bag views, so forms can be built and inspected without a host
//! toolkit. Tests and demos run against this backend.

use std::collections::HashMap;

use tracing::trace;

use crate::color::Color;
use crate::drawable::Drawable;
use crate::error::{Error, Result};
use crate::resource::{ColorRef, DimenRef, DrawableRef, ResourceKind};
use crate::toolkit::{templates, Toolkit};
use crate::view::{LayoutSize, View, ViewKind};

/// A [`Toolkit`] backed by in-memory resource tables.
#[derive(Debug, Default)]
pub struct HeadlessToolkit {
    colors: HashMap<ColorRef, Color>,
    dimensions: HashMap<DimenRef, i32>,
    drawables: HashMap<DrawableRef, (i32, i32)>,
    density: f32,
}

impl HeadlessToolkit {
    /// Create a toolkit with empty resource tables at density 1.0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            density: 1.0,
            ..Self::default()
        }
    }

    /// Create a toolkit with the given display density.
    #[must_use]
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    /// Register a color resource.
    pub fn register_color(&mut self, color: ColorRef, value: Color) {
        self.colors.insert(color, value);
    }

    /// Register a dimension resource in pixels.
    pub fn register_dimension(&mut self, dimen: DimenRef, px: i32) {
        self.dimensions.insert(dimen, px);
    }

    /// Register a drawable resource with its intrinsic bounds in pixels.
    pub fn register_drawable(&mut self, drawable: DrawableRef, width: i32, height: i32) {
        self.drawables.insert(drawable, (width, height));
    }

    /// A fresh container view forms can bind to.
    #[must_use]
    pub fn container(&self) -> View {
        View::new(ViewKind::Group)
    }
}

impl Toolkit for HeadlessToolkit {
    fn inflate(&self, template: &str) -> Result<View> {
        trace!(template, "inflating template");
        let view = match template {
            templates::SPACE | templates::LINE => View::new(ViewKind::Plain),
            templates::TEXT => View::new(ViewKind::Text),
            templates::BUTTON | templates::BUTTON_BORDERLESS => View::new(ViewKind::Button),
            templates::INPUT => View::new(ViewKind::EditText),
            templates::TEXT_INPUT | templates::AUTO_COMPLETE => {
                let child_kind = if template == templates::TEXT_INPUT {
                    ViewKind::EditText
                } else {
                    ViewKind::AutoComplete
                };
                let layout = View::new(ViewKind::InputLayout);
                layout.set_layout(LayoutSize::MatchParent, LayoutSize::WrapContent, None);
                layout.add_child(&View::new(child_kind));
                layout
            }
            templates::SWITCH => View::new(ViewKind::Switch),
            other => return Err(Error::unknown_template(other)),
        };
        Ok(view)
    }

    fn resolve_color(&self, color: ColorRef) -> Result<Color> {
        self.colors
            .get(&color)
            .copied()
            .ok_or_else(|| Error::unresolved(ResourceKind::Color, color.0))
    }

    fn resolve_dimension(&self, dimen: DimenRef) -> Result<i32> {
        self.dimensions
            .get(&dimen)
            .copied()
            .ok_or_else(|| Error::unresolved(ResourceKind::Dimension, dimen.0))
    }

    fn resolve_drawable(&self, drawable: DrawableRef) -> Result<Drawable> {
        self.drawables
            .get(&drawable)
            .map(|&(width, height)| Drawable::new(drawable, width, height))
            .ok_or_else(|| Error::unresolved(ResourceKind::Drawable, drawable.0))
    }

    fn density(&self) -> f32 {
        self.density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_resources_resolve() {
        let mut toolkit = HeadlessToolkit::new();
        toolkit.register_color(ColorRef(1), Color::WHITE);
        toolkit.register_dimension(DimenRef(2), 12);
        toolkit.register_drawable(DrawableRef(3), 24, 24);

        assert_eq!(toolkit.resolve_color(ColorRef(1)).unwrap(), Color::WHITE);
        assert_eq!(toolkit.resolve_dimension(DimenRef(2)).unwrap(), 12);
        let drawable = toolkit.resolve_drawable(DrawableRef(3)).unwrap();
        assert_eq!(drawable.intrinsic_width, 24);
        assert_eq!(drawable.tint, None);
    }

    #[test]
    fn unknown_resources_fail_immediately() {
        let toolkit = HeadlessToolkit::new();
        assert_eq!(
            toolkit.resolve_color(ColorRef(9)),
            Err(Error::unresolved(ResourceKind::Color, 9))
        );
        assert_eq!(
            toolkit.resolve_drawable(DrawableRef(9)),
            Err(Error::unresolved(ResourceKind::Drawable, 9))
        );
    }

    #[test]
    fn inflate_known_templates() {
        let toolkit = HeadlessToolkit::new();
        assert_eq!(
            toolkit.inflate(templates::TEXT).unwrap().kind(),
            ViewKind::Text
        );
        assert_eq!(
            toolkit.inflate(templates::SPACE).unwrap().kind(),
            ViewKind::Plain
        );

        let text_input = toolkit.inflate(templates::TEXT_INPUT).unwrap();
        assert_eq!(text_input.kind(), ViewKind::InputLayout);
        assert_eq!(text_input.child(0).unwrap().kind(), ViewKind::EditText);

        let auto = toolkit.inflate(templates::AUTO_COMPLETE).unwrap();
        assert_eq!(auto.child(0).unwrap().kind(), ViewKind::AutoComplete);
    }

    #[test]
    fn inflate_unknown_template_is_a_resource_error() {
        let toolkit = HeadlessToolkit::new();
        assert_eq!(
            toolkit.inflate("formic/carousel").err(),
            Some(Error::unknown_template("formic/carousel"))
        );
    }

    #[test]
    fn dp_rounds_through_density() {
        let toolkit = HeadlessToolkit::with_density(2.5);
        assert_eq!(toolkit.dp_to_px(0.5), 1);
        assert_eq!(toolkit.dp_to_px(8.0), 20);
    }
}
