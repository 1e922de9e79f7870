//! Fluent capability traits shared by the item kinds.
//!
//! Instead of a subtype chain where every kind re-declares the whole fluent
//! surface to narrow its return type, each concrete item composes an
//! [`ItemCore`] and opts into capabilities. Provided methods return
//! `Result<&mut Self>`, so chains stay typed to the concrete item and every
//! call checks the two-phase lifecycle: after [`Item::build`] all mutation
//! fails with [`Error::ItemAlreadyFinalized`].
//!
//! [`Error::ItemAlreadyFinalized`]: formic_core::Error::ItemAlreadyFinalized

use formic_core::{
    Background, Color, DrawableRef, Ellipsize, FontStyle, Gravity, LayoutSize, Length, Padding,
    Result, Typeface, View, Visibility,
};

use crate::item::core::ItemCore;
use crate::item::icon::{IconSlot, Position};

/// Access to the shared item state. Implementation detail of the capability
/// traits; not part of the public contract.
#[doc(hidden)]
pub trait ItemState {
    fn core(&self) -> &ItemCore;
    fn core_mut(&mut self) -> &mut ItemCore;
}

/// Base capabilities every form item has.
pub trait Item: ItemState + Sized {
    /// Assign a view id.
    fn id(&mut self, id: i32) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().view.set_id(id);
        Ok(self)
    }

    /// Set the item height.
    fn height(&mut self, height: impl Into<Length>) -> Result<&mut Self> {
        self.core().ensure_building()?;
        let px = height.into().resolve(self.core().toolkit.as_ref())?;
        self.core().view.set_height(LayoutSize::Px(px));
        Ok(self)
    }

    /// Set the background to a solid color.
    fn background_color(&mut self, color: Color) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().view.set_background(Background::Color(color));
        Ok(self)
    }

    /// Set the background to a drawable resource.
    fn background_res(&mut self, resource: DrawableRef) -> Result<&mut Self> {
        self.core().ensure_building()?;
        let core = self.core();
        let view = core.view.clone();
        core.set_background(&view, Background::Res(resource))?;
        Ok(self)
    }

    /// Replace the layout parameters.
    fn layout(
        &mut self,
        width: LayoutSize,
        height: LayoutSize,
        gravity: Option<Gravity>,
    ) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().view.set_layout(width, height, gravity);
        Ok(self)
    }

    /// Set the visibility, mirrored onto the separator if one is attached.
    fn visibility(&mut self, visibility: Visibility) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().view.set_visibility(visibility);
        if let Some(line) = &self.core().line {
            line.set_visibility(visibility);
        }
        Ok(self)
    }

    /// Finalize the item: resolve its icon slots, apply pending layout
    /// parameters, and append its view to the bound container at the end of
    /// the current child list.
    ///
    /// Returns the item's root view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ItemAlreadyFinalized`] on a second call; the
    /// container gains exactly one view set per item.
    ///
    /// [`Error::ItemAlreadyFinalized`]: formic_core::Error::ItemAlreadyFinalized
    fn build(&mut self) -> Result<View> {
        self.core_mut().finalize()
    }
}

/// Items followed by a separator line (or standing in for one).
pub trait LineDecorated: Item {
    /// Show or hide the separator.
    fn show_line(&mut self, shown: bool) -> Result<&mut Self> {
        self.core().ensure_building()?;
        let visibility = if shown {
            Visibility::Visible
        } else {
            Visibility::Gone
        };
        self.core().line_view().set_visibility(visibility);
        Ok(self)
    }

    /// Set the separator height.
    fn line_height(&mut self, height: impl Into<Length>) -> Result<&mut Self> {
        self.core().ensure_building()?;
        let px = height.into().resolve(self.core().toolkit.as_ref())?;
        self.core().line_view().set_height(LayoutSize::Px(px));
        Ok(self)
    }

    /// Set the separator color.
    fn line_color(&mut self, color: Color) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core()
            .line_view()
            .set_background(Background::Color(color));
        Ok(self)
    }

    /// Set the separator background to a drawable resource.
    fn line_background(&mut self, resource: DrawableRef) -> Result<&mut Self> {
        self.core().ensure_building()?;
        let core = self.core();
        core.toolkit.resolve_drawable(resource)?;
        core.line_view().set_background(Background::Res(resource));
        Ok(self)
    }
}

/// Text-bearing items: texts, buttons, inputs, switches.
pub trait TextStyled: Item {
    /// Set the text.
    fn text(&mut self, text: impl Into<String>) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_text(text);
        Ok(self)
    }

    /// Set the hint.
    fn hint(&mut self, hint: impl Into<String>) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_hint(hint);
        Ok(self)
    }

    /// Set the text color.
    fn text_color(&mut self, color: Color) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_text_color(color);
        Ok(self)
    }

    /// Set the text size.
    fn text_size(&mut self, size: impl Into<Length>) -> Result<&mut Self> {
        self.core().ensure_building()?;
        let px = size.into().resolve(self.core().toolkit.as_ref())?;
        self.core().widget.set_text_size_px(px as f32);
        Ok(self)
    }

    /// Set uniform padding on all four sides.
    fn padding(&mut self, padding: impl Into<Length>) -> Result<&mut Self> {
        self.core().ensure_building()?;
        let px = padding.into().resolve(self.core().toolkit.as_ref())?;
        self.core().widget.set_padding(Padding::uniform(px));
        Ok(self)
    }

    /// Set individual paddings; sides passed as `None` keep their current
    /// value.
    fn padding_each(
        &mut self,
        start: Option<Length>,
        top: Option<Length>,
        end: Option<Length>,
        bottom: Option<Length>,
    ) -> Result<&mut Self> {
        self.core().ensure_building()?;
        let core = self.core();
        let toolkit = core.toolkit.as_ref();
        let current = core.widget.padding();
        let resolve = |side: Option<Length>, current: i32| -> Result<i32> {
            side.map_or(Ok(current), |length| length.resolve(toolkit))
        };
        core.widget.set_padding(Padding {
            start: resolve(start, current.start)?,
            top: resolve(top, current.top)?,
            end: resolve(end, current.end)?,
            bottom: resolve(bottom, current.bottom)?,
        });
        Ok(self)
    }

    /// Set the typeface.
    fn typeface(&mut self, typeface: Typeface) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_typeface(Some(typeface));
        Ok(self)
    }

    /// Set the font style on top of the current typeface.
    fn font_style(&mut self, style: FontStyle) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_font_style(style);
        Ok(self)
    }

    /// Set the content gravity.
    fn gravity(&mut self, gravity: Gravity) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_content_gravity(gravity);
        Ok(self)
    }

    /// Allow the text to wrap over multiple lines.
    fn multi_line(&mut self) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_single_line(false);
        Ok(self)
    }

    /// Set the truncation mode for overlong text.
    fn ellipsize(&mut self, ellipsize: Ellipsize) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_ellipsize(ellipsize);
        Ok(self)
    }

    /// Enable or disable the item.
    fn enabled(&mut self, enabled: bool) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_enabled(enabled);
        Ok(self)
    }

    /// Make the item focusable or not.
    fn focusable(&mut self, focusable: bool) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_focusable(focusable);
        Ok(self)
    }

    /// Attach a click handler.
    fn on_click<F>(&mut self, handler: F) -> Result<&mut Self>
    where
        F: Fn(&View) + 'static,
    {
        self.core().ensure_building()?;
        self.core()
            .widget
            .set_on_click(Some(std::rc::Rc::new(handler)));
        Ok(self)
    }

    /// Remove the click handler.
    fn clear_on_click(&mut self) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_on_click(None);
        Ok(self)
    }
}

/// Items that carry the four compound-icon slots.
pub trait IconDecorated: TextStyled {
    /// Show a visible icon at `position`, tinted with the config's default
    /// icon color when one is set.
    fn icon(&mut self, position: Position, drawable: DrawableRef) -> Result<&mut Self> {
        let color = self.core().config.icon_color;
        self.set_icon_slot(
            position,
            IconSlot {
                drawable: Some(drawable),
                color,
                visible: true,
            },
        )
    }

    /// Show a visible icon at `position` with an explicit tint.
    fn colored_icon(
        &mut self,
        position: Position,
        drawable: DrawableRef,
        color: Color,
    ) -> Result<&mut Self> {
        self.set_icon_slot(
            position,
            IconSlot {
                drawable: Some(drawable),
                color: Some(color),
                visible: true,
            },
        )
    }

    /// Reserve space for an icon at `position` without rendering it: the
    /// drawable keeps its intrinsic bounds at zero opacity, so text stays
    /// aligned with sibling items that show the icon.
    fn invisible_icon(&mut self, position: Position, drawable: DrawableRef) -> Result<&mut Self> {
        self.set_icon_slot(
            position,
            IconSlot {
                drawable: Some(drawable),
                color: None,
                visible: false,
            },
        )
    }

    /// Store a slot wholesale; the last write per position wins. Nothing
    /// touches the native view until [`Item::build`].
    fn set_icon_slot(&mut self, position: Position, slot: IconSlot) -> Result<&mut Self> {
        self.core().ensure_building()?;
        if let Some(icons) = self.core_mut().icons.as_mut() {
            icons.set(position, slot);
        }
        Ok(self)
    }
}
