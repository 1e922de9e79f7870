//! Shared item state: the two-phase lifecycle and the finalize step.

use std::rc::Rc;

use tracing::debug;

use formic_core::{
    Background, Error, Gravity, LayoutSize, Result, Toolkit, View, ViewKind, Visibility,
};

use crate::config::Config;
use crate::item::icon::IconSlots;

/// Where an item is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Mutable through fluent calls.
    Building,
    /// Inserted into the container; all further mutation is rejected.
    Finalized,
}

/// State shared by every item kind.
///
/// Items are composed around this core instead of inheriting from one
/// another: the capability traits reach it through
/// [`ItemState`](crate::item::ItemState) and get the whole fluent surface
/// from provided methods.
#[doc(hidden)]
pub struct ItemCore {
    pub(crate) toolkit: Rc<dyn Toolkit>,
    pub(crate) config: Rc<Config>,
    pub(crate) container: View,
    /// Root view, appended to the container at finalize.
    pub(crate) view: View,
    /// Styling target for text operations; same handle as `view` except for
    /// wrapped inputs, where it is the editor child.
    pub(crate) widget: View,
    /// Trailing separator, `None` for items that do not carry one.
    pub(crate) line: Option<View>,
    /// Icon slots, `None` for items without compound drawables.
    pub(crate) icons: Option<IconSlots>,
    phase: Phase,
}

impl ItemCore {
    pub(crate) fn new(
        toolkit: Rc<dyn Toolkit>,
        config: Rc<Config>,
        container: View,
        view: View,
    ) -> Self {
        let widget = view.clone();
        Self {
            toolkit,
            config,
            container,
            view,
            widget,
            line: None,
            icons: None,
            phase: Phase::Building,
        }
    }

    /// Redirect text styling to a child of the root view.
    pub(crate) fn with_widget(mut self, widget: View) -> Self {
        self.widget = widget;
        self
    }

    /// Reject any mutation after finalize.
    pub(crate) fn ensure_building(&self) -> Result<()> {
        if self.phase == Phase::Finalized {
            return Err(Error::ItemAlreadyFinalized);
        }
        Ok(())
    }

    /// The view line operations target: the attached separator, or the root
    /// view for a standalone line item.
    pub(crate) fn line_view(&self) -> &View {
        self.line.as_ref().unwrap_or(&self.view)
    }

    /// Create the trailing separator with the config's line defaults and the
    /// config-driven initial visibility.
    pub(crate) fn attach_line(&mut self) -> Result<()> {
        let line = View::new(ViewKind::Plain);
        style_line(&line, &self.config, self.toolkit.as_ref())?;
        if !self.config.line_shown {
            line.set_visibility(Visibility::Gone);
        }
        self.line = Some(line);
        Ok(())
    }

    /// Enable the four compound-icon slots.
    pub(crate) fn with_icons(mut self) -> Self {
        self.icons = Some(IconSlots::default());
        self
    }

    /// Apply the config defaults every text-bearing item starts from.
    pub(crate) fn apply_text_defaults(&mut self, default_background: bool) -> Result<()> {
        self.view.set_layout(
            LayoutSize::MatchParent,
            LayoutSize::WrapContent,
            Some(Gravity::CenterVertical),
        );

        if default_background {
            if let Some(background) = self.config.background {
                let view = self.view.clone();
                self.set_background(&view, background)?;
            }
        }

        self.widget.set_text_color(self.config.text_color);
        if let Some(size) = self.config.text_size {
            self.widget
                .set_text_size_px(size.resolve(self.toolkit.as_ref())? as f32);
        }
        if let Some(padding) = self.config.padding {
            let px = padding.resolve(self.toolkit.as_ref())?;
            self.widget.set_padding(formic_core::Padding::uniform(px));
        }
        self.widget.set_typeface(self.config.typeface.clone());
        Ok(())
    }

    /// Validate a background against the toolkit and apply it.
    ///
    /// Drawable-backed backgrounds are resolved eagerly so a dangling
    /// reference surfaces from this call, not from finalize.
    pub(crate) fn set_background(&self, view: &View, background: Background) -> Result<()> {
        if let Background::Res(resource) = background {
            self.toolkit.resolve_drawable(resource)?;
        }
        view.set_background(background);
        Ok(())
    }

    /// Resolve the icon slots, append the root view (then its separator) to
    /// the container, and seal the item.
    pub(crate) fn finalize(&mut self) -> Result<View> {
        self.ensure_building()?;

        if let Some(icons) = self.icons {
            icons.resolve(self.toolkit.as_ref(), &self.config, &self.widget)?;
        }

        self.container.add_child(&self.view);
        if let Some(line) = &self.line {
            self.container.add_child(line);
        }
        self.phase = Phase::Finalized;
        debug!(kind = ?self.view.kind(), children = self.container.child_count(), "item finalized");
        Ok(self.view.clone())
    }
}

/// Apply the config's separator defaults to a line view.
pub(crate) fn style_line(line: &View, config: &Config, toolkit: &dyn Toolkit) -> Result<()> {
    let height = config.line_height.resolve(toolkit)?;
    line.set_layout(LayoutSize::MatchParent, LayoutSize::Px(height), None);
    if let Background::Res(resource) = config.line_background {
        toolkit.resolve_drawable(resource)?;
    }
    line.set_background(config.line_background);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formic_core::HeadlessToolkit;

    fn core() -> ItemCore {
        let toolkit = Rc::new(HeadlessToolkit::new());
        let container = toolkit.container();
        ItemCore::new(
            toolkit,
            Rc::new(Config::default()),
            container,
            View::new(ViewKind::Text),
        )
    }

    #[test]
    fn finalize_appends_exactly_once() {
        let mut core = core();
        let container = core.container.clone();
        core.finalize().unwrap();
        assert_eq!(container.child_count(), 1);

        assert_eq!(core.finalize().err(), Some(Error::ItemAlreadyFinalized));
        assert_eq!(container.child_count(), 1);
    }

    #[test]
    fn mutation_is_rejected_after_finalize() {
        let mut core = core();
        core.finalize().unwrap();
        assert_eq!(core.ensure_building(), Err(Error::ItemAlreadyFinalized));
    }

    #[test]
    fn attached_line_follows_the_item_view() {
        let mut core = core();
        core.attach_line().unwrap();
        let container = core.container.clone();
        core.finalize().unwrap();

        assert_eq!(container.child_count(), 2);
        assert_eq!(container.child(1).unwrap().kind(), ViewKind::Plain);
    }

    #[test]
    fn line_hidden_when_config_says_so() {
        let toolkit = Rc::new(HeadlessToolkit::new());
        let container = toolkit.container();
        let config = Config::builder().show_line(false).build();
        let mut core = ItemCore::new(
            toolkit,
            Rc::new(config),
            container,
            View::new(ViewKind::Text),
        );
        core.attach_line().unwrap();
        assert_eq!(core.line_view().visibility(), Visibility::Gone);
    }
}
