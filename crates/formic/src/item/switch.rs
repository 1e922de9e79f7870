//! Two-state switch item.

use std::rc::Rc;

use formic_core::{templates, Result, Typeface, View};

use crate::form::Form;
use crate::item::core::ItemCore;
use crate::item::{IconDecorated, Item, ItemState, LineDecorated, TextStyled};

/// A labeled switch with a trailing separator.
pub struct SwitchItem {
    core: ItemCore,
}

impl SwitchItem {
    pub(crate) fn new(form: &Form) -> Result<Self> {
        let view = form.toolkit().inflate(templates::SWITCH)?;
        let mut core = ItemCore::new(
            form.toolkit_handle(),
            form.config_handle(),
            form.container().clone(),
            view,
        )
        .with_icons();
        core.apply_text_defaults(true)?;
        // The thumb text follows the config typeface like the label does.
        if let Some(typeface) = core.config.typeface.clone() {
            core.view.set_switch_typeface(Some(typeface));
        }
        core.attach_line()?;
        Ok(Self { core })
    }

    /// Set the switch state.
    pub fn checked(&mut self, checked: bool) -> Result<&mut Self> {
        self.core.ensure_building()?;
        self.core.view.set_checked(checked);
        Ok(self)
    }

    /// Attach a checked-change handler.
    pub fn on_checked_change<F>(&mut self, handler: F) -> Result<&mut Self>
    where
        F: Fn(&View, bool) + 'static,
    {
        self.core.ensure_building()?;
        self.core.view.set_on_checked_change(Some(Rc::new(handler)));
        Ok(self)
    }

    /// Remove the checked-change handler.
    pub fn clear_on_checked_change(&mut self) -> Result<&mut Self> {
        self.core.ensure_building()?;
        self.core.view.set_on_checked_change(None);
        Ok(self)
    }

    /// Show the on/off labels on the switch thumb.
    pub fn switch_text(
        &mut self,
        text_on: impl Into<String>,
        text_off: impl Into<String>,
    ) -> Result<&mut Self> {
        self.core.ensure_building()?;
        let view = &self.core.view;
        view.set_shows_switch_text(true);
        view.set_switch_text_on(text_on);
        view.set_switch_text_off(text_off);
        Ok(self)
    }
}

impl ItemState for SwitchItem {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }
}

impl Item for SwitchItem {}
impl LineDecorated for SwitchItem {}

impl TextStyled for SwitchItem {
    /// The switch thumb renders its own text, so the typeface applies there
    /// as well as to the label.
    fn typeface(&mut self, typeface: Typeface) -> Result<&mut Self> {
        self.core.ensure_building()?;
        self.core.view.set_typeface(Some(typeface.clone()));
        self.core.view.set_switch_typeface(Some(typeface));
        Ok(self)
    }
}

impl IconDecorated for SwitchItem {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use formic_core::HeadlessToolkit;
    use std::cell::RefCell;

    fn form_with(config: Config) -> Form {
        let toolkit = Rc::new(HeadlessToolkit::new());
        let container = toolkit.container();
        config.bind(toolkit, &container).unwrap()
    }

    #[test]
    fn switch_hides_its_text_by_default() {
        let form = form_with(Config::default());
        let item = form.switch_item().unwrap();
        assert!(!item.core().view.shows_switch_text());
    }

    #[test]
    fn switch_text_enables_display_and_sets_both_labels() {
        let form = form_with(Config::default());
        let mut item = form.switch_item().unwrap();
        item.switch_text("On", "Off").unwrap();
        let view = &item.core().view;
        assert!(view.shows_switch_text());
        assert_eq!(view.switch_text_on().as_deref(), Some("On"));
        assert_eq!(view.switch_text_off().as_deref(), Some("Off"));
    }

    #[test]
    fn checked_change_handler_observes_toggles() {
        let form = form_with(Config::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);

        let mut item = form.switch_item().unwrap();
        item.on_checked_change(move |_, checked| log.borrow_mut().push(checked))
            .unwrap();
        let view = item.build().unwrap();

        view.set_checked(true);
        view.set_checked(false);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn config_typeface_reaches_the_thumb_text() {
        let form = form_with(Config::builder().typeface(Typeface::Serif).build());
        let item = form.switch_item().unwrap();
        assert_eq!(item.core().view.typeface(), Some(Typeface::Serif));
        assert_eq!(item.core().view.switch_typeface(), Some(Typeface::Serif));
    }

    #[test]
    fn typeface_reaches_the_thumb_text() {
        let form = form_with(Config::default());
        let mut item = form.switch_item().unwrap();
        item.typeface(Typeface::Serif).unwrap();
        assert_eq!(item.core().view.typeface(), Some(Typeface::Serif));
        assert_eq!(item.core().view.switch_typeface(), Some(Typeface::Serif));
    }
}
