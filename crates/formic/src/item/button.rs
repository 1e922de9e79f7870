//! Button items.

use formic_core::{templates, Result};

use crate::form::Form;
use crate::item::core::ItemCore;
use crate::item::{IconDecorated, Item, ItemState, TextStyled};

/// A button. Uses the platform button chrome, so the config's default
/// background is not applied and no separator follows it.
pub struct ButtonItem {
    core: ItemCore,
}

impl ButtonItem {
    pub(crate) fn new(form: &Form, borderless: bool) -> Result<Self> {
        let template = if borderless {
            templates::BUTTON_BORDERLESS
        } else {
            templates::BUTTON
        };
        let view = form.toolkit().inflate(template)?;
        let mut core = ItemCore::new(
            form.toolkit_handle(),
            form.config_handle(),
            form.container().clone(),
            view,
        )
        .with_icons();
        core.apply_text_defaults(false)?;
        Ok(Self { core })
    }
}

impl ItemState for ButtonItem {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }
}

impl Item for ButtonItem {}
impl TextStyled for ButtonItem {}
impl IconDecorated for ButtonItem {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use formic_core::{Background, Color, HeadlessToolkit};
    use std::cell::Cell;
    use std::rc::Rc;

    fn form_with(config: Config) -> Form {
        let toolkit = Rc::new(HeadlessToolkit::new());
        let container = toolkit.container();
        config.bind(toolkit, &container).unwrap()
    }

    #[test]
    fn button_ignores_default_background_and_has_no_line() {
        let form = form_with(Config::builder().background(Color::WHITE).build());
        let button = form.button().unwrap();
        assert_eq!(button.core().view.background(), None);
        assert!(button.core().line.is_none());
    }

    #[test]
    fn button_still_takes_text_defaults() {
        let form = form_with(Config::builder().text_color(Color::WHITE).build());
        let button = form.button().unwrap();
        assert_eq!(button.core().view.text_color(), Color::WHITE);
    }

    #[test]
    fn explicit_background_still_applies() {
        let form = form_with(Config::default());
        let mut button = form.button().unwrap();
        button.background_color(Color::BLACK).unwrap();
        let view = button.build().unwrap();
        assert_eq!(view.background(), Some(Background::Color(Color::BLACK)));
    }

    #[test]
    fn click_handler_fires_through_the_view() {
        let form = form_with(Config::default());
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);

        let mut button = form.button().unwrap();
        button
            .text("Save")
            .unwrap()
            .on_click(move |_| counter.set(counter.get() + 1))
            .unwrap();
        let view = button.build().unwrap();

        view.click();
        view.click();
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn borderless_button_inflates_the_borderless_template() {
        let form = form_with(Config::default());
        let button = form.borderless_button().unwrap();
        assert_eq!(button.core().view.kind(), formic_core::ViewKind::Button);
    }
}
