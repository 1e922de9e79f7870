//! The bound generator: creates form items and appends them to a container.

use std::rc::Rc;

use tracing::debug;

use formic_core::{Result, Toolkit, View};

use crate::config::Config;
use crate::item::{
    AutoCompleteInputItem, ButtonItem, InputItem, LineItem, SpaceItem, SwitchItem, TextItem,
    TextInputItem,
};

/// Creates form items against one container, with one [`Config`]'s defaults.
///
/// Obtained from [`Config::bind`]; stateless beyond the bound references.
/// Every factory inflates the item's template, applies each applicable
/// config default, and returns the item ready for fluent overrides. Items
/// land in the container in the order their [`Item::build`] calls run.
///
/// [`Item::build`]: crate::item::Item::build
pub struct Form {
    toolkit: Rc<dyn Toolkit>,
    config: Rc<Config>,
    container: View,
}

impl Form {
    pub(crate) fn new(toolkit: Rc<dyn Toolkit>, config: Rc<Config>, container: View) -> Self {
        Self {
            toolkit,
            config,
            container,
        }
    }

    /// The bound config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The bound container.
    #[must_use]
    pub fn container(&self) -> &View {
        &self.container
    }

    pub(crate) fn toolkit(&self) -> &dyn Toolkit {
        self.toolkit.as_ref()
    }

    pub(crate) fn toolkit_handle(&self) -> Rc<dyn Toolkit> {
        Rc::clone(&self.toolkit)
    }

    pub(crate) fn config_handle(&self) -> Rc<Config> {
        Rc::clone(&self.config)
    }

    /// A vertical spacer.
    pub fn space(&self) -> Result<SpaceItem> {
        debug!("creating space item");
        SpaceItem::new(self)
    }

    /// A standalone separator line.
    pub fn line(&self) -> Result<LineItem> {
        debug!("creating line item");
        LineItem::new(self)
    }

    /// A static text element.
    pub fn text(&self) -> Result<TextItem> {
        debug!("creating text item");
        TextItem::new(self)
    }

    /// A button.
    pub fn button(&self) -> Result<ButtonItem> {
        debug!("creating button item");
        ButtonItem::new(self, false)
    }

    /// A button without the default button chrome.
    pub fn borderless_button(&self) -> Result<ButtonItem> {
        debug!("creating borderless button item");
        ButtonItem::new(self, true)
    }

    /// A plain text editor.
    pub fn input(&self) -> Result<InputItem> {
        debug!("creating input item");
        InputItem::new(self)
    }

    /// A text editor in a floating-hint wrapper.
    pub fn text_input(&self) -> Result<TextInputItem> {
        debug!("creating text input item");
        TextInputItem::new(self)
    }

    /// A completing text editor in a floating-hint wrapper.
    pub fn auto_complete_input(&self) -> Result<AutoCompleteInputItem> {
        debug!("creating auto-complete input item");
        AutoCompleteInputItem::new(self)
    }

    /// A labeled switch.
    pub fn switch_item(&self) -> Result<SwitchItem> {
        debug!("creating switch item");
        SwitchItem::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemState};
    use formic_core::HeadlessToolkit;

    #[test]
    fn one_form_per_binding_shares_the_container() {
        let toolkit = Rc::new(HeadlessToolkit::new());
        let container = toolkit.container();
        let form = Config::default().bind(toolkit, &container).unwrap();
        assert!(form.container().same_view(&container));
    }

    #[test]
    fn items_append_in_build_order_not_creation_order() {
        let toolkit = Rc::new(HeadlessToolkit::new());
        let container = toolkit.container();
        let form = Config::default().bind(toolkit, &container).unwrap();

        let mut first = form.space().unwrap();
        let mut second = form.space().unwrap();

        // Created first, built second.
        second.build().unwrap();
        first.build().unwrap();

        assert_eq!(container.child_count(), 2);
        assert!(container
            .child(0)
            .unwrap()
            .same_view(&second.core().view));
    }
}
