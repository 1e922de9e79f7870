//! Plain text-editor item.

use std::rc::Rc;

use formic_core::{templates, Background, InputType, Result, TextWatcher};

use crate::form::Form;
use crate::item::core::ItemCore;
use crate::item::{IconDecorated, Item, ItemState, LineDecorated, TextStyled};

/// A single-line text editor with a trailing separator.
///
/// Starts single-line with sentence capitalization, the way platform forms
/// expect; the config's input background takes precedence over the general
/// item background.
pub struct InputItem {
    core: ItemCore,
}

impl InputItem {
    pub(crate) fn new(form: &Form) -> Result<Self> {
        let view = form.toolkit().inflate(templates::INPUT)?;
        let mut core = ItemCore::new(
            form.toolkit_handle(),
            form.config_handle(),
            form.container().clone(),
            view,
        )
        .with_icons();
        core.apply_text_defaults(true)?;
        core.attach_line()?;
        apply_input_defaults(&core)?;
        Ok(Self { core })
    }

    /// The current editor contents.
    #[must_use]
    pub fn input(&self) -> String {
        self.core.widget.text()
    }

    /// The current editor contents with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed_input(&self) -> String {
        self.core.widget.text().trim().to_string()
    }

    /// Set the keyboard class.
    pub fn input_type(&mut self, input_type: InputType) -> Result<&mut Self> {
        self.core.ensure_building()?;
        self.core.widget.set_input_type(input_type);
        Ok(self)
    }

    /// Set the editor background, independent of the item background.
    pub fn input_background(&mut self, background: impl Into<Background>) -> Result<&mut Self> {
        self.core.ensure_building()?;
        let widget = self.core.widget.clone();
        self.core.set_background(&widget, background.into())?;
        Ok(self)
    }

    /// Watch the editor contents; called after every change.
    pub fn watch<F>(&mut self, watcher: F) -> Result<&mut Self>
    where
        F: Fn(&str) + 'static,
    {
        self.core.ensure_building()?;
        let watcher: TextWatcher = Rc::new(watcher);
        self.core.widget.add_text_watcher(watcher);
        Ok(self)
    }
}

/// Editor defaults shared by all input kinds.
pub(crate) fn apply_input_defaults(core: &ItemCore) -> Result<()> {
    core.widget.set_single_line(true);
    core.widget.set_input_type(InputType::TextCapSentences);
    if let Some(background) = core.config.input_background {
        core.set_background(&core.widget, background)?;
    }
    Ok(())
}

impl ItemState for InputItem {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }
}

impl Item for InputItem {}
impl LineDecorated for InputItem {}
impl TextStyled for InputItem {}
impl IconDecorated for InputItem {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use formic_core::{Color, HeadlessToolkit};
    use std::cell::RefCell;

    fn form_with(config: Config) -> Form {
        let toolkit = Rc::new(HeadlessToolkit::new());
        let container = toolkit.container();
        config.bind(toolkit, &container).unwrap()
    }

    #[test]
    fn input_starts_single_line_with_cap_sentences() {
        let form = form_with(Config::default());
        let input = form.input().unwrap();
        assert!(input.core().widget.is_single_line());
        assert_eq!(
            input.core().widget.input_type(),
            Some(InputType::TextCapSentences)
        );
    }

    #[test]
    fn config_input_background_lands_on_the_editor() {
        let form = form_with(Config::builder().input_background(Color::WHITE).build());
        let input = form.input().unwrap();
        assert_eq!(
            input.core().widget.background(),
            Some(Background::Color(Color::WHITE))
        );
    }

    #[test]
    fn trimmed_input_strips_whitespace() {
        let form = form_with(Config::default());
        let mut input = form.input().unwrap();
        input.text("  hello  ").unwrap();
        assert_eq!(input.input(), "  hello  ");
        assert_eq!(input.trimmed_input(), "hello");
    }

    #[test]
    fn watcher_sees_text_changes() {
        let form = form_with(Config::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);

        let mut input = form.input().unwrap();
        input
            .watch(move |text| log.borrow_mut().push(text.to_string()))
            .unwrap();
        let view = input.build().unwrap();

        view.set_text("a");
        view.set_text("ab");
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn input_type_override() {
        let form = form_with(Config::default());
        let mut input = form.input().unwrap();
        input.input_type(InputType::Email).unwrap();
        assert_eq!(input.core().widget.input_type(), Some(InputType::Email));
    }
}
