//! Completing text editor inside a floating-hint layout.

use formic_core::{templates, Result, ViewKind};

use crate::form::Form;
use crate::item::core::ItemCore;
use crate::item::text_input::TextInputItem;
use crate::item::{IconDecorated, Item, ItemState, LineDecorated, TextStyled};

/// A text input whose editor offers completion suggestions.
pub struct AutoCompleteInputItem {
    inner: TextInputItem,
}

impl AutoCompleteInputItem {
    pub(crate) fn new(form: &Form) -> Result<Self> {
        let inner = TextInputItem::from_template(form, templates::AUTO_COMPLETE)?;
        debug_assert_eq!(inner.editor_kind(), ViewKind::AutoComplete);
        Ok(Self { inner })
    }

    /// Replace the completion suggestions.
    pub fn suggestions(&mut self, suggestions: Vec<String>) -> Result<&mut Self> {
        self.core().ensure_building()?;
        self.core().widget.set_completions(suggestions);
        Ok(self)
    }

    /// Number of characters typed before completions show.
    ///
    /// A threshold of zero maps to a threshold of one plus opening the list
    /// on touch, since the native editor does not accept zero.
    pub fn threshold(&mut self, threshold: i32) -> Result<&mut Self> {
        self.core().ensure_building()?;
        let widget = &self.core().widget;
        if threshold == 0 {
            widget.set_completion_threshold(1);
            widget.set_completes_on_touch(true);
        } else {
            widget.set_completion_threshold(threshold);
        }
        Ok(self)
    }

    /// The current editor contents.
    #[must_use]
    pub fn input(&self) -> String {
        self.inner.input()
    }

    /// The current editor contents with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed_input(&self) -> String {
        self.inner.trimmed_input()
    }

    /// Show or hide the password visibility toggle on the wrapper.
    pub fn show_password_toggle(&mut self, shown: bool) -> Result<&mut Self> {
        self.inner.show_password_toggle(shown)?;
        Ok(self)
    }

    /// Watch the editor contents; called after every change.
    pub fn watch<F>(&mut self, watcher: F) -> Result<&mut Self>
    where
        F: Fn(&str) + 'static,
    {
        self.inner.watch(watcher)?;
        Ok(self)
    }
}

impl ItemState for AutoCompleteInputItem {
    fn core(&self) -> &ItemCore {
        self.inner.core()
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        self.inner.core_mut()
    }
}

impl Item for AutoCompleteInputItem {}
impl LineDecorated for AutoCompleteInputItem {}

impl TextStyled for AutoCompleteInputItem {
    /// The hint belongs to the wrapper layout, like any wrapped input.
    fn hint(&mut self, hint: impl Into<String>) -> Result<&mut Self> {
        self.inner.hint(hint)?;
        Ok(self)
    }
}

impl IconDecorated for AutoCompleteInputItem {}
