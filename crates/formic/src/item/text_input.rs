//! Text editor wrapped in a floating-hint layout.

use formic_core::{templates, Error, Result, ViewKind};

use crate::form::Form;
use crate::item::core::ItemCore;
use crate::item::input::apply_input_defaults;
use crate::item::{IconDecorated, Item, ItemState, LineDecorated, TextStyled};

/// An editor inside a floating-hint wrapper layout.
///
/// The wrapper is what lands in the container; text styling targets the
/// editor child, while the hint and the item background belong to the
/// wrapper.
pub struct TextInputItem {
    core: ItemCore,
}

impl TextInputItem {
    pub(crate) fn new(form: &Form) -> Result<Self> {
        Self::from_template(form, templates::TEXT_INPUT)
    }

    pub(crate) fn from_template(form: &Form, template: &str) -> Result<Self> {
        let view = form.toolkit().inflate(template)?;
        // A wrapper template that inflates without its editor child is a
        // broken template reference as far as callers are concerned.
        let editor = view.child(0).ok_or_else(|| Error::unknown_template(template))?;
        let mut core = ItemCore::new(
            form.toolkit_handle(),
            form.config_handle(),
            form.container().clone(),
            view,
        )
        .with_widget(editor)
        .with_icons();
        core.apply_text_defaults(false)?;
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

    /// Show or hide the password visibility toggle on the wrapper.
    pub fn show_password_toggle(&mut self, shown: bool) -> Result<&mut Self> {
        self.core.ensure_building()?;
        self.core.view.set_shows_password_toggle(shown);
        Ok(self)
    }

    /// Watch the editor contents; called after every change.
    pub fn watch<F>(&mut self, watcher: F) -> Result<&mut Self>
    where
        F: Fn(&str) + 'static,
    {
        self.core.ensure_building()?;
        self.core.widget.add_text_watcher(std::rc::Rc::new(watcher));
        Ok(self)
    }

    pub(crate) fn editor_kind(&self) -> ViewKind {
        self.core.widget.kind()
    }
}

impl ItemState for TextInputItem {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }
}

impl Item for TextInputItem {}
impl LineDecorated for TextInputItem {}

impl TextStyled for TextInputItem {
    /// The hint belongs to the wrapper layout, not the editor child.
    fn hint(&mut self, hint: impl Into<String>) -> Result<&mut Self> {
        self.core.ensure_building()?;
        self.core.view.set_hint(hint);
        Ok(self)
    }
}

impl IconDecorated for TextInputItem {}
