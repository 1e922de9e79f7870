//! Static text item.

use formic_core::{templates, Result};

use crate::form::Form;
use crate::item::core::ItemCore;
use crate::item::{IconDecorated, Item, ItemState, LineDecorated, TextStyled};

/// A static text element with a trailing separator and icon slots.
pub struct TextItem {
    core: ItemCore,
}

impl TextItem {
    pub(crate) fn new(form: &Form) -> Result<Self> {
        let view = form.toolkit().inflate(templates::TEXT)?;
        let mut core = ItemCore::new(
            form.toolkit_handle(),
            form.config_handle(),
            form.container().clone(),
            view,
        )
        .with_icons();
        core.apply_text_defaults(true)?;
        core.attach_line()?;
        Ok(Self { core })
    }
}

impl ItemState for TextItem {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }
}

impl Item for TextItem {}
impl LineDecorated for TextItem {}
impl TextStyled for TextItem {}
impl IconDecorated for TextItem {}
