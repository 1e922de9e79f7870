//! Standalone separator line.

use formic_core::{templates, Result};

use crate::form::Form;
use crate::item::core::{style_line, ItemCore};
use crate::item::{Item, ItemState, LineDecorated};

/// A separator line on its own, not attached to another item.
///
/// Line operations target the item's own view, and unlike attached
/// separators it starts visible regardless of the config's line flag.
pub struct LineItem {
    core: ItemCore,
}

impl LineItem {
    pub(crate) fn new(form: &Form) -> Result<Self> {
        let view = form.toolkit().inflate(templates::LINE)?;
        let core = ItemCore::new(
            form.toolkit_handle(),
            form.config_handle(),
            form.container().clone(),
            view,
        );
        style_line(&core.view, &core.config, core.toolkit.as_ref())?;
        Ok(Self { core })
    }
}

impl ItemState for LineItem {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }
}

impl Item for LineItem {}
impl LineDecorated for LineItem {}
