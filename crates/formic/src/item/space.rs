//! Vertical spacer between form items.

use formic_core::{templates, LayoutSize, Result};

use crate::form::Form;
use crate::item::core::ItemCore;
use crate::item::{Item, ItemState};

/// A spacer: a plain view sized and colored by the config's space defaults.
pub struct SpaceItem {
    core: ItemCore,
}

impl SpaceItem {
    pub(crate) fn new(form: &Form) -> Result<Self> {
        let view = form.toolkit().inflate(templates::SPACE)?;
        let core = ItemCore::new(
            form.toolkit_handle(),
            form.config_handle(),
            form.container().clone(),
            view,
        );

        let height = core.config.space_height.resolve(core.toolkit.as_ref())?;
        core.view
            .set_layout(LayoutSize::MatchParent, LayoutSize::Px(height), None);
        let view = core.view.clone();
        core.set_background(&view, core.config.space_background)?;

        Ok(Self { core })
    }
}

impl ItemState for SpaceItem {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }
}

impl Item for SpaceItem {}
