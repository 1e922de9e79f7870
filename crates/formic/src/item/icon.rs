//! Compound-icon slots and their build-time resolution.

use serde::{Deserialize, Serialize};

use formic_core::{Color, Drawable, DrawableRef, Result, Toolkit, View};

use crate::config::Config;

/// One of the four compound-icon positions on a text-bearing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Before the text.
    Start,
    /// Above the text.
    Top,
    /// After the text.
    End,
    /// Below the text.
    Bottom,
}

impl Position {
    /// Slot index in the native compound-drawable array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Start => 0,
            Self::Top => 1,
            Self::End => 2,
            Self::Bottom => 3,
        }
    }
}

/// The stored state of one icon position.
///
/// A slot with no drawable renders nothing regardless of its color or
/// visibility. Slots are replaced wholesale: the last write to a position
/// wins, partial updates never layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IconSlot {
    /// Drawable to show, `None` for an empty slot.
    pub drawable: Option<DrawableRef>,
    /// Tint to apply when visible, `None` for the drawable's native colors.
    pub color: Option<Color>,
    /// When false the drawable renders at zero opacity but keeps its
    /// intrinsic bounds, preserving text alignment across sibling items.
    pub visible: bool,
}

/// The four icon slots of a text-bearing item, indexed by [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IconSlots([IconSlot; 4]);

impl IconSlots {
    /// Replace the slot at `position`.
    pub fn set(&mut self, position: Position, slot: IconSlot) {
        self.0[position.index()] = slot;
    }

    /// The stored slot at `position`.
    #[must_use]
    pub fn get(&self, position: Position) -> IconSlot {
        self.0[position.index()]
    }

    /// Resolve the slots against the toolkit and commit them to the view.
    ///
    /// For each occupied slot the drawable is resolved, rendered at zero
    /// opacity when the slot is invisible, tinted when visible and a color is
    /// present, and assigned to the matching compound-drawable position.
    /// Empty slots clear their position. The shared compound-drawable padding
    /// from the config applies uniformly to all four slots.
    pub(crate) fn resolve(
        &self,
        toolkit: &dyn Toolkit,
        config: &Config,
        view: &View,
    ) -> Result<()> {
        let mut drawables: [Option<Drawable>; 4] = [None; 4];
        for (index, slot) in self.0.iter().enumerate() {
            let Some(resource) = slot.drawable else {
                continue;
            };
            let mut drawable = toolkit.resolve_drawable(resource)?;
            if !slot.visible {
                drawable = drawable.with_alpha(0.0);
            } else if let Some(color) = slot.color {
                drawable = drawable.tinted(color);
            }
            drawables[index] = Some(drawable);
        }
        view.set_compound_drawables(drawables);

        if let Some(padding) = config.icon_padding {
            view.set_compound_drawable_padding(padding.resolve(toolkit)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formic_core::{HeadlessToolkit, ViewKind};
    use proptest::prelude::*;

    fn toolkit_with_drawable(id: u32) -> HeadlessToolkit {
        let mut toolkit = HeadlessToolkit::new();
        toolkit.register_drawable(DrawableRef(id), 24, 24);
        toolkit
    }

    #[test]
    fn slots_default_to_empty_and_hidden() {
        let slots = IconSlots::default();
        for position in [Position::Start, Position::Top, Position::End, Position::Bottom] {
            let slot = slots.get(position);
            assert_eq!(slot.drawable, None);
            assert!(!slot.visible);
        }
    }

    #[test]
    fn last_write_per_position_wins_wholesale() {
        let mut slots = IconSlots::default();
        slots.set(
            Position::Start,
            IconSlot {
                drawable: Some(DrawableRef(1)),
                color: None,
                visible: true,
            },
        );
        // A color-only write replaces the slot instead of layering.
        slots.set(
            Position::Start,
            IconSlot {
                drawable: None,
                color: Some(Color::WHITE),
                visible: true,
            },
        );
        assert_eq!(slots.get(Position::Start).drawable, None);
    }

    #[test]
    fn invisible_slot_resolves_to_zero_alpha_with_bounds() {
        let toolkit = toolkit_with_drawable(5);
        let view = View::new(ViewKind::Text);
        let mut slots = IconSlots::default();
        slots.set(
            Position::End,
            IconSlot {
                drawable: Some(DrawableRef(5)),
                color: Some(Color::WHITE),
                visible: false,
            },
        );
        slots.resolve(&toolkit, &Config::default(), &view).unwrap();

        let drawable = view.compound_drawable(Position::End.index()).unwrap();
        assert_eq!(drawable.alpha, 0.0);
        assert_eq!(drawable.tint, None);
        assert_eq!(drawable.intrinsic_width, 24);
    }

    #[test]
    fn empty_slot_renders_nothing_despite_color_and_visibility() {
        let toolkit = HeadlessToolkit::new();
        let view = View::new(ViewKind::Text);
        let mut slots = IconSlots::default();
        slots.set(
            Position::Top,
            IconSlot {
                drawable: None,
                color: Some(Color::WHITE),
                visible: true,
            },
        );
        slots.resolve(&toolkit, &Config::default(), &view).unwrap();
        assert_eq!(view.compound_drawable(Position::Top.index()), None);
    }

    proptest! {
        /// Setting one position never alters the stored state of another.
        #[test]
        fn slot_independence(a in 0usize..4, b in 0usize..4, id in 1u32..100) {
            prop_assume!(a != b);
            let positions = [Position::Start, Position::Top, Position::End, Position::Bottom];
            let mut slots = IconSlots::default();
            let before = slots.get(positions[b]);
            slots.set(
                positions[a],
                IconSlot {
                    drawable: Some(DrawableRef(id)),
                    color: None,
                    visible: true,
                },
            );
            prop_assert_eq!(slots.get(positions[b]), before);
        }
    }
}
