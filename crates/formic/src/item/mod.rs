//! Form item kinds and their fluent capability traits.

pub mod autocomplete;
pub mod button;
#[doc(hidden)]
pub mod core;
pub mod icon;
pub mod input;
pub mod line;
pub mod space;
pub mod switch;
pub mod text;
pub mod text_input;
mod traits;

pub use autocomplete::AutoCompleteInputItem;
pub use button::ButtonItem;
pub use icon::{IconSlot, IconSlots, Position};
pub use input::InputItem;
pub use line::LineItem;
pub use space::SpaceItem;
pub use switch::SwitchItem;
pub use text::TextItem;
pub use text_input::TextInputItem;
pub use traits::{IconDecorated, Item, ItemState, LineDecorated, TextStyled};
