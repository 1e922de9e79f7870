//! References into the host toolkit's resource tables.
//!
//! Resources are identified by opaque numeric ids and only become concrete
//! values (colors, pixel sizes, drawables) through a [`Toolkit`] lookup.
//!
//! [`Toolkit`]: crate::Toolkit

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Reference to a color resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorRef(pub u32);

/// Reference to a dimension resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimenRef(pub u32);

/// Reference to a drawable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableRef(pub u32);

/// A view background: either a resolved color or a drawable resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Background {
    /// Solid color fill.
    Color(Color),
    /// Drawable looked up from the toolkit.
    Res(DrawableRef),
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<DrawableRef> for Background {
    fn from(res: DrawableRef) -> Self {
        Self::Res(res)
    }
}

/// Which resource table a reference points into, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Color table.
    Color,
    /// Dimension table.
    Dimension,
    /// Drawable table.
    Drawable,
    /// View template table.
    Template,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Color => "color",
            Self::Dimension => "dimension",
            Self::Drawable => "drawable",
            Self::Template => "template",
        };
        f.write_str(name)
    }
}
