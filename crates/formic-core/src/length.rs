//! Lengths expressed in the units the host toolkit understands.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resource::DimenRef;
use crate::toolkit::Toolkit;

/// A length that still needs the toolkit to become a pixel value.
///
/// One explicit value per property replaces the parallel dp/px/resource-id
/// fields (and their precedence rules) that sentinel-based configurations
/// tend to grow. `Px(0)` is a real zero, distinct from "unset", which is
/// `Option::<Length>::None` at the use site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// Device pixels, used as-is.
    Px(i32),
    /// Density-independent pixels, scaled by the toolkit density.
    Dp(f32),
    /// A dimension resource looked up from the toolkit.
    Res(DimenRef),
}

impl Length {
    /// Resolve to device pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResourceReference`] when a `Res` reference is
    /// not present in the toolkit's dimension table.
    ///
    /// [`Error::InvalidResourceReference`]: crate::Error::InvalidResourceReference
    pub fn resolve(self, toolkit: &dyn Toolkit) -> Result<i32> {
        match self {
            Self::Px(px) => Ok(px),
            Self::Dp(dp) => Ok(toolkit.dp_to_px(dp)),
            Self::Res(dimen) => toolkit.resolve_dimension(dimen),
        }
    }
}

impl From<i32> for Length {
    fn from(px: i32) -> Self {
        Self::Px(px)
    }
}

impl From<f32> for Length {
    fn from(dp: f32) -> Self {
        Self::Dp(dp)
    }
}

impl From<DimenRef> for Length {
    fn from(dimen: DimenRef) -> Self {
        Self::Res(dimen)
    }
}
