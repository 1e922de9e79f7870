//! Error taxonomy shared across the form builder.
//!
//! All variants are programming errors (caller misuse), not recoverable
//! runtime conditions; nothing is retried. An item either fully finalizes and
//! lands in its container, or the container is untouched.

use thiserror::Error;

use crate::resource::ResourceKind;

/// Errors surfaced by the form builder and the toolkit boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A color, dimension, drawable, or template reference does not resolve.
    ///
    /// Surfaced immediately from the resolving call, never deferred.
    #[error("{kind} reference {name} does not resolve")]
    InvalidResourceReference {
        /// Which resource table was consulted.
        kind: ResourceKind,
        /// The id or name that failed to resolve.
        name: String,
    },

    /// A fluent call or a repeated `build()` on an already finalized item.
    #[error("item already finalized")]
    ItemAlreadyFinalized,

    /// The view bound as a container is absent or cannot hold children.
    #[error("container view is absent or cannot hold children")]
    NullContainer,
}

impl Error {
    /// Shorthand for an unresolved numeric resource id.
    #[must_use]
    pub fn unresolved(kind: ResourceKind, id: u32) -> Self {
        Self::InvalidResourceReference {
            kind,
            name: id.to_string(),
        }
    }

    /// Shorthand for an unknown template name.
    #[must_use]
    pub fn unknown_template(name: &str) -> Self {
        Self::InvalidResourceReference {
            kind: ResourceKind::Template,
            name: name.to_string(),
        }
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
