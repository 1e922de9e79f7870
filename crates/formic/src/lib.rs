//! Declarative form building over an abstract view toolkit.
//!
//! Formic turns "inflate, style, wire up, append" boilerplate into three
//! steps: build a [`Config`] holding the shared styling defaults, bind it to
//! a container to get a [`Form`], then create items fluently and call
//! `build()` on each one to append it.
//!
//! ```
//! use std::rc::Rc;
//!
//! use formic::item::{Item, TextStyled};
//! use formic::{Config, HeadlessToolkit};
//!
//! # fn main() -> formic::Result<()> {
//! let toolkit = Rc::new(HeadlessToolkit::new());
//! let container = toolkit.container();
//!
//! let form = Config::builder()
//!     .show_line(false)
//!     .build()
//!     .bind(toolkit, &container)?;
//!
//! form.text()?.text("Welcome")?.build()?;
//! form.space()?.build()?;
//! form.button()?.text("Continue")?.build()?;
//!
//! // The text item's separator still occupies a (hidden) child slot.
//! assert_eq!(container.child_count(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! Items are append-only and two-phase: every fluent call is rejected with
//! [`Error::ItemAlreadyFinalized`] once `build()` has run.
//!
//! [`Error::ItemAlreadyFinalized`]: formic_core::Error::ItemAlreadyFinalized

pub mod config;
pub mod form;
pub mod item;

pub use config::{Config, ConfigBuilder};
pub use form::Form;

pub use formic_core::{
    templates, Background, Color, ColorRef, DimenRef, Drawable, DrawableRef, Ellipsize, Error,
    FontStyle, Gravity, HeadlessToolkit, LayoutSize, Length, Padding, Result, Toolkit, Typeface,
    View, ViewKind, Visibility,
};
