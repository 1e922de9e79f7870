//! Core types and the toolkit boundary for the Formic form builder.
//!
//! This crate provides the value types the form layer styles with:
//! - Color representation: [`Color`]
//! - Unit-aware lengths: [`Length`]
//! - Resource references: [`ColorRef`], [`DimenRef`], [`DrawableRef`]
//! - The native-view stand-in: [`View`]
//! - The host seam: [`Toolkit`], with an in-memory [`HeadlessToolkit`]
//! - The shared error taxonomy: [`Error`]

mod color;
mod drawable;
mod error;
mod headless;
mod length;
mod resource;
mod toolkit;
mod view;

pub use color::{Color, ColorParseError};
pub use drawable::Drawable;
pub use error::{Error, Result};
pub use headless::HeadlessToolkit;
pub use length::Length;
pub use resource::{Background, ColorRef, DimenRef, DrawableRef, ResourceKind};
pub use toolkit::{templates, Toolkit};
pub use view::{
    CheckedChangeHandler, ClickHandler, Ellipsize, FontStyle, Gravity, InputType, LayoutSize,
    Padding, TextWatcher, Typeface, View, ViewKind, Visibility,
};
