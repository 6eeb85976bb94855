//! A Material Design 3 date picker for the Tessera UI framework.
//!
//! # Usage
//!
//! The crate is built on top of [`tessera-components`]; register that crate's
//! pipelines in your entry point and provide a `MaterialTheme` as usual.
//!
//! ```no_run
//! use tessera_components::theme::{MaterialTheme, material_theme};
//! use tessera_datepicker::date_picker::{DatePickerFieldArgs, date_picker_field};
//!
//! fn app() {
//!     material_theme(MaterialTheme::default, || {
//!         date_picker_field(&DatePickerFieldArgs::default());
//!     });
//! }
//!
//! tessera_ui::entry!(app, pipelines = [tessera_components]);
//! ```
//!
//! The widget comes in two layers: [`date_picker`](date_picker::date_picker)
//! renders the bare calendar surface, while
//! [`date_picker_field`](date_picker::date_picker_field) wraps it in a
//! read-only input field that expands the calendar on click. The underlying
//! month grid math lives in the [`calendar`] module and can be used on its
//! own.
//!
//! [`tessera-components`]: https://crates.io/crates/tessera-components
#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar;
pub mod date_picker;
