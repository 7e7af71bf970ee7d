//! Terminal screen and interaction engine.
//!
//! A composition model for renderable UI elements with exactly one
//! input-handling element per screen, a synchronous keyboard-driven event
//! loop, and a selective full/partial refresh strategy. The terminal is
//! driven with raw ANSI sequences; `crossterm` is used only for raw-mode
//! keyboard events and terminal size.
//!
//! Layering, leaf-first: [`ansi`] (static escape data), [`layout`] (pure
//! width computation), the elements ([`Menu`], [`TextInput`], [`ListTable`],
//! [`element::Acknowledge`], [`element::Text`], [`element::Title`]),
//! [`Screen`] (composition + lifecycle) and [`Controller`] (the loop).

pub mod ansi;
mod controller;
mod element;
mod error;
pub mod layout;
mod list_table;
mod menu;
mod screen;
mod signal;
mod text_input;

pub use ansi::Colour;
pub use controller::{Controller, Navigator};
pub use element::{Acknowledge, Element, Interactive, Render, Text, Title};
pub use error::UiError;
pub use list_table::{ColumnSpec, ListAction, ListTable, ListTableOptions};
pub use menu::Menu;
pub use screen::Screen;
pub use signal::UpdateSignal;
pub use text_input::TextInput;
