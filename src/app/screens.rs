//! Screen constructors shared across the application.

use std::rc::Rc;

use crate::client::{PagedResult, Record};
use crate::ui::{
    Acknowledge, ColumnSpec, Colour, Element, ListAction, ListTable, ListTableOptions, Menu,
    Screen, Text, TextInput, Title, UiError,
};

pub const CONFIRM_YES: &str = "Yes";
pub const CONFIRM_NO: &str = "No";

/// Red ERROR banner, the message (periods expanded to line breaks for
/// readability), any key to continue.
pub fn error_screen(message: &str) -> Result<Screen, UiError> {
    let readable = message.replace(". ", ".\n");
    Screen::new(vec![
        Title::new("Error", Colour::RED),
        Text::new(readable),
        Acknowledge::new(),
    ])
}

pub fn info_screen(message: &str) -> Result<Screen, UiError> {
    Screen::new(vec![
        Title::new("Info", Colour::BLUE),
        Text::new(message),
        Acknowledge::new(),
    ])
}

pub fn success_screen(message: &str) -> Result<Screen, UiError> {
    Screen::new(vec![
        Title::new("Success", Colour::GREEN),
        Text::new(message),
        Acknowledge::new(),
    ])
}

/// Yes/No menu under a confirmation banner.
pub fn confirmation_screen(message: &str) -> Result<Screen, UiError> {
    Screen::new(vec![
        Title::new("Confirmation Required", Colour::PURPLE),
        Text::new(message),
        Menu::new(vec![CONFIRM_YES.to_string(), CONFIRM_NO.to_string()])?,
    ])
}

/// A titled single-field input screen.
pub fn text_input_screen(
    title: &str,
    text: &str,
    field_name: &str,
    value: &str,
    required: bool,
) -> Result<Screen, UiError> {
    Screen::new(vec![
        Title::new(title, Colour::PURPLE),
        Text::new(text),
        TextInput::new(field_name, value, required),
    ])
}

/// A titled menu screen; emits the chosen option's text.
pub fn menu_screen(title: &str, text: &str, options: Vec<String>) -> Result<Screen, UiError> {
    Screen::new(vec![
        Title::new(title, Colour::PURPLE),
        Text::new(text),
        Menu::new(options)?,
    ])
}

/// The record listing screen: title plus the interactive table.
pub fn list_screen<R: Record + 'static>(
    title: &str,
    columns: Vec<ColumnSpec<R>>,
    page: Rc<PagedResult<R>>,
    actions: Vec<ListAction>,
) -> Result<Screen, UiError> {
    let table: Element = ListTable::new(ListTableOptions {
        columns,
        page,
        actions,
    })?;
    Screen::new(vec![Title::new(title, Colour::PURPLE), table])
}
