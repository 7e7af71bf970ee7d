//! Single-line text input element.
//!
//! Validation for required fields is handled entirely inside the element: an
//! empty submission re-prompts with an inline message and the loop carries
//! on. Nothing propagates to the controller.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent};

use super::ansi::{Colour, CURSOR_SHOW};
use super::element::{Element, Interactive, Render};
use super::error::UiError;
use super::signal::UpdateSignal;

/// A labelled text field. Printable characters append, Backspace deletes,
/// Enter submits. Required fields refuse an empty submission.
pub struct TextInput {
    field_name: String,
    value: String,
    required: bool,
    error_message: String,
}

impl TextInput {
    pub fn new(field_name: impl Into<String>, value: impl Into<String>, required: bool) -> Element {
        Element::Interactive(Box::new(TextInput {
            field_name: field_name.into(),
            value: value.into(),
            required,
            error_message: String::new(),
        }))
    }

    fn submit(&mut self) -> UpdateSignal {
        if self.required && self.value.is_empty() {
            self.error_message = format!("{} is required", self.field_name);
            return UpdateSignal::proceed();
        }
        UpdateSignal::emit(self.value.clone())
    }

    fn backspace(&mut self) -> UpdateSignal {
        self.value.pop();
        // Deleting leaves a stale glyph behind a cursor-home redraw.
        UpdateSignal::proceed().with_full_refresh()
    }

    fn push_char(&mut self, c: char) -> UpdateSignal {
        self.value.push(c);
        UpdateSignal::proceed()
    }
}

impl Render for TextInput {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        let required_flag = if self.required {
            format!("({})", Colour::RED.paint("*"))
        } else {
            String::new()
        };
        write!(
            out,
            "{CURSOR_SHOW}\r\n{}{}: {}",
            self.field_name, required_flag, self.value
        )?;
        if !self.error_message.is_empty() {
            write!(out, "\r\n\r\n{}", Colour::RED.paint(&self.error_message))?;
        }
        Ok(())
    }
}

impl Interactive for TextInput {
    fn handle_key(&mut self, key: KeyEvent) -> Result<UpdateSignal, UiError> {
        self.error_message.clear();
        let signal = match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.push_char(c),
            _ => UpdateSignal::proceed(),
        };
        Ok(signal)
    }
}
