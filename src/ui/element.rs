//! Element capability traits and the static Text/Title elements.
//!
//! Screens are composed from a small closed set of elements. Every element
//! can render itself; at most one element per screen additionally handles
//! keyboard input. The split is expressed as two traits and an enum so that
//! screen composition can be checked at construction time.
//!
//! Rendering writes `\r\n` line endings because the controller holds the
//! terminal in raw mode for the lifetime of the session.

use std::io::{self, Write};

use crossterm::event::KeyEvent;

use super::ansi::Colour;
use super::error::UiError;
use super::signal::UpdateSignal;

/// A UI element that can draw itself to the terminal.
pub trait Render {
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A UI element that also consumes keyboard input. Exactly one per screen.
pub trait Interactive: Render {
    /// Process one keypress and report what should happen next.
    fn handle_key(&mut self, key: KeyEvent) -> Result<UpdateSignal, UiError>;
}

/// A screen building block: either purely visual or the screen's single
/// input handler.
pub enum Element {
    Static(Box<dyn Render>),
    Interactive(Box<dyn Interactive>),
}

impl Element {
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Element::Static(r) => r.render(out),
            Element::Interactive(i) => i.render(out),
        }
    }
}

/// Plain text content followed by a blank line.
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Element {
        Element::Static(Box::new(Text {
            content: content.into(),
        }))
    }
}

impl Render for Text {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in self.content.lines() {
            write!(out, "{line}\r\n")?;
        }
        write!(out, "\r\n")
    }
}

/// An uppercased, coloured heading.
pub struct Title {
    content: String,
}

impl Title {
    pub fn new(text: &str, colour: Colour) -> Element {
        Element::Static(Box::new(Title {
            content: colour.paint(&text.to_uppercase()),
        }))
    }
}

impl Render for Title {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}\r\n\r\n", self.content)
    }
}

/// "Press any key to continue"; any keypress ends the input loop.
pub struct Acknowledge;

impl Acknowledge {
    pub fn new() -> Element {
        Element::Interactive(Box::new(Acknowledge))
    }
}

impl Render for Acknowledge {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "\r\n\r\nPress any key to continue")
    }
}

impl Interactive for Acknowledge {
    fn handle_key(&mut self, _key: KeyEvent) -> Result<UpdateSignal, UiError> {
        Ok(UpdateSignal::done())
    }
}
