//! Screen composition and the mount/refresh/dismount lifecycle.

use std::io::{self, Write};

use crossterm::event::KeyEvent;

use super::ansi::{CLEAR_ALL, CURSOR_HIDE, CURSOR_HOME, CURSOR_SHOW};
use super::element::Element;
use super::error::UiError;
use super::signal::UpdateSignal;

/// Below this height a partial (cursor-home) refresh can leave stale rows
/// from the previous frame on screen, so a full clear is used instead.
const MIN_HEIGHT_FOR_PARTIAL_REFRESH: u16 = 22;

/// A complete terminal view: an ordered stack of elements of which exactly
/// one handles keyboard input.
pub struct Screen {
    elements: Vec<Element>,
    interactive_index: usize,
    needs_full_refresh: bool,
}

impl Screen {
    /// Compose a screen. Fails unless exactly one element is interactive, so
    /// input routing is never ambiguous.
    pub fn new(elements: Vec<Element>) -> Result<Self, UiError> {
        let mut interactive_index = None;
        for (i, element) in elements.iter().enumerate() {
            if matches!(element, Element::Interactive(_)) {
                if interactive_index.is_some() {
                    return Err(UiError::MultipleInteractiveElements);
                }
                interactive_index = Some(i);
            }
        }
        let interactive_index = interactive_index.ok_or(UiError::NoInteractiveElement)?;
        Ok(Self {
            elements,
            interactive_index,
            needs_full_refresh: false,
        })
    }

    /// Hide the cursor, clear the terminal and render every element in
    /// order.
    pub fn mount(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{CURSOR_HIDE}{CLEAR_ALL}")?;
        self.render(out)?;
        out.flush()
    }

    /// Restore the cursor and clear the terminal.
    pub fn dismount(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{CURSOR_SHOW}{CLEAR_ALL}")?;
        out.flush()
    }

    /// Redraw, choosing full clear vs cursor-home from the sticky flag and
    /// the current terminal height.
    pub fn refresh(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if self.should_do_full_refresh(terminal_height()) {
            write!(out, "{CLEAR_ALL}")?;
        } else {
            write!(out, "{CURSOR_HOME}")?;
        }
        self.render(out)?;
        out.flush()
    }

    /// Forward a keypress to the interactive element, latching its
    /// full-refresh request for the next [`Screen::refresh`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<UpdateSignal, UiError> {
        let element = match &mut self.elements[self.interactive_index] {
            Element::Interactive(i) => i,
            Element::Static(_) => unreachable!("interactive_index always points at an interactive element"),
        };
        let signal = element.handle_key(key)?;
        if signal.needs_full_refresh {
            self.needs_full_refresh = true;
        }
        Ok(signal)
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for element in &self.elements {
            element.render(out)?;
        }
        Ok(())
    }

    /// The stickiness is deliberately one step delayed: the decision returns
    /// the previously latched flag OR the fresh height check, then stores
    /// the fresh check. A terminal that just shrank therefore forces the
    /// *next* refresh to be full as well, avoiding a one-frame artifact.
    fn should_do_full_refresh(&mut self, height: u16) -> bool {
        let latched = self.needs_full_refresh;
        self.needs_full_refresh = height < MIN_HEIGHT_FOR_PARTIAL_REFRESH;
        latched || self.needs_full_refresh
    }
}

fn terminal_height() -> u16 {
    crossterm::terminal::size()
        .map(|(_, rows)| rows)
        .unwrap_or(MIN_HEIGHT_FOR_PARTIAL_REFRESH - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::element::{Acknowledge, Text};
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn screen_requires_an_interactive_element() {
        let err = Screen::new(vec![Text::new("hello")]).err().unwrap();
        assert!(matches!(err, UiError::NoInteractiveElement));
    }

    #[test]
    fn screen_rejects_two_interactive_elements() {
        let err = Screen::new(vec![Acknowledge::new(), Acknowledge::new()])
            .err()
            .unwrap();
        assert!(matches!(err, UiError::MultipleInteractiveElements));
    }

    #[test]
    fn screen_accepts_exactly_one_interactive_element() {
        let screen = Screen::new(vec![Text::new("hello"), Acknowledge::new()]);
        assert!(screen.is_ok());
    }

    #[test]
    fn mount_hides_cursor_and_clears() {
        let screen = Screen::new(vec![Acknowledge::new()]).unwrap();
        let mut buf = Vec::new();
        screen.mount(&mut buf).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.starts_with(&format!("{CURSOR_HIDE}{CLEAR_ALL}")));
        assert!(rendered.contains("Press any key"));
    }

    #[test]
    fn dismount_restores_cursor() {
        let screen = Screen::new(vec![Acknowledge::new()]).unwrap();
        let mut buf = Vec::new();
        screen.dismount(&mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with(CURSOR_SHOW));
    }

    #[test]
    fn short_terminal_forces_full_refresh_with_one_step_stickiness() {
        let mut screen = Screen::new(vec![Acknowledge::new()]).unwrap();

        // Tall terminal, nothing latched: partial refresh.
        assert!(!screen.should_do_full_refresh(30));
        // Terminal shrank: full refresh, and the flag latches.
        assert!(screen.should_do_full_refresh(10));
        // Terminal grew back, but the latch still forces one more full
        // refresh before partial refreshes resume.
        assert!(screen.should_do_full_refresh(30));
        assert!(!screen.should_do_full_refresh(30));
    }

    #[test]
    fn element_signal_latches_full_refresh() {
        let mut screen = Screen::new(vec![crate::ui::TextInput::new("Name", "ab", false)]).unwrap();
        let signal = screen
            .handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE))
            .unwrap();
        assert!(signal.needs_full_refresh);
        assert!(screen.should_do_full_refresh(30));
    }
}
