//! The synchronous UI loop.
//!
//! One controller owns the active screen and the keyboard. The loop is
//! single-threaded and blocking: read a key, forward it, repaint or return.
//! Network I/O triggered by a keypress (page advance, CRUD) happens inline;
//! the UI is unresponsive for its duration by design.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;
use tracing::debug;

use super::error::UiError;
use super::screen::Screen;
use super::signal::UpdateSignal;

/// Puts the terminal into raw mode on construction and guarantees it is
/// restored on every exit path, including panics and error returns.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Result<Self, UiError> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// The screen-driving seam. [`Controller`] is the production
/// implementation; tests substitute a scripted navigator.
pub trait Navigator {
    /// Display `screen`, drive its input loop and return the final signal.
    fn navigate_to(&mut self, screen: Screen) -> Result<UpdateSignal, UiError>;
}

/// Owns the active [`Screen`] and drives the keyboard event loop.
pub struct Controller {
    current: Option<Screen>,
    _raw_mode: RawModeGuard,
}

impl Controller {
    /// Acquire the keyboard (raw mode). Held until the controller is
    /// dropped.
    pub fn new() -> Result<Self, UiError> {
        Ok(Self {
            current: None,
            _raw_mode: RawModeGuard::acquire()?,
        })
    }
}

impl Navigator for Controller {
    /// Dismount the previous screen (if any), mount `screen`, then block on
    /// keyboard input until the screen's interactive element ends the loop.
    /// Returns the final signal.
    fn navigate_to(&mut self, mut screen: Screen) -> Result<UpdateSignal, UiError> {
        let mut out = io::stdout();
        if let Some(previous) = self.current.take() {
            previous.dismount(&mut out)?;
        }
        screen.mount(&mut out)?;
        let result = await_signal(&mut screen, &mut out);
        // The screen stays owned either way so Drop can dismount it.
        self.current = Some(screen);
        result
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(screen) = self.current.take() {
            let _ = screen.dismount(&mut io::stdout());
        }
    }
}

fn await_signal(screen: &mut Screen, out: &mut dyn Write) -> Result<UpdateSignal, UiError> {
    loop {
        let key = next_key_press()?;
        let signal = screen.handle_key(key)?;
        if !signal.continue_loop {
            debug!(value = %signal.value, "screen finished");
            return Ok(signal);
        }
        screen.refresh(out)?;
    }
}

/// Block until the next key *press* (release/repeat events and non-key
/// events such as resize are skipped; resizes are picked up by the next
/// refresh decision).
fn next_key_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}
