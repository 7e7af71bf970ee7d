//! Vertical option menu element.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent};

use super::ansi::Colour;
use super::element::{Element, Interactive, Render};
use super::error::UiError;
use super::signal::UpdateSignal;

/// A menu with fewer options than this offers no meaningful choice.
const MINIMUM_OPTIONS: usize = 2;

/// A selectable list of options. Arrow keys move the selection, Enter emits
/// the selected option's text and ends the input loop.
pub struct Menu {
    options: Vec<String>,
    selected: usize,
}

impl Menu {
    pub fn new(options: Vec<String>) -> Result<Element, UiError> {
        if options.len() < MINIMUM_OPTIONS {
            return Err(UiError::TooFewOptions {
                minimum: MINIMUM_OPTIONS,
            });
        }
        Ok(Element::Interactive(Box::new(Menu {
            options,
            selected: 0,
        })))
    }

    fn indicator(is_selected: bool) -> String {
        if is_selected {
            Colour::ORANGE.paint("->")
        } else {
            "  ".to_string()
        }
    }
}

impl Render for Menu {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, option) in self.options.iter().enumerate() {
            write!(out, "{} {}\r\n", Self::indicator(i == self.selected), option)?;
        }
        Ok(())
    }
}

impl Interactive for Menu {
    fn handle_key(&mut self, key: KeyEvent) -> Result<UpdateSignal, UiError> {
        match key.code {
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                Ok(UpdateSignal::proceed())
            }
            KeyCode::Down => {
                if self.selected < self.options.len() - 1 {
                    self.selected += 1;
                }
                Ok(UpdateSignal::proceed())
            }
            KeyCode::Enter => Ok(UpdateSignal::emit(self.options[self.selected].clone())),
            _ => Ok(UpdateSignal::proceed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(menu: &mut Menu, code: KeyCode) -> UpdateSignal {
        menu.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn sample_menu() -> Menu {
        Menu {
            options: vec!["Accounts".into(), "Contacts".into(), "Exit".into()],
            selected: 0,
        }
    }

    #[test]
    fn rejects_fewer_than_two_options() {
        let err = Menu::new(vec!["only".into()]).err().unwrap();
        assert!(matches!(err, UiError::TooFewOptions { minimum: 2 }));
    }

    #[test]
    fn arrows_move_and_clamp() {
        let mut menu = sample_menu();
        press(&mut menu, KeyCode::Up);
        assert_eq!(menu.selected, 0);
        press(&mut menu, KeyCode::Down);
        press(&mut menu, KeyCode::Down);
        press(&mut menu, KeyCode::Down);
        assert_eq!(menu.selected, 2);
    }

    #[test]
    fn enter_emits_selected_option() {
        let mut menu = sample_menu();
        press(&mut menu, KeyCode::Down);
        let signal = press(&mut menu, KeyCode::Enter);
        assert!(!signal.continue_loop);
        assert_eq!(signal.value, "Contacts");
    }

    #[test]
    fn unrecognised_key_is_a_noop() {
        let mut menu = sample_menu();
        let signal = press(&mut menu, KeyCode::Char('z'));
        assert!(signal.continue_loop);
        assert_eq!(menu.selected, 0);
    }
}
