use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );
        register(
            Action::ToggleTheme,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
            true,
        );

        register(
            Action::PreviousImage,
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            true,
        );
        register(
            Action::PreviousImage,
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NextImage,
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NextImage,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            false,
        );

        register(
            Action::NextTab,
            KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::PreviousTab,
            KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE),
            true,
        );

        register(
            Action::FocusNext,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        register(
            Action::FocusPrevious,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(
            Action::FocusPrevious,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            false,
        );
        register(
            Action::Submit,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Cancel,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );

        for (i, digit) in ('1'..='9').enumerate() {
            register(
                Action::ToggleAccordion(i),
                KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE),
                true,
            );
        }

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, Action::Quit ; "q quits")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit ; "ctrl c quits")]
    #[test_case(KeyCode::Char('t'), KeyModifiers::NONE, Action::ToggleTheme ; "t toggles theme")]
    #[test_case(KeyCode::Char('h'), KeyModifiers::NONE, Action::PreviousImage ; "h previous image")]
    #[test_case(KeyCode::Right, KeyModifiers::NONE, Action::NextImage ; "right next image")]
    #[test_case(KeyCode::BackTab, KeyModifiers::SHIFT, Action::FocusPrevious ; "backtab focus previous")]
    #[test_case(KeyCode::Char('3'), KeyModifiers::NONE, Action::ToggleAccordion(2) ; "digit toggles section")]
    fn test_find_action(code: KeyCode, modifiers: KeyModifiers, expected: Action) {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyEvent::new(code, modifiers)),
            Some(expected)
        );
    }

    #[test]
    fn test_unbound_key() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_display_binding_is_primary() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.get(Action::Quit),
            Some(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
        );
    }
}
