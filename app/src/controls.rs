use chargrid::input::{Input, KeyboardInput};
use maplit::btreemap;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    /// Starts the sound player from the menu and exits it back again.
    Activate,
}

pub struct Controls {
    keys: BTreeMap<KeyboardInput, AppInput>,
}

impl Default for Controls {
    fn default() -> Self {
        let keys = btreemap![
            KeyboardInput::Char(' ') => AppInput::Activate,
        ];
        Self { keys }
    }
}

impl Controls {
    pub fn get(&self, input: Input) -> Option<AppInput> {
        match input {
            Input::Keyboard(keyboard_input) => self.keys.get(&keyboard_input).cloned(),
            Input::Mouse(_) => None,
        }
    }
}
