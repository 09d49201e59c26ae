use crate::{
    button::{Button, ButtonAction},
    controls::{AppInput, Controls},
    screen::{Screen, ScreenRequest},
    settings::SharedSettings,
    text,
};
use chargrid::input::{keys, KeyboardInput, MouseButton, MouseInput};
use chargrid::prelude::*;

const FRAME_RATE_BUTTON_ROW: i32 = 21;
const SOUND_CHANCE_BUTTON_ROW: i32 = 25;

fn frame_rate_label(value: &str) -> String {
    format!("fps: {}", value)
}

fn sound_chance_label(value: &str) -> String {
    format!("chance of sound per frame: 1/{}", value)
}

/// The settings menu. Clicking a button selects it and seeds the edit buffer
/// with the digits currently shown in its label; digits and backspace then
/// edit the buffer, and every non-empty all-digit buffer is committed to the
/// corresponding settings field as it is typed.
pub struct MainMenuScreen {
    settings: SharedSettings,
    controls: Controls,
    buttons: Vec<Button>,
    selected: Option<usize>,
    input_buffer: String,
}

impl MainMenuScreen {
    pub fn new(settings: SharedSettings, controls: Controls) -> Self {
        let centre_x = (crate::GRID_WIDTH / 2) as i32;
        let (frame_rate, sound_one_in) = {
            let settings = settings.borrow();
            (settings.frame_rate, settings.sound_one_in)
        };
        let buttons = vec![
            Button::new(
                frame_rate_label(&frame_rate.to_string()),
                Coord::new(centre_x, FRAME_RATE_BUTTON_ROW),
                ButtonAction::FrameRate,
            ),
            Button::new(
                sound_chance_label(&sound_one_in.to_string()),
                Coord::new(centre_x, SOUND_CHANCE_BUTTON_ROW),
                ButtonAction::SoundChance,
            ),
        ];
        Self {
            settings,
            controls,
            buttons,
            selected: None,
            input_buffer: String::new(),
        }
    }

    /// Any press clears the current selection first; a hit then selects that
    /// button and seeds the buffer from every digit in its label, in order.
    fn select_at(&mut self, coord: Coord) {
        self.selected = None;
        self.input_buffer.clear();
        for (index, button) in self.buttons.iter().enumerate() {
            if button.contains(coord) {
                self.selected = Some(index);
                self.input_buffer = button.label().chars().filter(char::is_ascii_digit).collect();
                break;
            }
        }
    }

    fn edit(&mut self, key: KeyboardInput) {
        let Some(index) = self.selected else {
            return;
        };
        match key {
            keys::BACKSPACE => {
                self.input_buffer.pop();
            }
            KeyboardInput::Char(c) if c.is_ascii_digit() => self.input_buffer.push(c),
            _ => return,
        }
        self.refresh_selected_label(index);
        self.commit_buffer(index);
    }

    /// An empty buffer displays as a literal `0` but is never committed.
    fn refresh_selected_label(&mut self, index: usize) {
        let display = if self.input_buffer.is_empty() {
            "0"
        } else {
            self.input_buffer.as_str()
        };
        let button = &mut self.buttons[index];
        let label = match button.action() {
            ButtonAction::FrameRate => frame_rate_label(display),
            ButtonAction::SoundChance => sound_chance_label(display),
        };
        button.update_label(label);
    }

    fn commit_buffer(&self, index: usize) {
        if self.input_buffer.is_empty() || !self.input_buffer.chars().all(|c| c.is_ascii_digit()) {
            return;
        }
        // Buffers longer than u32 saturate rather than being dropped.
        let value = self.input_buffer.parse::<u32>().unwrap_or(u32::MAX);
        let mut settings = self.settings.borrow_mut();
        match self.buttons[index].action() {
            ButtonAction::FrameRate => {
                settings.frame_rate = value;
                log::debug!("frame rate set to {}", value);
            }
            ButtonAction::SoundChance => {
                settings.sound_one_in = value;
                log::debug!("sound chance set to 1/{}", value);
            }
        }
    }
}

impl Screen for MainMenuScreen {
    fn handle_input(&mut self, input: Input) -> Option<ScreenRequest> {
        if let Some(AppInput::Activate) = self.controls.get(input) {
            return Some(ScreenRequest::SwitchTo(crate::SOUND_PLAYER));
        }
        match input {
            Input::Mouse(MouseInput::MousePress {
                button: MouseButton::Left,
                coord,
            }) => self.select_at(coord),
            Input::Keyboard(key) => self.edit(key),
            _ => (),
        }
        None
    }

    fn render(&self, ctx: Ctx, fb: &mut FrameBuffer) {
        text::centred("Main Menu", true, text::TITLE_ROW, ctx, fb);
        text::centred("Press Space to Start", false, text::instruction_row(ctx), ctx, fb);
        for (index, button) in self.buttons.iter().enumerate() {
            button.render(self.selected == Some(index), ctx, fb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::{cell::RefCell, rc::Rc};

    fn menu() -> (MainMenuScreen, SharedSettings) {
        let settings = Rc::new(RefCell::new(Settings::default()));
        let screen = MainMenuScreen::new(Rc::clone(&settings), Controls::default());
        (screen, settings)
    }

    fn click(screen: &mut MainMenuScreen, coord: Coord) {
        screen.handle_input(Input::Mouse(MouseInput::MousePress {
            button: MouseButton::Left,
            coord,
        }));
    }

    fn press(screen: &mut MainMenuScreen, key: KeyboardInput) -> Option<ScreenRequest> {
        screen.handle_input(Input::Keyboard(key))
    }

    fn frame_rate_button_centre() -> Coord {
        Coord::new((crate::GRID_WIDTH / 2) as i32, FRAME_RATE_BUTTON_ROW)
    }

    fn sound_chance_button_centre() -> Coord {
        Coord::new((crate::GRID_WIDTH / 2) as i32, SOUND_CHANCE_BUTTON_ROW)
    }

    #[test]
    fn clicking_a_button_selects_it_and_seeds_the_buffer() {
        let (mut screen, _settings) = menu();
        click(&mut screen, frame_rate_button_centre());
        assert_eq!(screen.selected, Some(0));
        assert_eq!(screen.input_buffer, "60");
    }

    #[test]
    fn the_chance_label_numerator_digit_is_part_of_the_seed() {
        let (mut screen, _settings) = menu();
        click(&mut screen, sound_chance_button_centre());
        assert_eq!(screen.selected, Some(1));
        assert_eq!(screen.input_buffer, "160");
    }

    #[test]
    fn clicking_outside_both_buttons_clears_the_selection() {
        let (mut screen, _settings) = menu();
        click(&mut screen, frame_rate_button_centre());
        click(&mut screen, Coord::new(0, 0));
        assert_eq!(screen.selected, None);
        assert_eq!(screen.input_buffer, "");
    }

    #[test]
    fn typed_digits_are_committed_as_they_arrive() {
        let (mut screen, settings) = menu();
        click(&mut screen, frame_rate_button_centre());
        press(&mut screen, KeyboardInput::Char('1'));
        assert_eq!(screen.input_buffer, "601");
        assert_eq!(settings.borrow().frame_rate, 601);
        assert_eq!(screen.buttons[0].label(), "fps: 601");
    }

    #[test]
    fn an_empty_buffer_shows_a_placeholder_and_keeps_the_old_value() {
        let (mut screen, settings) = menu();
        click(&mut screen, frame_rate_button_centre());
        press(&mut screen, keys::BACKSPACE);
        assert_eq!(settings.borrow().frame_rate, 6);
        press(&mut screen, keys::BACKSPACE);
        assert_eq!(screen.input_buffer, "");
        assert_eq!(screen.buttons[0].label(), "fps: 0");
        assert_eq!(settings.borrow().frame_rate, 6);
        press(&mut screen, keys::BACKSPACE);
        assert_eq!(screen.buttons[0].label(), "fps: 0");
        assert_eq!(settings.borrow().frame_rate, 6);
    }

    #[test]
    fn non_digit_keys_do_not_touch_buffer_or_settings() {
        let (mut screen, settings) = menu();
        click(&mut screen, frame_rate_button_centre());
        press(&mut screen, KeyboardInput::Char('x'));
        press(&mut screen, KeyboardInput::Up);
        assert_eq!(screen.input_buffer, "60");
        assert_eq!(settings.borrow().frame_rate, 60);
    }

    #[test]
    fn digits_without_a_selection_are_ignored() {
        let (mut screen, settings) = menu();
        press(&mut screen, KeyboardInput::Char('7'));
        assert_eq!(screen.input_buffer, "");
        assert_eq!(settings.borrow().frame_rate, 60);
    }

    #[test]
    fn the_activation_key_requests_the_sound_player_even_while_editing() {
        let (mut screen, _settings) = menu();
        click(&mut screen, frame_rate_button_centre());
        let request = press(&mut screen, KeyboardInput::Char(' '));
        assert_eq!(
            request,
            Some(ScreenRequest::SwitchTo(crate::SOUND_PLAYER))
        );
    }

    #[test]
    fn chance_edits_commit_to_the_chance_setting() {
        let (mut screen, settings) = menu();
        click(&mut screen, sound_chance_button_centre());
        press(&mut screen, keys::BACKSPACE);
        assert_eq!(settings.borrow().sound_one_in, 16);
        assert_eq!(
            screen.buttons[1].label(),
            "chance of sound per frame: 1/16"
        );
    }

    #[test]
    fn the_label_always_mirrors_the_buffer() {
        fn property(digits: Vec<u8>, backspaces: u8) -> bool {
            let settings = Rc::new(RefCell::new(Settings::default()));
            let mut screen = MainMenuScreen::new(Rc::clone(&settings), Controls::default());
            click(&mut screen, frame_rate_button_centre());
            let mut expected = String::from("60");
            for digit in digits {
                let c = char::from(b'0' + (digit % 10));
                press(&mut screen, KeyboardInput::Char(c));
                expected.push(c);
            }
            for _ in 0..backspaces {
                press(&mut screen, keys::BACKSPACE);
                expected.pop();
            }
            let shown = if expected.is_empty() {
                "0"
            } else {
                expected.as_str()
            };
            screen.buttons[0].label() == format!("fps: {}", shown)
        }
        let mut qc = quickcheck::QuickCheck::new().tests(100);
        qc.quickcheck(property as fn(Vec<u8>, u8) -> bool);
    }
}
