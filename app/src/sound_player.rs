use crate::{
    audio::SoundEffects,
    colours,
    controls::{AppInput, Controls},
    screen::{Screen, ScreenRequest},
    settings::SharedSettings,
    text,
};
use chargrid::prelude::*;
use rand::Rng;
use rand_isaac::Isaac64Rng;

/// Each tick draws a uniform integer in `[1, N]` and triggers the click
/// sample when it lands on 1. The trigger flag drives the background colour
/// and survives leaving the screen until the next tick overwrites it.
pub struct SoundPlayerScreen {
    settings: SharedSettings,
    controls: Controls,
    rng: Isaac64Rng,
    sound_effects: SoundEffects,
    triggered: bool,
}

impl SoundPlayerScreen {
    pub fn new(
        settings: SharedSettings,
        controls: Controls,
        rng: Isaac64Rng,
        sound_effects: SoundEffects,
    ) -> Self {
        Self {
            settings,
            controls,
            rng,
            sound_effects,
            triggered: false,
        }
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }
}

impl Screen for SoundPlayerScreen {
    fn handle_input(&mut self, input: Input) -> Option<ScreenRequest> {
        if let Some(AppInput::Activate) = self.controls.get(input) {
            return Some(ScreenRequest::SwitchTo(crate::MAIN_MENU));
        }
        None
    }

    fn tick(&mut self) {
        // A denominator of 0 is reachable while the setting is being edited.
        let one_in = self.settings.borrow().sound_one_in.max(1);
        self.triggered = self.rng.gen_range(1..=one_in) == 1;
        if self.triggered {
            self.sound_effects.play_click();
        }
    }

    fn render(&self, ctx: Ctx, fb: &mut FrameBuffer) {
        let background = if self.triggered {
            colours::ALERT
        } else {
            colours::BACKGROUND
        };
        let render_cell = RenderCell {
            character: None,
            style: Style::default().with_background(background.to_rgba32(255)),
        };
        let size = ctx.bounding_box.size();
        for y in 0..size.height() as i32 {
            for x in 0..size.width() as i32 {
                fb.set_cell_relative_to_ctx(ctx, Coord::new(x, y), 0, render_cell);
            }
        }
        text::centred("Sound Player", true, text::TITLE_ROW, ctx, fb);
        text::centred("Press Space to Exit", false, text::instruction_row(ctx), ctx, fb);
    }
}
