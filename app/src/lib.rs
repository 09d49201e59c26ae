use chargrid::{control_flow::*, core::*};
use rand::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;
use std::{cell::RefCell, path::Path, rc::Rc, time::Duration};

mod audio;
mod button;
mod colours;
mod controls;
mod main_menu;
mod screen;
mod settings;
mod sound_player;
mod text;

pub use audio::{SoundEffects, SoundError};

pub const NAME: &str = "Sound Roulette";

/// Cell grid presented by every frontend.
pub const GRID_WIDTH: u32 = 80;
pub const GRID_HEIGHT: u32 = 30;

const SOUND_ASSET_PATH: &str = "assets/click.wav";

/// Names the two screens are registered under.
const MAIN_MENU: &str = "main_menu";
const SOUND_PLAYER: &str = "sound_player";

pub enum InitialRngSeed {
    U64(u64),
    Random,
}

fn rng_seed(initial_rng_seed: InitialRngSeed) -> u64 {
    let seed = match initial_rng_seed {
        InitialRngSeed::U64(seed) => seed,
        InitialRngSeed::Random => Isaac64Rng::from_entropy().gen(),
    };
    log::info!("rng seed: {}", seed);
    seed
}

pub struct AppArgs {
    pub initial_rng_seed: InitialRngSeed,
    pub mute: bool,
}

/// Converts the frontend's tick stream into logical ticks at the configured
/// frame rate. A target of 0 lets every frontend tick through. Changes to the
/// target apply from the next call.
struct FramePacer {
    accumulator: Duration,
}

impl FramePacer {
    fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
        }
    }

    fn logical_ticks(&mut self, since_previous: Duration, target_frame_rate: u32) -> u32 {
        if target_frame_rate == 0 {
            self.accumulator = Duration::ZERO;
            return 1;
        }
        let period = Duration::from_secs(1) / target_frame_rate;
        self.accumulator += since_previous;
        let mut ticks = 0;
        while self.accumulator >= period {
            self.accumulator -= period;
            ticks += 1;
        }
        ticks
    }
}

struct AppComponent {
    manager: screen::ScreenManager,
    settings: settings::SharedSettings,
    pacer: FramePacer,
}

impl Component for AppComponent {
    type Output = Option<()>;
    type State = ();

    fn render(&self, _state: &Self::State, ctx: Ctx, fb: &mut FrameBuffer) {
        self.manager.render(ctx, fb);
    }

    fn update(&mut self, _state: &mut Self::State, _ctx: Ctx, event: Event) -> Self::Output {
        match event {
            Event::Input(input) => {
                if let Err(e) = self.manager.handle_input(input) {
                    // A screen asked for a name that was never wired up.
                    panic!("{}", e);
                }
            }
            Event::Tick(since_previous) => {
                let target_frame_rate = self.settings.borrow().frame_rate;
                for _ in 0..self.pacer.logical_ticks(since_previous, target_frame_rate) {
                    self.manager.tick();
                }
            }
            _ => (),
        }
        None
    }

    fn size(&self, _state: &Self::State, ctx: Ctx) -> Size {
        ctx.bounding_box.size()
    }
}

pub fn app(
    AppArgs {
        initial_rng_seed,
        mute,
    }: AppArgs,
) -> Result<impl Component<Output = app::Output, State = ()>, SoundError> {
    let settings = Rc::new(RefCell::new(settings::Settings::default()));
    let sound_effects = SoundEffects::new(Path::new(SOUND_ASSET_PATH), mute)?;
    let rng = Isaac64Rng::seed_from_u64(rng_seed(initial_rng_seed));
    let mut manager = screen::ScreenManager::new();
    manager.register(
        MAIN_MENU,
        main_menu::MainMenuScreen::new(Rc::clone(&settings), controls::Controls::default()),
    );
    manager.register(
        SOUND_PLAYER,
        sound_player::SoundPlayerScreen::new(
            Rc::clone(&settings),
            controls::Controls::default(),
            rng,
            sound_effects,
        ),
    );
    manager
        .set_active(MAIN_MENU)
        .expect("the main menu was registered above");
    Ok(cf(AppComponent {
        manager,
        settings,
        pacer: FramePacer::new(),
    })
    .bound_size(Size::new(GRID_WIDTH, GRID_HEIGHT))
    .map(|_| app::Exit)
    .clear_each_frame()
    .exit_on_close())
}
