use chargrid::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// A switch requested by the active screen, consumed by the manager. Screens
/// never hold a reference to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenRequest {
    SwitchTo(&'static str),
}

/// One screen of the application. All three capabilities default to doing
/// nothing; none of them may block.
pub trait Screen {
    fn handle_input(&mut self, _input: Input) -> Option<ScreenRequest> {
        None
    }
    fn tick(&mut self) {}
    fn render(&self, _ctx: Ctx, _fb: &mut FrameBuffer) {}
}

/// Activation of a screen name that was never registered. This is a wiring
/// bug, not a runtime condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScreen(pub String);

impl fmt::Display for UnknownScreen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no screen registered under the name {:?}", self.0)
    }
}

impl std::error::Error for UnknownScreen {}

/// Owns every screen and routes input, ticks and rendering to the single
/// active one. Switching is a name reassignment; the target screen keeps
/// whatever state it had.
pub struct ScreenManager {
    screens: BTreeMap<String, Box<dyn Screen>>,
    active: Option<String>,
}

impl ScreenManager {
    pub fn new() -> Self {
        Self {
            screens: BTreeMap::new(),
            active: None,
        }
    }

    /// Registering a name twice replaces the earlier screen.
    pub fn register<S: Screen + 'static>(&mut self, name: &str, screen: S) {
        self.screens.insert(name.to_string(), Box::new(screen));
    }

    /// On failure the previously active screen stays active.
    pub fn set_active(&mut self, name: &str) -> Result<(), UnknownScreen> {
        if self.screens.contains_key(name) {
            log::info!("activating screen {:?}", name);
            self.active = Some(name.to_string());
            Ok(())
        } else {
            Err(UnknownScreen(name.to_string()))
        }
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn handle_input(&mut self, input: Input) -> Result<(), UnknownScreen> {
        let request = match self.active_screen_mut() {
            Some(screen) => screen.handle_input(input),
            None => None,
        };
        match request {
            Some(ScreenRequest::SwitchTo(name)) => self.set_active(name),
            None => Ok(()),
        }
    }

    pub fn tick(&mut self) {
        if let Some(screen) = self.active_screen_mut() {
            screen.tick();
        }
    }

    pub fn render(&self, ctx: Ctx, fb: &mut FrameBuffer) {
        if let Some(name) = self.active.as_ref() {
            if let Some(screen) = self.screens.get(name) {
                screen.render(ctx, fb);
            }
        }
    }

    fn active_screen_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        let Self { screens, active } = self;
        let name = active.as_ref()?;
        screens.get_mut(name).map(|screen| screen.as_mut())
    }
}
