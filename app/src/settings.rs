use std::{cell::RefCell, rc::Rc};

/// The two tunable parameters. Shared by reference between the screen that
/// edits them and the screen that reads them; no validation happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Target logical frames per second. 0 means uncapped.
    pub frame_rate: u32,
    /// The sound triggers with probability 1/N per tick.
    pub sound_one_in: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            sound_one_in: 60,
        }
    }
}

pub type SharedSettings = Rc<RefCell<Settings>>;
