use rgb_int::Rgb24;

pub const BACKGROUND: Rgb24 = Rgb24::new(0, 0, 0);
pub const TEXT: Rgb24 = Rgb24::new(255, 255, 255);
pub const BUTTON: Rgb24 = Rgb24::new(255, 0, 0);
pub const ALERT: Rgb24 = Rgb24::new(255, 0, 0);
pub const HIGHLIGHT: Rgb24 = Rgb24::new(255, 255, 255);
