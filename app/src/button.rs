use crate::colours;
use chargrid::prelude::*;
use chargrid::text::StyledString;

/// Cells between the label text and the edge of the button rectangle.
const PADDING: i32 = 1;
/// Extra cells the highlight extends past the rectangle on every side.
const SELECTION_BORDER: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    FrameRate,
    SoundChance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.x
            && coord.x <= self.x + self.width - 1
            && coord.y >= self.y
            && coord.y <= self.y + self.height - 1
    }

    fn inflate(&self, by: i32) -> Self {
        Self {
            x: self.x - by,
            y: self.y - by,
            width: self.width + 2 * by,
            height: self.height + 2 * by,
        }
    }
}

/// A clickable labelled rectangle anchored at a fixed centre. The rectangle
/// is derived from the label, so it tracks the label as it is edited. Whether
/// the button is selected is the owning screen's business, not the button's.
pub struct Button {
    label: String,
    centre: Coord,
    action: ButtonAction,
    rect: Rect,
}

impl Button {
    pub fn new(label: String, centre: Coord, action: ButtonAction) -> Self {
        let mut button = Self {
            label: String::new(),
            centre,
            action,
            rect: Rect {
                x: 0,
                y: 0,
                width: 0,
                height: 0,
            },
        };
        button.update_label(label);
        button
    }

    pub fn update_label(&mut self, label: String) {
        let width = label.chars().count() as i32 + 2 * PADDING;
        let height = 1 + 2 * PADDING;
        self.rect = Rect {
            x: self.centre.x - width / 2,
            y: self.centre.y - height / 2,
            width,
            height,
        };
        self.label = label;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    /// Point-in-rectangle, edge cells included.
    pub fn contains(&self, coord: Coord) -> bool {
        self.rect.contains(coord)
    }

    pub fn render(&self, selected: bool, ctx: Ctx, fb: &mut FrameBuffer) {
        if selected {
            fill_rect(
                self.rect.inflate(SELECTION_BORDER),
                colours::HIGHLIGHT.to_rgba32(255),
                ctx,
                fb,
            );
        }
        fill_rect(self.rect, colours::BUTTON.to_rgba32(255), ctx, fb);
        StyledString {
            string: self.label.clone(),
            style: Style::plain_text()
                .with_foreground(colours::TEXT.to_rgba32(255))
                .with_background(colours::BUTTON.to_rgba32(255)),
        }
        .render(
            &(),
            ctx.add_xy(self.rect.x + PADDING, self.rect.y + PADDING),
            fb,
        );
    }
}

fn fill_rect(rect: Rect, colour: Rgba32, ctx: Ctx, fb: &mut FrameBuffer) {
    let render_cell = RenderCell {
        character: None,
        style: Style::default().with_background(colour),
    };
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            fb.set_cell_relative_to_ctx(ctx, Coord::new(x, y), 0, render_cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_follows_label_length() {
        let mut button = Button::new("ab".to_string(), Coord::new(10, 10), ButtonAction::FrameRate);
        assert!(button.contains(Coord::new(10, 10)));
        assert!(button.contains(Coord::new(8, 9)));
        assert!(button.contains(Coord::new(11, 11)));
        assert!(!button.contains(Coord::new(7, 10)));
        assert!(!button.contains(Coord::new(12, 10)));
        assert!(!button.contains(Coord::new(10, 8)));
        assert!(!button.contains(Coord::new(10, 12)));
        button.update_label("abcdef".to_string());
        assert!(button.contains(Coord::new(6, 10)));
        assert!(button.contains(Coord::new(13, 10)));
        assert!(!button.contains(Coord::new(5, 10)));
        assert!(!button.contains(Coord::new(14, 10)));
    }

    #[test]
    fn update_label_is_idempotent() {
        let mut button = Button::new(
            "fps: 60".to_string(),
            Coord::new(40, 21),
            ButtonAction::FrameRate,
        );
        let rect = button.rect;
        button.update_label("fps: 60".to_string());
        assert_eq!(button.rect, rect);
        assert_eq!(button.label(), "fps: 60");
    }
}
