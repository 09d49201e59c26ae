use crate::colours;
use chargrid::prelude::*;
use chargrid::text::StyledString;

/// Row both screens draw their title on.
pub const TITLE_ROW: i32 = 2;

pub fn centred(string: &str, bold: bool, row: i32, ctx: Ctx, fb: &mut FrameBuffer) {
    let width = ctx.bounding_box.size().width() as i32;
    let x = (width - string.chars().count() as i32) / 2;
    StyledString {
        string: string.to_string(),
        style: Style::plain_text()
            .with_bold(bold)
            .with_foreground(colours::TEXT.to_rgba32(255)),
    }
    .render(&(), ctx.add_xy(x, row), fb);
}

pub fn instruction_row(ctx: Ctx) -> i32 {
    (ctx.bounding_box.size().height() / 2) as i32
}
