pub const GLYPH_WIDTH: usize = 3;
pub const GLYPH_HEIGHT: usize = 5;
pub const GLYPH_SPACING: usize = 1;
pub const LINE_SPACING: usize = 2;

/// Burns `text` into a row-major luma buffer, keeping the brighter of glyph and image.
pub fn overlay_text(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    origin: (usize, usize),
    text: &str,
    value: u8,
) {
    let (mut cursor_x, y) = origin;
    for ch in text.chars() {
        draw_glyph(buffer, width, height, (cursor_x, y), ch, value);
        cursor_x = cursor_x.saturating_add(GLYPH_WIDTH + GLYPH_SPACING);
        if cursor_x >= width {
            break;
        }
    }
}

/// Frame counter and total density in the top-left corner.
pub fn stamp_frame(buffer: &mut [u8], width: usize, height: usize, frame: usize, mass: f32) {
    let lines = [format!("F {frame}"), format!("M {:.0}", mass.max(0.0))];
    let mut y = 1;
    for line in lines {
        overlay_text(buffer, width, height, (1, y), &line, 255);
        y = y.saturating_add(GLYPH_HEIGHT + LINE_SPACING);
    }
}

fn draw_glyph(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    origin: (usize, usize),
    ch: char,
    value: u8,
) {
    let rows = glyph_rows(ch);
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                continue;
            }
            let tx = origin.0 + col;
            let ty = origin.1 + row;
            if tx >= width || ty >= height {
                continue;
            }
            if let Some(cell) = buffer.get_mut(ty * width + tx) {
                *cell = (*cell).max(value);
            }
        }
    }
}

fn glyph_rows(ch: char) -> [u8; GLYPH_HEIGHT] {
    match ch {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        _ => [0b000; GLYPH_HEIGHT],
    }
}
