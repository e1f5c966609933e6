use snake_arena::{BoardSnapshot, EMPTY, FIRST_AGENT_TAG, FOOD, Tag, WALL};

const AGENT_GLYPHS: &[u8] = b"23456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn glyph(tag: Tag) -> char {
    match tag {
        EMPTY => ' ',
        WALL => '█',
        FOOD => '*',
        id if id >= FIRST_AGENT_TAG => AGENT_GLYPHS
            .get((id - FIRST_AGENT_TAG) as usize)
            .map(|b| *b as char)
            .unwrap_or('@'),
        _ => '?',
    }
}

pub fn render(board: &BoardSnapshot) -> String {
    let mut out = String::with_capacity(board.height * (board.width + 1) * 3);
    for row in &board.rows {
        out.extend(row.iter().map(|&t| glyph(t)));
        out.push('\n');
    }
    out
}
