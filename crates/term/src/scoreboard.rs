//! ScoreboardView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (one player):
//!
//! ```text
//! | NAME |  01  |  02  |  03  |  04  |  05  |  06  |  07  |  08  |  09  |   10    |
//! |  PLY |  X   |  7|/ |  9|- |      |      |      |      |      |      |         |
//! |      |  20  |  39  |  48  |      |      |      |      |      |      |         |
//!
//! FRAME 4  PINS 10
//! ```

use crate::core::{FrameSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::marks::format_marks;
use crate::types::{PlayerName, FRAME_COUNT};

/// Width of the name column between borders.
const NAME_W: usize = 6;
/// Width of frames 1-9 between borders.
const FRAME_W: usize = 6;
/// Width of frame 10 between borders (room for three marks).
const FINAL_W: usize = 9;

/// Total table width including borders.
pub const TABLE_WIDTH: u16 =
    (1 + NAME_W + 1 + (FRAME_COUNT - 1) * (FRAME_W + 1) + FINAL_W + 1) as u16;
/// Header, marks and score rows.
pub const TABLE_HEIGHT: u16 = 3;
/// Table, blank line, status line, message line.
pub const BOARD_HEIGHT: u16 = TABLE_HEIGHT + 3;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Exactly the size of the scoreboard.
    pub fn fit() -> Self {
        Self::new(TABLE_WIDTH, BOARD_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    text: CellStyle,
    border: CellStyle,
    label: CellStyle,
    active: CellStyle,
    strike: CellStyle,
    spare: CellStyle,
    gutter: CellStyle,
    message: CellStyle,
}

impl Palette {
    fn colored() -> Self {
        Self {
            text: CellStyle::default(),
            border: CellStyle::fg(Rgb::new(120, 120, 130)),
            label: CellStyle::fg(Rgb::new(220, 220, 220)).bold(),
            active: CellStyle::fg(Rgb::new(240, 220, 80)).bold(),
            strike: CellStyle::fg(Rgb::new(220, 80, 80)).bold(),
            spare: CellStyle::fg(Rgb::new(80, 220, 220)).bold(),
            gutter: CellStyle::fg(Rgb::new(140, 140, 140)).dim(),
            message: CellStyle::fg(Rgb::new(255, 165, 0)),
        }
    }

    fn plain() -> Self {
        let s = CellStyle::default();
        Self {
            text: s,
            border: s,
            label: s,
            active: s,
            strike: s,
            spare: s,
            gutter: s,
            message: s,
        }
    }
}

/// A terminal renderer for the bowling scoresheet.
pub struct ScoreboardView {
    anchor_y: AnchorY,
    color: bool,
}

impl Default for ScoreboardView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            color: true,
        }
    }
}

impl ScoreboardView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `message` is shown under the status line (e.g. the last rejected roll).
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        player: &PlayerName,
        message: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let palette = if self.color {
            Palette::colored()
        } else {
            Palette::plain()
        };

        let start_x = viewport.width.saturating_sub(TABLE_WIDTH) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(BOARD_HEIGHT) / 2,
            AnchorY::Top => 0,
        };

        self.draw_header(fb, snap, start_x, start_y, &palette);
        self.draw_marks(fb, snap, player, start_x, start_y + 1, &palette);
        self.draw_scores(fb, snap, start_x, start_y + 2, &palette);

        let status_y = start_y + TABLE_HEIGHT + 1;
        let status = status_line(snap);
        let label = if snap.game_over {
            palette.active
        } else {
            palette.label
        };
        fb.put_str(start_x, status_y, &status, label);

        if let Some(msg) = message {
            fb.put_str(start_x, status_y + 1, msg, palette.message);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        player: &PlayerName,
        message: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, player, message, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        x: u16,
        y: u16,
        palette: &Palette,
    ) {
        let mut cx = fb.put_str(x, y, "|", palette.border);
        cx = fb.put_str(cx, y, &pad(" NAME", NAME_W), palette.label);
        cx = fb.put_str(cx, y, "|", palette.border);
        for number in 1..=FRAME_COUNT as u8 {
            let text = if (number as usize) < FRAME_COUNT {
                pad(&format!("  {:02}", number), FRAME_W)
            } else {
                pad(&format!("   {:02}", number), FINAL_W)
            };
            let style = if snap.playable() && snap.current_frame == number {
                palette.active
            } else {
                palette.label
            };
            cx = fb.put_str(cx, y, &text, style);
            cx = fb.put_str(cx, y, "|", palette.border);
        }
    }

    fn draw_marks(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        player: &PlayerName,
        x: u16,
        y: u16,
        palette: &Palette,
    ) {
        let mut cx = fb.put_str(x, y, "|", palette.border);
        cx = fb.put_str(cx, y, &pad(&format!("  {}", player), NAME_W), palette.label);
        cx = fb.put_str(cx, y, "|", palette.border);
        for i in 0..FRAME_COUNT {
            let width = column_width(i);
            let text = snap
                .frames
                .get(i)
                .map(|f| pad(&format!("  {}", format_marks(&f.rolls)), width))
                .unwrap_or_else(|| " ".repeat(width));
            for ch in text.chars() {
                fb.put_char(cx, y, ch, mark_style(ch, palette));
                cx = cx.saturating_add(1);
            }
            cx = fb.put_str(cx, y, "|", palette.border);
        }
    }

    fn draw_scores(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        x: u16,
        y: u16,
        palette: &Palette,
    ) {
        let mut cx = fb.put_str(x, y, "|", palette.border);
        cx = fb.put_str(cx, y, &" ".repeat(NAME_W), palette.text);
        cx = fb.put_str(cx, y, "|", palette.border);
        for i in 0..FRAME_COUNT {
            let width = column_width(i);
            let text = pad(&score_text(snap.frames.get(i)), width);
            cx = fb.put_str(cx, y, &text, palette.text);
            cx = fb.put_str(cx, y, "|", palette.border);
        }
    }
}

/// `FRAME n  PINS k` while playing, the final score once the game is over.
pub fn status_line(snap: &GameSnapshot) -> String {
    if snap.game_over {
        format!("GAME OVER  SCORE {}", snap.total)
    } else {
        format!("FRAME {}  PINS {}", snap.current_frame, snap.pins_standing)
    }
}

fn column_width(index: usize) -> usize {
    if index + 1 == FRAME_COUNT {
        FINAL_W
    } else {
        FRAME_W
    }
}

fn score_text(frame: Option<&FrameSnapshot>) -> String {
    match frame.and_then(|f| f.cumulative) {
        Some(total) => format!("  {}", total),
        None => String::new(),
    }
}

fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

fn mark_style(ch: char, palette: &Palette) -> CellStyle {
    match ch {
        'X' => palette.strike,
        '/' => palette.spare,
        '-' => palette.gutter,
        '|' => palette.border,
        _ => palette.text,
    }
}
