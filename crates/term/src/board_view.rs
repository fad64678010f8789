//! BoardView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CardSnapshot, ContentId, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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
}

/// Text lines drawn around the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    pub title: &'a str,
    pub pairs: &'a str,
    pub moves: &'a str,
    pub message: Option<&'a str>,
}

const CARD_W: u16 = 4;
const GAP_W: u16 = 1;
/// Rows above the grid: title, pairs/moves, blank.
const HEADER_H: u16 = 3;

const PROGRESS_NONE: Rgb = Rgb::new(200, 70, 70);
const PROGRESS_FULL: Rgb = Rgb::new(80, 200, 90);

const HELP: &str = "arrows move  space flip  r restart  n size  q quit";

/// A lightweight terminal renderer for the board.
#[derive(Debug, Clone, Default)]
pub struct BoardView;

impl BoardView {
    pub fn new() -> Self {
        Self
    }

    /// Columns x rows needed to draw `snap` with header and footer.
    pub fn required_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let cols = snap.width as u16;
        let grid_w = cols * CARD_W + cols.saturating_sub(1) * GAP_W;
        let w = grid_w.max(HELP.len() as u16);
        // grid, blank, message, help
        let h = HEADER_H + snap.height as u16 + 3;
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        cursor: usize,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let (need_w, need_h) = self.required_size(snap);
        let x0 = viewport.width.saturating_sub(need_w) / 2;
        let y0 = viewport.height.saturating_sub(need_h) / 2;

        let title = CellStyle::default().bold();
        fb.put_str(x0, y0, hud.title, title);

        let progress = if snap.pair_count == 0 {
            0.0
        } else {
            snap.pairs_found as f32 / snap.pair_count as f32
        };
        let pairs_style = CellStyle::fg(PROGRESS_NONE.lerp(PROGRESS_FULL, progress));
        fb.put_str(x0, y0 + 1, hud.pairs, pairs_style);
        let moves_x = x0 + hud.pairs.chars().count() as u16 + 3;
        fb.put_str(moves_x, y0 + 1, hud.moves, CellStyle::default());

        let grid_y = y0 + HEADER_H;
        for row in 0..snap.height {
            for col in 0..snap.width {
                let Some(card) = snap.card_at(row, col) else {
                    continue;
                };
                let position = row * snap.width + col;
                let (text, mut style) = card_cell(card);
                if position == cursor {
                    style = style.reverse();
                }
                let x = x0 + col as u16 * (CARD_W + GAP_W);
                fb.put_str(x, grid_y + row as u16, &text, style);
            }
        }

        let below = grid_y + snap.height as u16 + 1;
        if let Some(message) = hud.message {
            fb.put_str(x0, below, message, CellStyle::fg(Rgb::new(240, 200, 80)).bold());
        } else if snap.won {
            fb.put_str(x0, below, "All pairs found!", CellStyle::fg(PROGRESS_FULL).bold());
        }
        fb.put_str(x0, below + 1, HELP, CellStyle::fg(Rgb::new(120, 120, 130)));
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        cursor: usize,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, cursor, viewport, &mut fb);
        fb
    }
}

/// Two-character face label.
pub fn face_label(content: ContentId) -> String {
    match content {
        ContentId::Icon(icon) => icon.label().to_string(),
        // Top byte of the reference hash; distinct images almost always differ.
        ContentId::Remote(hash) => format!("{:02x}", hash >> 56),
    }
}

fn card_cell(card: &CardSnapshot) -> (String, CellStyle) {
    if card.matched {
        let label = face_label(card.content);
        (format!(" {label} "), CellStyle::fg(PROGRESS_FULL))
    } else if card.face_up {
        let label = face_label(card.content);
        (format!("[{label}]"), CellStyle::fg(Rgb::new(240, 240, 240)).bold())
    } else {
        ("[##]".to_string(), CellStyle::fg(Rgb::new(90, 110, 160)))
    }
}
