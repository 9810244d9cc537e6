//! Draws a [`GameSnapshot`] into a [`Frame`].
//!
//! Board cells are two characters wide so the playfield looks roughly square
//! in a typical terminal font. The two spawn rows above the visible board are
//! never drawn.

use crossterm::style::Color;

use crate::core::snapshot::GameSnapshot;
use crate::term::frame::{Frame, Style};
use crate::types::{PieceKind, Status, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS, VISIBLE_HEIGHT};

/// Terminal size the frame is built for.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

const CELL_W: u16 = 2;
const BOARD_PX_W: u16 = BOARD_WIDTH as u16 * CELL_W;
const BOARD_PX_H: u16 = VISIBLE_HEIGHT as u16;
const BOX_W: u16 = BOARD_PX_W + 2;
const BOX_H: u16 = BOARD_PX_H + 2;
const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 22;

#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);

        let total_w = BOX_W + PANEL_GAP + PANEL_W;
        let left = viewport.width.saturating_sub(total_w) / 2;
        let top = viewport.height.saturating_sub(BOX_H + 1) / 2;

        draw_box(&mut frame, left, top, BOX_W, BOX_H);
        self.draw_board(&mut frame, snapshot, left + 1, top + 1);
        self.draw_panel(&mut frame, snapshot, left + BOX_W + PANEL_GAP, top + 1);
        self.draw_overlay(&mut frame, snapshot.status, left + 1, top + 1);

        let footer = "\u{2190}\u{2192} move  z/x rotate  space drop  c hold  p pause  q quit";
        let footer_x = left + (total_w.saturating_sub(footer.chars().count() as u16)) / 2;
        frame.print(footer_x, top + BOX_H, footer, Style::default().dim());

        frame
    }

    fn draw_board(&self, frame: &mut Frame, snapshot: &GameSnapshot, ox: u16, oy: u16) {
        let plot = |frame: &mut Frame, col: i8, row: i8, ch: char, style: Style| {
            if row < HIDDEN_ROWS as i8 {
                return;
            }
            let x = ox + col as u16 * CELL_W;
            let y = oy + (row - HIDDEN_ROWS as i8) as u16;
            frame.set(x, y, ch, style);
            frame.set(x + 1, y, ch, style);
        };

        for row in HIDDEN_ROWS..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                match snapshot.grid[row as usize][col as usize] {
                    Some(kind) => plot(
                        frame,
                        col as i8,
                        row as i8,
                        '\u{2588}',
                        Style::fg(kind_color(kind)),
                    ),
                    None => {
                        let x = ox + col as u16 * CELL_W;
                        let y = oy + (row - HIDDEN_ROWS) as u16;
                        frame.set(x, y, '\u{00b7}', Style::default().dim());
                    }
                }
            }
        }

        if let Some(ghost) = snapshot.ghost {
            let style = Style::fg(Color::Rgb {
                r: 140,
                g: 140,
                b: 140,
            })
            .dim();
            for (col, row) in ghost {
                plot(frame, col, row, '\u{2591}', style);
            }
        }

        if let Some(active) = snapshot.active {
            let style = Style::fg(kind_color(active.kind));
            for (col, row) in active.blocks() {
                plot(frame, col, row, '\u{2588}', style);
            }
        }
    }

    fn draw_panel(&self, frame: &mut Frame, snapshot: &GameSnapshot, px: u16, py: u16) {
        let label = Style::default().bold();
        let value = Style::default();
        let m = &snapshot.metrics;

        let mut stat = |frame: &mut Frame, y: u16, name: &str, text: String| {
            frame.print(px, y, name, label);
            frame.print(px + 7, y, &text, value);
        };

        stat(frame, py, "SCORE", m.score.to_string());
        stat(frame, py + 1, "BEST", snapshot.high_score.to_string());
        stat(frame, py + 2, "LEVEL", m.level.to_string());
        stat(frame, py + 3, "LINES", m.lines.to_string());
        stat(frame, py + 4, "COMBO", format!("x{}", m.combo));
        stat(frame, py + 5, "B2B", format!("x{}", m.back_to_back));

        let hold_style = if snapshot.can_hold {
            value
        } else {
            Style::default().dim()
        };
        let hold_text = snapshot
            .hold
            .map(|kind| kind.as_char().to_string())
            .unwrap_or_else(|| "-".to_string());
        frame.print(px, py + 7, "HOLD", label);
        frame.print(px + 7, py + 7, &hold_text, hold_style);

        let mut preview = String::new();
        for kind in snapshot.preview {
            preview.push(kind.as_char());
            preview.push(' ');
        }
        frame.print(px, py + 8, "NEXT", label);
        frame.print(px + 7, py + 8, preview.trim_end(), value);

        if let Some(kind) = snapshot.last_clear {
            let style = Style::fg(Color::Yellow).bold();
            frame.print(px, py + 10, kind.label(), style);
        }

        let toast = Style::fg(Color::Green).bold();
        for (i, name) in snapshot.pending_achievements.iter().enumerate() {
            frame.print(px, py + 12 + i as u16, "\u{2605} ", toast);
            frame.print(px + 2, py + 12 + i as u16, name, toast);
        }
    }

    fn draw_overlay(&self, frame: &mut Frame, status: Status, ox: u16, oy: u16) {
        let lines: &[(&str, Style)] = match status {
            Status::Running => return,
            Status::Idle => &[
                ("QUADFALL", Style::default().bold()),
                ("PRESS ENTER", Style::default().dim()),
            ],
            Status::Paused => &[("PAUSED", Style::default().bold())],
            Status::Over => &[
                ("GAME OVER", Style::fg(Color::Red).bold()),
                ("PRESS ENTER", Style::default().dim()),
            ],
        };

        let mid = oy + BOARD_PX_H / 2 - lines.len() as u16 / 2;
        for (i, (text, style)) in lines.iter().enumerate() {
            let w = text.chars().count() as u16;
            let x = ox + BOARD_PX_W.saturating_sub(w) / 2;
            frame.print(x, mid + i as u16, text, *style);
        }
    }
}

fn kind_color(kind: PieceKind) -> Color {
    let (r, g, b) = match kind {
        PieceKind::I => (80, 220, 220),
        PieceKind::O => (240, 220, 80),
        PieceKind::T => (200, 120, 220),
        PieceKind::S => (100, 220, 120),
        PieceKind::Z => (220, 80, 80),
        PieceKind::J => (80, 120, 220),
        PieceKind::L => (255, 165, 0),
    };
    Color::Rgb { r, g, b }
}

fn draw_box(frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
    let style = Style::fg(Color::Rgb {
        r: 150,
        g: 150,
        b: 150,
    });
    frame.set(x, y, '\u{250c}', style);
    frame.set(x + w - 1, y, '\u{2510}', style);
    frame.set(x, y + h - 1, '\u{2514}', style);
    frame.set(x + w - 1, y + h - 1, '\u{2518}', style);
    for cx in x + 1..x + w - 1 {
        frame.set(cx, y, '\u{2500}', style);
        frame.set(cx, y + h - 1, '\u{2500}', style);
    }
    for cy in y + 1..y + h - 1 {
        frame.set(x, cy, '\u{2502}', style);
        frame.set(x + w - 1, cy, '\u{2502}', style);
    }
}
