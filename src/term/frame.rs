//! Off-screen character frame.
//!
//! A [`Frame`] is a width x height grid of styled glyphs. Views draw into a
//! frame, and [`crate::term::Screen`] flushes frames to the real terminal.

use crossterm::style::Color;

/// Display attributes for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
            dim: false,
        }
    }
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Self::default()
        }
    }

    pub fn on(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// One character cell of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// Row-major glyph buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reallocates the buffer when the size changes, blanking the content.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::default());
    }

    fn idx(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.idx(x, y);
        self.glyphs.get(i)
    }

    /// Writes a single glyph. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.idx(x, y);
        self.glyphs[i] = Glyph { ch, style };
    }

    /// Writes a string left to right, clipping at the right edge.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if y >= self.height {
            return;
        }
        for (offset, ch) in text.chars().enumerate() {
            let cx = x.saturating_add(offset as u16);
            if cx >= self.width {
                break;
            }
            self.set(cx, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for cy in y..y.saturating_add(h).min(self.height) {
            for cx in x..x.saturating_add(w).min(self.width) {
                self.set(cx, cy, ch, style);
            }
        }
    }

    /// One row of glyphs, for diffing in the screen backend.
    pub fn row(&self, y: u16) -> &[Glyph] {
        let start = self.idx(0, y);
        &self.glyphs[start..start + self.width as usize]
    }
}
