//! Terminal backend.
//!
//! Owns the raw-mode/alternate-screen lifecycle and flushes [`Frame`]s to
//! stdout. Consecutive frames of the same size are diffed row by row so only
//! changed spans are rewritten.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    style::{self, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::term::frame::{Frame, Glyph, Style};

pub struct Screen {
    out: Stdout,
    shown: Option<Frame>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
        }
    }

    /// Switches the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.out.flush()
    }

    /// Restores the terminal. Safe to call even if `enter` failed part way.
    pub fn exit(&mut self) -> io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }

    /// Drops the remembered frame so the next `present` repaints everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Flushes a frame to the terminal, diffing against the previous one when
    /// the dimensions match.
    pub fn present(&mut self, frame: Frame) -> io::Result<()> {
        let repaint = match &self.shown {
            Some(prev) => prev.width() != frame.width() || prev.height() != frame.height(),
            None => true,
        };
        if repaint {
            self.paint_all(&frame)?;
        } else if let Some(prev) = self.shown.take() {
            // On error `shown` stays empty, forcing a clean repaint next time.
            self.paint_diff(&prev, &frame)?;
        }
        self.shown = Some(frame);
        Ok(())
    }

    fn paint_all(&mut self, frame: &Frame) -> io::Result<()> {
        self.out.queue(terminal::Clear(ClearType::All))?;
        let mut brush = None;
        for y in 0..frame.height() {
            self.out.queue(cursor::MoveTo(0, y))?;
            for glyph in frame.row(y) {
                self.switch_style(glyph.style, &mut brush)?;
                self.out.queue(Print(glyph.ch))?;
            }
        }
        self.out.flush()
    }

    fn paint_diff(&mut self, prev: &Frame, next: &Frame) -> io::Result<()> {
        let mut brush = None;
        for y in 0..next.height() {
            let row = next.row(y);
            for (start, len) in changed_spans(prev.row(y), row) {
                self.out.queue(cursor::MoveTo(start as u16, y))?;
                for glyph in &row[start..start + len] {
                    self.switch_style(glyph.style, &mut brush)?;
                    self.out.queue(Print(glyph.ch))?;
                }
            }
        }
        self.out.flush()
    }

    fn switch_style(&mut self, style: Style, brush: &mut Option<Style>) -> io::Result<()> {
        if *brush == Some(style) {
            return Ok(());
        }
        // Attribute reset clears colors too, so it has to come first.
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetForegroundColor(style.fg))?;
        self.out.queue(SetBackgroundColor(style.bg))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        *brush = Some(style);
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Yields `(start, len)` runs where `next` differs from `prev`.
///
/// Both slices must be the same length; `present` only diffs frames whose
/// sizes match.
fn changed_spans<'a>(prev: &'a [Glyph], next: &'a [Glyph]) -> Spans<'a> {
    Spans { prev, next, x: 0 }
}

struct Spans<'a> {
    prev: &'a [Glyph],
    next: &'a [Glyph],
    x: usize,
}

impl Iterator for Spans<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.x < self.next.len() && self.prev[self.x] == self.next[self.x] {
            self.x += 1;
        }
        if self.x >= self.next.len() {
            return None;
        }
        let start = self.x;
        while self.x < self.next.len() && self.prev[self.x] != self.next[self.x] {
            self.x += 1;
        }
        Some((start, self.x - start))
    }
}
