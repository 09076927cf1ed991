//! Presentation of the keypad.
//!
//! The keypad state machine knows nothing about drawing. A [`KeypadSurface`]
//! renders it and maps pointer positions back to keys; each UI target
//! provides its own implementation.

use super::geometry::{KeyGeometry, Point};
use super::key::{Key, KeyRole, LAYOUT};
use super::state::Keypad;
use crate::config::{KeypadConfig, Rgb, ThemeConfig};
use std::io::{self, Write};

/// Something that can show a keypad and resolve pointer presses.
pub trait KeypadSurface {
    /// Draw the display and the keys.
    fn render(&mut self, keypad: &Keypad) -> io::Result<()>;

    /// The key under `point`, if any.
    fn hit_test(&self, point: Point) -> Option<Key>;
}

/// Columns taken by one key in the terminal grid.
const CELL_WIDTH: usize = 7;

/// Renders the keypad as text, optionally with 24-bit ANSI colours.
pub struct TerminalSurface<W: Write> {
    out: W,
    theme: ThemeConfig,
    geometry: KeyGeometry,
    color: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, config: &KeypadConfig, color: bool) -> Self {
        Self {
            out,
            theme: config.theme.clone(),
            geometry: KeyGeometry::from(config),
            color,
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn key_colors(&self, key: Key) -> (Rgb, Rgb) {
        let t = &self.theme;
        match key.role() {
            KeyRole::Clear => (t.clear, t.text),
            KeyRole::Operator => (t.operator, t.text),
            KeyRole::Equals => (t.equals, t.equals_text),
            KeyRole::Plain => (t.digit, t.text),
        }
    }

    /// One key cell, exactly [`CELL_WIDTH`] columns wide.
    fn paint_key(&self, key: Key) -> String {
        let label = format!("{:^5}", key.label());
        if !self.color {
            return format!("[{label}]");
        }

        let (bg, fg) = self.key_colors(key);
        format!(
            " \x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{label}\x1b[0m ",
            bg.0, bg.1, bg.2, fg.0, fg.1, fg.2
        )
    }

    fn paint_display(&self, text: &str) -> String {
        let width = LAYOUT[0].len() * CELL_WIDTH;
        let line = format!("{text:>width$}");
        if !self.color {
            return line;
        }

        let (bg, fg) = (self.theme.background, self.theme.text);
        format!(
            "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{line}\x1b[0m",
            bg.0, bg.1, bg.2, fg.0, fg.1, fg.2
        )
    }
}

impl<W: Write> KeypadSurface for TerminalSurface<W> {
    fn render(&mut self, keypad: &Keypad) -> io::Result<()> {
        let display = self.paint_display(keypad.display());
        writeln!(self.out, "{display}")?;

        for row in LAYOUT.iter() {
            let line: String = row.iter().map(|key| self.paint_key(*key)).collect();
            writeln!(self.out, "{line}")?;
        }

        self.out.flush()
    }

    fn hit_test(&self, point: Point) -> Option<Key> {
        self.geometry.hit_test(point)
    }
}
