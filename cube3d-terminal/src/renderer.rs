/// Character-cell canvas for terminal rendering
use crossterm::{
    cursor,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use cube3d_core::{Color, ScreenPoint, Surface};
use std::io::{self, Write};

/// A logical pixel surface backed by a grid of terminal cells.
///
/// Drawing calls take pixel coordinates in `width` x `height` space; each
/// cell covers `width / cols` by `height / rows` pixels.
pub struct TerminalCanvas<W: Write> {
    writer: W,
    width: u32,
    height: u32,
    cols: usize,
    rows: usize,
    background: Color,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(writer: W, width: u32, height: u32, cols: usize, rows: usize) -> Self {
        let size = cols * rows;
        Self {
            writer,
            width,
            height,
            cols,
            rows,
            background: Color::BLACK,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::WHITE; size],
        }
    }

    /// Re-grid after the terminal changed size
    pub fn resize(&mut self, cols: usize, rows: usize) {
        log::debug!("Canvas resized to {}x{} cells", cols, rows);
        self.cols = cols;
        self.rows = rows;
        self.char_buffer = vec![' '; cols * rows];
        self.color_buffer = vec![Color::WHITE; cols * rows];
    }

    #[cfg(test)]
    pub(crate) fn grid(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Character at a cell, if inside the grid
    #[cfg(test)]
    pub(crate) fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.char_buffer[row * self.cols + col])
        } else {
            None
        }
    }

    /// One grid row as a string
    #[cfg(test)]
    pub(crate) fn row_text(&self, row: usize) -> String {
        self.char_buffer[row * self.cols..(row + 1) * self.cols]
            .iter()
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn writer(&self) -> &W {
        &self.writer
    }

    /// Map a pixel position to fractional cell coordinates
    fn to_cell(&self, (x, y): ScreenPoint) -> (f64, f64) {
        (
            x * self.cols as f64 / self.width as f64,
            y * self.rows as f64 / self.height as f64,
        )
    }

    fn plot(&mut self, col: i64, row: i64, character: char, color: Color) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        let idx = row as usize * self.cols + col as usize;
        self.char_buffer[idx] = character;
        self.color_buffer[idx] = color;
    }

    fn bounds(&self) -> (f64, f64) {
        (self.cols as f64 - 1.0, self.rows as f64 - 1.0)
    }
}

impl<W: Write> Surface for TerminalCanvas<W> {
    type Error = io::Error;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.background = color;
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::WHITE);
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let (from, to) = (self.to_cell(from), self.to_cell(to));
        let (max_col, max_row) = self.bounds();
        let Some((from, to)) = clip_segment(from, to, max_col, max_row) else {
            return;
        };

        let (x0, y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);
        let character = stroke_char(x1 - x0, y1 - y0);

        // Bresenham
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, character, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_text(&mut self, text: &str, at: (i32, i32), color: Color) {
        let (col, row) = self.to_cell((at.0 as f64, at.1 as f64));
        let (col, row) = (col.floor() as i64, row.floor() as i64);
        for (offset, character) in text.chars().enumerate() {
            self.plot(col + offset as i64, row, character, color);
        }
    }

    fn present(&mut self) -> io::Result<()> {
        self.writer.queue(cursor::MoveTo(0, 0))?;
        self.writer.queue(SetBackgroundColor(to_terminal_color(self.background)))?;

        let mut current = None;
        for row in 0..self.rows {
            self.writer.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                let idx = row * self.cols + col;
                let color = self.color_buffer[idx];
                if current != Some(color) {
                    self.writer.queue(SetForegroundColor(to_terminal_color(color)))?;
                    current = Some(color);
                }
                self.writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        self.writer.queue(ResetColor)?;
        self.writer.flush()
    }
}

fn to_terminal_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Pick a stroke character from a segment's direction (cell space, y down)
fn stroke_char(dx: i64, dy: i64) -> char {
    let (adx, ady) = (dx.abs(), dy.abs());
    if adx == 0 && ady == 0 {
        '+'
    } else if ady * 2 < adx {
        '-'
    } else if adx * 2 < ady {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

/// Liang-Barsky clip of a segment to `[0, max_x] x [0, max_y]`.
///
/// Keeps rasterization bounded when a projected vertex lands far off screen.
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    max_x: f64,
    max_y: f64,
) -> Option<((f64, f64), (f64, f64))> {
    if ![from.0, from.1, to.0, to.1].iter().all(|c| c.is_finite()) {
        return None;
    }

    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, from.0),
        (dx, max_x - from.0),
        (-dy, from.1),
        (dy, max_y - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (from.0 + t0 * dx, from.1 + t0 * dy),
        (from.0 + t1 * dx, from.1 + t1 * dy),
    ))
}
