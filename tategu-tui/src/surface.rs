//! Double-buffered cell grid the screens draw into.
//!
//! Wide characters occupy their leading cell plus a tail cell; the tail is
//! marked so the diff writer skips it instead of overprinting.

use tategu_slide::Rgb;

use crate::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x.saturating_add(self.width)
            && y < self.y.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl Style {
    pub fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
    pub wide_tail: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
            wide_tail: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); usize::from(width) * usize::from(height)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Write a string starting at `(x, y)`, clipping at the right edge.
    /// A wide character that would straddle the edge is dropped whole.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if y >= self.height {
            return;
        }
        let mut x = x;
        for ch in text.chars() {
            let w = text::char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if x.saturating_add(w) > self.width {
                break;
            }
            self.set(
                x,
                y,
                Cell {
                    ch,
                    style,
                    wide_tail: false,
                },
            );
            if w == 2 {
                self.set(
                    x + 1,
                    y,
                    Cell {
                        ch: ' ',
                        style,
                        wide_tail: true,
                    },
                );
            }
            x += w;
        }
    }

    /// Fill a rectangle with styled blanks, clipping at the surface edges.
    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        let right = rect.x.saturating_add(rect.width).min(self.width);
        let bottom = rect.y.saturating_add(rect.height).min(self.height);
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.set(
                    x,
                    y,
                    Cell {
                        ch: ' ',
                        style,
                        wide_tail: false,
                    },
                );
            }
        }
    }

    /// Cells that differ from `previous`, in row-major order.
    pub fn diff<'a>(
        &'a self,
        previous: &'a Surface,
    ) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = usize::from(self.width);
        self.cells
            .iter()
            .zip(previous.cells.iter())
            .enumerate()
            .filter_map(move |(i, (cell, prev))| {
                (cell != prev).then(|| ((i % width) as u16, (i / width) as u16, cell))
            })
    }

    /// Visible characters of one row, for assertions on drawn frames.
    #[cfg(test)]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_tail)
            .map(|cell| cell.ch)
            .collect()
    }
}
