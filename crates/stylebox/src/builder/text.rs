use tracing::debug;

use crate::builder::StyleBoxBuilder;
use crate::domain::Interval;
use crate::error::Result;
use crate::error::StyleBoxError;
use crate::stylebox::StyleBox;

/// Glyphs used to draw a text style box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Plain ASCII characters.
    Ascii,
}

struct Glyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    tee_down: char,
    tee_up: char,
    tee_right: char,
    tee_left: char,
    cross: char,
    marker: char,
}

const UNICODE: Glyphs = Glyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    tee_down: '┬',
    tee_up: '┴',
    tee_right: '├',
    tee_left: '┤',
    cross: '┼',
    marker: '●',
};

const ASCII: Glyphs = Glyphs {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
    tee_down: '+',
    tee_up: '+',
    tee_right: '+',
    tee_left: '+',
    cross: '+',
    marker: 'o',
};

impl Charset {
    fn glyphs(self) -> &'static Glyphs {
        match self {
            Charset::Unicode => &UNICODE,
            Charset::Ascii => &ASCII,
        }
    }
}

/// Renders a style box as a square grid of characters.
///
/// Grid lines must land on whole cells: a count `n` is honored only when
/// `size - 1` is divisible by `n + 1` and is replaced by zero otherwise.
/// Only the most recently added point is drawn.
#[derive(Debug, Clone)]
pub struct TextStyleBoxBuilder {
    stylebox: StyleBox,
    size: usize,
    charset: Charset,
}

impl TextStyleBoxBuilder {
    /// Creates a builder for a `size` × `size` character canvas.
    pub fn new(x_domain: Interval, y_domain: Interval, size: usize) -> Result<TextStyleBoxBuilder> {
        if size < 2 {
            return Err(StyleBoxError::InvalidCanvasSize(size));
        }

        Ok(Self {
            stylebox: StyleBox::new(x_domain, y_domain)?,
            size,
            charset: Charset::default(),
        })
    }

    /// Draws with the given glyphs.
    pub fn with_charset(mut self, charset: Charset) -> TextStyleBoxBuilder {
        self.charset = charset;
        self
    }

    fn fits(&self, count: i32) -> i32 {
        let count = count.max(0);
        let bands = count as usize + 1;

        if (self.size - 1) % bands == 0 {
            count
        } else {
            debug!(
                count,
                size = self.size,
                "grid lines do not fit on whole cells; none drawn"
            );
            0
        }
    }

    fn cell(&self, domain: &Interval, value: f64) -> usize {
        let last = (self.size - 1) as f64;
        domain.rescale_to(value, 0.0, last).round().clamp(0.0, last) as usize
    }
}

impl StyleBoxBuilder for TextStyleBoxBuilder {
    fn stylebox(&self) -> &StyleBox {
        &self.stylebox
    }

    fn stylebox_mut(&mut self) -> &mut StyleBox {
        &mut self.stylebox
    }

    fn grid_lines(&mut self, nx: i32, ny: Option<i32>) -> Result<&mut Self> {
        let nx = self.fits(nx);
        let ny = self.fits(ny.unwrap_or(nx));

        self.stylebox.set_gridlines(nx, Some(ny))?;
        Ok(self)
    }

    fn build(&self) -> Result<String> {
        self.stylebox.require_bounded()?;

        let glyphs = self.charset.glyphs();
        let last = self.size - 1;
        let mut canvas = vec![vec![' '; self.size]; self.size];

        for row in canvas.iter_mut().take(last).skip(1) {
            row[0] = glyphs.vertical;
            row[last] = glyphs.vertical;
        }
        for col in 1..last {
            canvas[0][col] = glyphs.horizontal;
            canvas[last][col] = glyphs.horizontal;
        }
        canvas[0][0] = glyphs.top_left;
        canvas[0][last] = glyphs.top_right;
        canvas[last][0] = glyphs.bottom_left;
        canvas[last][last] = glyphs.bottom_right;

        let grid = self.stylebox.grid();
        let columns: Vec<usize> = grid
            .vertical
            .iter()
            .map(|&x| self.cell(self.stylebox.x_domain(), x))
            .collect();
        let rows: Vec<usize> = grid
            .horizontal
            .iter()
            .map(|&y| self.cell(self.stylebox.y_domain(), y))
            .collect();

        for &col in &columns {
            canvas[0][col] = glyphs.tee_down;
            canvas[last][col] = glyphs.tee_up;
            for row in canvas.iter_mut().take(last).skip(1) {
                row[col] = glyphs.vertical;
            }
        }

        for &row in &rows {
            canvas[row][0] = glyphs.tee_right;
            canvas[row][last] = glyphs.tee_left;
            for col in 1..last {
                canvas[row][col] = glyphs.horizontal;
            }
        }

        for &row in &rows {
            for &col in &columns {
                canvas[row][col] = glyphs.cross;
            }
        }

        if let Some(point) = self.stylebox.last_point() {
            let col = self.cell(self.stylebox.x_domain(), point.x);
            let row = self.cell(self.stylebox.y_domain(), point.y);
            canvas[row][col] = glyphs.marker;
        }

        let text = canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(text)
    }
}
