use std::fmt;

use anyhow::{bail, Result};
use memchr::memchr;

use super::Point;

/// A rectangular grid of ASCII cells, stored row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parses a block of equally long lines. Trailing blank lines are ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let bytes = input.trim_end().as_bytes();
        let width = memchr(b'\n', bytes).unwrap_or(bytes.len());
        let width = width - usize::from(width > 0 && bytes[width - 1] == b'\r');

        let mut cells = Vec::with_capacity(bytes.len());
        let mut height = 0;
        for (i, line) in bytes.split(|&b| b == b'\n').enumerate() {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if line.len() != width {
                bail!(
                    "row {} has width {} but the first row has width {}",
                    i,
                    line.len(),
                    width
                );
            }
            cells.extend_from_slice(line);
            height += 1;
        }
        if width == 0 {
            bail!("empty grid");
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// `width` is non-zero and divides `cells.len()`; only built from an already valid grid.
    fn from_cells(cells: Vec<u8>, width: usize) -> Self {
        debug_assert!(width > 0 && cells.len() % width == 0);
        let height = cells.len() / width;
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.height && col < self.width).then(|| self.cells[row * self.width + col])
    }

    pub fn get_point(&self, p: Point) -> Option<u8> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        self.get(p.row as usize, p.col as usize)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.valid(self.height as i64 - 1, self.width as i64 - 1)
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * self.width + col] = value;
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().skip(col).step_by(self.width).copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    pub fn positions(&self, needle: u8) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &b)| b == needle)
            .map(|(i, _)| Point::new((i / self.width) as i64, (i % self.width) as i64))
    }

    pub fn find(&self, needle: u8) -> Option<Point> {
        self.positions(needle).next()
    }

    pub fn transpose(&self) -> Grid {
        let cells = (0..self.width).flat_map(|c| self.column(c)).collect();
        Grid::from_cells(cells, self.height)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_index() -> Result<()> {
        let grid = Grid::parse("ab.\r\n.#c\r\n\r\n")?;
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(1, 1), Some(b'#'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get_point(Point::new(0, -1)), None);
        assert_eq!(grid.find(b'c'), Some(Point::new(1, 2)));
        assert_eq!(grid.column(0).collect::<Vec<_>>(), b"a.");
        assert_eq!(grid.positions(b'.').count(), 2);
        Ok(())
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(Grid::parse("abc\nab\n").is_err());
        assert!(Grid::parse("\n").is_err());
    }

    #[test]
    fn transpose() -> Result<()> {
        let grid = Grid::parse("abc\ndef")?;
        let t = grid.transpose();
        assert_eq!((t.width(), t.height()), (2, 3));
        assert_eq!(t.row(2), b"cf");
        assert_eq!(t.transpose(), grid);

        let single = Grid::parse("abc")?.transpose();
        assert_eq!((single.width(), single.height()), (1, 3));
        assert_eq!(single.column(0).collect::<Vec<_>>(), b"abc");
        Ok(())
    }
}
