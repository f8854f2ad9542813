//! Double-buffered cell grid
//!
//! This module provides the simulation's storage:
//! - [`Cell`]: binary cell state
//! - [`Buffer`]: selects the `current` or `next` generation
//! - [`Grid`]: two equally sized buffers with bounds-checked access
//!
//! # Coordinates
//!
//! Cells are addressed by signed `(x, y)` so that neighbor offsets can step
//! past the border. Any coordinate outside `0 <= x < width`, `0 <= y < height`
//! reads as [`Cell::Dead`] and ignores writes; edge cells simply have fewer
//! living neighbors. The grid does not wrap.
//!
//! # Buffers
//!
//! ```text
//! current ──read──▶ rule engine ──write──▶ next
//!    ▲                                      │
//!    └──────────────── publish ─────────────┘
//! ```
//!
//! `current` is the generation that was last rendered; `next` is only ever
//! written while a generation is being computed and only becomes `current`
//! through [`Grid::publish`].

use rand::Rng;

/// State of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Glyph used when the cell is drawn or dumped as text
    pub fn glyph(self, alive: char, dead: char) -> char {
        match self {
            Cell::Alive => alive,
            Cell::Dead => dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Which of the two generation buffers an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    /// Last published (rendered) generation; the neighbor-counting source
    Current,
    /// Generation under construction
    Next,
}

/// Fixed-size pair of generation buffers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead in both buffers
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            current: vec![Cell::Dead; width * height],
            next: vec![Cell::Dead; width * height],
        }
    }

    /// Create a grid and randomize it with [`Grid::initialize`]
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        fill_percent: u8,
        rng: &mut R,
    ) -> Self {
        let mut grid = Grid::new(width, height);
        grid.initialize(fill_percent, rng);
        grid
    }

    /// Build a grid from text rows, one row per string.
    ///
    /// `x`, `X`, `#`, `O` and `*` are alive; anything else is dead. Short rows
    /// are padded with dead cells up to the longest row.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Grid::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let alive = matches!(ch, 'x' | 'X' | '#' | 'O' | '*');
                grid.current[y * width + x] = Cell::from(alive);
            }
        }
        grid
    }

    /// Re-randomize the `current` buffer and clear `next`.
    ///
    /// Each cell is independently alive when a uniform draw from `1..=100`
    /// is at most `fill_percent`, so 0 leaves the grid empty and 100 fills it.
    pub fn initialize<R: Rng + ?Sized>(&mut self, fill_percent: u8, rng: &mut R) {
        let fill = fill_percent.min(100);
        for cell in self.current.iter_mut() {
            *cell = Cell::from(rng.gen_range(1..=100u8) <= fill);
        }
        self.next.fill(Cell::Dead);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pure bounds check
    pub fn is_valid_coordinate(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Read a cell; invalid coordinates read as dead
    pub fn read(&self, buffer: Buffer, x: isize, y: isize) -> Cell {
        match self.index(x, y) {
            Some(i) => self.cells(buffer)[i],
            None => Cell::Dead,
        }
    }

    /// Write a cell; invalid coordinates are ignored
    pub fn write(&mut self, buffer: Buffer, x: isize, y: isize, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells_mut(buffer)[i] = cell;
        }
    }

    /// True iff no cell in `buffer` is alive
    pub fn all_dead(&self, buffer: Buffer) -> bool {
        !self.cells(buffer).iter().any(|c| c.is_alive())
    }

    /// Number of living cells in `buffer`
    pub fn population(&self, buffer: Buffer) -> usize {
        self.cells(buffer).iter().filter(|c| c.is_alive()).count()
    }

    /// Make the fully computed `next` generation the new `current`.
    ///
    /// The buffers trade places, so afterwards `next` holds the previous
    /// generation until the following computation overwrites it.
    pub fn publish(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Iterate the rows of `buffer` from top to bottom
    pub fn rows(&self, buffer: Buffer) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics
        let width = self.width.max(1);
        self.cells(buffer).chunks(width)
    }

    /// Text rendering of `buffer`, rows separated by `\n`
    pub fn dump(&self, buffer: Buffer, alive: char, dead: char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (y, row) in self.rows(buffer).enumerate() {
            if y > 0 {
                out.push('\n');
            }
            for cell in row {
                out.push(cell.glyph(alive, dead));
            }
        }
        out
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if self.is_valid_coordinate(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    fn cells(&self, buffer: Buffer) -> &[Cell] {
        match buffer {
            Buffer::Current => &self.current,
            Buffer::Next => &self.next,
        }
    }

    fn cells_mut(&mut self, buffer: Buffer) -> &mut [Cell] {
        match buffer {
            Buffer::Current => &mut self.current,
            Buffer::Next => &mut self.next,
        }
    }
}
