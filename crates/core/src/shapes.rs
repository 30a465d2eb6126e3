//! Shapes module - polyomino masks and the shape catalogue
//!
//! A shape is a small row-major occupancy mask relative to its own top-left
//! bounding-box corner. The catalogue stores every rotated variant explicitly,
//! so the engine never rotates at runtime; [`Shape::rotate_cw`] exists as a
//! standalone capability for callers that want it.

use std::fmt;

use crate::rng::RandomSource;

/// Largest shape side length representable by the mask
pub const MAX_SHAPE_DIM: u8 = 4;

/// Offset of a single occupied cell relative to the shape origin
pub type CellOffset = (i8, i8);

/// Immutable occupancy mask.
///
/// Bit `y * MAX_SHAPE_DIM + x` is set when cell `(x, y)` is occupied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    width: u8,
    height: u8,
    bits: u16,
}

impl Shape {
    /// Build a shape from rows of `#` (occupied) and `.` (empty).
    ///
    /// Panics (at compile time when used in a const) if rows are ragged, empty,
    /// or larger than [`MAX_SHAPE_DIM`].
    pub const fn parse(rows: &[&str]) -> Self {
        let height = rows.len();
        assert!(height > 0 && height <= MAX_SHAPE_DIM as usize);
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_DIM as usize);

        let mut bits = 0u16;
        let mut y = 0;
        while y < height {
            let row = rows[y].as_bytes();
            assert!(row.len() == width);
            let mut x = 0;
            while x < width {
                if row[x] == b'#' {
                    bits |= 1 << (y * MAX_SHAPE_DIM as usize + x);
                }
                x += 1;
            }
            y += 1;
        }

        Self {
            width: width as u8,
            height: height as u8,
            bits,
        }
    }

    /// Build a shape from a boolean matrix.
    ///
    /// Returns `None` for empty, ragged, or oversized input.
    pub fn from_matrix(rows: &[&[bool]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0
            || width == 0
            || height > MAX_SHAPE_DIM as usize
            || width > MAX_SHAPE_DIM as usize
            || rows.iter().any(|r| r.len() != width)
        {
            return None;
        }

        let mut bits = 0u16;
        for (y, row) in rows.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                if filled {
                    bits |= 1 << Self::bit(x as u8, y as u8);
                }
            }
        }

        Some(Self {
            width: width as u8,
            height: height as u8,
            bits,
        })
    }

    #[inline(always)]
    const fn bit(x: u8, y: u8) -> u32 {
        (y as u32) * (MAX_SHAPE_DIM as u32) + (x as u32)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check whether cell `(x, y)` of the mask is occupied
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.bits & (1 << Self::bit(x, y)) != 0
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Occupied cell offsets in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.is_filled(x, y))
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// True when no border row or column of the bounding box is empty.
    pub fn is_minimal(&self) -> bool {
        let row_used = |y: u8| (0..self.width).any(|x| self.is_filled(x, y));
        let col_used = |x: u8| (0..self.height).any(|y| self.is_filled(x, y));
        row_used(0) && row_used(self.height - 1) && col_used(0) && col_used(self.width - 1)
    }

    /// Rotate 90° clockwise: `rotated[x][rows - 1 - y] = shape[y][x]`.
    pub fn rotate_cw(&self) -> Self {
        let mut bits = 0u16;
        for (dx, dy) in self.cells() {
            let nx = self.height - 1 - dy as u8;
            let ny = dx as u8;
            bits |= 1 << Self::bit(nx, ny);
        }
        Self {
            width: self.height,
            height: self.width,
            bits,
        }
    }

    /// Rotate 90° counter-clockwise (three clockwise turns).
    pub fn rotate_ccw(&self) -> Self {
        self.rotate_cw().rotate_cw().rotate_cw()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({}x{}:", self.width, self.height)?;
        for y in 0..self.height {
            f.write_str(" ")?;
            for x in 0..self.width {
                f.write_str(if self.is_filled(x, y) { "#" } else { "." })?;
            }
        }
        f.write_str(")")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width {
                f.write_str(if self.is_filled(x, y) { "█" } else { "·" })?;
            }
        }
        Ok(())
    }
}

/// The fixed shape library blocks are sampled from.
pub const CATALOGUE: [Shape; 34] = [
    // Single
    Shape::parse(&["#"]),
    // Lines
    Shape::parse(&["##"]),
    Shape::parse(&["###"]),
    Shape::parse(&["####"]),
    Shape::parse(&["#", "#"]),
    Shape::parse(&["#", "#", "#"]),
    Shape::parse(&["#", "#", "#", "#"]),
    // Corner triples
    Shape::parse(&["##", "#."]),
    Shape::parse(&["##", ".#"]),
    Shape::parse(&["#.", "##"]),
    Shape::parse(&[".#", "##"]),
    // Square
    Shape::parse(&["##", "##"]),
    // L
    Shape::parse(&["#.", "#.", "##"]),
    Shape::parse(&["###", "#.."]),
    Shape::parse(&["##", ".#", ".#"]),
    Shape::parse(&["..#", "###"]),
    // J
    Shape::parse(&[".#", ".#", "##"]),
    Shape::parse(&["#..", "###"]),
    Shape::parse(&["##", "#.", "#."]),
    Shape::parse(&["###", "..#"]),
    // T
    Shape::parse(&["###", ".#."]),
    Shape::parse(&[".#", "##", ".#"]),
    Shape::parse(&[".#.", "###"]),
    Shape::parse(&["#.", "##", "#."]),
    // S / Z
    Shape::parse(&[".##", "##."]),
    Shape::parse(&["#.", "##", ".#"]),
    Shape::parse(&["##.", ".##"]),
    Shape::parse(&[".#", "##", "#."]),
    // Plus
    Shape::parse(&[".#.", "###", ".#."]),
    // Large corners
    Shape::parse(&["#..", "#..", "###"]),
    Shape::parse(&["..#", "..#", "###"]),
    Shape::parse(&["###", "#..", "#.."]),
    Shape::parse(&["###", "..#", "..#"]),
    // Slab
    Shape::parse(&["###", "###"]),
];

/// Draw a shape uniformly from the catalogue.
pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Shape {
    CATALOGUE[rng.next_range(CATALOGUE.len() as u32) as usize]
}
