//! Size-parameterised index helpers: rows, columns, boxes, peers, groups.
//!
//! Everything here is a pure function of `(size, box_size, x, y)`, computed
//! once per [`Geometry`] and shared read-only afterward. Since `size` is a
//! runtime parameter (4, 9, or 16), these tables are `Vec`-backed rather
//! than fixed-size arrays, sized once at construction and never
//! reallocated.

use crate::position::Position;

/// Precomputed row/column/box/peer tables for one `(size, box_size)` pair.
#[derive(Debug, Clone)]
pub struct Geometry {
    size: u8,
    box_size: u8,
    rows: Vec<Vec<Position>>,
    columns: Vec<Vec<Position>>,
    boxes: Vec<Vec<Position>>,
    peers: Vec<Vec<Position>>,
}

impl Geometry {
    /// Builds the geometry tables for a puzzle of the given `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not one of `4`, `9`, `16`.
    #[must_use]
    pub fn new(size: u8) -> Self {
        let box_size = match size {
            4 => 2,
            9 => 3,
            16 => 4,
            _ => panic!("unsupported puzzle size {size}, expected 4, 9, or 16"),
        };

        let rows: Vec<Vec<Position>> = (0..size)
            .map(|x| (0..size).map(|y| Position::new(x, y)).collect())
            .collect();
        let columns: Vec<Vec<Position>> = (0..size)
            .map(|y| (0..size).map(|x| Position::new(x, y)).collect())
            .collect();

        let boxes_per_side = size / box_size;
        let mut boxes: Vec<Vec<Position>> = Vec::with_capacity(size as usize);
        for box_row in 0..boxes_per_side {
            for box_col in 0..boxes_per_side {
                let base_x = box_row * box_size;
                let base_y = box_col * box_size;
                let mut cells = Vec::with_capacity((box_size * box_size) as usize);
                for dx in 0..box_size {
                    for dy in 0..box_size {
                        cells.push(Position::new(base_x + dx, base_y + dy));
                    }
                }
                boxes.push(cells);
            }
        }

        let mut geometry = Self {
            size,
            box_size,
            rows,
            columns,
            boxes,
            peers: Vec::new(),
        };

        let peers = (0..size)
            .flat_map(|x| (0..size).map(move |y| Position::new(x, y)))
            .map(|pos| geometry.compute_peers(pos))
            .collect();
        geometry.peers = peers;
        geometry
    }

    fn compute_peers(&self, pos: Position) -> Vec<Position> {
        let mut seen = vec![false; (self.size as usize) * (self.size as usize)];
        let idx = |p: Position| (p.x as usize) * (self.size as usize) + (p.y as usize);
        seen[idx(pos)] = true;

        let mut peers = Vec::new();
        for &p in self
            .row_indices(pos.y)
            .iter()
            .chain(self.column_indices(pos.x))
            .chain(self.box_indices(pos))
        {
            if !seen[idx(p)] {
                seen[idx(p)] = true;
                peers.push(p);
            }
        }
        peers
    }

    /// The puzzle size these tables were built for.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// The box dimension (`box_size * box_size == size`).
    #[must_use]
    pub const fn box_size(&self) -> u8 {
        self.box_size
    }

    /// The positions in the box containing `pos`.
    #[must_use]
    pub fn box_base_index(&self, pos: Position) -> Position {
        Position::new(
            pos.x - pos.x % self.box_size,
            pos.y - pos.y % self.box_size,
        )
    }

    /// The box index (row-major, `0..size`) that `pos` belongs to.
    fn box_index(&self, pos: Position) -> usize {
        let boxes_per_side = (self.size / self.box_size) as usize;
        let base = self.box_base_index(pos);
        let box_row = (base.x / self.box_size) as usize;
        let box_col = (base.y / self.box_size) as usize;
        box_row * boxes_per_side + box_col
    }

    /// All cells sharing row `x` (fixed `x`, varying `y`).
    #[must_use]
    pub fn row_indices(&self, x: u8) -> &[Position] {
        &self.rows[x as usize]
    }

    /// All cells sharing column `y` (fixed `y`, varying `x`).
    #[must_use]
    pub fn column_indices(&self, y: u8) -> &[Position] {
        &self.columns[y as usize]
    }

    /// All cells in the box containing `pos`.
    #[must_use]
    pub fn box_indices(&self, pos: Position) -> &[Position] {
        &self.boxes[self.box_index(pos)]
    }

    /// The union of `pos`'s row, column, and box, minus `pos` itself.
    #[must_use]
    pub fn peer_indices(&self, pos: Position) -> &[Position] {
        let idx = (pos.x as usize) * (self.size as usize) + (pos.y as usize);
        &self.peers[idx]
    }

    /// All rows, in index order.
    #[must_use]
    pub fn all_row_indices(&self) -> &[Vec<Position>] {
        &self.rows
    }

    /// All columns, in index order.
    #[must_use]
    pub fn all_column_indices(&self) -> &[Vec<Position>] {
        &self.columns
    }

    /// All boxes, in index order.
    #[must_use]
    pub fn all_box_indices(&self) -> &[Vec<Position>] {
        &self.boxes
    }

    /// All groups (rows, then columns, then boxes), `3 * size` in total.
    #[must_use]
    pub fn all_group_indices(&self) -> Vec<&[Position]> {
        self.rows
            .iter()
            .map(Vec::as_slice)
            .chain(self.columns.iter().map(Vec::as_slice))
            .chain(self.boxes.iter().map(Vec::as_slice))
            .collect()
    }
}
