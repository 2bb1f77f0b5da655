use crate::types::{BOARD_SIZE, Position};

/// Maps between window pixels and board squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub cell_size: u32,
    pub border: u32,
}

impl BoardLayout {
    pub fn new(cell_size: u32, border: u32) -> Self {
        Self { cell_size, border }
    }

    /// Square under the pixel `(x, y)`, or `None` in the margin or outside.
    pub fn pixel_to_cell(&self, x: i32, y: i32) -> Option<Position> {
        let col = self.axis_to_index(x)?;
        let row = self.axis_to_index(y)?;
        Position::new(col, row)
    }

    /// Pixel centre of a square.
    pub fn cell_center(&self, pos: Position) -> (u32, u32) {
        let half = self.cell_size / 2;
        (
            self.border + pos.col as u32 * self.cell_size + half,
            self.border + pos.row as u32 * self.cell_size + half,
        )
    }

    pub fn stone_radius(&self) -> u32 {
        (self.cell_size / 2).saturating_sub(4)
    }

    /// Width and height of the grid plus both margins.
    pub fn board_extent(&self) -> u32 {
        BOARD_SIZE as u32 * self.cell_size + self.border * 2
    }

    fn axis_to_index(&self, px: i32) -> Option<u8> {
        if self.cell_size == 0 {
            return None;
        }
        let offset = i64::from(px) - i64::from(self.border);
        let idx = offset.div_euclid(i64::from(self.cell_size));
        u8::try_from(idx).ok().filter(|&i| i < BOARD_SIZE)
    }
}
