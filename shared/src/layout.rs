/// Maps between board coordinates and window pixels for a square window.
///
/// Not part of the game state; renderers build one from the board size and their window width.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CellLayout {
    size: usize,
    cell_extent: u32,
}

impl CellLayout {
    pub fn new(size: usize, window_width: u32) -> Self {
        let divisor = u32::try_from(size.max(1)).unwrap_or(u32::MAX);
        CellLayout {
            size,
            cell_extent: window_width / divisor,
        }
    }

    /// Side of one cell in pixels.
    pub fn cell_extent(&self) -> u32 {
        self.cell_extent
    }

    /// Top-left pixel of a cell as `(x, y)`; columns run along x, rows along y.
    pub fn cell_origin(&self, row: usize, col: usize) -> (u32, u32) {
        let extent = self.cell_extent as usize;
        ((col * extent) as u32, (row * extent) as u32)
    }

    /// The cell under a pixel, or `None` if the pixel is off the board.
    pub fn position_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if self.cell_extent == 0 || x < 0.0 || y < 0.0 {
            return None;
        }
        let row = (y as u32 / self.cell_extent) as usize;
        let col = (x as u32 / self.cell_extent) as usize;
        (row < self.size && col < self.size).then_some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_uses_integer_division() {
        assert_eq!(CellLayout::new(3, 600).cell_extent(), 200);
        assert_eq!(CellLayout::new(7, 600).cell_extent(), 85);
    }

    #[test]
    fn clicks_map_to_row_from_y_and_col_from_x() {
        let layout = CellLayout::new(3, 600);
        assert_eq!(layout.position_to_cell(10.0, 450.0), Some((2, 0)));
        assert_eq!(layout.position_to_cell(599.0, 0.0), Some((0, 2)));
        assert_eq!(layout.cell_origin(2, 1), (200, 400));
    }

    #[test]
    fn clicks_off_the_board_are_dropped() {
        let layout = CellLayout::new(7, 600);
        // 7 * 85 = 595, the last five pixels belong to no cell.
        assert_eq!(layout.position_to_cell(597.0, 10.0), None);
        assert_eq!(layout.position_to_cell(-1.0, 10.0), None);
    }
}
