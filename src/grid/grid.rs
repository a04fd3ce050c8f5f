use super::Square;

/// Occupancy map of a square board.
///
/// Cells are stored row-major: the flag for `Square(x, y)` lives in row `y`,
/// column `x`. A cell is `0` until some token visits it, then `1` forever.
/// Grids are never rolled back; a new game state clones its parent's grid
/// and marks one more cell.
///
/// Callers must pass squares with both coordinates below [`size`](Self::size).
/// An off-board square panics in every build, even when its flat index would
/// still land inside the slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }
    pub fn size(&self) -> usize {
        self.size
    }
    /// Occupancy digit of a cell, `0` or `1`.
    pub fn cell(&self, square: Square) -> u8 {
        self.cells[self.index(square)]
    }
    pub fn is_occupied(&self, square: Square) -> bool {
        self.cell(square) == 1
    }
    pub fn mark(&mut self, square: Square) {
        let i = self.index(square);
        self.cells[i] = 1;
    }
    /// Number of visited cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }
    /// Matrix view, indexed `[row][col]`.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size.max(1))
            .map(<[u8]>::to_vec)
            .collect()
    }

    fn index(&self, square: Square) -> usize {
        assert!(square.within(self.size), "{} off a {}x{} grid", square, self.size, self.size);
        square.y() * self.size + square.x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_cells() {
        let mut grid = Grid::new(4);
        grid.mark(Square::new(1, 0));
        grid.mark(Square::new(2, 2));
        assert_eq!(
            grid.rows(),
            vec![
                vec![0, 1, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 1, 0],
                vec![0, 0, 0, 0],
            ]
        );
        assert_eq!(grid.occupied(), 2);
    }

    #[test]
    fn mark_twice() {
        let mut grid = Grid::new(3);
        grid.mark(Square::new(1, 1));
        grid.mark(Square::new(1, 1));
        assert!(grid.is_occupied(Square::new(1, 1)));
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    #[should_panic(expected = "off a 4x4 grid")]
    fn mark_off_the_board() {
        let mut grid = Grid::new(4);
        grid.mark(Square::new(5, 0));
    }

    #[test]
    fn clone_is_deep() {
        let mut parent = Grid::new(3);
        parent.mark(Square::new(0, 0));
        let mut child = parent.clone();
        child.mark(Square::new(2, 1));
        assert!(!parent.is_occupied(Square::new(2, 1)));
        assert!(child.is_occupied(Square::new(0, 0)));
    }
}
