use crate::error::GameError;
use crate::types::{BOARD_SIZE, Cell, MoveCandidate, Player, Position};

const WIDTH: usize = BOARD_SIZE as usize;
const NUM_SQUARES: usize = WIDTH * WIDTH;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reversi board state represented by two bitboards.
///
/// Bit `row * 8 + col` is set in `black` or `white` when that square holds a
/// stone of the colour. A square is never set in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds a board from eight text rows, top row first.
    /// `X` is black, `O` is white, `.` is empty.
    pub fn from_rows(rows: &[&str; WIDTH]) -> Result<Self, GameError> {
        let mut board = Self { black: 0, white: 0 };
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != WIDTH {
                return Err(GameError::InvalidBoardText(format!(
                    "row {row} must have {WIDTH} cells, got {:?}",
                    line
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let square = bit(row * WIDTH + col);
                match ch {
                    'X' => board.black |= square,
                    'O' => board.white |= square,
                    '.' => {}
                    other => {
                        return Err(GameError::InvalidBoardText(format!(
                            "unexpected {other:?} at row {row}, col {col}"
                        )));
                    }
                }
            }
        }
        Ok(board)
    }

    pub fn cell(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// The 8×8 grid, indexed `[row][col]`.
    pub fn rows(&self) -> [[Cell; WIDTH]; WIDTH] {
        let mut grid = [[Cell::Empty; WIDTH]; WIDTH];
        for (pos, cell) in self.to_array().into_iter().enumerate() {
            grid[pos / WIDTH][pos % WIDTH] = cell;
        }
        grid
    }

    /// Returns every legal move for `player` in row-major scan order.
    ///
    /// A candidate is produced only when it captures at least one stone. An
    /// empty result means `player` must pass.
    pub fn legal_moves(&self, player: Player) -> Vec<MoveCandidate> {
        let (me, opp) = self.sides(player);
        let occupied = me | opp;

        (0..NUM_SQUARES)
            .filter(|&pos| (occupied & bit(pos)) == 0)
            .filter_map(|pos| {
                let flips = Self::collect_flips(pos, me, opp);
                (flips != 0).then(|| MoveCandidate {
                    position: Position::from_index(pos),
                    captured: mask_to_positions(flips),
                })
            })
            .collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        let (me, opp) = self.sides(player);
        (0..NUM_SQUARES).any(|pos| Self::collect_flips(pos, me, opp) != 0)
    }

    /// Stones `player` would flip by placing at `pos`. Empty when the move is
    /// illegal, including when `pos` is occupied.
    pub fn captures_at(&self, pos: Position, player: Player) -> Vec<Position> {
        let (me, opp) = self.sides(player);
        mask_to_positions(Self::collect_flips(pos.index(), me, opp))
    }

    /// Places a stone for `player` and flips every square in `captured`.
    ///
    /// Caller contract: `pos` is empty and `captured` is exactly the capture
    /// set `legal_moves` reported for this placement. Use
    /// [`Board::try_apply_move`] when that is not already known.
    pub fn apply_move(&mut self, pos: Position, player: Player, captured: &[Position]) {
        debug_assert!(self.cell(pos).is_empty(), "apply_move on occupied cell");
        let flips = positions_to_mask(captured);
        debug_assert_eq!(
            flips,
            {
                let (me, opp) = self.sides(player);
                Self::collect_flips(pos.index(), me, opp)
            },
            "stale capture set"
        );
        self.commit(pos.index(), player, flips);
    }

    /// Validating variant of [`Board::apply_move`]. Leaves the board untouched
    /// on error.
    pub fn try_apply_move(
        &mut self,
        pos: Position,
        player: Player,
        captured: &[Position],
    ) -> Result<(), GameError> {
        if !self.cell(pos).is_empty() {
            return Err(GameError::OccupiedCell {
                col: pos.col,
                row: pos.row,
            });
        }
        let (me, opp) = self.sides(player);
        let expected = Self::collect_flips(pos.index(), me, opp);
        let flips = positions_to_mask(captured);
        if expected == 0 || flips != expected || captured.len() != flips.count_ones() as usize {
            return Err(GameError::StaleCaptureSet {
                col: pos.col,
                row: pos.row,
            });
        }
        self.commit(pos.index(), player, flips);
        Ok(())
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// True when neither side can move.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }

    /// Converts board to 64 cells in row-major order.
    pub fn to_array(&self) -> [Cell; NUM_SQUARES] {
        let mut board = [Cell::Empty; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self.cell(Position::from_index(pos));
        }
        board
    }

    fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    fn commit(&mut self, pos: usize, player: Player, flips: u64) {
        let (me, opp) = self.sides(player);
        let next_me = me | bit(pos) | flips;
        let next_opp = opp & !flips;

        match player {
            Player::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Player::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }
    }

    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= NUM_SQUARES {
            return 0;
        }

        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;

            while in_bounds(r, c) {
                let square = bit((r as usize) * WIDTH + c as usize);
                if (opp & square) != 0 {
                    line |= square;
                } else {
                    if (me & square) != 0 {
                        flips |= line;
                    }
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / WIDTH) as i32, (pos % WIDTH) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..WIDTH as i32).contains(&row) && (0..WIDTH as i32).contains(&col)
}

fn positions_to_mask(positions: &[Position]) -> u64 {
    positions.iter().fold(0u64, |mask, pos| mask | bit(pos.index()))
}

fn mask_to_positions(mut mask: u64) -> Vec<Position> {
    let mut out = Vec::with_capacity(mask.count_ones() as usize);
    while mask != 0 {
        out.push(Position::from_index(mask.trailing_zeros() as usize));
        mask &= mask - 1;
    }
    out
}
