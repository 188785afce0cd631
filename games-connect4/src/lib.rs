//! Connect Four on a bitboard
//!
//! Connect Four is a two-player connection game played on a 7-column,
//! 6-row grid; the first player to line up four discs horizontally,
//! vertically, or diagonally wins.
//!
//! # Bit layout
//!
//! Each column takes 7 bits: 6 playable cells plus a permanently-zero
//! sentinel on top. The sentinel absorbs the carry when a disc is dropped
//! into a column and keeps columns apart in the diagonal shift tests.
//! 49 bits total:
//!
//! ```text
//!  .  .  .  .  .  .  .   <- sentinel row (always 0)
//!  5 12 19 26 33 40 47   <- top row
//!  4 11 18 25 32 39 46
//!  3 10 17 24 31 38 45
//!  2  9 16 23 30 37 44
//!  1  8 15 22 29 36 43
//!  0  7 14 21 28 35 42   <- bottom row
//! ```
//!
//! A position is two bitboards plus the player to move: `mask` has a 1
//! wherever any disc sits, `position` has a 1 on the discs of the player
//! to move. Bits of `position` outside `mask` carry no meaning.

use std::fmt;

use thiserror::Error;

use game_core::{GameState, InvalidAction, Player};

#[cfg(test)]
mod tests;

/// Board dimensions
pub const COLS: usize = 7;
pub const ROWS: usize = 6;

/// Bits per column, including the sentinel.
const COL_BITS: usize = ROWS + 1;

/// Cell symbols: `SYMBOLS[0]` for [`Player::One`], `SYMBOLS[1]` for
/// [`Player::Two`].
const SYMBOLS: [char; 2] = ['x', 'o'];

/// Blank cell in a board literal.
const BLANK: char = '.';

const fn bottom_mask() -> u64 {
    let mut mask = 0;
    let mut col = 0;
    while col < COLS {
        mask |= 1 << (col * COL_BITS);
        col += 1;
    }
    mask
}

/// All 42 playable cells set.
const FULL_BOARD: u64 = bottom_mask() * ((1 << ROWS) - 1);

/// Top playable cell of `col`: set in `mask` exactly when the column is full.
const fn top_mask(col: usize) -> u64 {
    1 << (col * COL_BITS + ROWS - 1)
}

fn symbol_for(player: Player) -> char {
    match player {
        Player::One => SYMBOLS[0],
        Player::Two => SYMBOLS[1],
    }
}

/// Four-in-a-row test over one player's discs.
///
/// Shift distances select the direction: 1 = vertical, `COL_BITS` =
/// horizontal, `COL_BITS - 1` and `COL_BITS + 1` = the two diagonals.
/// `pairs` marks cells starting a run of two; a second run of two starting
/// two steps further along completes a run of four. The sentinel bit keeps
/// runs from leaking between columns.
fn has_four(discs: u64) -> bool {
    const SHIFTS: [usize; 4] = [1, COL_BITS, COL_BITS - 1, COL_BITS + 1];
    SHIFTS.iter().any(|&shift| {
        let pairs = discs & (discs >> shift);
        pairs & (pairs >> (2 * shift)) != 0
    })
}

/// Error for a malformed board literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected {expected} rows, got {actual}")]
    WrongRowCount { expected: usize, actual: usize },

    #[error("row {row}: expected {expected} cells, got {actual}")]
    WrongRowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Connect Four position.
///
/// A plain value: [`GameState::apply`] returns a new `Connect4` and never
/// mutates the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connect4 {
    /// 1 wherever any disc sits.
    mask: u64,
    /// 1 on the discs of the player to move; meaningless outside `mask`.
    position: u64,
    /// Tracked explicitly; consistent with disc parity by construction.
    to_move: Player,
}

impl Connect4 {
    /// Empty board, player one to move.
    pub fn new() -> Self {
        Self {
            mask: 0,
            position: 0,
            to_move: Player::One,
        }
    }

    /// Parse a board literal: exactly 6 rows of exactly 7 cells over
    /// `{'.', 'x', 'o'}`, row 0 = bottom. Cells showing `to_move`'s symbol
    /// become that player's discs; every other non-blank cell belongs to
    /// the opponent.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], to_move: Player) -> Result<Self, ParseBoardError> {
        if rows.len() != ROWS {
            return Err(ParseBoardError::WrongRowCount {
                expected: ROWS,
                actual: rows.len(),
            });
        }

        let mover = symbol_for(to_move);
        let mut mask = 0u64;
        let mut position = 0u64;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != COLS {
                return Err(ParseBoardError::WrongRowWidth {
                    row: r,
                    expected: COLS,
                    actual: row.chars().count(),
                });
            }
            for (c, cell) in row.chars().enumerate() {
                if cell == BLANK {
                    continue;
                }
                let bit = 1u64 << (c * COL_BITS + r);
                mask |= bit;
                if cell == mover {
                    position |= bit;
                }
            }
        }

        Ok(Self {
            mask,
            position,
            to_move,
        })
    }

    /// Render the board as row strings, row 0 = bottom. Inverse of
    /// [`from_rows`](Connect4::from_rows).
    pub fn rows(&self) -> Vec<String> {
        let mover = symbol_for(self.to_move);
        let waiter = symbol_for(self.to_move.opponent());

        (0..ROWS)
            .map(|r| {
                (0..COLS)
                    .map(|c| {
                        let bit = 1u64 << (c * COL_BITS + r);
                        if self.mask & bit == 0 {
                            BLANK
                        } else if self.position & bit != 0 {
                            mover
                        } else {
                            waiter
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Whether a disc can be dropped into `col`.
    #[inline]
    pub fn is_valid_action(&self, col: usize) -> bool {
        col < COLS && self.mask & top_mask(col) == 0
    }

    /// Discs of the side that moved last (the player currently waiting).
    #[inline]
    fn last_mover_discs(&self) -> u64 {
        self.position ^ self.mask
    }

    /// Whether the last move won the game.
    #[inline]
    fn has_won(&self) -> bool {
        has_four(self.last_mover_discs())
    }
}

impl Default for Connect4 {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Connect4 {
    type Action = usize;

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn valid_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS).filter(|&c| self.is_valid_action(c)).collect()
    }

    fn apply(&self, col: usize) -> Result<Self, InvalidAction> {
        if self.is_terminal() || !self.is_valid_action(col) {
            return Err(InvalidAction::new(format!("column {col}")));
        }

        // Flip `position` to the opponent's discs under the old mask, then
        // add `mask` to the column's bottom bit: the carry lands on the
        // lowest empty cell and the sentinel keeps it inside the column.
        let mut next = *self;
        next.position ^= next.mask;
        next.mask |= next.mask + (1 << (col * COL_BITS));
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    fn is_terminal(&self) -> bool {
        self.mask == FULL_BOARD || self.has_won()
    }

    fn score(&self) -> f32 {
        if self.has_won() {
            // The winner is the side that just moved, i.e. the opponent of
            // the player to move.
            -self.to_move.sign()
        } else {
            0.0
        }
    }
}

impl fmt::Display for Connect4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows().iter().rev() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
