//! Terminal-state detection and scoring.

use crate::movegen::has_legal_move;
use crate::Board;
use othello_core::Color;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black holds more discs at the end.
    BlackWins,
    /// White holds more discs at the end.
    WhiteWins,
    /// Both players hold the same number of discs.
    Draw,
}

/// Returns true if neither player has a legal move.
///
/// This covers both a full board and a mutual stalemate with empty
/// squares remaining; whose turn it nominally is does not matter.
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Color::Black) && !has_legal_move(board, Color::White)
}

/// Returns the result if the game is over, otherwise `None`.
///
/// A finished game is decided by disc count: the higher count wins,
/// equal counts draw.
pub fn game_result(board: &Board) -> Option<GameResult> {
    if !is_game_over(board) {
        return None;
    }

    let (black, white) = board.counts();
    Some(match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameResult::BlackWins,
        std::cmp::Ordering::Less => GameResult::WhiteWins,
        std::cmp::Ordering::Equal => GameResult::Draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_is_live() {
        let board = Board::startpos();
        assert!(!is_game_over(&board));
        assert_eq!(game_result(&board), None);
    }

    #[test]
    fn full_board_is_over() {
        let board = Board::from_placement(
            "bbbbbbbb/wwwwwwww/bbbbbbbb/wwwwwwww/bbbbbbbb/wwwwwwww/bbbbbbbb/wwwwwwww",
        )
        .unwrap();
        assert!(board.is_full());
        assert!(is_game_over(&board));
        assert_eq!(game_result(&board), Some(GameResult::Draw));
    }

    #[test]
    fn wipeout_ends_the_game_with_empties_left() {
        // Only black discs remain: neither player can capture anything,
        // so the game is over even with 56 empty squares.
        let board = Board::from_placement("bbbbbbbb/8/8/8/8/8/8/8").unwrap();
        assert!(!board.is_full());
        assert!(is_game_over(&board));
        assert_eq!(game_result(&board), Some(GameResult::BlackWins));
    }

    #[test]
    fn result_follows_counts() {
        let white_majority = Board::from_placement("wwwwwwww/wwwwwwww/8/8/8/8/8/bbbbbbbb").unwrap();
        assert!(is_game_over(&white_majority));
        assert_eq!(game_result(&white_majority), Some(GameResult::WhiteWins));
    }
}
