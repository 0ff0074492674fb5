//! Reachability checks for injected boards
//!
//! Boards built through [`crate::history::GameHistory`] are always reachable.
//! These checks are for synthetic positions parsed from strings.

use super::board::{Board, Player};
use super::lines::LineAnalyzer;

impl Board {
    /// Check whether this board can arise in an X-first game played by the rules
    pub fn is_reachable(&self) -> bool {
        let x_count = self.count(Player::X);
        let o_count = self.count(Player::O);

        // X opens, so X is level with O or one ahead
        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = LineAnalyzer::has_won(self.cells(), Player::X);
        let o_wins = LineAnalyzer::has_won(self.cells(), Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have made the last move
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && x_count != o_count {
            return false;
        }

        // Several lines can only come from one move, so they share a cell
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::winning_lines(self.cells(), player);

        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn empty_and_opening_boards_are_reachable() {
        assert!(Board::new().is_reachable());
        assert!(board("....X....").is_reachable());
        assert!(board("O...X....").is_reachable());
    }

    #[test]
    fn o_cannot_open() {
        assert!(!board("....O....").is_reachable());
    }

    #[test]
    fn x_cannot_move_twice() {
        assert!(!board("XX.......").is_reachable());
    }

    #[test]
    fn both_players_cannot_win() {
        assert!(!board("XXXOOO...").is_reachable());
    }

    #[test]
    fn winner_must_have_moved_last() {
        // X completed the top row but O has already answered
        assert!(!board("XXXOO.O..").is_reachable());
        assert!(board("XXXOO....").is_reachable());
    }

    #[test]
    fn double_line_needs_shared_cell() {
        // X X X
        // O O .
        // X X X
        assert!(!board("XXXOO.XXX").winning_lines_share_cell(Player::X));
        assert!(!board("XXXOO.XXX").is_reachable());

        // X X X
        // X O O
        // X O O
        assert!(board("XXXXOOXOO").winning_lines_share_cell(Player::X));
    }
}
