//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// A winning triple of cell indices.
pub type Line = [usize; 3];

/// Winning line indices on the 3x3 board, in detection priority order.
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line in [`WINNING_LINES`] order whose three cells hold the same mark.
    pub fn first_winning_line(cells: &[Cell; 9]) -> Option<(Player, Line)> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let player = cells[a].to_player()?;
            (cells[a] == cells[b] && cells[a] == cells[c]).then_some((player, line))
        })
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        !Self::winning_lines(cells, player).is_empty()
    }

    /// Every line held entirely by `player`, in priority order
    pub fn winning_lines(cells: &[Cell; 9], player: Player) -> Vec<Line> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::X;
        cells[4] = Cell::X;
        cells[5] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(
            LineAnalyzer::first_winning_line(&cells),
            Some((Player::X, [3, 4, 5]))
        );
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[5] = Cell::O;
        cells[8] = Cell::O;

        assert_eq!(
            LineAnalyzer::first_winning_line(&cells),
            Some((Player::O, [2, 5, 8]))
        );
    }

    #[test]
    fn test_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(
            LineAnalyzer::first_winning_line(&cells),
            Some((Player::X, [2, 4, 6]))
        );
    }

    #[test]
    fn rows_take_priority_over_columns_and_diagonals() {
        // X X X
        // X X .
        // X . X
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 3, 4, 6, 8] {
            cells[idx] = Cell::X;
        }

        assert_eq!(
            LineAnalyzer::first_winning_line(&cells),
            Some((Player::X, [0, 1, 2]))
        );
        assert_eq!(
            LineAnalyzer::winning_lines(&cells, Player::X),
            vec![[0, 1, 2], [0, 3, 6], [0, 4, 8], [2, 4, 6]]
        );
    }

    #[test]
    fn empty_line_is_not_a_win() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::first_winning_line(&cells), None);
    }
}
