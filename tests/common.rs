//! Common test utilities for the tictactoe_history test suite.
//!
//! Enumerations over the (small) space of legal play, used in place of random
//! sampling.

#![allow(dead_code)]

use std::collections::HashSet;

use tictactoe_history::{
    Board, GameHistory,
    tictactoe::{apply_move, legal_moves, next_player_for},
};

/// Every distinct board reachable from the empty board by legal play,
/// including the empty board itself.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut boards = Vec::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);

        let mark = next_player_for(board.occupied_count());
        for cell in legal_moves(&board) {
            let next = apply_move(&board, cell, mark).expect("legal move must apply");
            stack.push(next);
        }
    }

    boards
}

/// All move sequences of exactly `depth` legal moves from a fresh game.
pub fn move_sequences(depth: usize) -> Vec<Vec<usize>> {
    let mut sequences = vec![Vec::new()];
    for _ in 0..depth {
        let mut next = Vec::new();
        for seq in &sequences {
            let (history, _) = GameHistory::from_moves(seq.iter().copied());
            for cell in legal_moves(history.current_board()) {
                let mut extended = seq.clone();
                extended.push(cell);
                next.push(extended);
            }
        }
        sequences = next;
    }
    sequences
}

/// History after playing `cells`, panicking if any is rejected.
pub fn play(cells: &[usize]) -> GameHistory {
    let (history, rejected) = GameHistory::from_moves(cells.iter().copied());
    assert_eq!(rejected, 0, "sequence {cells:?} contained illegal moves");
    history
}

/// Assert the structural invariants of a history.
pub fn assert_history_invariants(history: &GameHistory) {
    assert!(history.len() >= 1, "history lost its initial record");
    assert!(
        history.position() < history.len(),
        "position {} outside history of {}",
        history.position(),
        history.len()
    );
    assert!(
        history.records()[0].is_initial(),
        "first record must be the game start"
    );

    for (step, pair) in history.records().windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        let changed: Vec<usize> = (0..9)
            .filter(|&i| prev.board.get(i) != next.board.get(i))
            .collect();
        assert_eq!(
            changed.len(),
            1,
            "record {} should differ from its predecessor in exactly one cell",
            step + 1
        );
        assert!(prev.board.is_empty(changed[0]));
        assert_eq!(next.cell(), Some(changed[0]));
        assert_eq!(
            next.board.get(changed[0]).and_then(|c| c.to_player()),
            Some(next_player_for(step)),
            "record {} has the wrong mark",
            step + 1
        );
    }
}
