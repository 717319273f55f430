//! Round lifecycle tests for the game engine.

use tictactoe_engine::{
    Board, GameEngine, GameStatus, Mark, MoveError, MoveResult, RandomIndex, RngIndex,
    ScoreTally, ScriptedIndex, WIN_COMBOS,
};

/// Plays `moves` alternating from X and returns every result.
fn play<R: RandomIndex>(engine: &mut GameEngine<R>, moves: &[usize]) -> Vec<MoveResult> {
    moves
        .iter()
        .map(|&index| {
            let result = engine.apply_move(index, engine.current_player());
            if result == MoveResult::Continue {
                engine.swap_turn();
            }
            result
        })
        .collect()
}

/// Plays random moves for both sides until the round ends.
fn play_random_round<R: RandomIndex>(engine: &mut GameEngine<R>) -> MoveResult {
    loop {
        let index = engine.choose_random_move().expect("running round has empty cells");
        assert!(engine.board().is_empty(index), "random move picked occupied cell");
        let result = engine.apply_move(index, engine.current_player());
        match result {
            MoveResult::Continue => engine.swap_turn(),
            MoveResult::Rejected(reason) => panic!("legal random move rejected: {reason}"),
            terminal => return terminal,
        }
    }
}

#[test]
fn test_top_row_scenario() {
    let mut engine = GameEngine::with_random(ScriptedIndex::new(vec![0]));
    let results = play(&mut engine, &[0, 4, 1, 5, 2]);

    assert!(results[..4].iter().all(|r| *r == MoveResult::Continue));
    assert_eq!(
        results[4],
        MoveResult::Win {
            mark: Mark::X,
            combo: [0, 1, 2]
        }
    );
    assert!(!engine.is_running());
    assert_eq!(*engine.scores().x(), 1);
}

#[test]
fn test_draw_scenario() {
    let mut engine = GameEngine::with_random(ScriptedIndex::new(vec![0]));
    let results = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(results[..8].iter().all(|r| *r == MoveResult::Continue));
    assert_eq!(results[8], MoveResult::Draw);
    assert_eq!(engine.status(), GameStatus::Drawn);
    assert_eq!(*engine.scores().draws(), 1);
}

#[test]
fn test_every_combo_wins_for_both_marks() {
    for combo in WIN_COMBOS {
        for mark in [Mark::X, Mark::O] {
            let mut engine = GameEngine::with_random(ScriptedIndex::new(vec![0]));
            let filler: Vec<usize> = (0..9).filter(|i| !combo.contains(i)).collect();
            let mut last = MoveResult::Continue;
            // Winner claims the combo, loser spreads over cells that cannot form a line
            // before the winner's third mark lands.
            for (step, &cell) in combo.iter().enumerate() {
                last = engine.apply_move(cell, mark);
                if step < 2 {
                    assert_eq!(last, MoveResult::Continue);
                    assert_eq!(
                        engine.apply_move(filler[step * 2], mark.opponent()),
                        MoveResult::Continue
                    );
                }
            }
            assert_eq!(last, MoveResult::Win { mark, combo });
            assert_eq!(engine.scores().wins(mark), 1);
            assert!(!engine.is_running());
        }
    }
}

#[test]
fn test_rejected_moves_never_mutate() {
    let mut engine = GameEngine::with_random(ScriptedIndex::new(vec![0]));
    play(&mut engine, &[4, 0]);
    let snapshot = engine.state().clone();

    assert_eq!(
        engine.apply_move(4, Mark::X),
        MoveResult::Rejected(MoveError::SquareOccupied(4))
    );
    assert_eq!(
        engine.apply_move(0, Mark::O),
        MoveResult::Rejected(MoveError::SquareOccupied(0))
    );
    assert_eq!(
        engine.apply_move(42, Mark::X),
        MoveResult::Rejected(MoveError::OutOfBounds(42))
    );
    assert_eq!(engine.state(), &snapshot);
}

#[test]
fn test_restart_from_any_state() {
    let mut engine = GameEngine::seeded(11);
    for moves in [&[][..], &[0, 1, 2][..], &[0, 4, 1, 5, 2][..]] {
        play(&mut engine, moves);
        engine.restart();

        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.current_player(), Mark::X);
        assert!(engine.is_running());
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
}

#[test]
fn test_score_tally_counts_rounds() {
    let mut engine = GameEngine::with_random(ScriptedIndex::new(vec![0]));
    play(&mut engine, &[0, 4, 1, 5, 2]);
    engine.reset_scores();
    assert_eq!(engine.scores(), &ScoreTally::new());

    // Two X wins, one O win, one draw.
    for moves in [
        &[0, 4, 1, 5, 2][..],
        &[3, 0, 4, 1, 5][..],
        &[0, 3, 1, 4, 8, 5][..],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8][..],
    ] {
        engine.restart();
        let results = play(&mut engine, moves);
        assert!(results.last().is_some_and(|r| r.is_terminal()));
    }

    assert_eq!(*engine.scores().x(), 2);
    assert_eq!(*engine.scores().o(), 1);
    assert_eq!(*engine.scores().draws(), 1);
}

#[test]
fn test_random_rounds_always_terminate_consistently() {
    let mut engine = GameEngine::with_random(RngIndex::seeded(2024));
    let mut wins = 0;
    let mut draws = 0;

    for _ in 0..200 {
        engine.restart();
        match play_random_round(&mut engine) {
            MoveResult::Win { mark, combo } => {
                wins += 1;
                assert_eq!(engine.status(), GameStatus::Won(mark));
                assert_eq!(engine.winning_combo(), Some(combo));
            }
            MoveResult::Draw => {
                draws += 1;
                assert!(engine.board().empty_indices().is_empty());
            }
            other => panic!("unexpected terminal result {other:?}"),
        }
        assert!(!engine.is_running());
    }

    let scores = engine.scores();
    assert_eq!(scores.x() + scores.o(), wins);
    assert_eq!(*scores.draws(), draws);
}
