use super::*;
use minichess_core::leaves_king_in_check;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(3);
    let board = Board::standard();

    let result = engine.choose_move(&board, Color::White);

    let mv = result.best_move.unwrap();
    assert!(all_moves(&board, Color::White).contains(&mv));
}

#[test]
fn random_engine_avoids_self_check() {
    let board = Board::from_layout("kb2R/5/5/5/4K").unwrap();
    for seed in 0..20 {
        let mut engine = RandomEngine::with_seed(seed);
        let mv = engine.choose_move(&board, Color::Black).best_move.unwrap();
        assert!(!leaves_king_in_check(&board, mv, Color::Black));
    }
}

#[test]
fn random_engine_handles_no_moves() {
    let mut engine = RandomEngine::new();
    let board = Board::from_layout("5/5/5/5/p3K").unwrap();

    let result = engine.choose_move(&board, Color::Black);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_plays_on_when_every_move_is_unsafe() {
    let mut engine = RandomEngine::with_seed(11);
    let board = Board::from_layout("k4/5/1Q3/5/4K").unwrap();

    let result = engine.choose_move(&board, Color::Black);

    assert!(result.best_move.is_some());
}
