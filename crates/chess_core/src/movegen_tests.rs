use super::*;
use crate::board::{Board, GARDNER_LAYOUT};
use std::collections::HashSet;

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn set(v: Vec<Square>) -> HashSet<Square> {
    v.into_iter().collect()
}

#[test]
fn test_standard_position_moves() {
    let board = Board::standard();
    // Five pawn pushes plus one jump for each knight
    assert_eq!(all_moves(&board, Color::White).len(), 7);
    assert_eq!(all_moves(&board, Color::Black).len(), 7);
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::standard();
    assert!(legal_moves(&board, sq(2, 2)).is_empty());
}

#[test]
fn test_pawn_blocked_but_can_capture_diagonally() {
    let board = Board::from_layout("5/5/1ppp1/2P2/5").unwrap();
    let moves = set(legal_moves(&board, sq(3, 2)));
    assert_eq!(moves, set(vec![sq(2, 1), sq(2, 3)]));
}

#[test]
fn test_pawn_does_not_capture_own_piece() {
    let board = Board::from_layout("5/5/1P1p1/2P2/5").unwrap();
    let moves = set(legal_moves(&board, sq(3, 2)));
    assert_eq!(moves, set(vec![sq(2, 2), sq(2, 3)]));
}

#[test]
fn test_black_pawn_advances_down_the_board() {
    let board = Board::from_layout("5/2p2/5/5/5").unwrap();
    assert_eq!(legal_moves(&board, sq(1, 2)), vec![sq(2, 2)]);
}

#[test]
fn test_pawn_on_last_row_is_stuck() {
    let board = Board::from_layout("P4/5/5/5/4p").unwrap();
    assert!(legal_moves(&board, sq(0, 0)).is_empty());
    assert!(legal_moves(&board, sq(4, 4)).is_empty());
}

#[test]
fn test_knight_moves() {
    let board = Board::from_layout("N4/5/2n2/5/5").unwrap();
    assert_eq!(legal_moves(&board, sq(0, 0)).len(), 2);
    assert_eq!(legal_moves(&board, sq(2, 2)).len(), 8);
}

#[test]
fn test_knight_jumps_over_blockers() {
    let board = Board::from_layout("5/1PPP1/1PNP1/1PPP1/5").unwrap();
    let moves = set(legal_moves(&board, sq(2, 2)));
    let expected = set(vec![
        sq(0, 1),
        sq(0, 3),
        sq(1, 0),
        sq(1, 4),
        sq(3, 0),
        sq(3, 4),
        sq(4, 1),
        sq(4, 3),
    ]);
    assert_eq!(moves, expected);
}

#[test]
fn test_sliders_on_open_board() {
    let rook = Board::from_layout("5/5/2R2/5/5").unwrap();
    assert_eq!(legal_moves(&rook, sq(2, 2)).len(), 8);

    let bishop = Board::from_layout("5/5/2B2/5/5").unwrap();
    assert_eq!(legal_moves(&bishop, sq(2, 2)).len(), 8);

    let queen = Board::from_layout("5/5/2Q2/5/5").unwrap();
    assert_eq!(legal_moves(&queen, sq(2, 2)).len(), 16);
}

#[test]
fn test_rook_stops_at_friend_and_captures_enemy() {
    let board = Board::from_layout("5/5/P4/5/R2n1").unwrap();
    let moves = set(legal_moves(&board, sq(4, 0)));
    assert_eq!(moves, set(vec![sq(3, 0), sq(4, 1), sq(4, 2), sq(4, 3)]));
}

#[test]
fn test_bishop_capture_ends_ray() {
    let board = Board::from_layout("4k/5/2p2/5/B4").unwrap();
    let moves = set(legal_moves(&board, sq(4, 0)));
    assert_eq!(moves, set(vec![sq(3, 1), sq(2, 2)]));
}

#[test]
fn test_king_moves() {
    let center = Board::from_layout("5/5/2K2/5/5").unwrap();
    assert_eq!(legal_moves(&center, sq(2, 2)).len(), 8);

    let corner = Board::from_layout("5/5/5/5/K4").unwrap();
    assert_eq!(legal_moves(&corner, sq(4, 0)).len(), 3);

    // King generation does not avoid attacked squares
    let exposed = Board::from_layout("5/5/5/r4/1K3").unwrap();
    assert!(legal_moves(&exposed, sq(4, 1)).contains(&sq(4, 0)));
}

#[test]
fn test_no_move_lands_on_friendly_piece() {
    let layouts = [
        crate::board::STANDARD_LAYOUT,
        GARDNER_LAYOUT,
        "r1k1q/1pNp1/B1n1P/1PbQ1/R1K1b",
        "qqqqq/QQQQQ/5/kbnrp/KBNRP",
    ];
    for layout in layouts {
        let board = Board::from_layout(layout).unwrap();
        for from in Square::all() {
            let Some(mover) = board.piece_at(from) else {
                continue;
            };
            for to in legal_moves(&board, from) {
                if let Some(target) = board.piece_at(to) {
                    assert_ne!(target.color, mover.color, "{layout}: {from} -> {to}");
                }
            }
        }
    }
}

#[test]
fn test_safe_moves_filters_self_check() {
    // Bishop on 4-1 is pinned against the king by the queen on row 4
    let board = Board::from_layout("5/5/5/5/KB2q").unwrap();
    let safe = safe_moves(&board, Color::White);
    assert!(safe.iter().all(|mv| mv.from != sq(4, 1)));
    assert!(!safe.is_empty());
    assert!(leaves_king_in_check(&board, Move::new(sq(4, 1), sq(3, 2)), Color::White));
}

#[test]
fn test_mobility_matches_all_moves() {
    let board = Board::from_layout(GARDNER_LAYOUT).unwrap();
    assert_eq!(mobility(&board, Color::White), all_moves(&board, Color::White).len());
}
