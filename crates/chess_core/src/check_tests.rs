use super::*;
use crate::movegen::legal_moves;

fn board(layout: &str) -> Board {
    Board::from_layout(layout).unwrap()
}

#[test]
fn test_pawn_gives_check_diagonally_only() {
    assert!(is_in_check(&board("5/5/5/1p3/2K2"), Color::White));
    assert!(!is_in_check(&board("5/5/5/2p2/2K2"), Color::White));
    // White pawns attack toward row 0
    assert!(is_in_check(&board("5/5/1k3/2P2/5"), Color::Black));
}

#[test]
fn test_knight_check() {
    assert!(is_in_check(&board("5/5/1n3/5/2K2"), Color::White));
    assert!(!is_in_check(&board("5/5/2n2/5/2K2"), Color::White));
}

#[test]
fn test_bishop_check_and_block() {
    assert!(is_in_check(&board("b4/5/5/5/4K"), Color::White));
    assert!(!is_in_check(&board("b4/5/2P2/5/4K"), Color::White));
}

#[test]
fn test_rook_check_and_block() {
    assert!(is_in_check(&board("r4/5/5/5/K4"), Color::White));
    assert!(!is_in_check(&board("r4/5/n4/5/K4"), Color::White));
}

#[test]
fn test_queen_check() {
    assert!(is_in_check(&board("5/5/5/5/K3q"), Color::White));
    assert!(is_in_check(&board("4q/5/5/5/K4"), Color::White));
}

#[test]
fn test_king_check() {
    assert!(is_in_check(&board("5/5/5/1k3/K4"), Color::White));
    assert!(is_in_check(&board("5/5/5/1k3/K4"), Color::Black));
}

#[test]
fn test_no_king_is_never_in_check() {
    assert!(!is_in_check(&board("5/5/5/5/4q"), Color::White));
}

#[test]
fn test_check_matches_enemy_destinations() {
    let layouts = [
        "5/5/5/1p3/2K2",
        "r1k1q/1pNp1/B1n1P/1PbQ1/R1K1b",
        "nbkbn/ppppp/5/PPPPP/NBKBN",
        "2k2/5/2R2/5/2K2",
    ];
    for layout in layouts {
        let b = board(layout);
        for side in [Color::White, Color::Black] {
            let Some(ksq) = b.king_square(side) else {
                continue;
            };
            let attacked = b
                .pieces(side.other())
                .any(|(from, _)| legal_moves(&b, from).contains(&ksq));
            assert_eq!(is_in_check(&b, side), attacked, "{layout} {side}");
        }
    }
}
