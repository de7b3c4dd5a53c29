use super::*;

#[test]
fn test_standard_position_is_balanced() {
    let board = Board::standard();
    let values = PieceValues::default();
    assert_eq!(evaluate(&board, Color::White, &values, 0.1), 0.0);
    assert_eq!(evaluate(&board, Color::Black, &values, 0.1), 0.0);
}

#[test]
fn test_material_is_signed_by_side() {
    // White has an extra knight
    let board = Board::from_layout("2k2/5/5/5/1NK2").unwrap();
    let values = PieceValues::default();
    assert_eq!(material(&board, Color::White, &values), 3.0);
    assert_eq!(material(&board, Color::Black, &values), -3.0);
}

#[test]
fn test_king_outweighs_everything() {
    let values = PieceValues::default();
    let others: f64 = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ]
    .iter()
    .map(|&k| values.value(k))
    .sum();
    assert!(values.value(PieceKind::King) > 4.0 * others);
}

#[test]
fn test_mobility_term() {
    // The white rook roams freely while the black side is boxed in
    let board = Board::from_layout("rp3/pp3/5/5/2R2").unwrap();
    let values = PieceValues::default();
    let material_only = evaluate(&board, Color::White, &values, 0.0);
    let with_mobility = evaluate(&board, Color::White, &values, 0.1);
    assert!(with_mobility > material_only);
}
