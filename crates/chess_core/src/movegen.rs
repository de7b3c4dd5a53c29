use crate::{board::Board, check::is_in_check, executor::apply_move, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Destination squares for the piece on `from`, following each piece's
/// movement rules.
///
/// Returns an empty vector for an empty square. Moves that expose the mover's
/// king are *not* filtered here; see [`safe_moves`] for that.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(16);
    legal_moves_into(board, from, &mut out);
    out
}

/// Like [`legal_moves`], but appends into a reusable buffer.
pub fn legal_moves_into(board: &Board, from: Square, out: &mut Vec<Square>) {
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &DIAGONALS, out);
            gen_slider(board, from, pc.color, &ORTHOGONALS, out);
        }
        PieceKind::King => gen_steps(board, from, pc.color, &KING_DELTAS, out),
    }
}

/// Every generator move for `side`, in row-major order of the moving piece.
pub fn all_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    let mut targets = Vec::with_capacity(16);
    for (from, _) in board.pieces(side) {
        targets.clear();
        legal_moves_into(board, from, &mut targets);
        out.extend(targets.iter().map(|&to| Move::new(from, to)));
    }
    out
}

/// Number of generator moves for `side`.
pub fn mobility(board: &Board, side: Color) -> usize {
    let mut targets = Vec::with_capacity(16);
    let mut count = 0;
    for (from, _) in board.pieces(side) {
        targets.clear();
        legal_moves_into(board, from, &mut targets);
        count += targets.len();
    }
    count
}

/// Whether playing `mv` would leave `side`'s king attacked.
pub fn leaves_king_in_check(board: &Board, mv: Move, side: Color) -> bool {
    match apply_move(board, mv.from, mv.to) {
        Ok((after, _)) => is_in_check(&after, side),
        Err(_) => false,
    }
}

/// Generator moves for `side` with the self-check filter applied.
pub fn safe_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = all_moves(board, side);
    moves.retain(|&mv| !leaves_king_in_check(board, mv, side));
    moves
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // Single step only, no double push.
    if let Some(to) = from.offset(dir, 0) {
        if board.piece_at(to).is_none() {
            out.push(to);
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if let Some(tpc) = board.piece_at(to) {
                if tpc.color != c {
                    out.push(to);
                }
            }
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
