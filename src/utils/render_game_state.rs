//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! command-line harness.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::fen_generator::generate_castling_field;

/// Render the board to a Unicode string, rank 8 on top, followed by the
/// side to move, castling rights and en-passant target.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match game_state.piece_at(square_at(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(match game_state.side_to_move {
        Color::Light => "Side to move: white\n",
        Color::Dark => "Side to move: black\n",
    });
    out.push_str(&format!(
        "Castling: {}\n",
        generate_castling_field(game_state.castling_rights)
    ));
    out.push_str(&format!(
        "En passant: {}",
        game_state
            .en_passant_square
            .map(square_to_algebraic)
            .unwrap_or_else(|| "-".to_owned())
    ));

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
