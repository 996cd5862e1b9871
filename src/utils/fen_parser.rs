//! FEN-to-GameState parser.
//!
//! Builds a fully-populated mailbox state from a Forsyth-Edwards Notation
//! string, including rights, clocks, and the king square cache.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Parse a FEN string. The halfmove and fullmove fields are optional and
/// default to `0` and `1`.
pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part, &game_state)?;
    if let Some(halfmove) = halfmove_part {
        game_state.halfmove_clock = halfmove
            .parse::<u16>()
            .map_err(|_| invalid(&format!("halfmove clock '{halfmove}'")))?;
    }
    if let Some(fullmove) = fullmove_part {
        game_state.fullmove_number = fullmove
            .parse::<u16>()
            .map_err(|_| invalid(&format!("fullmove number '{fullmove}'")))?;
    }

    Ok(game_state)
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut king_counts = [0usize; 2];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid(&format!("rank '{rank_str}' has too many files")));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid(&format!("rank '{rank_str}' has too many files")));
            }

            if piece.kind == PieceKind::King {
                king_counts[piece.color.index()] += 1;
            }
            game_state.set_piece(square_at(file, board_rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(invalid(&format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    if king_counts != [1, 1] {
        return Err(invalid("each side needs exactly one king"));
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("side-to-move field '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

/// The target must be the empty square a pawn of the side not to move just
/// skipped, with that pawn standing directly beyond it.
fn parse_en_passant_square(en_passant_part: &str, game_state: &GameState) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let reject = || invalid(&format!("en-passant square '{en_passant_part}'"));
    let target = algebraic_to_square(en_passant_part).map_err(|_| reject())?;

    let mover = game_state.side_to_move;
    let pushed_pawn = Piece::new(mover.opposite(), PieceKind::Pawn);
    let expected_rank = match mover {
        Color::Light => 5,
        Color::Dark => 2,
    };
    let pawn_beyond = offset_square(target, 0, -mover.forward());

    if rank_of(target) != expected_rank
        || !game_state.is_empty(target)
        || pawn_beyond.and_then(|square| game_state.piece_at(square)) != Some(pushed_pawn)
    {
        return Err(reject());
    }

    Ok(Some(target))
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(
            game_state.piece_at(square_at(3, 7)),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
    }

    #[test]
    fn clocks_are_optional() {
        let game_state =
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6").expect("four-field FEN should parse");
        assert_eq!(game_state.en_passant_square, Some(square_at(3, 5)));
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.fullmove_number, 1);
    }

    #[test]
    fn accepts_en_passant_behind_a_pushed_pawn() {
        let light = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("light target should parse");
        assert_eq!(light.en_passant_square, Some(square_at(3, 5)));
        let dark = parse_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").expect("dark target should parse");
        assert_eq!(dark.en_passant_square, Some(square_at(3, 2)));
    }

    #[test]
    fn rejects_malformed_layouts() {
        for fen in [
            "8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K4 w - - 0 1",
            "4k3/8/8/8/8/8/8/4X3 w - - 0 1",
            "4k3/8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w KZ - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - z9 0 1",
            // en-passant target on the wrong rank, occupied, or with no pushed pawn
            "4k3/8/8/8/8/8/2PQ4/4K3 w - d3 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1",
            "4k3/8/3n4/3pP3/8/8/8/4K3 w - d6 0 1",
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "expected rejection of {fen}"
            );
        }
    }
}
