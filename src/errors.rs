use thiserror::Error;

/// Errors raised at the crate's text boundaries (FEN and coordinate notation).
///
/// Move generation, application, search, and perft are total over reachable
/// positions and never return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The provided FEN string is invalid or could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    /// A square name such as `e4` could not be parsed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),
    /// A coordinate move string is malformed.
    #[error("invalid move notation: {0}")]
    InvalidMove(String),
    /// A well-formed move that is not legal in the current position.
    #[error("illegal move in this position: {0}")]
    IllegalMove(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
