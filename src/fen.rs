//! Piece-placement scanning for FEN strings
//!
//! Only the first FEN field is read. Everything after the first whitespace
//! (side to move, castling rights, clocks) is ignored.

/// Number of squares on the board
pub const SQUARE_COUNT: usize = 64;

/// Number of files (and ranks) on the board
pub const BOARD_FILES: usize = 8;

/// Piece color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

/// Piece kind, independent of color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }
}

/// A colored chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Parse a FEN piece letter. Uppercase is white, lowercase is black.
    pub fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some(Self { color, kind })
    }

    /// The FEN letter for this piece
    pub fn fen_char(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }
}

/// A board square, indexed 0..64 in FEN scan order (a8 first, h1 last)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(pub usize);

impl Square {
    pub fn file(self) -> usize {
        self.0 % BOARD_FILES
    }

    pub fn rank_row(self) -> usize {
        self.0 / BOARD_FILES
    }
}

/// One occupied slot found while scanning the placement field.
///
/// `piece` is `None` when the character is not one of the twelve piece
/// letters; such slots still consume a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub square: Square,
    pub code: char,
    pub piece: Option<Piece>,
}

/// Extract the piece-placement field from a full FEN string
pub fn placement_field(fen: &str) -> &str {
    fen.split_whitespace().next().unwrap_or("")
}

/// Scan the placement field of `fen`, returning every non-digit slot.
///
/// Digits skip empty squares. Scanning stops once the square counter
/// passes the last square, so oversized input never yields a square
/// beyond 63.
pub fn scan_placement(fen: &str) -> Vec<Placement> {
    let mut placements = Vec::new();
    let mut index = 0usize;

    for c in placement_field(fen).chars().filter(|&c| c != '/') {
        match c.to_digit(10) {
            Some(run) => index += run as usize,
            None => {
                placements.push(Placement {
                    square: Square(index),
                    code: c,
                    piece: Piece::from_fen_char(c),
                });
                index += 1;
            }
        }

        if index >= SQUARE_COUNT {
            break;
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_piece_letters_round_trip() {
        for c in "KQRBNPkqrbnp".chars() {
            let piece = Piece::from_fen_char(c).expect("known piece letter");
            assert_eq!(piece.fen_char(), c);
        }
    }

    #[test]
    fn test_piece_case_selects_color() {
        assert_eq!(
            Piece::from_fen_char('Q'),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            Piece::from_fen_char('n'),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
    }

    #[test]
    fn test_unknown_letter() {
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('?'), None);
    }

    #[test]
    fn test_placement_field_drops_other_fields() {
        assert_eq!(
            placement_field("  8/8/8/8/8/8/8/8 w - - 0 1\n"),
            "8/8/8/8/8/8/8/8"
        );
        assert_eq!(placement_field(""), "");
        assert_eq!(placement_field("   "), "");
    }

    #[test]
    fn test_empty_board() {
        assert!(scan_placement("8/8/8/8/8/8/8/8").is_empty());
    }

    #[test]
    fn test_start_position() {
        let placements = scan_placement(START);
        assert_eq!(placements.len(), 32);
        assert_eq!(placements[0].square, Square(0));
        assert_eq!(placements[0].code, 'r');
        assert_eq!(placements[31].square, Square(63));
        assert_eq!(placements[31].code, 'R');

        let white = placements
            .iter()
            .filter(|p| matches!(p.piece, Some(Piece { color: Color::White, .. })))
            .count();
        assert_eq!(white, 16);
    }

    #[test]
    fn test_digits_skip_squares() {
        let placements = scan_placement("3k4/8/8/8/8/8/8/4K3");
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].square, Square(3));
        assert_eq!(placements[1].square, Square(60));
    }

    #[test]
    fn test_unknown_code_consumes_square() {
        let placements = scan_placement("x7/8/8/8/8/8/8/K7");
        assert_eq!(placements[0].piece, None);
        assert_eq!(placements[0].square, Square(0));
        assert_eq!(placements[1].square, Square(56));
    }

    #[test]
    fn test_overflow_stops_at_last_square() {
        // 9 ranks of pawns: 72 pieces
        let fen = "pppppppp/".repeat(9);
        let placements = scan_placement(&fen);
        assert_eq!(placements.len(), 64);
        assert_eq!(placements.last().map(|p| p.square), Some(Square(63)));
    }

    #[test]
    fn test_overflow_after_digit_run() {
        let placements = scan_placement("8/8/8/8/8/8/8/7p9ppp");
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].square, Square(63));
    }

    #[test]
    fn test_square_coordinates() {
        assert_eq!(Square(0).file(), 0);
        assert_eq!(Square(0).rank_row(), 0);
        assert_eq!(Square(63).file(), 7);
        assert_eq!(Square(63).rank_row(), 7);
        assert_eq!(Square(10).file(), 2);
        assert_eq!(Square(10).rank_row(), 1);
    }
}
