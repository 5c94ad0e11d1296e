//! Position parsing and single-move application

use shakmaty::{
    fen::Fen, uci::UciMove, CastlingMode, Chess, Color, EnPassantMode, Position, Square,
};

use super::PieceId;
use crate::error::{Error, Result};

/// Mutable board state for one puzzle
#[derive(Debug, Clone)]
pub struct BoardState {
    position: Chess,
}

impl BoardState {
    /// Parses a FEN string into a playable position
    pub fn from_fen(fen: &str) -> Result<Self> {
        let fen = fen.trim();
        let parsed: Fen = fen.parse().map_err(|e| Error::InvalidPosition {
            fen: fen.to_string(),
            reason: format!("{}", e),
        })?;
        let position = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| Error::InvalidPosition {
                fen: fen.to_string(),
                reason: format!("{}", e),
            })?;
        Ok(Self { position })
    }

    /// Plays a move given in UCI notation (`e2e4`, `e7e8q`).
    ///
    /// The state is left untouched if the move cannot be played.
    pub fn play_uci(&mut self, uci: &str) -> Result<()> {
        let uci = uci.trim();
        let illegal = |reason: String| Error::IllegalMove {
            uci: uci.to_string(),
            fen: self.fen(),
            reason,
        };

        let parsed: UciMove = uci
            .parse()
            .map_err(|e| illegal(format!("not a coordinate move: {}", e)))?;
        let mv = parsed
            .to_move(&self.position)
            .map_err(|e| illegal(format!("{}", e)))?;
        let next = self
            .position
            .clone()
            .play(mv)
            .map_err(|e| illegal(format!("{}", e)))?;

        self.position = next;
        Ok(())
    }

    /// Every occupied square with its piece, a1 through h8
    pub fn occupied_squares(&self) -> Vec<(Square, PieceId)> {
        let board = self.position.board();
        Square::ALL
            .into_iter()
            .filter_map(|square| board.piece_at(square).map(|piece| (square, PieceId::from(piece))))
            .collect()
    }

    pub fn side_to_move(&self) -> Color {
        self.position.turn()
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{Role, Square};
    use std::collections::HashMap;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn occupancy(state: &BoardState) -> HashMap<Square, PieceId> {
        state.occupied_squares().into_iter().collect()
    }

    fn changed_squares(before: &BoardState, after: &BoardState) -> Vec<Square> {
        let a = occupancy(before);
        let b = occupancy(after);
        let mut changed: Vec<Square> = Square::ALL
            .into_iter()
            .filter(|sq| a.get(sq) != b.get(sq))
            .collect();
        changed.sort();
        changed
    }

    #[test]
    fn test_parse_starting_position() {
        let state = BoardState::from_fen(START).unwrap();
        assert_eq!(state.occupied_squares().len(), 32);
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.fen(), START);
    }

    #[test]
    fn test_pawn_push_touches_two_squares() {
        let before = BoardState::from_fen(START).unwrap();
        let mut after = before.clone();
        after.play_uci("e2e4").unwrap();

        assert_eq!(changed_squares(&before, &after), vec![Square::E2, Square::E4]);
        assert_eq!(
            occupancy(&after).get(&Square::E4),
            Some(&PieceId::new(Role::Pawn, Color::White))
        );
        assert_eq!(after.side_to_move(), Color::Black);
    }

    #[test]
    fn test_capture_replaces_piece() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
        let before = BoardState::from_fen(fen).unwrap();
        let mut after = before.clone();
        after.play_uci("e4d5").unwrap();

        assert_eq!(changed_squares(&before, &after), vec![Square::E4, Square::D5]);
        assert_eq!(after.occupied_squares().len(), 31);
    }

    #[test]
    fn test_castling_moves_rook() {
        let fen = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";
        let before = BoardState::from_fen(fen).unwrap();
        let mut after = before.clone();
        after.play_uci("e1g1").unwrap();

        assert_eq!(
            changed_squares(&before, &after),
            vec![Square::E1, Square::F1, Square::G1, Square::H1]
        );
        let occ = occupancy(&after);
        assert_eq!(occ.get(&Square::G1), Some(&PieceId::new(Role::King, Color::White)));
        assert_eq!(occ.get(&Square::F1), Some(&PieceId::new(Role::Rook, Color::White)));
    }

    #[test]
    fn test_en_passant_removes_captured_pawn() {
        let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
        let before = BoardState::from_fen(fen).unwrap();
        let mut after = before.clone();
        after.play_uci("e5f6").unwrap();

        assert_eq!(
            changed_squares(&before, &after),
            vec![Square::E5, Square::F5, Square::F6]
        );
    }

    #[test]
    fn test_promotion() {
        let fen = "8/4P3/8/8/8/8/k7/4K3 w - - 0 1";
        let mut state = BoardState::from_fen(fen).unwrap();
        state.play_uci("e7e8q").unwrap();

        assert_eq!(
            occupancy(&state).get(&Square::E8),
            Some(&PieceId::new(Role::Queen, Color::White))
        );
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let mut state = BoardState::from_fen(START).unwrap();
        let err = state.play_uci("e2e5").unwrap_err();
        assert!(matches!(err, Error::IllegalMove { ref uci, .. } if uci == "e2e5"));
        assert_eq!(state.fen(), START);

        assert!(matches!(state.play_uci("e7e5"), Err(Error::IllegalMove { .. })));
        assert!(matches!(state.play_uci("z9z9"), Err(Error::IllegalMove { .. })));
        assert_eq!(state.fen(), START);
    }

    #[test]
    fn test_move_leaving_king_in_check_is_illegal() {
        // bishop on e2 is pinned against the king by the queen on e7
        let fen = "4k3/4q3/8/8/8/8/4B3/4K3 w - - 0 1";
        let mut state = BoardState::from_fen(fen).unwrap();
        assert!(matches!(state.play_uci("e2d3"), Err(Error::IllegalMove { .. })));
    }

    #[test]
    fn test_malformed_fen_is_rejected() {
        let bad = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbq1bnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQ - 0 1",
        ];
        for fen in bad {
            assert!(
                matches!(BoardState::from_fen(fen), Err(Error::InvalidPosition { .. })),
                "accepted {:?}",
                fen
            );
        }
    }
}
