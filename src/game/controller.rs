//! Game controller: turn ownership, square selection and the computer's turn.

use rand::rngs::StdRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ai::{find_best_move, JitterSource, RandomJitter};
use crate::board::{Board, Color, GameStatus, Square};

use super::config::GameConfig;
use super::state::{CapturedPieces, GameState, MoveHistoryEntry};

/// What a square selection did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A piece of the side to move is now selected
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
    /// The selected piece moved to the chosen square
    Moved(MoveHistoryEntry),
    /// The chosen square was not a legal destination; selection dropped
    Cleared,
    /// Input not accepted right now; nothing changed
    Ignored,
}

/// Read-only picture of the game for presenters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameView {
    pub board: Board,
    pub status: GameStatus,
    pub active: Color,
    pub history: Vec<MoveHistoryEntry>,
    pub captured: CapturedPieces,
    pub selection: Option<Square>,
    pub candidates: Vec<Square>,
    pub thinking: bool,
}

/// Owns the current [`GameState`] and arbitrates who may change it.
///
/// The human plays `human_color`; the computer plays the other side.
/// Human selections go through [`select_square`](Self::select_square).
/// The computer's move is split into [`begin_ai_turn`](Self::begin_ai_turn)
/// and [`play_ai_turn`](Self::play_ai_turn) so a presenter can pause
/// between the two while human input stays locked out.
#[derive(Debug)]
pub struct GameController<J: JitterSource = RandomJitter<StdRng>> {
    state: GameState,
    human_color: Color,
    selection: Option<Square>,
    candidates: Vec<Square>,
    thinking: bool,
    jitter: J,
}

impl GameController<RandomJitter<StdRng>> {
    /// Controller for a fresh game as described by `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        GameController::new(config.human_color, config.jitter())
    }
}

impl<J: JitterSource> GameController<J> {
    /// Fresh game from the standard position.
    pub fn new(human_color: Color, jitter: J) -> Self {
        GameController::with_state(GameState::new(), human_color, jitter)
    }

    /// Controller taking over an existing game.
    pub fn with_state(state: GameState, human_color: Color, jitter: J) -> Self {
        GameController {
            state,
            human_color,
            selection: None,
            candidates: Vec::new(),
            thinking: false,
            jitter,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn human_color(&self) -> Color {
        self.human_color
    }

    #[inline]
    #[must_use]
    pub fn ai_color(&self) -> Color {
        self.human_color.opponent()
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Legal destinations of the selected piece.
    #[must_use]
    pub fn candidates(&self) -> &[Square] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Whether human input is accepted right now.
    #[must_use]
    pub fn human_to_move(&self) -> bool {
        !self.thinking && !self.state.is_over() && self.state.active() == self.human_color
    }

    /// Whether the computer is due to move.
    #[must_use]
    pub fn ai_to_move(&self) -> bool {
        !self.state.is_over() && self.state.active() == self.ai_color()
    }

    /// Handle a click on `square`.
    ///
    /// With nothing selected, a square holding a piece of the side to move
    /// becomes the selection. With a selection, a legal destination plays
    /// the move and any other square drops the selection.
    pub fn select_square(&mut self, square: Square) -> SelectionOutcome {
        if !self.human_to_move() {
            crate::log_trace!("ignored selection of {} while not accepting input", square);
            return SelectionOutcome::Ignored;
        }

        let Some(from) = self.selection else {
            let own_piece = self
                .state
                .board()
                .piece_at(square)
                .is_some_and(|p| p.color == self.state.active());
            if !own_piece {
                crate::log_trace!("ignored selection of {}", square);
                return SelectionOutcome::Ignored;
            }
            self.selection = Some(square);
            self.candidates = self.state.legal_moves(square);
            return SelectionOutcome::Selected {
                square,
                destinations: self.candidates.clone(),
            };
        };

        let next = if self.candidates.contains(&square) {
            self.state.play(from, square)
        } else {
            None
        };
        self.clear_selection();

        match next {
            Some(next) => {
                self.state = next;
                self.last_entry()
                    .map_or(SelectionOutcome::Cleared, SelectionOutcome::Moved)
            }
            None => {
                crate::log_trace!("cleared selection {} after {}", from, square);
                SelectionOutcome::Cleared
            }
        }
    }

    /// Drop the current selection without playing anything.
    pub fn deselect(&mut self) {
        self.clear_selection();
    }

    /// Arm the thinking guard if the computer is due and not already busy.
    ///
    /// Returns `true` when the caller should follow up with
    /// [`play_ai_turn`](Self::play_ai_turn).
    pub fn begin_ai_turn(&mut self) -> bool {
        if self.thinking || !self.ai_to_move() {
            return false;
        }
        self.thinking = true;
        self.clear_selection();
        true
    }

    /// Play the computer's move. Only acts after a successful
    /// [`begin_ai_turn`](Self::begin_ai_turn), and always releases the guard.
    pub fn play_ai_turn(&mut self) -> Option<MoveHistoryEntry> {
        if !self.thinking {
            return None;
        }
        self.thinking = false;
        if !self.ai_to_move() {
            return None;
        }

        let color = self.ai_color();
        let mv = find_best_move(self.state.board(), color, &mut self.jitter)?;
        self.state = self.state.play(mv.from, mv.to)?;
        self.last_entry()
    }

    /// Start over from the standard position.
    pub fn reset(&mut self) {
        crate::log_debug!("new game, human plays {}", self.human_color);
        self.state = GameState::new();
        self.thinking = false;
        self.clear_selection();
    }

    /// Owned copy of everything a presenter draws.
    #[must_use]
    pub fn snapshot(&self) -> GameView {
        GameView {
            board: *self.state.board(),
            status: self.state.status(),
            active: self.state.active(),
            history: self.state.history().to_vec(),
            captured: self.state.captured().clone(),
            selection: self.selection,
            candidates: self.candidates.clone(),
            thinking: self.thinking,
        }
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.candidates.clear();
    }

    fn last_entry(&self) -> Option<MoveHistoryEntry> {
        self.state.history().last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FixedJitter;
    use crate::board::{ColoredPiece, Piece};

    fn controller(human: Color) -> GameController<FixedJitter> {
        GameController::new(human, FixedJitter(0.0))
    }

    #[test]
    fn test_select_then_move() {
        let mut game = controller(Color::White);
        let outcome = game.select_square(Square(6, 4));
        assert_eq!(
            outcome,
            SelectionOutcome::Selected {
                square: Square(6, 4),
                destinations: vec![Square(4, 4), Square(5, 4)],
            }
        );
        assert_eq!(game.selection(), Some(Square(6, 4)));

        let outcome = game.select_square(Square(4, 4));
        assert_eq!(
            outcome,
            SelectionOutcome::Moved(MoveHistoryEntry {
                from: Square(6, 4),
                to: Square(4, 4),
                piece: ColoredPiece::new(Color::White, Piece::Pawn),
            })
        );
        assert_eq!(game.selection(), None);
        assert!(game.candidates().is_empty());
        assert_eq!(game.state().active(), Color::Black);
    }

    #[test]
    fn test_empty_and_enemy_squares_ignored() {
        let mut game = controller(Color::White);
        assert_eq!(game.select_square(Square(4, 4)), SelectionOutcome::Ignored);
        assert_eq!(game.select_square(Square(1, 4)), SelectionOutcome::Ignored);
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn test_second_click_never_reselects() {
        let mut game = controller(Color::White);
        game.select_square(Square(6, 4));
        assert_eq!(game.select_square(Square(6, 3)), SelectionOutcome::Cleared);
        assert_eq!(game.selection(), None);
        assert_eq!(game.state(), &GameState::new());
    }

    #[test]
    fn test_human_locked_out_on_ai_turn() {
        let mut game = controller(Color::Black);
        assert!(game.ai_to_move());
        assert_eq!(game.select_square(Square(6, 4)), SelectionOutcome::Ignored);
        assert_eq!(game.select_square(Square(1, 4)), SelectionOutcome::Ignored);
    }

    #[test]
    fn test_thinking_guard() {
        let mut game = controller(Color::Black);
        assert!(game.begin_ai_turn());
        assert!(game.is_thinking());
        assert!(!game.begin_ai_turn());

        let played = game.play_ai_turn().unwrap();
        assert_eq!(played.piece.color, Color::White);
        assert!(!game.is_thinking());
        assert_eq!(game.state().active(), Color::Black);
        assert!(game.play_ai_turn().is_none());
        assert!(!game.begin_ai_turn());
    }

    #[test]
    fn test_ai_turn_requires_guard() {
        let mut game = controller(Color::Black);
        assert!(game.play_ai_turn().is_none());
        assert_eq!(game.state().history().len(), 0);
    }

    #[test]
    fn test_finished_game_never_arms_guard() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8");
        let state = GameState::from_position(board, Color::Black);
        let mut game = GameController::with_state(state, Color::White, FixedJitter(0.0));
        assert!(!game.ai_to_move());
        assert!(!game.begin_ai_turn());
        assert!(!game.is_thinking());
    }

    #[test]
    fn test_reset_restores_start() {
        let mut game = controller(Color::White);
        game.select_square(Square(6, 4));
        game.select_square(Square(4, 4));
        game.begin_ai_turn();
        game.reset();
        assert_eq!(game.state(), &GameState::new());
        assert_eq!(game.selection(), None);
        assert!(!game.is_thinking());
    }

    #[test]
    fn test_snapshot_reflects_selection() {
        let mut game = controller(Color::White);
        game.select_square(Square(7, 1));
        let view = game.snapshot();
        assert_eq!(view.selection, Some(Square(7, 1)));
        assert_eq!(view.candidates, vec![Square(5, 0), Square(5, 2)]);
        assert_eq!(view.status, GameStatus::Playing);
        assert_eq!(view.active, Color::White);
        assert!(!view.thinking);
    }
}
