//! Game engine for human-versus-computer tic-tac-toe.
//!
//! The engine owns the board and the score. Callers drive it through
//! [`Engine::dispatch`] and read the result back through accessors. The
//! computer replies synchronously inside the same dispatch.

use super::action::{EngineError, Placement, PlacementReason, UserAction};
use super::heuristic;
use super::invariants::{EngineInvariants, InvariantSet};
use super::{Board, Mark, VictoryType};
use derive_getters::Getters;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

const PLAYER_TURN: &str = "Player 'O' turn";
const COMPUTER_TURN: &str = "Computer turn";
const PLAYER_WON: &str = "Player 'O' Won";
const COMPUTER_WON: &str = "Computer Won";
const DRAW: &str = "Game Draw";

/// Where the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the mark is the side to move.
    InProgress(Mark),
    /// A side completed a line.
    Won {
        /// Side that completed the line.
        winner: Mark,
        /// The completed line.
        victory: VictoryType,
    },
    /// Board filled up with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Observable state published after every dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// Side to move, or `None` once the game has ended.
    current_turn: Option<Mark>,
    /// Status line for the presentation layer.
    hint_text: String,
    /// Games won by the human.
    player_win_count: u32,
    /// Games won by the computer.
    computer_win_count: u32,
    /// Games drawn.
    draw_count: u32,
    /// Line that ended the game, [`VictoryType::None`] otherwise.
    victory_type: VictoryType,
    /// True once either side has completed a line.
    has_won: bool,
}

impl GameState {
    fn new(opener: Mark) -> Self {
        Self {
            current_turn: Some(opener),
            hint_text: turn_hint(opener).to_string(),
            player_win_count: 0,
            computer_win_count: 0,
            draw_count: 0,
            victory_type: VictoryType::None,
            has_won: false,
        }
    }
}

fn turn_hint(mark: Mark) -> &'static str {
    match mark {
        Mark::Player => PLAYER_TURN,
        Mark::Computer => COMPUTER_TURN,
    }
}

/// Tic-tac-toe engine: human against the rule-based computer.
///
/// `R` is the random source behind the computer's fallback move.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    board: Board,
    opening: Board,
    state: GameState,
    status: GameStatus,
    starting_turn: Mark,
    history: Vec<Placement>,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates an engine seeded from the thread-local generator.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Creates an engine whose random moves are reproducible.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine with the given random source. The human opens the first game.
    pub fn with_rng(rng: R) -> Self {
        let opener = Mark::Player;
        Self {
            board: Board::new(),
            opening: Board::new(),
            state: GameState::new(opener),
            status: GameStatus::InProgress(opener),
            starting_turn: opener,
            history: Vec::new(),
            rng,
        }
    }

    /// Starts a game from an existing position with `to_move` to play.
    ///
    /// If the computer is to move it plays immediately.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TerminalPosition`] if a line is already complete
    /// or the board is full.
    #[instrument(skip(board, rng), fields(board = %board.display()))]
    pub fn from_position(board: Board, to_move: Mark, rng: R) -> Result<Self, EngineError> {
        if board.check_line(Mark::Player).is_line()
            || board.check_line(Mark::Computer).is_line()
            || board.is_full()
        {
            return Err(EngineError::TerminalPosition);
        }

        let mut engine = Self::with_rng(rng);
        engine.opening = board.clone();
        engine.board = board;
        engine.starting_turn = to_move;
        engine.set_turn(to_move);
        if to_move == Mark::Computer {
            engine.computer_move()?;
        }
        engine.check_invariants();
        Ok(engine)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the published game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns where the current game stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the side that opened the current game.
    pub fn starting_turn(&self) -> Mark {
        self.starting_turn
    }

    /// Returns the marks placed since the current game began.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Board as it stood when the current game began.
    pub(crate) fn opening(&self) -> &Board {
        &self.opening
    }

    /// Applies a user action.
    ///
    /// Taps on occupied cells, taps while the game is over, and taps out of
    /// turn leave the engine unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Board`] if a tapped cell is not in 1-9.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn dispatch(&mut self, action: UserAction) -> Result<(), EngineError> {
        match action {
            UserAction::BoardTapped(cell) => self.handle_board_tapped(cell)?,
            UserAction::PlayAgainClicked => self.reset_game()?,
        }
        self.check_invariants();
        Ok(())
    }

    fn handle_board_tapped(&mut self, cell: usize) -> Result<(), EngineError> {
        // Range check comes first so bad input fails even after the game ends
        self.board.get(cell)?;

        if self.status != GameStatus::InProgress(Mark::Player) {
            debug!(cell, "Ignoring tap, not the human's turn");
            return Ok(());
        }

        if !self.board.is_empty(cell) {
            debug!(cell, "Ignoring tap on occupied cell");
            return Ok(());
        }

        self.place(cell, Mark::Player, PlacementReason::Human)
    }

    fn reset_game(&mut self) -> Result<(), EngineError> {
        self.board.reset();
        self.opening.reset();
        self.history.clear();
        self.starting_turn = self.starting_turn.opponent();
        self.state.victory_type = VictoryType::None;
        self.state.has_won = false;
        self.set_turn(self.starting_turn);
        info!(opener = %self.starting_turn, "New game");

        if self.starting_turn == Mark::Computer {
            self.computer_move()?;
        }
        Ok(())
    }

    fn computer_move(&mut self) -> Result<(), EngineError> {
        match heuristic::choose_move(&self.board, &mut self.rng) {
            Some((cell, reason)) => self.place(cell, Mark::Computer, reason),
            None => {
                warn!("Computer asked to move on a full board");
                Ok(())
            }
        }
    }

    /// Puts `mark` on `cell` and settles the consequences: win, draw, or the
    /// other side's turn.
    fn place(
        &mut self,
        cell: usize,
        mark: Mark,
        reason: PlacementReason,
    ) -> Result<(), EngineError> {
        self.board.set(cell, mark)?;
        let placement = Placement::new(cell, mark, reason);
        debug!(%placement, "Mark placed");
        self.history.push(placement);

        let victory = self.board.check_line(mark);
        if victory.is_line() {
            self.handle_victory(mark, victory);
        } else if self.board.is_full() {
            self.handle_draw();
        } else {
            let next = mark.opponent();
            self.set_turn(next);
            if next == Mark::Computer {
                self.computer_move()?;
            }
        }
        Ok(())
    }

    fn set_turn(&mut self, mark: Mark) {
        self.status = GameStatus::InProgress(mark);
        self.state.current_turn = Some(mark);
        self.state.hint_text = turn_hint(mark).to_string();
    }

    fn handle_victory(&mut self, winner: Mark, victory: VictoryType) {
        self.status = GameStatus::Won { winner, victory };
        self.state.current_turn = None;
        self.state.victory_type = victory;
        self.state.has_won = true;
        match winner {
            Mark::Player => {
                self.state.player_win_count += 1;
                self.state.hint_text = PLAYER_WON.to_string();
            }
            Mark::Computer => {
                self.state.computer_win_count += 1;
                self.state.hint_text = COMPUTER_WON.to_string();
            }
        }
        info!(%winner, %victory, "Game won");
    }

    fn handle_draw(&mut self) {
        self.status = GameStatus::Draw;
        self.state.current_turn = None;
        self.state.draw_count += 1;
        self.state.hint_text = DRAW.to_string();
        info!("Game drawn");
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated");
        }
    }
}

// Corruption hooks so invariant tests can show each check failing
#[cfg(test)]
impl<R: Rng> Engine<R> {
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn history_mut(&mut self) -> &mut Vec<Placement> {
        &mut self.history
    }

    pub(crate) fn set_starting_turn(&mut self, mark: Mark) {
        self.starting_turn = mark;
    }

    pub(crate) fn set_has_won(&mut self, has_won: bool) {
        self.state.has_won = has_won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_waits_for_human() {
        let engine = Engine::with_seed(1);
        assert_eq!(engine.status(), GameStatus::InProgress(Mark::Player));
        assert_eq!(engine.state().current_turn(), &Some(Mark::Player));
        assert_eq!(engine.state().hint_text(), PLAYER_TURN);
        assert_eq!(engine.starting_turn(), Mark::Player);
    }

    #[test]
    fn test_human_tap_gets_computer_reply() {
        let mut engine = Engine::with_seed(1);
        engine.dispatch(UserAction::BoardTapped(1)).unwrap();

        // Center is free, so the computer takes it.
        assert_eq!(engine.history().len(), 2);
        assert_eq!(
            engine.history()[1],
            Placement::new(5, Mark::Computer, PlacementReason::Center)
        );
        assert_eq!(engine.status(), GameStatus::InProgress(Mark::Player));
    }

    #[test]
    fn test_occupied_tap_is_noop() {
        let mut engine = Engine::with_seed(1);
        engine.dispatch(UserAction::BoardTapped(5)).unwrap();
        let board = engine.board().clone();
        let state = engine.state().clone();

        engine.dispatch(UserAction::BoardTapped(5)).unwrap();
        assert_eq!(engine.board(), &board);
        assert_eq!(engine.state(), &state);
    }

    #[test]
    fn test_out_of_range_tap_fails() {
        let mut engine = Engine::with_seed(1);
        assert_eq!(
            engine.dispatch(UserAction::BoardTapped(0)),
            Err(EngineError::Board(super::super::BoardError::OutOfRange(0)))
        );
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_terminal_position_rejected() {
        let board = Board::from_marks(&[(1, Mark::Player), (2, Mark::Player), (3, Mark::Player)])
            .unwrap();
        let result = Engine::from_position(board, Mark::Computer, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(EngineError::TerminalPosition)));
    }
}
