use super::board::{Board, WinningLine};
use super::player::{Player, Seat};
use crate::config::AppConfig;

/// Where the game stands. `Won` and `Tied` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    Won { winner: Seat, line: WinningLine },
    Tied,
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: Seat, line: WinningLine },
    Tie,
}

/// A piece that was just dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub seat: Seat,
}

/// Why a move was ignored. An ignored move never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    GameOver,
    InvalidColumn,
    ColumnFull,
}

/// Result of [`GameSession::attempt_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Continue {
        placement: Placement,
    },
    Won {
        placement: Placement,
        winner: Seat,
        line: WinningLine,
    },
    Tied {
        placement: Placement,
    },
    Ignored(Ignored),
}

impl MoveResult {
    /// The piece this move placed, if it placed one.
    pub fn placement(&self) -> Option<Placement> {
        match self {
            MoveResult::Continue { placement }
            | MoveResult::Won { placement, .. }
            | MoveResult::Tied { placement } => Some(*placement),
            MoveResult::Ignored(_) => None,
        }
    }

    /// The outcome if this move ended the game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveResult::Won { winner, line, .. } => Some(Outcome::Win {
                winner: *winner,
                line: *line,
            }),
            MoveResult::Tied { .. } => Some(Outcome::Tie),
            MoveResult::Continue { .. } | MoveResult::Ignored(_) => None,
        }
    }
}

/// One game of Connect Four: the board, both players, whose turn it is, and
/// whether the game has ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current: Seat,
    phase: Phase,
}

impl GameSession {
    /// Start a fresh game with an empty board and seat One to move.
    pub fn new_game(width: usize, height: usize, one: Player, two: Player) -> Self {
        tracing::info!(width, height, one = %one.name, two = %two.name, "new game");
        GameSession {
            board: Board::new(width, height),
            players: [one, two],
            current: Seat::One,
            phase: Phase::AwaitingMove,
        }
    }

    /// Start a fresh game with dimensions and players taken from `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new_game(
            config.board.width,
            config.board.height,
            config.players.one.to_player(),
            config.players.two.to_player(),
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.phase, Phase::AwaitingMove)
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<Outcome> {
        match &self.phase {
            Phase::AwaitingMove => None,
            Phase::Won { winner, line } => Some(Outcome::Win {
                winner: *winner,
                line: *line,
            }),
            Phase::Tied => Some(Outcome::Tie),
        }
    }

    /// Columns that would accept a piece right now.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| self.board.find_open_row(col).is_some())
            .collect()
    }

    /// End-of-game announcement, or `None` while the game is running.
    pub fn end_message(&self) -> Option<String> {
        self.outcome().map(|outcome| self.message_for(&outcome))
    }

    /// Announcement text for an outcome of this session.
    pub fn message_for(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Win { winner, .. } => format!("Player {} won!", self.player(*winner).name),
            Outcome::Tie => "Tie!".to_string(),
        }
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Moves after the game has ended, into a column that does not exist, or
    /// into a full column are ignored and leave the session untouched.
    pub fn attempt_move(&mut self, column: isize) -> MoveResult {
        if self.is_terminal() {
            tracing::debug!(column, "move ignored: game over");
            return MoveResult::Ignored(Ignored::GameOver);
        }

        let col = match usize::try_from(column) {
            Ok(col) if col < self.board.width() => col,
            _ => {
                tracing::debug!(column, "move ignored: invalid column");
                return MoveResult::Ignored(Ignored::InvalidColumn);
            }
        };

        let Some(row) = self.board.find_open_row(col) else {
            tracing::debug!(col, "move ignored: column full");
            return MoveResult::Ignored(Ignored::ColumnFull);
        };

        let seat = self.current;
        self.board.place(row, col, seat);
        let placement = Placement { row, col, seat };
        tracing::debug!(row, col, ?seat, "piece placed");

        if let Some(line) = self.board.check_win(seat) {
            self.phase = Phase::Won { winner: seat, line };
            tracing::info!(winner = %self.player(seat).name, "game won");
            return MoveResult::Won {
                placement,
                winner: seat,
                line,
            };
        }

        if self.board.is_full() {
            self.phase = Phase::Tied;
            tracing::info!("game tied");
            return MoveResult::Tied { placement };
        }

        self.current = seat.other();
        MoveResult::Continue { placement }
    }
}

#[cfg(test)]
mod tests {
    use super::super::board::Position;
    use super::*;

    fn session(width: usize, height: usize) -> GameSession {
        GameSession::new_game(
            width,
            height,
            Player::new("Ada", "red"),
            Player::new("Bo", "yellow"),
        )
    }

    fn play_all(game: &mut GameSession, moves: &[isize]) -> Vec<MoveResult> {
        moves.iter().map(|&col| game.attempt_move(col)).collect()
    }

    /// 42 moves filling a 6x7 board in row bands of three, with no four in a
    /// row for either seat at any point.
    const TIE_MOVES: [isize; 42] = [
        0, 0, 0, 0, 0, 0, 0, 3, 1, 1, 1, 1, 1, 1, 1, 4, 2, 2, 2, 2, 2, 2, 2, 5, 3, 3, 3, 3, 3, 3,
        4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5,
    ];

    #[test]
    fn test_new_game() {
        let game = session(6, 7);
        assert_eq!(game.current_seat(), Seat::One);
        assert_eq!(game.current_player().name, "Ada");
        assert_eq!(game.player(Seat::Two).color, "yellow");
        assert_eq!(game.phase(), &Phase::AwaitingMove);
        assert!(!game.is_terminal());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.end_message(), None);
        assert_eq!(game.legal_columns(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_from_config_uses_defaults() {
        let game = GameSession::from_config(&AppConfig::default());
        assert_eq!(game.board().width(), 6);
        assert_eq!(game.board().height(), 7);
        assert_eq!(game.player(Seat::One).name, "one");
        assert_eq!(game.player(Seat::Two).name, "two");
    }

    #[test]
    fn test_attempt_move_places_and_flips() {
        let mut game = session(6, 7);
        let result = game.attempt_move(2);
        assert_eq!(
            result,
            MoveResult::Continue {
                placement: Placement {
                    row: 6,
                    col: 2,
                    seat: Seat::One
                }
            }
        );
        assert_eq!(game.board().get(6, 2), Some(Seat::One));
        assert_eq!(game.current_seat(), Seat::Two);

        let result = game.attempt_move(2);
        assert_eq!(result.placement().map(|p| (p.row, p.seat)), Some((5, Seat::Two)));
        assert_eq!(game.current_seat(), Seat::One);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = session(6, 7);
        for k in 0..10 {
            let expected = if k % 2 == 0 { Seat::One } else { Seat::Two };
            assert_eq!(game.current_seat(), expected);
            let result = game.attempt_move((k % 6) as isize);
            assert_eq!(result.placement().map(|p| p.seat), Some(expected));
        }
    }

    #[test]
    fn test_horizontal_win_through_moves() {
        let mut game = session(6, 7);
        let results = play_all(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        let last = results.last().unwrap();
        let line = [(6, 0), (6, 1), (6, 2), (6, 3)].map(|(r, c)| Position::new(r, c));
        assert_eq!(
            last,
            &MoveResult::Won {
                placement: Placement {
                    row: 6,
                    col: 3,
                    seat: Seat::One
                },
                winner: Seat::One,
                line,
            }
        );
        assert_eq!(
            game.phase(),
            &Phase::Won {
                winner: Seat::One,
                line
            }
        );
        // The winner stays current; no flip after a terminal move
        assert_eq!(game.current_seat(), Seat::One);
        assert_eq!(game.end_message().as_deref(), Some("Player Ada won!"));
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_tie() {
        let mut game = session(6, 7);
        let results = play_all(&mut game, &TIE_MOVES);
        for result in &results[..41] {
            assert!(matches!(result, MoveResult::Continue { .. }), "{result:?}");
        }
        assert!(matches!(results[41], MoveResult::Tied { .. }));
        assert_eq!(game.phase(), &Phase::Tied);
        assert_eq!(game.outcome(), Some(Outcome::Tie));
        assert_eq!(game.end_message().as_deref(), Some("Tie!"));
        assert!(game.board().is_full());
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        let mut game = session(4, 4);
        let moves = [1, 0, 3, 2, 2, 1, 0, 2, 0, 1, 0, 1, 2, 3, 3, 3];
        let results = play_all(&mut game, &moves);
        assert!(game.board().is_full());
        let line = [(0, 3), (1, 2), (2, 1), (3, 0)].map(|(r, c)| Position::new(r, c));
        assert_eq!(
            results[15].outcome(),
            Some(Outcome::Win {
                winner: Seat::Two,
                line
            })
        );
        assert_eq!(game.end_message().as_deref(), Some("Player Bo won!"));
    }

    #[test]
    fn test_full_column_ignored() {
        let mut game = session(6, 7);
        // Column 0 alternates seats, so filling it never wins
        for _ in 0..7 {
            assert!(matches!(game.attempt_move(0), MoveResult::Continue { .. }));
        }
        let before = game.clone();
        assert_eq!(game.attempt_move(0), MoveResult::Ignored(Ignored::ColumnFull));
        assert_eq!(game, before);
        assert_eq!(game.legal_columns(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut game = session(6, 7);
        let before = game.clone();
        assert_eq!(game.attempt_move(-1), MoveResult::Ignored(Ignored::InvalidColumn));
        assert_eq!(game.attempt_move(6), MoveResult::Ignored(Ignored::InvalidColumn));
        assert_eq!(
            game.attempt_move(isize::MIN),
            MoveResult::Ignored(Ignored::InvalidColumn)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_terminal_session_ignores_moves() {
        let mut game = session(6, 7);
        play_all(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        let finished = game.clone();
        for col in [-1, 0, 3, 4, 5, 6] {
            assert_eq!(game.attempt_move(col), MoveResult::Ignored(Ignored::GameOver));
            assert_eq!(game, finished);
        }
    }

    #[test]
    fn test_degenerate_board_ties() {
        let mut game = session(3, 3);
        let results = play_all(&mut game, &[0, 0, 0, 1, 1, 1, 2, 2, 2]);
        assert!(matches!(results[8], MoveResult::Tied { .. }));
        assert_eq!(game.outcome(), Some(Outcome::Tie));
    }

    #[test]
    fn test_zero_width_board_accepts_nothing() {
        let mut game = session(0, 7);
        assert_eq!(game.attempt_move(0), MoveResult::Ignored(Ignored::InvalidColumn));
        assert!(!game.is_terminal());
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_new_game_discards_previous_state() {
        let mut game = session(6, 7);
        play_all(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        assert!(game.is_terminal());
        game = session(6, 7);
        assert!(!game.is_terminal());
        assert_eq!(game.board(), &Board::new(6, 7));
        assert_eq!(game.current_seat(), Seat::One);
    }
}
