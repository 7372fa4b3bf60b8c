//! Glue between a [`GameSession`] and the outside world: where column choices
//! come from, and where placements and results go.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::error::PlayError;
use crate::game::{
    Board, GameSession, Ignored, MoveResult, Outcome, Placement, Player, Position, Seat,
};

/// Produces column selections, one per input event.
pub trait InputSource {
    /// The next selected column, or `None` once input is exhausted.
    fn next_column(&mut self) -> Option<isize>;
}

/// Receives everything a frontend needs to draw a game.
pub trait Renderer {
    /// Draw a piece that was just placed.
    fn draw_piece(&mut self, placement: Placement, player: &Player) -> io::Result<()>;

    /// Announce the end of the game. Called once per game.
    fn game_over(&mut self, outcome: &Outcome, message: &str) -> io::Result<()>;

    /// Report a move that changed nothing. Silent unless overridden.
    fn move_ignored(&mut self, _column: isize, _reason: Ignored) -> io::Result<()> {
        Ok(())
    }
}

/// A fixed list of columns, played in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    moves: VecDeque<isize>,
}

impl ScriptedInput {
    pub fn new(moves: impl IntoIterator<Item = isize>) -> Self {
        ScriptedInput {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet handed out.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_column(&mut self) -> Option<isize> {
        self.moves.pop_front()
    }
}

/// Writes placements and the result as lines of plain text.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the board as a grid: `X` for seat One, `O` for seat Two, `.` for
    /// empty, and `*` over the winning line if there is one.
    pub fn write_board(&mut self, session: &GameSession) -> io::Result<()> {
        let winning = match session.outcome() {
            Some(Outcome::Win { line, .. }) => line.to_vec(),
            _ => Vec::new(),
        };
        let board = session.board();
        for row in 0..board.height() {
            let line: String = (0..board.width())
                .map(|col| cell_symbol(board, &winning, row, col))
                .collect();
            writeln!(self.out, "{line}")?;
        }
        let footer: String = (0..board.width())
            .map(|col| char::from_digit((col % 10) as u32, 10).unwrap_or('?'))
            .collect();
        writeln!(self.out, "{footer}")
    }
}

fn cell_symbol(board: &Board, winning: &[Position], row: usize, col: usize) -> char {
    if winning.contains(&Position::new(row, col)) {
        return '*';
    }
    match board.get(row, col) {
        None => '.',
        Some(Seat::One) => 'X',
        Some(Seat::Two) => 'O',
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_piece(&mut self, placement: Placement, player: &Player) -> io::Result<()> {
        writeln!(
            self.out,
            "{} ({}) -> row {}, column {}",
            player.name, player.color, placement.row, placement.col
        )
    }

    fn game_over(&mut self, _outcome: &Outcome, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    fn move_ignored(&mut self, column: isize, reason: Ignored) -> io::Result<()> {
        let why = match reason {
            Ignored::GameOver => "game over",
            Ignored::InvalidColumn => "no such column",
            Ignored::ColumnFull => "column full",
        };
        writeln!(self.out, "column {column} ignored: {why}")
    }
}

/// Feed columns from `input` into `session` until the game ends or input runs
/// out, forwarding each placement and the final result to `renderer`.
///
/// Ignored moves go to [`Renderer::move_ignored`]. A session that is already
/// over returns its outcome without consuming input or announcing it again.
pub fn play<I, R>(
    session: &mut GameSession,
    input: &mut I,
    renderer: &mut R,
) -> Result<Option<Outcome>, PlayError>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    if session.is_terminal() {
        return Ok(session.outcome());
    }

    while let Some(column) = input.next_column() {
        let result = session.attempt_move(column);
        if let MoveResult::Ignored(reason) = result {
            renderer.move_ignored(column, reason)?;
            continue;
        }
        if let Some(placement) = result.placement() {
            renderer.draw_piece(placement, session.player(placement.seat))?;
        }
        if let Some(outcome) = result.outcome() {
            let message = session.message_for(&outcome);
            renderer.game_over(&outcome, &message)?;
            return Ok(Some(outcome));
        }
    }

    tracing::debug!("input exhausted before the game ended");
    Ok(None)
}
