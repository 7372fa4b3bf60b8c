//! The TUI's side of the driver seam: a key-driven input source and a
//! renderer that keeps what the status bar and board highlight show.

use std::io;

use crate::driver::{InputSource, Renderer};
use crate::game::{Ignored, Outcome, Placement, Player};

/// The column picked by one drop key press, handed out once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    column: Option<isize>,
}

impl KeyInput {
    pub fn new(selected_column: usize) -> Self {
        KeyInput {
            column: isize::try_from(selected_column).ok(),
        }
    }
}

impl InputSource for KeyInput {
    fn next_column(&mut self) -> Option<isize> {
        self.column.take()
    }
}

/// Renderer state for the terminal view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    message: Option<String>,
    last_placement: Option<Placement>,
}

impl StatusLine {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

impl Renderer for StatusLine {
    fn draw_piece(&mut self, placement: Placement, _player: &Player) -> io::Result<()> {
        self.last_placement = Some(placement);
        Ok(())
    }

    fn game_over(&mut self, _outcome: &Outcome, message: &str) -> io::Result<()> {
        self.message = Some(format!("{message}  Press 'r' to restart."));
        Ok(())
    }

    fn move_ignored(&mut self, _column: isize, reason: Ignored) -> io::Result<()> {
        match reason {
            Ignored::ColumnFull => self.set_message("Column is full!"),
            Ignored::InvalidColumn => self.set_message("Invalid column!"),
            // Keep the end-of-game message on screen
            Ignored::GameOver => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;

    #[test]
    fn test_key_input_yields_once() {
        let mut input = KeyInput::new(4);
        assert_eq!(input.next_column(), Some(4));
        assert_eq!(input.next_column(), None);
    }

    #[test]
    fn test_status_line_records_placement() {
        let mut status = StatusLine::default();
        let placement = Placement {
            row: 6,
            col: 1,
            seat: Seat::Two,
        };
        status
            .draw_piece(placement, &Player::new("Bo", "yellow"))
            .unwrap();
        assert_eq!(status.last_placement(), Some(placement));
        assert_eq!(status.message(), None);
    }

    #[test]
    fn test_status_line_keeps_end_message_on_game_over() {
        let mut status = StatusLine::default();
        status.game_over(&Outcome::Tie, "Tie!").unwrap();
        status.move_ignored(0, Ignored::GameOver).unwrap();
        assert_eq!(status.message(), Some("Tie!  Press 'r' to restart."));

        status.move_ignored(0, Ignored::ColumnFull).unwrap();
        assert_eq!(status.message(), Some("Column is full!"));
    }
}
