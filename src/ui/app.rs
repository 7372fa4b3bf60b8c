use super::status::{KeyInput, StatusLine};
use crate::config::AppConfig;
use crate::driver;
use crate::game::GameSession;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    status: StatusLine,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let session = GameSession::from_config(&config);
        let selected_column = middle_column(&session);
        App {
            config,
            session,
            selected_column,
            should_quit: false,
            status: StatusLine::default(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.status.message()
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The end-of-game message stays up until the next game starts
        if !self.session.is_terminal() {
            self.status.clear_message();
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.session = GameSession::from_config(&self.config);
                self.selected_column = middle_column(&self.session);
                self.status = StatusLine::default();
                self.status.set_message("New game started!");
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let mut input = KeyInput::new(self.selected_column);
        if let Err(err) = driver::play(&mut self.session, &mut input, &mut self.status) {
            tracing::warn!(%err, "failed to update status");
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.status);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

fn middle_column(session: &GameSession) -> usize {
    session.board().width().saturating_sub(1) / 2
}
