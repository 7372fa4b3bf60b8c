//! Terminal UI for playing Connect Four with two people at one keyboard.

mod app;
mod game_view;
mod status;

pub use app::App;
pub use status::StatusLine;
