//! Interactive crossterm host for the folio terminal session.

pub mod app;
pub mod keys;
pub mod store;
pub mod terminal;
pub mod view;

pub use app::{Control, Shell};
pub use store::{initial_theme, PortfolioStore};
pub use terminal::TerminalGuard;
pub use view::{compose, paint, Frame, Line, Style};
