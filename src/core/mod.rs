pub mod autocomplete;
pub mod command;
pub mod editor;
pub mod history;
pub mod keybindings;
pub mod parser;
pub mod payload;
pub mod render;
pub mod session;
pub mod text;
pub mod transcript;
