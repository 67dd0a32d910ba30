//! Application state management

pub mod screen;

pub use screen::{AppCoordinator, MenuOption, Screen, SetupFocus};
