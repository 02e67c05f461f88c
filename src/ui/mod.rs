pub mod app;
pub mod components;
pub mod state;
pub mod theme;

pub use app::MessengerApp;
