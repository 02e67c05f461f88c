pub mod commands;
pub mod events;
pub mod types;

pub use commands::CallCommand;
pub use events::CallEvent;
pub use types::{CallKind, Chat, Contact, Message, MessageKind, NavView, Sender};
