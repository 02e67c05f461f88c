pub mod chat_store;
pub mod sample;

pub use chat_store::ChatStore;
