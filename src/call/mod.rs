pub mod media;
pub mod session;
pub mod state;

pub use media::{MediaDevices, SystemMedia};
pub use session::{CallSession, CallSettings};
