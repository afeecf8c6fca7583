//! Interactive echo console
//!
//! Received bytes are classified, turned into a response, and sent back
//! until a quit key arrives. The session is an explicit, finite,
//! deterministic state machine driven by a polling loop.

pub mod class;
pub mod events;
pub mod messages;
pub mod response;
pub mod session;

pub use class::CharClass;
pub use events::SessionEvent;
pub use response::Response;
pub use session::{EchoSession, SessionState};
