//! State Management
//!
//! Session context and toast notifications.

pub mod session;

pub use session::{provide_session_state, SessionState};
