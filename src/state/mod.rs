//! State Management
//!
//! Contexts and small state machines shared across the component tree.

pub mod scroll;
pub mod session;
pub mod theme;

pub use scroll::ScrollLock;
pub use session::{provide_session, use_session, SessionState};
pub use theme::{provide_theme, use_theme, Theme, ThemeState};
