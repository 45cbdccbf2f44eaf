//! UI Components
//!
//! Reusable Leptos components shared by the brochure pages and the portal.

pub mod footer;
pub mod header;
pub mod loading;

pub use footer::Footer;
pub use header::Header;
pub use loading::{CardSkeleton, Loading};
