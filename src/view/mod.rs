//! View layer
//!
//! Turns the in-memory mirrors into HTML and maps user actions onto API
//! calls.
//!
//! - [`markup`]: HTML fragments for story lists
//! - [`nav`]: pages and navbar state
//! - [`app`]: the controller tying the API, mirrors and session together

mod app;
pub mod markup;
mod nav;

pub use app::{App, AppError, AppResult};
pub use nav::{NavBar, Page};
