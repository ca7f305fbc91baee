//! Shared reactive state for copy-to-clipboard feedback.
//!
//! One [`SharedCopyState`] is provided at the application root with
//! [`provide_copy_state`] and picked up anywhere below it with
//! [`use_copy_state`]. UI code records what was copied and renders the
//! title-cased [`SharedCopyState::formatted_context`] back to the user.

mod context;
mod error;
mod state;
mod text;

pub use context::{provide_copy_state, use_copy_state};
pub use error::{Error, Result};
pub use state::{CopySnapshot, SharedCopyState};
pub use text::to_title_case;
