use leptos::logging::{debug_warn, log};
use leptos::prelude::*;

use crate::error::{Error, Result};
use crate::state::SharedCopyState;

/// Provide the app-wide copy state on the current owner.
///
/// Call once at the application root. If an ancestor already provides one,
/// that instance is returned instead so the app never holds two.
pub fn provide_copy_state() -> SharedCopyState {
    if let Some(existing) = use_context::<SharedCopyState>() {
        debug_warn!("[copy-state] provide_copy_state called twice; reusing the existing state");
        return existing;
    }

    let state = SharedCopyState::new();
    provide_context(state);
    log!("[copy-state] Shared copy state provided");
    state
}

/// Look up the copy state provided by [`provide_copy_state`].
pub fn use_copy_state() -> Result<SharedCopyState> {
    use_context::<SharedCopyState>().ok_or(Error::NotProvided)
}
