//! The shared copy-feedback state and its plain snapshot form.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::text::to_title_case;

/// Reactive state describing the most recent copy action.
///
/// All fields are arena-backed Leptos primitives, so the struct is `Copy` and
/// can be moved into event handlers and views without cloning.
/// `formatted_context` is a memo over `copied_context` and cannot be written.
#[derive(Debug, Clone, Copy)]
pub struct SharedCopyState {
    copy_success: RwSignal<bool>,
    copied_context: RwSignal<String>,
    formatted_context: Memo<String>,
}

impl SharedCopyState {
    pub fn new() -> Self {
        Self::from_parts(false, String::new())
    }

    /// Seed a state from a snapshot. The snapshot's `formatted_context` is
    /// ignored and recomputed from `copied_context`.
    pub fn from_snapshot(snapshot: CopySnapshot) -> Self {
        Self::from_parts(snapshot.copy_success, snapshot.copied_context)
    }

    fn from_parts(copy_success: bool, copied_context: String) -> Self {
        let copy_success = RwSignal::new(copy_success);
        let copied_context = RwSignal::new(copied_context);
        let formatted_context = Memo::new(move |_| copied_context.with(|text| to_title_case(text)));

        Self {
            copy_success,
            copied_context,
            formatted_context,
        }
    }

    // ── Tracked accessors ─────────────────────────────────────────────────────

    pub fn copy_success(&self) -> bool {
        self.copy_success.get()
    }

    pub fn set_copy_success(&self, success: bool) {
        self.copy_success.set(success);
    }

    pub fn copied_context(&self) -> String {
        self.copied_context.get()
    }

    pub fn set_copied_context(&self, text: impl Into<String>) {
        self.copied_context.set(text.into());
    }

    /// Title-cased `copied_context`.
    pub fn formatted_context(&self) -> String {
        self.formatted_context.get()
    }

    // ── Untracked accessors (event handlers, server code) ─────────────────────

    pub fn copy_success_untracked(&self) -> bool {
        self.copy_success.get_untracked()
    }

    pub fn copied_context_untracked(&self) -> String {
        self.copied_context.get_untracked()
    }

    pub fn formatted_context_untracked(&self) -> String {
        self.formatted_context.get_untracked()
    }

    // ── Caller helpers ────────────────────────────────────────────────────────

    /// Record a successful copy of `text`.
    pub fn record_copy(&self, text: impl Into<String>) {
        self.copied_context.set(text.into());
        self.copy_success.set(true);
    }

    /// Record a failed copy. The previously copied text is kept.
    pub fn record_failure(&self) {
        self.copy_success.set(false);
    }

    pub fn reset(&self) {
        self.copy_success.set(false);
        self.copied_context.set(String::new());
    }

    pub fn snapshot(&self) -> CopySnapshot {
        CopySnapshot {
            copy_success: self.copy_success_untracked(),
            copied_context: self.copied_context_untracked(),
            formatted_context: self.formatted_context_untracked(),
        }
    }

    // ── Raw primitives for views ──────────────────────────────────────────────

    pub fn copy_success_signal(&self) -> RwSignal<bool> {
        self.copy_success
    }

    pub fn copied_context_signal(&self) -> RwSignal<String> {
        self.copied_context
    }

    pub fn formatted_context_memo(&self) -> Memo<String> {
        self.formatted_context
    }
}

impl Default for SharedCopyState {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain value copy of [`SharedCopyState`], e.g. for handing server state to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopySnapshot {
    pub copy_success: bool,
    pub copied_context: String,
    pub formatted_context: String,
}
