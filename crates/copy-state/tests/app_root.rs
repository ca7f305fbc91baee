//! Drive the public API the way an app root and its copy buttons would.

use copy_state::{CopySnapshot, SharedCopyState, provide_copy_state, to_title_case, use_copy_state};
use leptos::prelude::*;

#[test]
fn copy_button_flow_updates_feedback() {
    let root = Owner::new();
    root.with(|| {
        let state = provide_copy_state();
        assert!(!state.copy_success());
        assert_eq!(state.formatted_context(), "");

        // A nested button records a copy through the context.
        let button = Owner::current().expect("inside root").child();
        button.with(|| {
            let shared = use_copy_state().expect("provided at root");
            shared.record_copy("hello-world foo_bar");
        });

        assert!(state.copy_success());
        assert_eq!(state.copied_context(), "hello-world foo_bar");
        assert_eq!(state.formatted_context(), "Hello-World Foo_Bar");
        assert_eq!(format!("Copied: {}", state.formatted_context()), "Copied: Hello-World Foo_Bar");
    });
}

#[test]
fn snapshot_survives_json_round_trip() {
    Owner::new().with(|| {
        let server_side = SharedCopyState::new();
        server_side.record_copy("HELLO wORLD");

        let json = serde_json::to_string(&server_side.snapshot()).expect("serialize");
        assert!(json.contains("\"formatted_context\":\"Hello World\""));

        let decoded: CopySnapshot = serde_json::from_str(&json).expect("deserialize");
        let client_side = SharedCopyState::from_snapshot(decoded);
        assert!(client_side.copy_success());
        assert_eq!(client_side.formatted_context(), "Hello World");
    });
}

#[test]
fn formatted_context_matches_free_function() {
    Owner::new().with(|| {
        let state = SharedCopyState::new();
        for s in ["", "a_b-c d", "ALL CAPS", "x1Y2 z3", "  padded  "] {
            state.set_copied_context(s);
            assert_eq!(state.formatted_context(), to_title_case(s));
            assert_eq!(to_title_case(&state.formatted_context()), state.formatted_context());
        }
    });
}
