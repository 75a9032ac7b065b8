//! JSON-based API for external consumers (UIs, bots, test harnesses).

pub mod json_api;

pub use json_api::{handle_action_json, snapshot_json, ActionRequest};
