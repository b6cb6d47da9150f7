//! Test fixtures - snapshot and change set documents.

use serde_json::{json, Value};

/// Symbol descriptor with only the required fields
pub fn symbol(path: &str, kind: &str) -> Value {
    json!({ "path": path, "kind": kind, "public": true })
}

pub fn method(path: &str, params: &[&str]) -> Value {
    json!({ "path": path, "kind": "method", "public": true, "params": params })
}

pub fn deprecated(path: &str, kind: &str, since: &str) -> Value {
    json!({ "path": path, "kind": kind, "public": true, "deprecatedSince": since })
}

/// Snapshot document as pretty JSON
pub fn snapshot(version: &str, symbols: Vec<Value>) -> String {
    serde_json::to_string_pretty(&json!({ "version": version, "symbols": symbols })).unwrap()
}

/// Release 1.0 of a small build tool API
pub fn base_snapshot() -> String {
    snapshot(
        "1.0.0",
        vec![
            symbol("pants/goal", "module"),
            method("pants/goal::Goal.run", &["targets"]),
            symbol("pants/goal::fail_fast", "option"),
            symbol("pants/engine/exp/scheduler::LocalScheduler", "module"),
        ],
    )
}

/// Release 1.1 adding a parameter and an option, dropping an experimental module
pub fn compatible_snapshot() -> String {
    snapshot(
        "1.1.0",
        vec![
            symbol("pants/goal", "module"),
            method("pants/goal::Goal.run", &["targets", "options"]),
            symbol("pants/goal::fail_fast", "option"),
            symbol("pants/goal::colors", "option"),
        ],
    )
}

/// Release 1.1 dropping a parameter and an option outright
pub fn breaking_snapshot() -> String {
    snapshot(
        "1.1.0",
        vec![
            symbol("pants/goal", "module"),
            method("pants/goal::Goal.run", &[]),
            symbol("pants/engine/exp/scheduler::LocalScheduler", "module"),
        ],
    )
}

pub const SEVERE_BUG_CHANGES: &str = r#"
[[exception]]
path = "pants/goal::fail_fast"
reason = "option enabled remote code execution"
"#;
