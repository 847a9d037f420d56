// =====
// TESTS: 4
// =====
//
// Replay scripts end to end: file in, JSON lines out.

use chat_scroll_lock::config::LockPolicy;
use chat_scroll_lock::error::AppError;
use chat_scroll_lock::replay::replay_file;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

fn demo_script() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("scroll_up_then_chat.jsonl")
}

fn replay(path: &Path, policy: LockPolicy) -> Vec<Value> {
    let mut out = Vec::new();
    replay_file(path, policy, true, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn demo_script_produces_one_record_per_event() {
    let records = replay(&demo_script(), LockPolicy::default());
    assert_eq!(records.len(), 10);

    let kinds: Vec<&str> = records.iter().map(|r| r["event"].as_str().unwrap()).collect();
    assert_eq!(
        kinds,
        vec![
            "open",
            "tick",
            "append",
            "tick",
            "tick",
            "scroll_by",
            "tick",
            "scroll_to",
            "tick",
            "append"
        ]
    );
}

#[test]
fn demo_script_holds_then_releases() {
    let records = replay(&demo_script(), LockPolicy::default());

    assert_eq!(records[1]["transitions"], json!([{"kind": "locked", "anchor": 50}]));
    assert_eq!(
        records[2]["transitions"],
        json!([{"kind": "scheduled"}, {"kind": "reasserted", "from": 820, "to": 770}])
    );
    assert_eq!(
        records[2]["viewport"],
        json!({"offset": 770, "extent": 1020, "visible_height": 200, "distance": 50})
    );
    assert_eq!(
        records[3]["transitions"],
        json!([{"kind": "skipped", "reason": "suppressed"}])
    );
    assert_eq!(
        records[6]["transitions"],
        json!([{"kind": "anchor_moved", "from": 50, "to": 150}])
    );
    assert_eq!(records[8]["transitions"], json!([{"kind": "unlocked"}]));
    assert_eq!(records[9]["status"], json!({"state": "unlocked"}));
    assert_eq!(records[9]["viewport"]["distance"], json!(0));
}

#[test]
fn unreadable_script_maps_to_app_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    let err = replay_file(&dir.path().join("missing.jsonl"), LockPolicy::default(), true, &mut out)
        .unwrap_err();
    assert_eq!(err.downcast_ref::<AppError>(), Some(&AppError::ScriptUnreadable));
    assert!(out.is_empty());
}

#[test]
fn malformed_line_is_reported_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.jsonl");
    let script = [r#"{"event":"tick"}"#, "# comment", r#"{"event":"append","height":"x"}"#];
    std::fs::write(&path, script.join("\n")).unwrap();
    let mut out = Vec::new();
    let err = replay_file(&path, LockPolicy::default(), true, &mut out).unwrap_err();
    assert_eq!(err.downcast_ref::<AppError>(), Some(&AppError::ScriptInvalid { line: 3 }));
}
