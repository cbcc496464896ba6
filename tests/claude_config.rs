use std::fs;

use serde_json::json;
use serial_test::serial;

use ccg::{
    backup_claude_code_config, get_backup_dir, get_claude_code_config_path,
    read_claude_code_config, write_claude_code_config, AppError,
};

mod support;
use support::reset_test_fs;

#[test]
#[serial]
fn read_returns_none_when_config_missing() {
    reset_test_fs();

    let result = read_claude_code_config().expect("missing file is not an error");
    assert!(result.is_none());
}

#[test]
#[serial]
fn read_surfaces_parse_errors() {
    reset_test_fs();
    fs::write(get_claude_code_config_path(), "{\"mcpServers\":") // 不完整 JSON
        .expect("seed invalid ~/.claude.json");

    let err = read_claude_code_config().expect_err("invalid json should bubble up error");
    match err {
        AppError::Json { path, .. } => {
            assert!(path.ends_with(".claude.json"), "unexpected path: {path}")
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[test]
#[serial]
fn write_then_read_round_trips_document() {
    reset_test_fs();
    let raw = json!({
        "hasCompletedOnboarding": true,
        "customApiKeyResponses": { "approved": ["k1"], "rejected": [] },
        "mcpServers": {
            "files": { "command": "npx", "args": ["-y", "files-mcp"] },
            "remote": { "type": "sse", "url": "https://mcp.example.com/sse" }
        },
        "installMethod": "native"
    });
    fs::write(
        get_claude_code_config_path(),
        serde_json::to_string(&raw).expect("serialize seed"),
    )
    .expect("seed ~/.claude.json");

    let doc = read_claude_code_config()
        .expect("read succeeds")
        .expect("document present");
    write_claude_code_config(&doc).expect("write succeeds");

    let reread: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(get_claude_code_config_path()).expect("read back"),
    )
    .expect("parse written file");
    assert_eq!(reread, raw, "read-modify-write must not alter any field");
}

#[test]
#[serial]
fn write_produces_indented_multi_line_json() {
    reset_test_fs();
    let doc = serde_json::from_value(json!({
        "mcpServers": { "files": { "command": "npx" } }
    }))
    .expect("build document");
    write_claude_code_config(&doc).expect("write succeeds");

    let content = fs::read_to_string(get_claude_code_config_path()).expect("read back");
    assert!(content.lines().count() > 1, "expected pretty-printed output");
    assert!(content.contains("  \"mcpServers\""));
}

#[test]
fn atomic_write_replaces_content_without_leftovers() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");

    ccg::config::atomic_write(&path, b"{\"a\":1}").expect("first write");
    ccg::config::atomic_write(&path, b"{\"a\":2}").expect("second write");

    assert_eq!(fs::read_to_string(&path).expect("read back"), "{\"a\":2}");
    let entries = fs::read_dir(dir.path()).expect("list dir").count();
    assert_eq!(entries, 1, "temp files must not survive a successful write");
}

#[test]
#[serial]
fn backup_returns_none_without_config() {
    reset_test_fs();

    let result = backup_claude_code_config().expect("no file to back up is not an error");
    assert!(result.is_none());
    assert!(
        !get_backup_dir().exists(),
        "no-op backup should not create the backup directory"
    );
}

#[test]
#[serial]
fn backup_copies_file_verbatim_with_sortable_name() {
    reset_test_fs();
    let content = "{\n  \"mcpServers\": {}\n}";
    fs::write(get_claude_code_config_path(), content).expect("seed ~/.claude.json");

    let path = backup_claude_code_config()
        .expect("backup succeeds")
        .expect("backup path returned");
    assert!(path.starts_with(get_backup_dir()));

    let name = path.file_name().expect("file name").to_string_lossy();
    assert!(name.starts_with("claude-config-") && name.ends_with(".json"));
    let stem = name
        .strip_suffix(".json")
        .expect("json suffix")
        .to_string();
    assert!(
        !stem.contains(':') && !stem.contains('.'),
        "timestamp must be filesystem-safe: {stem}"
    );

    assert_eq!(
        fs::read_to_string(&path).expect("read backup"),
        content,
        "backup must be a verbatim copy"
    );
}
