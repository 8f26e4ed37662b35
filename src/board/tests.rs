//! Comment board tests
//!
//! These exercise the board's persistence contracts against real files in a
//! per-test temp path: round-trip, newest-first ordering, validation,
//! clear idempotence, corrupt-blob recovery, and markup escaping.

use super::markup;
use super::store::CommentStore;
use super::*;
use std::fs;
use std::path::PathBuf;

/// Unique blob path per test so tests never share state
fn temp_blob(tag: &str) -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "dnboard-test-{}-{}-{}.json",
        tag,
        std::process::id(),
        n
    ))
}

fn board(tag: &str) -> CommentBoard {
    CommentBoard::new(CommentStore::new(temp_blob(tag)))
}

#[test]
fn test_submit_then_load_round_trips() {
    let mut board = board("roundtrip");
    let before = Utc::now().timestamp_millis();

    assert!(board.submit("a@b.com", "hello"));

    let after = Utc::now().timestamp_millis();
    let comments = board.load();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].email, "a@b.com");
    assert_eq!(comments[0].text, "hello");
    assert!(comments[0].time >= before && comments[0].time <= after);

    board.clear_all();
}

#[test]
fn test_comments_load_newest_first() {
    let mut board = board("ordering");

    board.submit("one@example.com", "first");
    board.submit("two@example.com", "second");
    board.submit("three@example.com", "third");

    let texts: Vec<_> = board.load().into_iter().map(|c| c.text).collect();
    assert_eq!(texts, ["third", "second", "first"]);

    board.clear_all();
}

#[test]
fn test_submit_rejects_empty_fields() {
    let mut board = board("validation");
    board.submit("seed@example.com", "kept");

    for (email, text) in [("", "hello"), ("a@b.com", ""), ("", ""), ("  ", " \t ")] {
        assert!(!board.submit(email, text));
        let note = board.note().expect("rejection must set a note");
        assert_eq!(note.kind, NoteKind::Warning);
        assert_eq!(note.text, NOTE_MISSING_FIELDS);
        // No mutation on validation failure
        assert_eq!(board.load().len(), 1);
    }

    board.clear_all();
}

#[test]
fn test_successful_submit_sets_success_note() {
    let mut board = board("note");

    // Warning first, then success must replace it - the notes are
    // mutually exclusive
    board.submit("", "");
    board.submit("a@b.com", "hi");
    let note = board.note().expect("submit must set a note");
    assert_eq!(note.kind, NoteKind::Success);
    assert_eq!(note.text, NOTE_POSTED);

    board.clear_all();
}

#[test]
fn test_submit_trims_whitespace() {
    let mut board = board("trim");

    assert!(board.submit("  a@b.com  ", "  hello  "));
    let comments = board.load();
    assert_eq!(comments[0].email, "a@b.com");
    assert_eq!(comments[0].text, "hello");

    board.clear_all();
}

#[test]
fn test_clear_all_is_idempotent() {
    let mut board = board("clear");
    board.submit("a@b.com", "hello");

    board.clear_all();
    assert!(board.load().is_empty());

    // Clearing an already-empty store is a no-op
    board.clear_all();
    assert!(board.load().is_empty());
}

#[test]
fn test_corrupt_blob_loads_as_empty() {
    let path = temp_blob("corrupt");
    fs::write(&path, "{not json at all").unwrap();

    let store = CommentStore::new(path.clone());
    assert!(store.load().is_empty());

    // Wrong shape is also "absent", not an error
    fs::write(&path, "{\"email\": \"a@b.com\"}").unwrap();
    assert!(store.load().is_empty());

    let _ = fs::remove_file(path);
}

#[test]
fn test_missing_blob_loads_as_empty() {
    let store = CommentStore::new(temp_blob("missing"));
    assert!(store.load().is_empty());
}

#[test]
fn test_blob_is_a_plain_json_array() {
    let path = temp_blob("shape");
    let store = CommentStore::new(path.clone());
    store
        .save(&[Comment {
            email: "a@b.com".to_string(),
            text: "hello".to_string(),
            time: 1_700_000_000_000,
        }])
        .unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["email"], "a@b.com");
    assert_eq!(parsed[0]["text"], "hello");
    assert_eq!(parsed[0]["time"], 1_700_000_000_000_i64);

    let _ = fs::remove_file(path);
}

// ─────────────────────────────────────────────────────────────────────────────
// Markup rendering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_escape_covers_all_five_characters() {
    assert_eq!(
        markup::escape("&<>\"'"),
        "&amp;&lt;&gt;&quot;&#39;"
    );
    assert_eq!(markup::escape("plain text"), "plain text");
}

#[test]
fn test_script_tag_renders_as_literal_text() {
    let comment = Comment {
        email: "a@b.com".to_string(),
        text: "<script>alert(1)</script>".to_string(),
        time: 1_700_000_000_000,
    };

    let html = markup::comment_item(&comment);
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_email_is_escaped_too() {
    let comment = Comment {
        email: "\"<b>\"@example.com".to_string(),
        text: "hi".to_string(),
        time: 1_700_000_000_000,
    };

    let html = markup::comment_item(&comment);
    assert!(html.contains("&quot;&lt;b&gt;&quot;@example.com"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_empty_list_renders_placeholder() {
    let html = markup::comment_list(&[]);
    assert!(html.contains(markup::EMPTY_PLACEHOLDER));
}

#[test]
fn test_list_renders_items_in_stored_order() {
    let comments = vec![
        Comment {
            email: "new@example.com".to_string(),
            text: "newest".to_string(),
            time: 2_000,
        },
        Comment {
            email: "old@example.com".to_string(),
            text: "oldest".to_string(),
            time: 1_000,
        },
    ];

    let html = markup::comment_list(&comments);
    let newest = html.find("newest").unwrap();
    let oldest = html.find("oldest").unwrap();
    assert!(newest < oldest);
    assert!(!html.contains(markup::EMPTY_PLACEHOLDER));
}
