// Markup rendering for the comment list
//
// Produces the HTML fragment the site embeds in its comment section. All
// user-supplied text (email and comment body) passes through `escape()`
// before it lands in markup - this is a security contract against
// injection, not a cosmetic choice.

use super::Comment;
use chrono::{Local, TimeZone};

/// Placeholder item rendered when no comments are stored
pub const EMPTY_PLACEHOLDER: &str = "No comments yet — be the first!";

/// Escape the five HTML-significant characters
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Human-readable localized timestamp for a comment's epoch-millisecond time
pub fn format_time(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

/// Render one comment as a list item: email label, localized timestamp,
/// then the comment body
pub fn comment_item(comment: &Comment) -> String {
    format!(
        "<li class=\"comment-item\"><strong>{}</strong> <small>{}</small><p>{}</p></li>",
        escape(&comment.email),
        format_time(comment.time),
        escape(&comment.text),
    )
}

/// Render the full list in stored (newest-first) order, or the single
/// placeholder item when the list is empty
pub fn comment_list(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return format!("<li class=\"comment-item\">{}</li>\n", EMPTY_PLACEHOLDER);
    }
    let mut out = String::new();
    for comment in comments {
        out.push_str(&comment_item(comment));
        out.push('\n');
    }
    out
}
