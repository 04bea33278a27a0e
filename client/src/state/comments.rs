//! Comment thread state for article pages.
//!
//! Threads are one level deep: top-level comments carry replies, replies
//! do not nest further. Visitor-added entries live only in the current
//! page session; nothing is sent anywhere.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use uuid::Uuid;

/// A single comment or reply.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub body: String,
    /// ISO date for seeds, `"today"` for session-local additions.
    pub posted_on: String,
    /// Replies to a top-level comment; always empty on replies themselves.
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Build a session-local comment with a fresh id and no replies.
    #[must_use]
    pub fn local(author: &str, body: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.to_owned(),
            body: body.to_owned(),
            posted_on: "today".to_owned(),
            replies: Vec::new(),
        }
    }
}

/// The comment thread under one article.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThreadState {
    pub comments: Vec<Comment>,
}

impl ThreadState {
    /// Start from the article's seed comments.
    #[must_use]
    pub fn seeded(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    /// Append a top-level comment. Blank bodies are ignored.
    pub fn add_comment(&mut self, author: &str, body: &str) {
        if body.trim().is_empty() {
            return;
        }
        let author = if author.trim().is_empty() { "Anonymous" } else { author.trim() };
        self.comments.push(Comment::local(author, body.trim()));
    }

    /// Append a reply under the top-level comment with `parent_id`.
    /// Unknown parents and blank bodies are silent no-ops.
    pub fn add_reply(&mut self, parent_id: &str, author: &str, body: &str) {
        if body.trim().is_empty() {
            return;
        }
        let Some(parent) = self.comments.iter_mut().find(|c| c.id == parent_id) else {
            return;
        };
        let author = if author.trim().is_empty() { "Anonymous" } else { author.trim() };
        parent.replies.push(Comment::local(author, body.trim()));
    }

    /// Total number of comments including replies.
    #[must_use]
    pub fn count(&self) -> usize {
        self.comments.iter().map(|c| 1 + c.replies.len()).sum()
    }
}
