use super::*;

fn seed(id: &str) -> Comment {
    Comment {
        id: id.to_owned(),
        author: "Seed".to_owned(),
        body: "seed body".to_owned(),
        posted_on: "2024-01-01".to_owned(),
        replies: Vec::new(),
    }
}

#[test]
fn add_comment_appends_at_end() {
    let mut thread = ThreadState::seeded(vec![seed("a")]);
    thread.add_comment("Mara", "Nice write-up");
    assert_eq!(thread.comments.len(), 2);
    assert_eq!(thread.comments[1].author, "Mara");
    assert_eq!(thread.comments[1].body, "Nice write-up");
    assert!(thread.comments[1].replies.is_empty());
}

#[test]
fn add_comment_blank_body_is_ignored() {
    let mut thread = ThreadState::default();
    thread.add_comment("Mara", "   ");
    assert!(thread.comments.is_empty());
}

#[test]
fn add_comment_blank_author_becomes_anonymous() {
    let mut thread = ThreadState::default();
    thread.add_comment("  ", "hello");
    assert_eq!(thread.comments[0].author, "Anonymous");
}

#[test]
fn add_reply_nests_under_parent() {
    let mut thread = ThreadState::seeded(vec![seed("a"), seed("b")]);
    thread.add_reply("a", "Jonas", "Agreed");
    assert_eq!(thread.comments[0].replies.len(), 1);
    assert_eq!(thread.comments[0].replies[0].body, "Agreed");
    assert!(thread.comments[1].replies.is_empty());
}

#[test]
fn add_reply_unknown_parent_is_noop() {
    let mut thread = ThreadState::seeded(vec![seed("a")]);
    let before = thread.clone();
    thread.add_reply("missing", "Jonas", "hello?");
    assert_eq!(thread, before);
}

#[test]
fn local_comments_get_unique_ids() {
    let a = Comment::local("x", "one");
    let b = Comment::local("x", "two");
    assert_ne!(a.id, b.id);
    assert!(!a.id.is_empty());
}

#[test]
fn count_includes_replies() {
    let mut thread = ThreadState::seeded(vec![seed("a")]);
    thread.add_reply("a", "Jonas", "first");
    thread.add_reply("a", "Mara", "second");
    thread.add_comment("Pia", "top level");
    assert_eq!(thread.count(), 4);
}
