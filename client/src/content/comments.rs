//! Seed comments for article threads.

use crate::state::comments::Comment;

fn seed(id: &str, author: &str, body: &str, posted_on: &str, replies: Vec<Comment>) -> Comment {
    Comment {
        id: id.to_owned(),
        author: author.to_owned(),
        body: body.to_owned(),
        posted_on: posted_on.to_owned(),
        replies,
    }
}

/// Seed thread for an article, keyed by slug. Articles without seeds start
/// with an empty thread.
#[must_use]
pub fn seed_comments(slug: &str) -> Vec<Comment> {
    match slug {
        "shipping-side-projects" => vec![
            seed(
                "ssp-1",
                "Mara",
                "The deploy-first rule sounds backwards until you try it once. Now I can't start any other way.",
                "2024-11-04",
                vec![seed(
                    "ssp-1-1",
                    "Site author",
                    "Exactly — the skeleton online changes what 'done' means for every task after it.",
                    "2024-11-04",
                    Vec::new(),
                )],
            ),
            seed(
                "ssp-2",
                "Jonas K.",
                "What counts as the one allowed experiment if the whole project is the experiment?",
                "2024-11-10",
                Vec::new(),
            ),
        ],
        "freelance-estimates" => vec![seed(
            "fe-1",
            "Pia",
            "Sent the discovery-week pitch to a client yesterday. They said yes within the hour.",
            "2024-08-25",
            Vec::new(),
        )],
        _ => Vec::new(),
    }
}
