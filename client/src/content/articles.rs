//! Blog articles, authored in markdown.

/// A published article.
#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    /// URL segment under `/articles/`.
    pub slug: &'static str,
    pub title: &'static str,
    /// One-line teaser shown on list cards.
    pub summary: &'static str,
    /// ISO date, display only.
    pub published_on: &'static str,
    pub tags: &'static [&'static str],
    /// Markdown body rendered with `util::markdown`.
    pub body: &'static str,
}

/// All articles, newest first.
#[must_use]
pub fn articles() -> Vec<Article> {
    vec![
        Article {
            slug: "shipping-side-projects",
            title: "Shipping side projects without burning out",
            summary: "Scope ruthlessly, deploy on day one, and let boring tech carry you.",
            published_on: "2024-11-02",
            tags: &["process", "indie"],
            body: "\
Side projects die in the gap between *almost working* and *online*.\n\
\n\
## Deploy before you build\n\
\n\
The first thing I do on any new project is put a hello-world in front of\n\
real DNS. Everything after that is iteration instead of a looming launch.\n\
\n\
## Boring tech is a feature\n\
\n\
Every novel tool in the stack is a loan against your weekends. I budget\n\
exactly one experiment per project; the rest is things I could maintain\n\
half-asleep.\n\
\n\
```text\nidea -> deployed skeleton -> one feature -> announce\n```\n\
\n\
Announce earlier than feels comfortable. The feedback is worth the cringe.",
        },
        Article {
            slug: "freelance-estimates",
            title: "How I estimate freelance work (and when I refuse to)",
            summary: "Ranges beat numbers, discovery beats ranges, and some work should stay unestimated.",
            published_on: "2024-08-19",
            tags: &["freelance", "business"],
            body: "\
A single number is a promise. A range is a conversation.\n\
\n\
When a prospect asks for a fixed quote on a vague brief, I sell a paid\n\
discovery week instead: a small, honestly-scoped engagement that produces\n\
a backlog we can both price. Most of the time the discovery output is\n\
worth more to them than the original feature was.\n\
\n\
## The refusal list\n\
\n\
- Rescue missions with a hard launch date already announced\n\
- \"Just like X but simpler\" where X took a funded team years\n\
- Anything estimated by someone who will not do the work",
        },
        Article {
            slug: "desk-setup-tour",
            title: "A guided tour of my desk setup",
            summary: "The workspace page now has clickable hotspots — here is how and why.",
            published_on: "2024-05-07",
            tags: &["workspace", "meta"],
            body: "\
People kept asking about the gear in my calls, so the\n\
[workspace page](/workspace/studio-desk) now has little markers you can\n\
click for the story behind each item.\n\
\n\
The fun part: positions are stored as percentages of the photo, so the\n\
markers survive any screen size, and the whole thing persists in your\n\
browser — there is no server-side state at all.\n\
\n\
## Why percentages\n\
\n\
Pixel offsets break the moment the image scales. Percentage offsets from\n\
the top-left corner are resolution-independent and round-trip cleanly\n\
through storage as small integers.",
        },
        Article {
            slug: "reader-questions-1",
            title: "Reader questions: contracts, cold email, and saying no",
            summary: "A grab bag of questions from the contact form, answered in public.",
            published_on: "2024-02-11",
            tags: &["freelance", "qa"],
            body: "\
A few recurring questions from the contact form, answered once so I can\n\
link to them forever.\n\
\n\
**Do you work without a contract?** No, and neither should you. A\n\
one-page scope-and-payment agreement beats a handshake every time.\n\
\n\
**Does cold email work?** Mine never did. Every client I have came from\n\
writing in public or referrals from past work.\n\
\n\
**How do you say no?** Quickly, kindly, and with a referral when I have\n\
one. A fast no is a favor to both sides.",
        },
    ]
}

/// Look up an article by slug.
#[must_use]
pub fn find(slug: &str) -> Option<Article> {
    articles().into_iter().find(|a| a.slug == slug)
}
