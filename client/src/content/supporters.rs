//! Supporters shown on the support page.

/// A past supporter and their public message.
#[derive(Clone, Debug, PartialEq)]
pub struct Supporter {
    pub name: &'static str,
    pub amount_cents: u32,
    pub message: &'static str,
    /// ISO date, display only.
    pub supported_on: &'static str,
}

/// Recent supporters, newest first.
#[must_use]
pub fn supporters() -> Vec<Supporter> {
    vec![
        Supporter {
            name: "Mara",
            amount_cents: 500,
            message: "The estimates article saved my first freelance gig. Coffee's on me.",
            supported_on: "2024-11-20",
        },
        Supporter {
            name: "Anonymous",
            amount_cents: 300,
            message: "",
            supported_on: "2024-11-05",
        },
        Supporter {
            name: "Jonas K.",
            amount_cents: 1000,
            message: "Used inkwell for three years before the rewrite. Thanks for keeping it alive.",
            supported_on: "2024-10-18",
        },
        Supporter {
            name: "tea-not-coffee",
            amount_cents: 300,
            message: "It bought tea. I regret nothing.",
            supported_on: "2024-09-30",
        },
    ]
}
