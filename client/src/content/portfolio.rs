//! Project case studies with category filtering and grouping helpers.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

/// Broad bucket a case study belongs to; drives the portfolio filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Web,
    Mobile,
    OpenSource,
}

impl Category {
    /// Display label for filter chips and group headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::OpenSource => "Open source",
        }
    }

    /// All categories in display order.
    #[must_use]
    pub fn all() -> &'static [Category] {
        &[Self::Web, Self::Mobile, Self::OpenSource]
    }
}

/// One portfolio case study.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    /// Who the work was for; `None` for personal projects.
    pub client_name: Option<&'static str>,
    pub year: u16,
    pub category: Category,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    /// Live URL or repository, when public.
    pub url: Option<&'static str>,
}

/// All case studies, newest first.
#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            slug: "harbor-booking",
            title: "Harbor booking portal rebuild",
            client_name: Some("Nordvik Marina"),
            year: 2024,
            category: Category::Web,
            summary: "Replaced a fax-and-phone berth booking flow with a seasonal self-serve portal; bookings doubled the first summer.",
            stack: &["Rust", "Axum", "Leptos", "Postgres"],
            url: None,
        },
        Project {
            slug: "fieldnote",
            title: "Fieldnote — offline survey app",
            client_name: Some("Grünkart GmbH"),
            year: 2023,
            category: Category::Mobile,
            summary: "Offline-first plant survey capture for field biologists, syncing opportunistically over rural connections.",
            stack: &["Kotlin", "SQLite", "gRPC"],
            url: None,
        },
        Project {
            slug: "inkwell",
            title: "Inkwell static blog engine",
            client_name: None,
            year: 2023,
            category: Category::OpenSource,
            summary: "The tiny markdown blog engine this very site began life on, before the Leptos rewrite.",
            stack: &["Rust", "pulldown-cmark"],
            url: Some("https://github.com/example/inkwell"),
        },
        Project {
            slug: "ticket-widget",
            title: "Embeddable ticketing widget",
            client_name: Some("Stage Door Collective"),
            year: 2022,
            category: Category::Web,
            summary: "A drop-in checkout widget for independent theatres, embedded on eleven venue sites from one bundle.",
            stack: &["TypeScript", "Preact"],
            url: None,
        },
        Project {
            slug: "chartery",
            title: "chartery — SVG chart primitives",
            client_name: None,
            year: 2021,
            category: Category::OpenSource,
            summary: "Low-level chart building blocks with zero runtime dependencies; still powers the stats on the support page.",
            stack: &["TypeScript"],
            url: Some("https://github.com/example/chartery"),
        },
    ]
}

/// Projects matching `category`, or everything when `None`, preserving order.
#[must_use]
pub fn filtered(category: Option<Category>) -> Vec<Project> {
    projects()
        .into_iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect()
}

/// Group all projects by category, in [`Category::all`] order, skipping
/// categories with no entries.
#[must_use]
pub fn grouped() -> Vec<(Category, Vec<Project>)> {
    Category::all()
        .iter()
        .filter_map(|&category| {
            let members = filtered(Some(category));
            if members.is_empty() { None } else { Some((category, members)) }
        })
        .collect()
}
