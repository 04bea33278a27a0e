//! Workspace showcase entries.
//!
//! Each workspace is a photo that visitors can explore through clickable
//! hotspot markers. The entries here carry only metadata; the markers
//! themselves live in the browser's persisted slot for each workspace and
//! start out empty (see `util::storage`).

/// One workspace showcase page.
#[derive(Clone, Debug, PartialEq)]
pub struct Workspace {
    /// URL segment under `/workspace/` and the persisted-slot key suffix.
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Reference image the markers are positioned over.
    pub image_url: &'static str,
    pub description: &'static str,
}

/// All workspaces in display order.
#[must_use]
pub fn workspaces() -> Vec<Workspace> {
    vec![
        Workspace {
            slug: "studio-desk",
            title: "Studio desk",
            tagline: "Where client work happens",
            image_url: "/images/workspace-studio.jpg",
            description: "The daily driver: standing desk, too many cables, and the chair that outlasted three keyboards. Toggle edit mode to pin your own notes onto the photo — they stay in your browser.",
        },
        Workspace {
            slug: "travel-kit",
            title: "Travel kit",
            tagline: "The whole office in one bag",
            image_url: "/images/workspace-travel.jpg",
            description: "Everything needed to work a month from anywhere, photographed before a train to Trieste.",
        },
    ]
}

/// Look up a workspace by slug.
#[must_use]
pub fn find(slug: &str) -> Option<Workspace> {
    workspaces().into_iter().find(|w| w.slug == slug)
}
