//! Hard-coded site content.
//!
//! DESIGN
//! ======
//! Everything the site shows — articles, case studies, experience,
//! supporters, workspaces, seed comments — lives in static arrays here.
//! There is no database; pages read these modules directly and any
//! visitor-created data (comments, hotspot edits) stays in the browser.

pub mod articles;
pub mod comments;
pub mod experience;
pub mod portfolio;
pub mod supporters;
pub mod workspaces;
