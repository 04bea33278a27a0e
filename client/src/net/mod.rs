//! Network layer: typed helpers for the site's two JSON endpoints.

pub mod api;
