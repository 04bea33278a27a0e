//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ui`, `comments`, `support`) so individual
//! components can depend on small focused models. Everything here is plain
//! data wrapped in `RwSignal`s at the page level; nothing leaves the
//! browser session except through explicit persistence in `util::storage`.

pub mod comments;
pub mod support;
pub mod ui;
