//! Pointer-to-percentage mapping for the workspace image.
//!
//! The hotspot model works purely in percentage offsets; this module is
//! the only place viewport pixels are converted. The rendered image's
//! `DomRect` feeds `hotspot::position::PointerBox`, which owns the actual
//! arithmetic and clamping.

#[cfg(feature = "hydrate")]
use hotspot::position::{PointerBox, Position};

/// The image's current bounding box as a `PointerBox`.
#[cfg(feature = "hydrate")]
fn element_box(element: &web_sys::Element) -> PointerBox {
    let rect = element.get_bounding_client_rect();
    PointerBox { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
}

/// Percentage position of a pointer event relative to `element`.
/// `None` while the element has no layout (zero-sized box).
#[cfg(feature = "hydrate")]
pub fn pointer_position(ev: &leptos::ev::PointerEvent, element: &web_sys::Element) -> Option<Position> {
    Position::from_pointer(f64::from(ev.client_x()), f64::from(ev.client_y()), element_box(element))
}

/// Percentage position of a mouse event (e.g. the placement click)
/// relative to `element`.
#[cfg(feature = "hydrate")]
pub fn mouse_position(ev: &leptos::ev::MouseEvent, element: &web_sys::Element) -> Option<Position> {
    Position::from_pointer(f64::from(ev.client_x()), f64::from(ev.client_y()), element_box(element))
}
