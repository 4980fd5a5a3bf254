//! Host element boundary.
//!
//! ## Usage
//!
//! Implement [`InteractiveElement`] over the host's native element type (a
//! DOM node, a test double, a simulated element) to let the engine read its
//! state, mount wave artifacts, and register input listeners.

use smallvec::SmallVec;

use crate::events::{EventCallback, EventKind, ListenerId};
use crate::geometry::Rect;

/// Handle identifying one mounted wave artifact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WaveId(pub u64);

/// Positioning and styling for a wave artifact at mount time.
///
/// The artifact is an absolutely positioned child of the element: a square of
/// `diameter` side length whose top-left corner sits at (`left`, `top`) in
/// element-local coordinates, so the circle it renders is centered on the
/// press origin.
#[derive(Clone, PartialEq, Debug)]
pub struct WaveArtifact {
    /// `left` style in CSS pixels.
    pub left: f32,
    /// `top` style in CSS pixels.
    pub top: f32,
    /// `width` and `height` style in CSS pixels.
    pub diameter: f32,
    /// Classes applied to the artifact.
    pub classes: SmallVec<[&'static str; 2]>,
}

/// A DOM-like interactive element the engine can attach to.
///
/// All operations are infallible; hosts tolerate redundant calls (removing a
/// wave twice, releasing capture that is not held) as no-ops.
pub trait InteractiveElement: Send + Sync {
    /// The element's bounding box in client space.
    fn bounding_box(&self) -> Rect;

    /// Reads an attribute value, `None` when absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Writes an attribute value.
    fn set_attribute(&self, name: &str, value: &str);

    /// Whether the element is a native push-button.
    fn is_native_button(&self) -> bool;

    /// The element's native disabled state.
    fn is_disabled(&self) -> bool;

    /// Adds a class to the element's class list.
    fn add_class(&self, class: &str);

    /// Removes a class from the element's class list.
    fn remove_class(&self, class: &str);

    /// Appends a wave artifact as a child of the element.
    fn append_wave(&self, id: WaveId, artifact: &WaveArtifact);

    /// Applies the exiting visual state to a mounted wave.
    fn set_wave_exiting(&self, id: WaveId);

    /// Removes a mounted wave artifact.
    fn remove_wave(&self, id: WaveId);

    /// Acquires pointer capture so release events for `pointer_id` reach this
    /// element even when the pointer leaves its bounds.
    fn set_pointer_capture(&self, pointer_id: i64);

    /// Releases pointer capture for `pointer_id`.
    fn release_pointer_capture(&self, pointer_id: i64);

    /// Registers a listener for one event kind.
    fn add_listener(&self, kind: EventKind, callback: EventCallback) -> ListenerId;

    /// Removes a previously registered listener.
    fn remove_listener(&self, id: ListenerId);

    /// The system-level reduced-motion preference, read once at attach time.
    fn prefers_reduced_motion(&self) -> bool;
}
