//! Input event model consumed by the engine.
//!
//! ## Usage
//!
//! Hosts translate their native pointer/keyboard events into [`InputEvent`]
//! values and deliver them through the listeners registered at attach time.

use std::sync::Arc;

use crate::geometry::Point;

/// Which physical button produced a pointer event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerButton {
    /// The primary button (usually left mouse button, touch contact, pen tip).
    Primary,
    /// The auxiliary button (usually the middle button or wheel).
    Auxiliary,
    /// The secondary button (usually the right mouse button).
    Secondary,
}

impl PointerButton {
    /// Whether this is the primary button. Only primary presses spawn waves.
    pub fn is_primary(self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

/// A pointer press, release, or cancellation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointerEvent {
    /// Host-assigned pointer identifier, stable across one contact's events.
    pub pointer_id: i64,
    /// The button that changed state.
    pub button: PointerButton,
    /// Pointer position in client space.
    pub client: Point,
}

/// A keyboard key transition.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeyEvent {
    /// The logical key.
    pub key: Key,
    /// Whether this event was produced by key auto-repeat.
    pub repeat: bool,
}

/// Logical keys the engine distinguishes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Key {
    /// The Enter key.
    Enter,
    /// The Space key.
    Space,
    /// Any other key, carrying the host's key string.
    Other(String),
}

impl Key {
    /// Whether this key activates a button (Enter or Space).
    pub fn activates(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// An input event delivered to a registered listener.
#[derive(Clone, PartialEq, Debug)]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown(PointerEvent),
    /// A pointer button was released.
    PointerUp(PointerEvent),
    /// A pointer contact was cancelled by the host.
    PointerCancel(PointerEvent),
    /// A key went down.
    KeyDown(KeyEvent),
    /// A key went up.
    KeyUp(KeyEvent),
}

impl InputEvent {
    /// The listener category this event is routed to.
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PointerDown(_) => EventKind::PointerDown,
            InputEvent::PointerUp(_) => EventKind::PointerUp,
            InputEvent::PointerCancel(_) => EventKind::PointerCancel,
            InputEvent::KeyDown(_) => EventKind::KeyDown,
            InputEvent::KeyUp(_) => EventKind::KeyUp,
        }
    }
}

/// The five listener categories an enhancement registers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    /// Pointer press start.
    PointerDown,
    /// Pointer press end.
    PointerUp,
    /// Pointer cancellation.
    PointerCancel,
    /// Key down.
    KeyDown,
    /// Key up.
    KeyUp,
}

/// Handle identifying one registered listener for later removal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(pub u64);

/// Callback invoked by the host when a registered event fires.
pub type EventCallback = Arc<dyn Fn(&InputEvent) + Send + Sync>;
