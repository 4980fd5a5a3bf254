//! Test double for the host element boundary.
//!
//! ## Usage
//!
//! [`MockElement`] implements [`InteractiveElement`] over plain in-memory
//! state and records every mutation the engine performs, so tests (and the
//! demo binary) can drive the engine without a real DOM.

use std::collections::BTreeMap;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::element::{InteractiveElement, WaveArtifact, WaveId};
use crate::events::{EventCallback, EventKind, InputEvent, ListenerId};
use crate::geometry::Rect;

struct MockInner {
    bounds: Rect,
    native_button: bool,
    disabled: bool,
    reduced_motion: bool,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    waves: IndexMap<WaveId, MountedWave>,
    listeners: Vec<(ListenerId, EventKind, EventCallback)>,
    captured: Vec<i64>,
    next_listener: u64,
}

struct MountedWave {
    artifact: WaveArtifact,
    exiting: bool,
}

/// In-memory [`InteractiveElement`] recording all engine interactions.
pub struct MockElement {
    inner: Mutex<MockInner>,
}

impl MockElement {
    /// Creates a native-button mock with a bounding box of the given size,
    /// positioned at the client-space origin.
    pub fn new(width: f32, height: f32) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(MockInner {
                bounds: Rect::new(0.0, 0.0, width, height),
                native_button: true,
                disabled: false,
                reduced_motion: false,
                attributes: BTreeMap::new(),
                classes: Vec::new(),
                waves: IndexMap::new(),
                listeners: Vec::new(),
                captured: Vec::new(),
                next_listener: 0,
            }),
        })
    }

    /// Sets whether the element reports itself as a native push-button.
    pub fn native_button(self: Arc<Self>, value: bool) -> Arc<Self> {
        self.inner.lock().native_button = value;
        self
    }

    /// Sets the reported reduced-motion preference.
    pub fn reduced_motion(self: Arc<Self>, value: bool) -> Arc<Self> {
        self.inner.lock().reduced_motion = value;
        self
    }

    /// Upcasts to the trait object the engine consumes.
    pub fn clone_dyn(self: &Arc<Self>) -> Arc<dyn InteractiveElement> {
        Arc::clone(self) as Arc<dyn InteractiveElement>
    }

    /// Sets the native disabled state.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.lock().disabled = disabled;
    }

    /// Repositions the bounding box in client space.
    pub fn set_bounds(&self, bounds: Rect) {
        self.inner.lock().bounds = bounds;
    }

    /// Delivers an event to every listener registered for its kind.
    pub fn dispatch(&self, event: InputEvent) {
        let kind = event.kind();
        // snapshot outside the lock; callbacks re-enter this element
        let callbacks: Vec<EventCallback> = self
            .inner
            .lock()
            .listeners
            .iter()
            .filter(|(_, listener_kind, _)| *listener_kind == kind)
            .map(|(_, _, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(&event);
        }
    }

    /// Mounted waves in insertion order.
    pub fn waves(&self) -> Vec<(WaveId, WaveArtifact)> {
        self.inner
            .lock()
            .waves
            .iter()
            .map(|(id, wave)| (*id, wave.artifact.clone()))
            .collect()
    }

    /// Whether a mounted wave carries the exiting visual state.
    pub fn wave_exiting(&self, id: WaveId) -> bool {
        self.inner
            .lock()
            .waves
            .get(&id)
            .map(|wave| wave.exiting)
            .unwrap_or(false)
    }

    /// Whether the element currently carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.inner.lock().classes.iter().any(|c| c == class)
    }

    /// Pointer ids currently captured, in acquisition order.
    pub fn captured_pointers(&self) -> Vec<i64> {
        self.inner.lock().captured.clone()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

impl InteractiveElement for MockElement {
    fn bounding_box(&self) -> Rect {
        self.inner.lock().bounds
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.lock().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .lock()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn is_native_button(&self) -> bool {
        self.inner.lock().native_button
    }

    fn is_disabled(&self) -> bool {
        self.inner.lock().disabled
    }

    fn add_class(&self, class: &str) {
        let mut inner = self.inner.lock();
        if !inner.classes.iter().any(|c| c == class) {
            inner.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.inner.lock().classes.retain(|c| c != class);
    }

    fn append_wave(&self, id: WaveId, artifact: &WaveArtifact) {
        self.inner.lock().waves.insert(
            id,
            MountedWave {
                artifact: artifact.clone(),
                exiting: false,
            },
        );
    }

    fn set_wave_exiting(&self, id: WaveId) {
        if let Some(wave) = self.inner.lock().waves.get_mut(&id) {
            wave.exiting = true;
        }
    }

    fn remove_wave(&self, id: WaveId) {
        self.inner.lock().waves.shift_remove(&id);
    }

    fn set_pointer_capture(&self, pointer_id: i64) {
        let mut inner = self.inner.lock();
        if !inner.captured.contains(&pointer_id) {
            inner.captured.push(pointer_id);
        }
    }

    fn release_pointer_capture(&self, pointer_id: i64) {
        self.inner.lock().captured.retain(|id| *id != pointer_id);
    }

    fn add_listener(&self, kind: EventKind, callback: EventCallback) -> ListenerId {
        let mut inner = self.inner.lock();
        let id = ListenerId(inner.next_listener);
        inner.next_listener += 1;
        inner.listeners.push((id, kind, callback));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner
            .lock()
            .listeners
            .retain(|(listener_id, _, _)| *listener_id != id);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.inner.lock().reduced_motion
    }
}
