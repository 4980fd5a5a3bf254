//! The ripple interaction engine.
//!
//! ## Usage
//!
//! Call [`enhance`] once per element; keep the returned [`Enhancement`]
//! alive for as long as the element is mounted and call
//! [`Enhancement::destroy`] (or drop it) on unmount.
//!
//! The engine registers pointer and keyboard listeners on the element and
//! manages up to [`MAX_ACTIVE_WAVES`] concurrent waves, one per activation
//! key. Hosts report the end of each wave animation phase through
//! [`Enhancement::animation_complete`]; that signal may arrive in any order
//! relative to the release event and the engine reconciles the two.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use indexmap::IndexMap;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::dataset;
use crate::element::{InteractiveElement, WaveId};
use crate::events::{EventKind, InputEvent, KeyEvent, ListenerId, PointerEvent};
use crate::geometry::Point;
use crate::options::EnhanceOptions;
use crate::wave::{ActivationKey, Wave};

/// Upper bound on concurrently tracked waves.
///
/// Spawning past the bound force-releases the oldest other activation so a
/// burst of multi-touch presses cannot accumulate artifacts.
pub const MAX_ACTIVE_WAVES: usize = 3;

struct EngineState {
    element: Arc<dyn InteractiveElement>,
    options: EnhanceOptions,
    reduced_motion: bool,
    next_wave: u64,
    /// Insertion-ordered activation registry; order drives eviction.
    active: IndexMap<ActivationKey, WaveId>,
    /// Every mounted wave, including released ones still animating out.
    waves: FxHashMap<WaveId, Wave>,
}

impl EngineState {
    /// Whether the element currently suppresses new waves.
    fn suppressed(&self) -> bool {
        if self.reduced_motion || !self.options.ripple {
            return true;
        }
        let element = &*self.element;
        if element.is_disabled() || attribute_is(element, dataset::ARIA_DISABLED_ATTR, "true") {
            return true;
        }
        is_loading_value(element.attribute(dataset::LOADING_ATTR))
            || is_loading_value(element.attribute(dataset::GENERIC_LOADING_ATTR))
            || attribute_is(element, dataset::ARIA_BUSY_ATTR, "true")
    }

    /// Spawns a wave for `key` at the element-local `origin`.
    ///
    /// Returns whether a wave was created; duplicates and suppressed states
    /// are silent no-ops.
    fn spawn(&mut self, key: ActivationKey, origin: Point) -> bool {
        if self.suppressed() {
            tracing::trace!(?key, "wave suppressed");
            return false;
        }
        if self.active.contains_key(&key) {
            return false;
        }

        let radius = self.element.bounding_box().corner_distance(origin);
        let id = WaveId(self.next_wave);
        self.next_wave += 1;

        let wave = Wave::new(id, key, origin, radius);
        self.element.append_wave(id, &wave.artifact(self.options.variant));
        self.element.add_class(dataset::ANIMATING_CLASS);
        self.active.insert(key, id);
        self.waves.insert(id, wave);
        tracing::debug!(?key, origin.x, origin.y, radius, "wave spawned");

        if self.active.len() > MAX_ACTIVE_WAVES {
            self.evict_oldest(key);
        }
        true
    }

    /// Force-removes the oldest activation other than `current`, skipping the
    /// exit animation.
    fn evict_oldest(&mut self, current: ActivationKey) {
        let Some(victim) = self.active.keys().find(|key| **key != current).copied() else {
            return;
        };
        if let ActivationKey::Pointer(pointer_id) = victim {
            self.element.release_pointer_capture(pointer_id);
        }
        if let Some(id) = self.active.shift_remove(&victim) {
            self.waves.remove(&id);
            self.element.remove_wave(id);
            tracing::debug!(key = ?victim, "wave evicted");
        }
    }

    /// Ends the activation for `key`; the wave exits now or, when its enter
    /// animation is still playing, once that animation completes.
    fn release(&mut self, key: ActivationKey) {
        let Some(id) = self.active.shift_remove(&key) else {
            return;
        };
        let Some(wave) = self.waves.get_mut(&id) else {
            return;
        };
        if wave.entered {
            wave.exiting = true;
            self.element.set_wave_exiting(id);
            tracing::trace!(?key, "wave exiting");
        } else {
            wave.pending_exit = true;
            tracing::trace!(?key, "wave exit deferred until enter completes");
        }
    }

    /// Handles the one-shot animation-completion signal for a wave phase.
    fn animation_complete(&mut self, id: WaveId) {
        let exiting = match self.waves.get(&id) {
            Some(wave) => wave.exiting,
            None => return,
        };

        if exiting {
            self.waves.remove(&id);
            self.element.remove_wave(id);
            if self.waves.is_empty() {
                self.element.remove_class(dataset::ANIMATING_CLASS);
            }
            return;
        }

        let Some(wave) = self.waves.get_mut(&id) else {
            return;
        };
        wave.entered = true;
        if wave.pending_exit {
            wave.pending_exit = false;
            wave.exiting = true;
            self.element.set_wave_exiting(id);
        }
    }

    /// Removes every wave immediately, regardless of animation phase.
    fn clear_all(&mut self) {
        for key in self.active.keys() {
            if let ActivationKey::Pointer(pointer_id) = key {
                self.element.release_pointer_capture(*pointer_id);
            }
        }
        self.active.clear();
        for (id, _) in self.waves.drain() {
            self.element.remove_wave(id);
        }
        self.element.remove_class(dataset::ANIMATING_CLASS);
    }

    fn on_pointer_down(&mut self, event: &PointerEvent) {
        if !event.button.is_primary() {
            return;
        }
        let key = ActivationKey::Pointer(event.pointer_id);
        let origin = self.element.bounding_box().relative_to(event.client);
        if self.spawn(key, origin) {
            self.element.set_pointer_capture(event.pointer_id);
        }
    }

    fn on_pointer_up(&mut self, event: &PointerEvent) {
        let key = ActivationKey::Pointer(event.pointer_id);
        if self.active.contains_key(&key) {
            self.element.release_pointer_capture(event.pointer_id);
        }
        self.release(key);
    }

    fn on_key_down(&mut self, event: &KeyEvent) {
        if !event.key.activates() || event.repeat {
            return;
        }
        let origin = self.element.bounding_box().local_center();
        self.spawn(ActivationKey::Keyboard, origin);
    }

    fn on_key_up(&mut self, event: &KeyEvent) {
        if !event.key.activates() {
            return;
        }
        self.release(ActivationKey::Keyboard);
    }
}

fn attribute_is(element: &dyn InteractiveElement, name: &str, expected: &str) -> bool {
    element.attribute(name).as_deref() == Some(expected)
}

/// Whether a loading attribute value marks the element as loading.
fn is_loading_value(value: Option<String>) -> bool {
    matches!(value.as_deref(), Some("") | Some("true"))
}

/// Handle for one attached behavior instance.
///
/// Dropping the enhancement destroys it; [`Enhancement::destroy`] does the
/// same explicitly and is idempotent.
pub struct Enhancement {
    state: Arc<Mutex<EngineState>>,
    listeners: Mutex<Vec<ListenerId>>,
    destroyed: AtomicBool,
}

impl Enhancement {
    /// Detaches all listeners and removes every wave artifact immediately.
    ///
    /// Safe to call repeatedly and before any activation occurred.
    pub fn destroy(&self) {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }
        let mut state = self.state.lock();
        for id in self.listeners.lock().drain(..) {
            state.element.remove_listener(id);
        }
        state.clear_all();
        tracing::debug!("enhancement destroyed");
    }

    /// Reports that a wave finished its current animation phase.
    ///
    /// Hosts call this once per phase (enter, then exit). Unknown ids and
    /// calls after [`destroy`](Enhancement::destroy) are no-ops.
    pub fn animation_complete(&self, id: WaveId) {
        if self.destroyed.load(Ordering::SeqCst) {
            return;
        }
        self.state.lock().animation_complete(id);
    }
}

impl Drop for Enhancement {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Attaches ripple feedback to `element`.
///
/// Normalizes the element's identity markers, reads the reduced-motion
/// preference once, and registers the pointer and keyboard listeners. The
/// caller must not attach a second enhancement to the same element.
pub fn enhance(element: Arc<dyn InteractiveElement>, options: EnhanceOptions) -> Enhancement {
    if element.attribute(dataset::COMPONENT_ATTR).is_none() {
        element.set_attribute(dataset::COMPONENT_ATTR, dataset::COMPONENT_BUTTON);
    }
    if element.is_native_button() && element.attribute(dataset::TYPE_ATTR).is_none() {
        element.set_attribute(dataset::TYPE_ATTR, dataset::TYPE_BUTTON);
    }

    let reduced_motion = element.prefers_reduced_motion();
    let state = Arc::new(Mutex::new(EngineState {
        element: Arc::clone(&element),
        options,
        reduced_motion,
        next_wave: 0,
        active: IndexMap::new(),
        waves: FxHashMap::default(),
    }));

    let mut listeners = Vec::with_capacity(5);

    let engine = Arc::clone(&state);
    listeners.push(element.add_listener(
        EventKind::PointerDown,
        Arc::new(move |event| {
            if let InputEvent::PointerDown(pointer) = event {
                engine.lock().on_pointer_down(pointer);
            }
        }),
    ));

    let engine = Arc::clone(&state);
    listeners.push(element.add_listener(
        EventKind::PointerUp,
        Arc::new(move |event| {
            if let InputEvent::PointerUp(pointer) = event {
                engine.lock().on_pointer_up(pointer);
            }
        }),
    ));

    let engine = Arc::clone(&state);
    listeners.push(element.add_listener(
        EventKind::PointerCancel,
        Arc::new(move |event| {
            if let InputEvent::PointerCancel(pointer) = event {
                engine.lock().on_pointer_up(pointer);
            }
        }),
    ));

    let engine = Arc::clone(&state);
    listeners.push(element.add_listener(
        EventKind::KeyDown,
        Arc::new(move |event| {
            if let InputEvent::KeyDown(key) = event {
                engine.lock().on_key_down(key);
            }
        }),
    ));

    let engine = Arc::clone(&state);
    listeners.push(element.add_listener(
        EventKind::KeyUp,
        Arc::new(move |event| {
            if let InputEvent::KeyUp(key) = event {
                engine.lock().on_key_up(key);
            }
        }),
    ));

    Enhancement {
        state,
        listeners: Mutex::new(listeners),
        destroyed: AtomicBool::new(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Key, PointerButton};
    use crate::testing::MockElement;

    fn pointer_down(id: i64, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown(PointerEvent {
            pointer_id: id,
            button: PointerButton::Primary,
            client: Point::new(x, y),
        })
    }

    fn pointer_up(id: i64) -> InputEvent {
        InputEvent::PointerUp(PointerEvent {
            pointer_id: id,
            button: PointerButton::Primary,
            client: Point::ZERO,
        })
    }

    fn key_down(key: Key, repeat: bool) -> InputEvent {
        InputEvent::KeyDown(KeyEvent { key, repeat })
    }

    fn key_up(key: Key) -> InputEvent {
        InputEvent::KeyUp(KeyEvent { key, repeat: false })
    }

    #[test]
    fn test_attach_normalizes_markers() {
        let element = MockElement::new(120.0, 40.0);
        let enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());
        assert_eq!(
            element.attribute(dataset::COMPONENT_ATTR).as_deref(),
            Some(dataset::COMPONENT_BUTTON)
        );
        assert_eq!(
            element.attribute(dataset::TYPE_ATTR).as_deref(),
            Some(dataset::TYPE_BUTTON)
        );
        enhancement.destroy();
    }

    #[test]
    fn test_attach_keeps_explicit_type() {
        let element = MockElement::new(120.0, 40.0);
        element.set_attribute(dataset::TYPE_ATTR, "submit");
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());
        assert_eq!(
            element.attribute(dataset::TYPE_ATTR).as_deref(),
            Some("submit")
        );
    }

    #[test]
    fn test_attach_skips_type_on_non_button() {
        let element = MockElement::new(120.0, 40.0).native_button(false);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());
        assert_eq!(
            element.attribute(dataset::COMPONENT_ATTR).as_deref(),
            Some(dataset::COMPONENT_BUTTON)
        );
        assert_eq!(element.attribute(dataset::TYPE_ATTR), None);
    }

    #[test]
    fn test_pointer_press_spawns_wave_with_corner_radius() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_down(1, 10.0, 10.0));

        let waves = element.waves();
        assert_eq!(waves.len(), 1);
        let artifact = &waves[0].1;
        // radius = sqrt(110^2 + 30^2) ≈ 114.018
        assert!((artifact.diameter - 228.035).abs() < 0.01);
        assert!((artifact.left - (10.0 - 114.0175)).abs() < 0.01);
        assert!((artifact.top - (10.0 - 114.0175)).abs() < 0.01);
        assert!(element.has_class(dataset::ANIMATING_CLASS));
        assert_eq!(element.captured_pointers(), vec![1]);
    }

    #[test]
    fn test_non_primary_button_ignored() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(InputEvent::PointerDown(PointerEvent {
            pointer_id: 1,
            button: PointerButton::Secondary,
            client: Point::new(5.0, 5.0),
        }));

        assert!(element.waves().is_empty());
    }

    #[test]
    fn test_reduced_motion_suppresses_waves() {
        let element = MockElement::new(120.0, 40.0).reduced_motion(true);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_down(1, 10.0, 10.0));
        element.dispatch(key_down(Key::Enter, false));

        assert!(element.waves().is_empty());
    }

    #[test]
    fn test_disabled_and_loading_suppress_waves() {
        let setups: [fn(&MockElement); 6] = [
            |element| element.set_disabled(true),
            |element| element.set_attribute(dataset::ARIA_DISABLED_ATTR, "true"),
            |element| element.set_attribute(dataset::LOADING_ATTR, "true"),
            |element| element.set_attribute(dataset::LOADING_ATTR, ""),
            |element| element.set_attribute(dataset::GENERIC_LOADING_ATTR, "true"),
            |element| element.set_attribute(dataset::ARIA_BUSY_ATTR, "true"),
        ];
        for setup in setups {
            let element = MockElement::new(120.0, 40.0);
            let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());
            setup(&element);

            element.dispatch(pointer_down(1, 10.0, 10.0));
            assert!(element.waves().is_empty());
        }
    }

    #[test]
    fn test_loading_attribute_blocks_keyboard_wave() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());
        element.set_attribute(dataset::LOADING_ATTR, "true");

        element.dispatch(key_down(Key::Enter, false));

        assert!(element.waves().is_empty());
    }

    #[test]
    fn test_ripple_disabled_by_options() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::new().ripple(false));

        element.dispatch(pointer_down(1, 10.0, 10.0));

        assert!(element.waves().is_empty());
    }

    #[test]
    fn test_keyboard_activation_spawns_centered_wave() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(key_down(Key::Enter, false));

        let waves = element.waves();
        assert_eq!(waves.len(), 1);
        let artifact = &waves[0].1;
        // center (60, 20), radius = sqrt(60^2 + 20^2)
        let radius = 60.0_f32.hypot(20.0);
        assert!((artifact.left - (60.0 - radius)).abs() < 0.01);
        assert!((artifact.top - (20.0 - radius)).abs() < 0.01);
        // keyboard input takes no pointer capture
        assert!(element.captured_pointers().is_empty());
    }

    #[test]
    fn test_key_repeat_ignored() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(key_down(Key::Enter, false));
        element.dispatch(key_down(Key::Enter, true));
        element.dispatch(key_down(Key::Enter, true));

        assert_eq!(element.waves().len(), 1);
    }

    #[test]
    fn test_non_activation_key_ignored() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(key_down(Key::Other("Escape".to_string()), false));

        assert!(element.waves().is_empty());
    }

    #[test]
    fn test_duplicate_activation_key_ignored() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_down(1, 10.0, 10.0));
        element.dispatch(pointer_down(1, 50.0, 20.0));

        assert_eq!(element.waves().len(), 1);
    }

    #[test]
    fn test_concurrent_pointers_are_independent() {
        let element = MockElement::new(120.0, 40.0);
        let enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_down(1, 10.0, 10.0));
        element.dispatch(pointer_down(2, 100.0, 30.0));
        assert_eq!(element.waves().len(), 2);

        // both entered, then release only pointer 1
        let ids: Vec<WaveId> = element.waves().iter().map(|(id, _)| *id).collect();
        for id in &ids {
            enhancement.animation_complete(*id);
        }
        element.dispatch(pointer_up(1));

        assert!(element.wave_exiting(ids[0]));
        assert!(!element.wave_exiting(ids[1]));
        enhancement.animation_complete(ids[0]);
        assert_eq!(element.waves().len(), 1);
        assert!(element.has_class(dataset::ANIMATING_CLASS));
    }

    #[test]
    fn test_fourth_activation_evicts_oldest() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_down(1, 10.0, 10.0));
        element.dispatch(pointer_down(2, 20.0, 10.0));
        element.dispatch(pointer_down(3, 30.0, 10.0));
        let first = element.waves()[0].0;
        element.dispatch(pointer_down(4, 40.0, 10.0));

        let waves = element.waves();
        assert_eq!(waves.len(), 3);
        assert!(waves.iter().all(|(id, _)| *id != first));
        // the evicted pointer's capture is released
        assert_eq!(element.captured_pointers(), vec![2, 3, 4]);
    }

    #[test]
    fn test_release_before_enter_complete_defers_exit() {
        let element = MockElement::new(120.0, 40.0);
        let enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_down(1, 10.0, 10.0));
        let id = element.waves()[0].0;
        element.dispatch(pointer_up(1));

        // released mid-enter: still mounted, not yet exiting
        assert_eq!(element.waves().len(), 1);
        assert!(!element.wave_exiting(id));

        // enter completes, exit starts immediately
        enhancement.animation_complete(id);
        assert!(element.wave_exiting(id));

        // exit completes, artifact and marker class removed
        enhancement.animation_complete(id);
        assert!(element.waves().is_empty());
        assert!(!element.has_class(dataset::ANIMATING_CLASS));
    }

    #[test]
    fn test_release_allows_immediate_restart_on_same_key() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_down(1, 10.0, 10.0));
        element.dispatch(pointer_up(1));
        // the first wave is still animating out, but the key is free
        element.dispatch(pointer_down(1, 20.0, 20.0));

        assert_eq!(element.waves().len(), 2);
    }

    #[test]
    fn test_pointer_cancel_releases_wave() {
        let element = MockElement::new(120.0, 40.0);
        let enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_down(1, 10.0, 10.0));
        let id = element.waves()[0].0;
        enhancement.animation_complete(id);

        element.dispatch(InputEvent::PointerCancel(PointerEvent {
            pointer_id: 1,
            button: PointerButton::Primary,
            client: Point::ZERO,
        }));

        assert!(element.wave_exiting(id));
        assert!(element.captured_pointers().is_empty());
    }

    #[test]
    fn test_key_up_releases_keyboard_wave() {
        let element = MockElement::new(120.0, 40.0);
        let enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(key_down(Key::Space, false));
        let id = element.waves()[0].0;
        enhancement.animation_complete(id);
        element.dispatch(key_up(Key::Space));

        assert!(element.wave_exiting(id));
    }

    #[test]
    fn test_release_without_activation_is_noop() {
        let element = MockElement::new(120.0, 40.0);
        let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_up(7));
        element.dispatch(key_up(Key::Enter));

        assert!(element.waves().is_empty());
    }

    #[test]
    fn test_destroy_removes_everything_and_is_idempotent() {
        let element = MockElement::new(120.0, 40.0);
        let enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());
        assert_eq!(element.listener_count(), 5);

        element.dispatch(pointer_down(1, 10.0, 10.0));
        element.dispatch(key_down(Key::Enter, false));
        assert_eq!(element.waves().len(), 2);

        enhancement.destroy();
        assert!(element.waves().is_empty());
        assert!(!element.has_class(dataset::ANIMATING_CLASS));
        assert_eq!(element.listener_count(), 0);
        assert!(element.captured_pointers().is_empty());

        enhancement.destroy();
        assert!(element.waves().is_empty());

        // listeners are gone; further input does nothing
        element.dispatch(pointer_down(2, 10.0, 10.0));
        assert!(element.waves().is_empty());
    }

    #[test]
    fn test_destroy_before_any_activation() {
        let element = MockElement::new(120.0, 40.0);
        let enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());
        enhancement.destroy();
        assert_eq!(element.listener_count(), 0);
    }

    #[test]
    fn test_drop_destroys() {
        let element = MockElement::new(120.0, 40.0);
        {
            let _enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());
            element.dispatch(pointer_down(1, 10.0, 10.0));
            assert_eq!(element.waves().len(), 1);
        }
        assert!(element.waves().is_empty());
        assert_eq!(element.listener_count(), 0);
    }

    #[test]
    fn test_animation_complete_after_destroy_is_noop() {
        let element = MockElement::new(120.0, 40.0);
        let enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());
        element.dispatch(pointer_down(1, 10.0, 10.0));
        let id = element.waves()[0].0;
        enhancement.destroy();
        enhancement.animation_complete(id);
        assert!(element.waves().is_empty());
    }

    #[test]
    fn test_marker_class_stays_while_any_wave_lives() {
        let element = MockElement::new(120.0, 40.0);
        let enhancement = enhance(element.clone_dyn(), EnhanceOptions::default());

        element.dispatch(pointer_down(1, 10.0, 10.0));
        element.dispatch(pointer_down(2, 50.0, 20.0));
        let ids: Vec<WaveId> = element.waves().iter().map(|(id, _)| *id).collect();
        for id in &ids {
            enhancement.animation_complete(*id);
        }

        element.dispatch(pointer_up(1));
        enhancement.animation_complete(ids[0]);
        // pointer 2 is still held
        assert!(element.has_class(dataset::ANIMATING_CLASS));

        element.dispatch(pointer_up(2));
        enhancement.animation_complete(ids[1]);
        assert!(!element.has_class(dataset::ANIMATING_CLASS));
    }
}
