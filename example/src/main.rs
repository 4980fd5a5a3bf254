//! Scripted walkthrough of the ripple engine against a simulated element.
//!
//! Run with `RUST_LOG=chamfer_behavior=trace` to see the engine's own
//! tracing output interleaved with the script.

use chamfer_behavior::testing::MockElement;
use chamfer_behavior::{
    EnhanceOptions, InputEvent, InteractiveElement, Key, KeyEvent, Point, PointerButton,
    PointerEvent, SurfaceVariant, dataset, enhance,
};
use tracing_subscriber::EnvFilter;

fn pointer_down(pointer_id: i64, x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown(PointerEvent {
        pointer_id,
        button: PointerButton::Primary,
        client: Point::new(x, y),
    })
}

fn pointer_up(pointer_id: i64) -> InputEvent {
    InputEvent::PointerUp(PointerEvent {
        pointer_id,
        button: PointerButton::Primary,
        client: Point::ZERO,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let element = MockElement::new(120.0, 40.0);
    let enhancement = enhance(
        element.clone_dyn(),
        EnhanceOptions::new().variant(SurfaceVariant::Outline),
    );
    tracing::info!(
        component = ?element.attribute(dataset::COMPONENT_ATTR),
        listeners = element.listener_count(),
        "attached"
    );

    // press at (10, 10): the wave must cover the far corner at (120, 40)
    element.dispatch(pointer_down(1, 10.0, 10.0));
    let (id, artifact) = element.waves()[0].clone();
    tracing::info!(
        left = artifact.left,
        top = artifact.top,
        diameter = artifact.diameter,
        classes = ?artifact.classes,
        "wave mounted"
    );

    // release before the enter animation ends: the exit is deferred
    element.dispatch(pointer_up(1));
    tracing::info!(exiting = element.wave_exiting(id), "released mid-enter");

    // enter completes, exit starts immediately, then finishes
    enhancement.animation_complete(id);
    tracing::info!(exiting = element.wave_exiting(id), "enter complete");
    enhancement.animation_complete(id);
    tracing::info!(
        waves = element.waves().len(),
        animating = element.has_class(dataset::ANIMATING_CLASS),
        "exit complete"
    );

    // a keyboard activation spawns a centered wave
    element.dispatch(InputEvent::KeyDown(KeyEvent {
        key: Key::Enter,
        repeat: false,
    }));
    let (_, keyboard_wave) = element.waves()[0].clone();
    tracing::info!(
        left = keyboard_wave.left,
        top = keyboard_wave.top,
        "keyboard wave mounted"
    );

    enhancement.destroy();
    tracing::info!(
        waves = element.waves().len(),
        listeners = element.listener_count(),
        "destroyed"
    );
}
