//! Ripple interaction engine for the Chamfer design system.
//!
//! # Usage
//!
//! Implement [`InteractiveElement`] over the host's element type, then attach
//! the behavior with [`enhance`]:
//!
//! ```
//! use chamfer_behavior::{EnhanceOptions, SurfaceVariant};
//!
//! let options = EnhanceOptions::new().variant(SurfaceVariant::Outline);
//! # let _ = options;
//! ```
//!
//! ```ignore
//! let enhancement = enhance(element, options);
//! // the host delivers pointer/keyboard events to the registered listeners
//! // and reports animation completion per wave:
//! enhancement.animation_complete(wave_id);
//! // on unmount:
//! enhancement.destroy();
//! ```
//!
//! The `testing` feature exposes `testing::MockElement`, an in-memory host
//! used by this crate's own tests and the demo binary.
//!
//! The engine is a best-effort visual affordance: every suppressed condition
//! (disabled, loading, reduced motion, duplicate activation) is a silent
//! no-op, and the only hard contract is that [`Enhancement::destroy`] leaves
//! no listeners or artifacts behind.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod dataset;
pub mod element;
pub mod events;
pub mod geometry;
pub mod options;
pub mod registry;
pub mod ripple;
mod wave;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use element::{InteractiveElement, WaveArtifact, WaveId};
pub use events::{
    EventCallback, EventKind, InputEvent, Key, KeyEvent, ListenerId, PointerButton, PointerEvent,
};
pub use geometry::{Point, Rect};
pub use options::{EnhanceOptions, SurfaceVariant, SurfaceVariantError};
pub use registry::{AlreadyEnhanced, ElementScanner, EnhancementRegistry};
pub use ripple::{Enhancement, MAX_ACTIVE_WAVES, enhance};
pub use wave::ActivationKey;
