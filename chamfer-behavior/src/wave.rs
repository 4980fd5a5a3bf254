//! Per-wave lifecycle state.

use smallvec::SmallVec;

use crate::dataset;
use crate::element::{WaveArtifact, WaveId};
use crate::geometry::Point;
use crate::options::SurfaceVariant;

/// Identifies the input source that produced a wave.
///
/// At most one wave is active per key; duplicate activations on the same key
/// are ignored while one is outstanding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ActivationKey {
    /// A pointer contact, by host pointer id.
    Pointer(i64),
    /// The keyboard sentinel shared by all key activations.
    Keyboard,
}

/// One press's visual artifact and its lifecycle flags.
///
/// The `entered` and `exiting` flags are kept separate on purpose: release
/// and animation-completion arrive in either order, and `pending_exit`
/// bridges a release that lands while the enter animation is still playing.
#[derive(Debug)]
pub(crate) struct Wave {
    pub id: WaveId,
    pub key: ActivationKey,
    pub origin: Point,
    pub radius: f32,
    pub entered: bool,
    pub exiting: bool,
    pub pending_exit: bool,
}

impl Wave {
    pub fn new(id: WaveId, key: ActivationKey, origin: Point, radius: f32) -> Self {
        Self {
            id,
            key,
            origin,
            radius,
            entered: false,
            exiting: false,
            pending_exit: false,
        }
    }

    /// Mount-time geometry and classes for this wave.
    pub fn artifact(&self, variant: SurfaceVariant) -> WaveArtifact {
        let mut classes: SmallVec<[&'static str; 2]> = SmallVec::new();
        classes.push(dataset::RIPPLE_CLASS);
        if let Some(class) = variant.wave_class() {
            classes.push(class);
        }
        WaveArtifact {
            left: self.origin.x - self.radius,
            top: self.origin.y - self.radius,
            diameter: self.radius * 2.0,
            classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_centers_on_origin() {
        let wave = Wave::new(
            WaveId(0),
            ActivationKey::Keyboard,
            Point::new(10.0, 10.0),
            114.0,
        );
        let artifact = wave.artifact(SurfaceVariant::Solid);
        assert_eq!(artifact.left, -104.0);
        assert_eq!(artifact.top, -104.0);
        assert_eq!(artifact.diameter, 228.0);
        assert_eq!(artifact.classes.as_slice(), [dataset::RIPPLE_CLASS]);
    }

    #[test]
    fn test_artifact_tinted_on_ghost_surface() {
        let wave = Wave::new(WaveId(1), ActivationKey::Pointer(4), Point::ZERO, 50.0);
        let artifact = wave.artifact(SurfaceVariant::Ghost);
        assert_eq!(
            artifact.classes.as_slice(),
            [dataset::RIPPLE_CLASS, dataset::RIPPLE_TINTED_CLASS]
        );
    }
}
