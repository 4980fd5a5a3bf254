//! Attach-time configuration.
//!
//! ## Usage
//!
//! Build an [`EnhanceOptions`] explicitly at the call site, or derive one
//! from string attributes with [`EnhanceOptions::from_element`] in hosts that
//! configure components through `data-*` attributes.

use std::str::FromStr;

use thiserror::Error;

use crate::dataset;
use crate::element::InteractiveElement;

/// Visual emphasis of the surface a ripple plays on.
///
/// Solid surfaces use the default translucent wave; the lighter variants tint
/// the wave so it stays visible against a pale background.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SurfaceVariant {
    /// Solid fill.
    #[default]
    Solid,
    /// Soft tinted fill.
    Soft,
    /// Flat fill without elevation.
    Flat,
    /// Outlined, transparent fill.
    Outline,
    /// Ghost, fully transparent until interacted with.
    Ghost,
}

impl SurfaceVariant {
    /// Extra class applied to waves on this surface, if any.
    pub fn wave_class(self) -> Option<&'static str> {
        match self {
            SurfaceVariant::Solid => None,
            SurfaceVariant::Soft
            | SurfaceVariant::Flat
            | SurfaceVariant::Outline
            | SurfaceVariant::Ghost => Some(dataset::RIPPLE_TINTED_CLASS),
        }
    }
}

/// Error produced when parsing an unknown surface variant name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized surface variant `{0}`")]
pub struct SurfaceVariantError(pub String);

impl FromStr for SurfaceVariant {
    type Err = SurfaceVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(SurfaceVariant::Solid),
            "soft" => Ok(SurfaceVariant::Soft),
            "flat" => Ok(SurfaceVariant::Flat),
            "outline" => Ok(SurfaceVariant::Outline),
            "ghost" => Ok(SurfaceVariant::Ghost),
            other => Err(SurfaceVariantError(other.to_string())),
        }
    }
}

/// Options for [`enhance`](crate::enhance).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EnhanceOptions {
    /// Whether waves are spawned at all.
    pub ripple: bool,
    /// Surface variant the waves play on.
    pub variant: SurfaceVariant,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            ripple: true,
            variant: SurfaceVariant::default(),
        }
    }
}

impl EnhanceOptions {
    /// Creates the default options (ripple enabled, solid surface).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether waves are spawned.
    pub fn ripple(mut self, ripple: bool) -> Self {
        self.ripple = ripple;
        self
    }

    /// Sets the surface variant.
    pub fn variant(mut self, variant: SurfaceVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Derives options from the element's `data-ch-*` attributes.
    ///
    /// `data-ch-ripple="false"` disables the ripple; `data-ch-variant` names
    /// the surface variant. Unknown variant names fall back to the default.
    pub fn from_element(element: &dyn InteractiveElement) -> Self {
        let ripple = element
            .attribute(dataset::RIPPLE_ATTR)
            .map(|value| value != "false")
            .unwrap_or(true);

        let variant = match element.attribute(dataset::VARIANT_ATTR) {
            Some(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to default surface variant");
                SurfaceVariant::default()
            }),
            None => SurfaceVariant::default(),
        };

        Self { ripple, variant }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockElement;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("solid".parse(), Ok(SurfaceVariant::Solid));
        assert_eq!("ghost".parse(), Ok(SurfaceVariant::Ghost));
        assert_eq!(
            "neon".parse::<SurfaceVariant>(),
            Err(SurfaceVariantError("neon".to_string()))
        );
    }

    #[test]
    fn test_wave_class_per_variant() {
        assert_eq!(SurfaceVariant::Solid.wave_class(), None);
        assert!(SurfaceVariant::Outline.wave_class().is_some());
    }

    #[test]
    fn test_from_element_defaults() {
        let element = MockElement::new(120.0, 40.0);
        let options = EnhanceOptions::from_element(&*element);
        assert!(options.ripple);
        assert_eq!(options.variant, SurfaceVariant::Solid);
    }

    #[test]
    fn test_from_element_opt_out_and_variant() {
        let element = MockElement::new(120.0, 40.0);
        element.set_attribute(dataset::RIPPLE_ATTR, "false");
        element.set_attribute(dataset::VARIANT_ATTR, "outline");
        let options = EnhanceOptions::from_element(&*element);
        assert!(!options.ripple);
        assert_eq!(options.variant, SurfaceVariant::Outline);
    }

    #[test]
    fn test_from_element_unknown_variant_falls_back() {
        let element = MockElement::new(120.0, 40.0);
        element.set_attribute(dataset::VARIANT_ATTR, "neon");
        let options = EnhanceOptions::from_element(&*element);
        assert_eq!(options.variant, SurfaceVariant::Solid);
    }
}
