//! Attribute and class names shared with the Chamfer stylesheet.

/// Component-kind marker attribute.
pub const COMPONENT_ATTR: &str = "data-ch-component";

/// Component-kind value written at attach time.
pub const COMPONENT_BUTTON: &str = "button";

/// Opt-out attribute; `"false"` suppresses the ripple entirely.
pub const RIPPLE_ATTR: &str = "data-ch-ripple";

/// Surface variant attribute read by the options adapter.
pub const VARIANT_ATTR: &str = "data-ch-variant";

/// Chamfer loading-state attribute.
pub const LOADING_ATTR: &str = "data-ch-loading";

/// Generic loading-state fallback attribute.
pub const GENERIC_LOADING_ATTR: &str = "data-loading";

/// ARIA disabled-state attribute.
pub const ARIA_DISABLED_ATTR: &str = "aria-disabled";

/// ARIA busy-state attribute.
pub const ARIA_BUSY_ATTR: &str = "aria-busy";

/// Interaction-type attribute on native push-buttons.
pub const TYPE_ATTR: &str = "type";

/// Default non-submitting interaction type.
pub const TYPE_BUTTON: &str = "button";

/// Class applied to every wave artifact.
pub const RIPPLE_CLASS: &str = "ch-ripple";

/// Class applied to a wave once its exit animation begins.
pub const RIPPLE_EXIT_CLASS: &str = "ch-ripple--exit";

/// Class applied to tinted waves on non-solid surfaces.
pub const RIPPLE_TINTED_CLASS: &str = "ch-ripple--tinted";

/// Marker class on the element while any wave is alive.
pub const ANIMATING_CLASS: &str = "ch-animating";
