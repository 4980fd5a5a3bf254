//! Caller-level bulk attach/detach over many elements.
//!
//! ## Usage
//!
//! Keep one [`EnhancementRegistry`] per document-like scope. Call
//! [`enhance_all`](EnhancementRegistry::enhance_all) after content is added,
//! [`cleanup_missing`](EnhancementRegistry::cleanup_missing) after content is
//! removed, and [`destroy_all`](EnhancementRegistry::destroy_all) when the
//! scope is torn down. This layer sits on top of the engine; the engine
//! itself never needs it.

use std::sync::Arc;

use thiserror::Error;

use crate::element::InteractiveElement;
use crate::options::EnhanceOptions;
use crate::ripple::{Enhancement, enhance};

/// Offers the registry the elements of a document-like scope.
pub trait ElementScanner {
    /// Elements currently eligible for enhancement.
    fn interactive_elements(&self) -> Vec<Arc<dyn InteractiveElement>>;

    /// Whether `element` is still attached to the scope.
    fn contains(&self, element: &Arc<dyn InteractiveElement>) -> bool;
}

/// Error returned when attaching to an element that is already registered.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("element already has an enhancement attached")]
pub struct AlreadyEnhanced;

struct RegistryEntry {
    element: Arc<dyn InteractiveElement>,
    enhancement: Enhancement,
}

/// Registry mapping elements to their live enhancements.
///
/// Element identity is pointer identity of the shared handle.
#[derive(Default)]
pub struct EnhancementRegistry {
    entries: Vec<RegistryEntry>,
}

impl EnhancementRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live enhancements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no enhancements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, element: &Arc<dyn InteractiveElement>) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| Arc::ptr_eq(&entry.element, element))
    }

    /// Attaches a single element with explicit options.
    pub fn attach(
        &mut self,
        element: Arc<dyn InteractiveElement>,
        options: EnhanceOptions,
    ) -> Result<(), AlreadyEnhanced> {
        if self.position(&element).is_some() {
            return Err(AlreadyEnhanced);
        }
        let enhancement = enhance(Arc::clone(&element), options);
        self.entries.push(RegistryEntry {
            element,
            enhancement,
        });
        Ok(())
    }

    /// Enhances every element the scanner offers, deriving options from each
    /// element's attributes. Already-registered elements and elements opting
    /// out of the ripple are skipped.
    pub fn enhance_all(&mut self, scanner: &dyn ElementScanner) {
        for element in scanner.interactive_elements() {
            if self.position(&element).is_some() {
                continue;
            }
            let options = EnhanceOptions::from_element(&*element);
            if !options.ripple {
                continue;
            }
            let enhancement = enhance(Arc::clone(&element), options);
            self.entries.push(RegistryEntry {
                element,
                enhancement,
            });
        }
        tracing::debug!(count = self.entries.len(), "registry enhanced elements");
    }

    /// Destroys enhancements whose element left the scope.
    pub fn cleanup_missing(&mut self, scanner: &dyn ElementScanner) {
        self.entries.retain(|entry| {
            if scanner.contains(&entry.element) {
                true
            } else {
                entry.enhancement.destroy();
                false
            }
        });
    }

    /// Destroys every enhancement and empties the registry.
    pub fn destroy_all(&mut self) {
        for entry in self.entries.drain(..) {
            entry.enhancement.destroy();
        }
    }
}
