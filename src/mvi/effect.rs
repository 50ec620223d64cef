//! Base trait for one-shot effects in MVI architecture.

use std::fmt::Debug;

/// Marker trait for effect objects.
///
/// Effects describe side-effect-worthy events (show a toast, open a
/// detail sheet) that must not live in state: they are delivered at
/// most once, to whoever is subscribed at emission time, and are never
/// replayed to a late-joining observer.
pub trait Effect: Clone + Debug + Send + 'static {}
