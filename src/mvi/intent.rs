//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (tap on a bar, pinch-to-zoom)
/// - System events (data loaded, load failed)
/// - Animation lifecycle notifications
///
/// Intents are inert data: created at dispatch time, never mutated,
/// consumed exactly once by the reducer.
pub trait Intent: Debug + Send + 'static {}
