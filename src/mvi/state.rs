//! Base trait for chart view state in MVI architecture.

/// Marker trait for view state objects.
///
/// States should be:
/// - Immutable (Clone to create new states; observers holding an older
///   snapshot never see it change underneath them)
/// - Self-contained (all data needed to render the chart)
/// - Comparable (PartialEq for detecting changes)
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
