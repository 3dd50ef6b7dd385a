//! Base trait for store state snapshots.

/// Marker trait for store state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data the view needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
