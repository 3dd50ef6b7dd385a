//! Base trait for actions dispatched into the stores.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User input (typing into a field, clicking a button)
/// - Backend completions (settled submissions, reported cart sizes)
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {}
