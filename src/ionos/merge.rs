//! Merge helpers for read-modify-write (GET then PUT) updates
//!
//! A PUT replaces every property, so each field of the body is the flag
//! value when the user set it, otherwise the current server value, and the
//! type's default only when the server did not report the property either.

/// Resolve one property for a PUT body
pub fn pick<T: Clone + Default>(flag: &Option<T>, current: &Option<T>) -> Option<T> {
    Some(
        flag.clone()
            .or_else(|| current.clone())
            .unwrap_or_default(),
    )
}
