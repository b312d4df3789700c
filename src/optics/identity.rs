//! The identity lens.
//!
//! `IdentityLens<T>` focuses on the whole value: `get` returns its input and
//! `set` discards the old value in favour of the new one. It is zero-sized,
//! so building one per call costs nothing; every bound lens chain starts
//! from one.

use std::marker::PhantomData;

use super::Lens;

/// A lens from a type to itself.
///
/// # Example
///
/// ```
/// use lensed::optics::{identity_lens, Lens};
///
/// let lens = identity_lens::<String>();
/// assert_eq!(lens.get(&"narf".to_string()), "narf");
/// assert_eq!(lens.set("old".to_string(), "new".to_string()), "new");
/// ```
pub struct IdentityLens<T> {
    _marker: PhantomData<T>,
}

impl<T> IdentityLens<T> {
    /// Creates the identity lens for `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Lens<T, T> for IdentityLens<T> {
    fn get<'a>(&self, source: &'a T) -> &'a T {
        source
    }

    fn set(&self, _source: T, value: T) -> T {
        value
    }
}

impl<T> Default for IdentityLens<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IdentityLens<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IdentityLens<T> {}

impl<T> std::fmt::Debug for IdentityLens<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("IdentityLens")
    }
}

/// Creates an identity lens for `T`.
#[must_use]
pub const fn identity_lens<T>() -> IdentityLens<T> {
    IdentityLens::new()
}
