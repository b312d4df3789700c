//! # lensed
//!
//! Composable lenses for reading and non-destructively updating fields
//! nested inside immutable values.
//!
//! ## Overview
//!
//! - **Lenses**: the [`optics::Lens`] trait, function-backed lenses and the
//!   `lens!` macro
//! - **Composition**: chain a lens to a part with a lens into that part
//! - **Bound lenses**: attach a lens to a root value and navigate it field by
//!   field with `root.through_lens().address().street().set(x)`
//! - **Derive**: `#[derive(Lenses)]` generates the per-field lens table and
//!   the bound wrapper for a struct
//!
//! ## Feature Flags
//!
//! - `optics`: Lenses, composition and bound lenses
//! - `derive`: The `Lenses` derive macro
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "derive")]
//! # {
//! use lensed::prelude::*;
//!
//! #[derive(Clone, PartialEq, Debug, Lenses)]
//! struct Address {
//!     street: String,
//! }
//!
//! #[derive(Clone, PartialEq, Debug, Lenses)]
//! struct Person {
//!     name: String,
//!     address: Address,
//! }
//!
//! let narf = Person {
//!     name: "Maciej Konieczny".to_string(),
//!     address: Address { street: "Sesame Street".to_string() },
//! };
//!
//! let kuba = Person::LENSES.name.set(narf.clone(), "Kuba".to_string());
//! assert_eq!(kuba.name, "Kuba");
//!
//! assert_eq!(narf.through_lens().address().street().get(), "Sesame Street");
//!
//! let moved = narf.through_lens().address().street().set("Baker Street".to_string());
//! assert_eq!(moved.address.street, "Baker Street");
//! assert_eq!(narf.address.street, "Sesame Street");
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lensed::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use crate::Lenses;
}

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use lensed_derive::Lenses;

