//! Lenses for immutable data manipulation.
//!
//! A lens is a composable accessor for one field of an immutable value:
//! `get` reads the field, `set` returns a new value with the field replaced.
//! Composing lenses focuses on deeply nested fields without hand-written
//! copy-and-update code at each level.
//!
//! # Available Pieces
//!
//! - [`Lens`]: the get/set trait, with [`FunctionLens`] and [`FieldLens`]
//!   as closure and function-pointer backed implementations
//! - [`ComposedLens`]: two lenses chained into one
//! - [`IdentityLens`]: the lens from a type to itself
//! - [`BoundLens`] and [`BoundLensType`]: a lens paired with a root value,
//!   for fluent `root.through_lens().a().b().set(x)` chains
//!
//! # Example
//!
//! ```
//! use lensed::optics::Lens;
//! use lensed::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! // Create lenses using the macro
//! let address_lens = lens!(Person, address);
//! let street_lens = lens!(Address, street);
//!
//! // Compose lenses to focus on nested fields
//! let person_street = address_lens.compose(street_lens);
//!
//! let person = Person {
//!     name: "Maciej Konieczny".to_string(),
//!     address: Address { street: "Sesame Street".to_string() },
//! };
//!
//! // Get nested field
//! assert_eq!(*person_street.get(&person), "Sesame Street");
//!
//! // Set nested field (returns new structure)
//! let updated = person_street.set(person, "Baker Street".to_string());
//! assert_eq!(updated.address.street, "Baker Street");
//! assert_eq!(updated.name, "Maciej Konieczny"); // Other fields unchanged
//! ```
//!
//! # Lens Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source).clone()) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Errors
//!
//! Nothing in this module fails at runtime: every operation is total and
//! returns a plain value, never a `Result`, and never panics. A getter and
//! setter that break the laws are a bug in the caller, caught by law-based
//! tests rather than at runtime.

mod bound;
mod identity;
mod lens;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FieldLens;
pub use lens::FunctionLens;
pub use lens::Lens;

pub use identity::IdentityLens;
pub use identity::identity_lens;

// Re-export bound lens types and traits
pub use bound::Bindable;
pub use bound::BoundLens;
pub use bound::BoundLensStorage;
pub use bound::BoundLensType;
pub use bound::bind;

static_assertions::assert_impl_all!(IdentityLens<String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(FieldLens<String, String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(
    BoundLens<String, String, IdentityLens<String>>: Send, Sync, Clone
);
