//! Derive macro for lensed lens tables and bound lens wrappers.
//!
//! # Example
//!
//! ```rust,ignore
//! use lensed::Lenses;
//! use lensed::optics::{BoundLensType, Lens};
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
//! // Generated items:
//! // - Person::LENSES.name, Person::LENSES.address  (FieldLens constants)
//! // - Person::name_lens(), Person::address_lens()
//! // - PersonBoundLens<W, L> with .name() and .address()
//! // - Person::through_lens(), Person::into_through_lens()
//!
//! let person = Person {
//!     name: "Maciej Konieczny".to_string(),
//!     address: Address { street: "Sesame Street".to_string() },
//! };
//!
//! let moved = person.through_lens().address().street().set("Baker Street".to_string());
//! assert_eq!(moved.address.street, "Baker Street");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating lenses and a bound lens wrapper for a struct.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct) with at least
///   one field
/// - The struct must implement `Clone`: composing through it clones it, and
///   `through_lens` starts from a clone
/// - Navigating through the struct needs it to be `'static` (no borrowed
///   fields); the lens table works for any struct
/// - No field may be named `new`, `from_storage`, `storage`, `into_storage`,
///   `focus`, `get`, `set` or `modify`, the methods of `BoundLensType`
///
/// # Generated Code
///
/// For a struct `Person` with fields `name: String` and `address: Address`:
///
/// ```rust,ignore
/// pub struct PersonLenses {
///     pub name: FieldLens<Person, String>,
///     pub address: FieldLens<Person, Address>,
/// }
///
/// impl Person {
///     pub const LENSES: PersonLenses = /* ... */;
///     pub fn name_lens() -> FieldLens<Person, String> { /* ... */ }
///     pub fn address_lens() -> FieldLens<Person, Address> { /* ... */ }
///     pub fn through_lens(&self) -> PersonBoundLens<Person, IdentityLens<Person>> { /* ... */ }
///     pub fn into_through_lens(self) -> PersonBoundLens<Person, IdentityLens<Person>> { /* ... */ }
/// }
///
/// pub struct PersonBoundLens<LensWhole, LensFocus> { /* ... */ }
///
/// impl<LensWhole, LensFocus> PersonBoundLens<LensWhole, LensFocus> {
///     pub fn name(self) -> <String as Bindable>::Bound<LensWhole, /* ... */>;
///     pub fn address(self) -> <Address as Bindable>::Bound<LensWhole, /* ... */>;
/// }
///
/// impl Bindable for Person { /* Bound<W, L> = PersonBoundLens<W, L> */ }
/// ```
///
/// # Leaf Fields
///
/// A field navigates into `<FieldType as Bindable>::Bound`. `lensed`
/// implements `Bindable` for primitives, `String` and the standard
/// collections; other `#[derive(Lenses)]` structs implement it too. For a
/// foreign type without an implementation, mark the field `#[lens(leaf)]`
/// and it is reached through the generic `BoundLens`:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Session {
///     #[lens(leaf)]
///     started_at: std::time::Instant,
/// }
/// ```
///
/// # Generics
///
/// Generic structs are supported, including defaulted parameters. Bound
/// navigation needs the instantiated struct to be `'static`, and generic
/// fields need a `Bindable` implementation for the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let container = Container { value: 42 };
/// assert_eq!(*container.through_lens().value().get(), 42);
/// ```
#[proc_macro_derive(Lenses, attributes(lens))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
