//! The lens primitive and lens composition.
//!
//! A `Lens<S, A>` pairs a borrowing read of an `A` inside an `S` with a
//! rebuilding write that returns a new `S`. Writes never mutate a value the
//! caller still holds: `set` takes the whole by value and hands back the
//! replacement.
//!
//! # Laws
//!
//! Lenses built here, and every composition of them, satisfy:
//!
//! 1. **PutGet**: `lens.get(&lens.set(whole, part)) == &part`
//! 2. **GetPut**: `lens.set(whole.clone(), lens.get(&whole).clone()) == whole`
//! 3. **PutPut**: `lens.set(lens.set(whole, first), second) == lens.set(whole, second)`
//!
//! Hand-written getter/setter pairs are taken on trust. A pair that breaks
//! the laws still never panics; it only returns inconsistent wholes.
//!
//! # Examples
//!
//! ```
//! use lensed::lens;
//! use lensed::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let narf = Person {
//!     name: "Maciej Konieczny".to_string(),
//!     address: Address { street: "Sesame Street".to_string() },
//! };
//!
//! let street = lens!(Person, address).compose(lens!(Address, street));
//! assert_eq!(street.get(&narf), "Sesame Street");
//!
//! let moved = street.set(narf.clone(), "Baker Street".to_string());
//! assert_eq!(moved.address.street, "Baker Street");
//! assert_eq!(moved.name, narf.name);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Read and non-destructive update access to one `Part` of a `Whole`.
pub trait Lens<Whole, Part> {
    /// Borrows the part out of `whole`.
    fn get<'a>(&self, whole: &'a Whole) -> &'a Part;

    /// Returns `whole` with the part replaced by `part`.
    fn set(&self, whole: Whole, part: Part) -> Whole;

    /// Replaces the part with `function` applied to an owned copy of it.
    ///
    /// ```
    /// use lensed::lens;
    /// use lensed::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Counter { hits: u32 }
    ///
    /// let counter = lens!(Counter, hits).modify(Counter { hits: 1 }, |hits| hits + 1);
    /// assert_eq!(counter, Counter { hits: 2 });
    /// ```
    fn modify<F>(&self, whole: Whole, function: F) -> Whole
    where
        F: FnOnce(Part) -> Part,
        Part: Clone,
    {
        let part = self.get(&whole).clone();
        self.set(whole, function(part))
    }

    /// Replaces the part with `function` applied to a borrow of it.
    ///
    /// Unlike [`Lens::modify`] this needs no `Clone` on the part.
    fn modify_ref<F>(&self, whole: Whole, function: F) -> Whole
    where
        F: FnOnce(&Part) -> Part,
    {
        let part = function(self.get(&whole));
        self.set(whole, part)
    }

    /// Chains `inner`, a lens into the part, behind this lens.
    ///
    /// The result reads `inner.get(self.get(whole))`. Writing through it
    /// always runs three steps in this order:
    ///
    /// 1. `self.get` the current part and clone it,
    /// 2. `inner.set` the new sub-part into that clone,
    /// 3. `self.set` the rebuilt part back into the whole.
    ///
    /// Neither lens is called until the composed lens is used. The part
    /// type must be `'static` so the borrow handed from `self` to `inner`
    /// only depends on the whole.
    ///
    /// ```
    /// use lensed::lens;
    /// use lensed::optics::{identity_lens, Lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x = identity_lens::<Point>().compose(lens!(Point, x));
    /// assert_eq!(x.set(Point { x: 1, y: 2 }, 5), Point { x: 5, y: 2 });
    /// ```
    fn compose<Sub, Inner>(self, inner: Inner) -> ComposedLens<Self, Inner, Part>
    where
        Self: Sized,
        Inner: Lens<Part, Sub>,
    {
        ComposedLens::new(self, inner)
    }
}

/// A lens made of a getter and a setter.
///
/// Any pair of closures works; see [`FieldLens`] for the function-pointer
/// form used in `const` lens tables.
///
/// ```
/// use lensed::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x = FunctionLens::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
/// assert_eq!(x.set(Point { x: 1, y: 2 }, 10), Point { x: 10, y: 2 });
/// ```
pub struct FunctionLens<Whole, Part, Getter, Setter> {
    getter: Getter,
    setter: Setter,
    _focus: PhantomData<(Whole, Part)>,
}

/// A [`FunctionLens`] over plain function pointers.
///
/// Non-capturing closures coerce to `fn` pointers, so a `FieldLens` can be a
/// `const` and can be named as a struct field type. The lens tables from
/// `#[derive(Lenses)]` hold one `FieldLens` per field.
///
/// ```
/// use lensed::optics::{FieldLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Address { street: String }
///
/// const STREET: FieldLens<Address, String> = FieldLens::<Address, String>::new(
///     |address: &Address| &address.street,
///     |address: Address, street: String| Address { street, ..address },
/// );
///
/// let address = Address { street: "Sesame Street".to_string() };
/// assert_eq!(STREET.get(&address), "Sesame Street");
/// ```
pub type FieldLens<Whole, Part> =
    FunctionLens<Whole, Part, fn(&Whole) -> &Part, fn(Whole, Part) -> Whole>;

impl<Whole, Part, Getter, Setter> FunctionLens<Whole, Part, Getter, Setter>
where
    Getter: Fn(&Whole) -> &Part,
    Setter: Fn(Whole, Part) -> Whole,
{
    /// Builds a lens from `getter` and `setter`.
    #[must_use]
    pub const fn new(getter: Getter, setter: Setter) -> Self {
        Self {
            getter,
            setter,
            _focus: PhantomData,
        }
    }
}

impl<Whole, Part, Getter, Setter> Lens<Whole, Part> for FunctionLens<Whole, Part, Getter, Setter>
where
    Getter: Fn(&Whole) -> &Part,
    Setter: Fn(Whole, Part) -> Whole,
{
    fn get<'a>(&self, whole: &'a Whole) -> &'a Part {
        (self.getter)(whole)
    }

    fn set(&self, whole: Whole, part: Part) -> Whole {
        (self.setter)(whole, part)
    }
}

impl<Whole, Part, Getter: Clone, Setter: Clone> Clone
    for FunctionLens<Whole, Part, Getter, Setter>
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _focus: PhantomData,
        }
    }
}

impl<Whole, Part, Getter: Copy, Setter: Copy> Copy for FunctionLens<Whole, Part, Getter, Setter> {}

impl<Whole, Part, Getter, Setter> fmt::Debug for FunctionLens<Whole, Part, Getter, Setter> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// `outer` followed by `inner`, built by [`Lens::compose`].
///
/// `Mid` is the part of `outer` and the whole of `inner`.
pub struct ComposedLens<Outer, Inner, Mid> {
    outer: Outer,
    inner: Inner,
    _mid: PhantomData<Mid>,
}

impl<Outer, Inner, Mid> ComposedLens<Outer, Inner, Mid> {
    /// Chains `inner` behind `outer`.
    #[must_use]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self {
            outer,
            inner,
            _mid: PhantomData,
        }
    }
}

impl<Whole, Mid, Part, Outer, Inner> Lens<Whole, Part> for ComposedLens<Outer, Inner, Mid>
where
    Outer: Lens<Whole, Mid>,
    Inner: Lens<Mid, Part>,
    Mid: Clone + 'static,
{
    fn get<'a>(&self, whole: &'a Whole) -> &'a Part {
        self.inner.get(self.outer.get(whole))
    }

    fn set(&self, whole: Whole, part: Part) -> Whole {
        let mid = self.outer.get(&whole).clone();
        let mid = self.inner.set(mid, part);
        self.outer.set(whole, mid)
    }
}

impl<Outer: Clone, Inner: Clone, Mid> Clone for ComposedLens<Outer, Inner, Mid> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<Outer: Copy, Inner: Copy, Mid> Copy for ComposedLens<Outer, Inner, Mid> {}

impl<Outer: fmt::Debug, Inner: fmt::Debug, Mid> fmt::Debug for ComposedLens<Outer, Inner, Mid> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Builds a [`FunctionLens`] for a field, or a dotted path of fields.
///
/// The whole may be any type expression: a plain name, a generic type or a
/// module path. A dotted path reaches through nested fields in one lens,
/// without cloning the intermediate records.
///
/// ```
/// use lensed::lens;
/// use lensed::optics::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Address { street: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, address: Address }
///
/// let name = lens!(Person, name);
/// let street = lens!(Person, address.street);
///
/// let narf = Person {
///     name: "Maciej Konieczny".to_string(),
///     address: Address { street: "Sesame Street".to_string() },
/// };
/// assert_eq!(name.get(&narf), "Maciej Konieczny");
/// assert_eq!(street.set(narf, "Baker Street".to_string()).address.street, "Baker Street");
/// ```
#[macro_export]
macro_rules! lens {
    ($whole:ty, $($field:ident).+) => {
        $crate::optics::FunctionLens::new(
            |whole: &$whole| &whole.$($field).+,
            |mut whole: $whole, part| {
                whole.$($field).+ = part;
                whole
            },
        )
    };
}
