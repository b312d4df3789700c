//! Bound lenses: a lens paired with the root value it is applied to.
//!
//! A bound lens lets a call site walk a nested structure field by field
//! without passing the root value around:
//!
//! ```text
//! person.through_lens().address().street().set(new_street)
//! ```
//!
//! Every step moves the root instance into a new [`BoundLensStorage`] whose
//! lens is the previous lens composed with the lens for the next field.
//! `get` and `set` then run the accumulated lens against the root. `set`
//! returns a new root; the chain itself is consumed, so further navigation
//! starts again from the returned value.
//!
//! # Pieces
//!
//! - [`BoundLensStorage`]: root instance plus accumulated lens.
//! - [`BoundLensType`]: the capability shared by every bound wrapper
//!   (`get`, `set`, `modify`, root and step construction).
//! - [`BoundLens`]: the generic wrapper, used for leaf fields.
//! - [`Bindable`]: maps a part type to its wrapper. `#[derive(Lenses)]`
//!   implements it for records with a generated wrapper that has one method
//!   per field; leaf types map to [`BoundLens`].
//! - [`bind`]: roots a chain at a value with the identity lens.
//!
//! # Example
//!
//! ```
//! use lensed::optics::{identity_lens, BoundLens, BoundLensType, FieldLens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String }
//!
//! const STREET: FieldLens<Address, String> = FieldLens::<Address, String>::new(
//!     |address: &Address| &address.street,
//!     |address: Address, street: String| Address { street, ..address },
//! );
//!
//! let address = Address { street: "Sesame Street".to_string() };
//! let root: BoundLens<Address, Address, _> = BoundLens::new(address, identity_lens());
//! let street: BoundLens<Address, String, _> = root.focus(STREET);
//!
//! assert_eq!(street.get(), "Sesame Street");
//! let moved = street.set("Baker Street".to_string());
//! assert_eq!(moved, Address { street: "Baker Street".to_string() });
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use super::{ComposedLens, IdentityLens, Lens};

/// A root instance together with the lens locating the current part in it.
///
/// # Type Parameters
///
/// - `W`: The root (whole) type
/// - `P`: The part type the lens focuses on
/// - `L`: The accumulated lens, `L: Lens<W, P>`
pub struct BoundLensStorage<W, P, L> {
    instance: W,
    lens: L,
    _marker: PhantomData<P>,
}

impl<W, P, L> BoundLensStorage<W, P, L> {
    /// Pairs a root instance with a lens.
    #[must_use]
    pub const fn new(instance: W, lens: L) -> Self {
        Self {
            instance,
            lens,
            _marker: PhantomData,
        }
    }

    /// Returns the root instance.
    pub const fn instance(&self) -> &W {
        &self.instance
    }

    /// Returns the accumulated lens.
    pub const fn lens(&self) -> &L {
        &self.lens
    }

    /// Splits the storage into its root instance and lens.
    pub fn into_parts(self) -> (W, L) {
        (self.instance, self.lens)
    }
}

impl<W, P, L> BoundLensStorage<W, P, L>
where
    L: Lens<W, P>,
{
    /// Reads the focused part out of the root instance.
    pub fn get(&self) -> &P {
        self.lens.get(&self.instance)
    }

    /// Replaces the focused part, returning the new root.
    pub fn set(self, part: P) -> W {
        self.lens.set(self.instance, part)
    }

    /// Extends the accumulated lens by one step, keeping the root instance.
    pub fn compose<Q, M>(self, sublens: M) -> BoundLensStorage<W, Q, ComposedLens<L, M, P>>
    where
        M: Lens<P, Q>,
        P: Clone,
    {
        BoundLensStorage::new(self.instance, ComposedLens::new(self.lens, sublens))
    }
}

impl<W: Clone, P, L: Clone> Clone for BoundLensStorage<W, P, L> {
    fn clone(&self) -> Self {
        Self {
            instance: self.instance.clone(),
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

impl<W: std::fmt::Debug, P, L: std::fmt::Debug> std::fmt::Debug for BoundLensStorage<W, P, L> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BoundLensStorage")
            .field("instance", &self.instance)
            .field("lens", &self.lens)
            .finish()
    }
}

/// The capability every bound lens wrapper exposes.
///
/// Implementors only say how to wrap and unwrap a [`BoundLensStorage`];
/// reading, writing and navigation come from the provided methods.
pub trait BoundLensType: Sized {
    /// The root type the chain was started from.
    type Whole;
    /// The type currently in focus.
    type Part;
    /// The accumulated lens from `Whole` to `Part`.
    type Focus: Lens<Self::Whole, Self::Part>;

    /// Wraps an existing storage.
    fn from_storage(storage: BoundLensStorage<Self::Whole, Self::Part, Self::Focus>) -> Self;

    /// Borrows the wrapped storage.
    fn storage(&self) -> &BoundLensStorage<Self::Whole, Self::Part, Self::Focus>;

    /// Unwraps the storage.
    fn into_storage(self) -> BoundLensStorage<Self::Whole, Self::Part, Self::Focus>;

    /// Root construction: starts a chain at `instance`, focused through `lens`.
    fn new(instance: Self::Whole, lens: Self::Focus) -> Self {
        Self::from_storage(BoundLensStorage::new(instance, lens))
    }

    /// Step construction: focuses one level deeper through `sublens`.
    ///
    /// The child keeps this chain's root instance and composes this chain's
    /// lens with `sublens`.
    fn focus<Child, Sub>(self, sublens: Sub) -> Child
    where
        Self::Part: Clone,
        Sub: Lens<Self::Part, Child::Part>,
        Child: BoundLensType<
                Whole = Self::Whole,
                Focus = ComposedLens<Self::Focus, Sub, Self::Part>,
            >,
    {
        Child::from_storage(self.into_storage().compose(sublens))
    }

    /// Reads the focused part of the root instance.
    fn get(&self) -> &Self::Part {
        self.storage().get()
    }

    /// Replaces the focused part and returns the new root value.
    fn set(self, part: Self::Part) -> Self::Whole {
        self.into_storage().set(part)
    }

    /// Applies `function` to the focused part and returns the new root value.
    fn modify<F>(self, function: F) -> Self::Whole
    where
        F: FnOnce(Self::Part) -> Self::Part,
        Self::Part: Clone,
    {
        let current = self.get().clone();
        self.set(function(current))
    }
}

/// The generic bound lens wrapper.
///
/// Leaf fields (strings, numbers, collections) are reached through this
/// type; records with `#[derive(Lenses)]` get their own wrapper with one
/// method per field instead.
pub struct BoundLens<W, P, L> {
    storage: BoundLensStorage<W, P, L>,
}

impl<W, P, L> BoundLensType for BoundLens<W, P, L>
where
    L: Lens<W, P>,
{
    type Whole = W;
    type Part = P;
    type Focus = L;

    fn from_storage(storage: BoundLensStorage<W, P, L>) -> Self {
        Self { storage }
    }

    fn storage(&self) -> &BoundLensStorage<W, P, L> {
        &self.storage
    }

    fn into_storage(self) -> BoundLensStorage<W, P, L> {
        self.storage
    }
}

impl<W: Clone, P, L: Clone> Clone for BoundLens<W, P, L> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<W: std::fmt::Debug, P, L: std::fmt::Debug> std::fmt::Debug for BoundLens<W, P, L> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BoundLens")
            .field("storage", &self.storage)
            .finish()
    }
}

/// Types that can be the focus of a bound lens chain.
///
/// `Bound<W, L>` is the wrapper a chain gets when it reaches a value of this
/// type from root `W` through lens `L`.
pub trait Bindable: Sized {
    /// The bound wrapper focused on `Self`.
    type Bound<W, L>: BoundLensType<Whole = W, Part = Self, Focus = L>
    where
        L: Lens<W, Self>;
}

/// Roots a bound lens chain at `instance` using the identity lens.
///
/// # Example
///
/// ```
/// use lensed::optics::{bind, BoundLensType};
///
/// let chain = bind("Sesame Street".to_string());
/// assert_eq!(chain.get(), "Sesame Street");
/// assert_eq!(bind(1_u8).set(2), 2);
/// ```
pub fn bind<T: Bindable>(instance: T) -> T::Bound<T, IdentityLens<T>> {
    BoundLensType::new(instance, IdentityLens::new())
}

/// Implements [`Bindable`] for types that are navigated as a single leaf.
///
/// Use this for your own non-record types that appear as fields of a
/// `#[derive(Lenses)]` struct. For foreign types, mark the field
/// `#[lens(leaf)]` instead.
///
/// ```
/// use lensed::bindable_leaf;
/// use lensed::optics::{bind, BoundLensType};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// struct Meters(f64);
///
/// bindable_leaf!(Meters);
///
/// assert_eq!(bind(Meters(1.0)).set(Meters(2.0)), Meters(2.0));
/// ```
#[macro_export]
macro_rules! bindable_leaf {
    ($($leaf:ty),+ $(,)?) => {
        $(
            impl $crate::optics::Bindable for $leaf {
                type Bound<W, L> = $crate::optics::BoundLens<W, Self, L>
                where
                    L: $crate::optics::Lens<W, Self>;
            }
        )+
    };
}

macro_rules! bindable_leaf_generic {
    ($([$($param:ident),+] $leaf:ty),+ $(,)?) => {
        $(
            impl<$($param),+> Bindable for $leaf {
                type Bound<W, L> = BoundLens<W, Self, L>
                where
                    L: Lens<W, Self>;
            }
        )+
    };
}

crate::bindable_leaf!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    (),
    String,
    &'static str,
);

bindable_leaf_generic!(
    [T] Box<T>,
    [T] Rc<T>,
    [T] Arc<T>,
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] Option<T>,
    [T, E] Result<T, E>,
    [K, V, H] HashMap<K, V, H>,
    [T, H] HashSet<T, H>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
    [A, B] (A, B),
    [A, B, C] (A, B, C),
    [A, B, C, D] (A, B, C, D),
);
