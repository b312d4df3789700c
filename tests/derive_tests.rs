//! Tests for the `Lenses` derive macro.
//!
//! This module tests the items generated by `#[derive(Lenses)]`:
//!
//! - The `LENSES` table and the `{field}_lens()` methods
//! - The bound lens wrapper and its per-field navigation methods
//! - Generic structs and `#[lens(leaf)]` fields

#![cfg(feature = "derive")]

use lensed::Lenses;
use lensed::bindable_leaf;
use lensed::optics::{Bindable, BoundLensType, FieldLens, Lens};
use proptest::prelude::*;
use rstest::rstest;
use std::time::Duration;

// =============================================================================
// Test Structures
// =============================================================================

/// Simple struct with basic field types
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Point {
    x: i32,
    y: i32,
}

/// Nested struct for composition testing
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Address {
    street: String,
    city: String,
}

/// Struct with a nested record field
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Person {
    name: String,
    address: Address,
}

/// Struct with generic type parameter
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Container<T> {
    value: T,
    label: String,
}

/// Struct with a where clause
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Tagged<T>
where
    T: Clone + PartialEq,
{
    tag: T,
    count: usize,
}

/// Struct with a defaulted type parameter
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Defaulted<T = u8> {
    value: T,
}

/// A caller-defined leaf type
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Celsius(pub f64);

bindable_leaf!(Celsius);

/// Struct with a caller leaf, a foreign leaf and a public field
#[derive(Clone, PartialEq, Debug, Lenses)]
pub struct Reading {
    pub temperature: Celsius,
    #[lens(leaf)]
    elapsed: Duration,
}

fn narf() -> Person {
    Person {
        name: "Maciej Konieczny".to_string(),
        address: Address {
            street: "Sesame Street".to_string(),
            city: "New York".to_string(),
        },
    }
}

// =============================================================================
// Lens table and lens methods
// =============================================================================

/// Test that table entries get and set their field
#[test]
fn test_lenses_table_get_and_set() {
    let point = Point { x: 10, y: 20 };

    assert_eq!(*Point::LENSES.x.get(&point), 10);
    assert_eq!(*Point::LENSES.y.get(&point), 20);
    assert_eq!(Point::LENSES.x.set(point, 100), Point { x: 100, y: 20 });
}

/// Test that setting one field copies the others unchanged
#[test]
fn test_lenses_table_set_keeps_other_fields() {
    let kuba = Person::LENSES.name.set(narf(), "Kuba".to_string());

    assert_eq!(kuba.name, "Kuba");
    assert_eq!(kuba.address, narf().address);
}

/// Test that the lens methods return the same lens as the table
#[rstest]
#[case("Kuba")]
#[case("")]
#[case("Maciej Konieczny")]
fn test_lens_method_matches_table(#[case] name: &str) {
    let from_method = Person::name_lens().set(narf(), name.to_string());
    let from_table = Person::LENSES.name.set(narf(), name.to_string());

    assert_eq!(from_method, from_table);
}

/// Test that table entries have the nameable FieldLens type
#[test]
fn test_lens_table_entries_are_field_lenses() {
    let street: FieldLens<Address, String> = Address::LENSES.street;
    let table = Address::LENSES;
    let copy = table;

    assert_eq!(street.get(&narf().address), "Sesame Street");
    assert_eq!(copy.city.get(&table.city.set(narf().address, "Boston".to_string())), "Boston");
}

/// Test composing derived lenses manually
#[test]
fn test_derived_lens_composition() {
    let street = Person::LENSES.address.compose(Address::LENSES.street);

    assert_eq!(street.get(&narf()), "Sesame Street");

    let moved = street.set(narf(), "Baker Street".to_string());
    assert_eq!(moved.address.street, "Baker Street");
    assert_eq!(moved.address.city, "New York");
    assert_eq!(moved.name, "Maciej Konieczny");
}

// =============================================================================
// Generic structs
// =============================================================================

/// Test derived lenses on a generic struct
#[test]
fn test_derived_lens_generic_struct() {
    let container = Container {
        value: 42,
        label: "answer".to_string(),
    };

    assert_eq!(*Container::<i32>::value_lens().get(&container), 42);
    assert_eq!(*Container::<i32>::LENSES.label.get(&container), "answer");

    let updated = Container::<i32>::LENSES.value.set(container, 100);
    assert_eq!(updated.value, 100);
    assert_eq!(updated.label, "answer");
}

/// Test bound navigation into a generic field
#[test]
fn test_bound_lens_generic_field() {
    let container = Container {
        value: vec![1, 2],
        label: "pair".to_string(),
    };

    assert_eq!(container.through_lens().value().get(), &vec![1, 2]);
    assert_eq!(
        container.through_lens().value().modify(|mut values| {
            values.push(3);
            values
        }),
        Container {
            value: vec![1, 2, 3],
            label: "pair".to_string(),
        }
    );
}

/// Test a struct with a where clause
#[test]
fn test_derived_lens_where_clause() {
    let tagged = Tagged {
        tag: 'a',
        count: 1,
    };

    let bumped = tagged.through_lens().count().modify(|count| count + 1);
    assert_eq!(bumped, Tagged { tag: 'a', count: 2 });
    assert_eq!(*Tagged::<char>::LENSES.tag.get(&bumped), 'a');
}

/// Test a struct whose type parameter has a default
#[test]
fn test_bound_lens_defaulted_parameter() {
    let defaulted: Defaulted = Defaulted { value: 7 };

    assert_eq!(*Defaulted::<u8>::LENSES.value.get(&defaulted), 7);
    assert_eq!(
        defaulted.through_lens().value().set(9),
        Defaulted { value: 9 }
    );
}

/// Test a generic struct nested in another derived struct
#[test]
fn test_bound_lens_through_generic_record() {
    let boxed = Container {
        value: narf(),
        label: "resident".to_string(),
    };

    let moved = boxed
        .through_lens()
        .value()
        .address()
        .street()
        .set("Baker Street".to_string());

    assert_eq!(moved.value.address.street, "Baker Street");
    assert_eq!(moved.label, "resident");
}

// =============================================================================
// Leaf fields
// =============================================================================

/// Test navigation into caller-defined and foreign leaf fields
#[test]
fn test_leaf_fields() {
    let reading = Reading {
        temperature: Celsius(21.5),
        elapsed: Duration::from_secs(3),
    };

    assert_eq!(reading.through_lens().temperature().get(), &Celsius(21.5));
    assert_eq!(
        reading.through_lens().elapsed().get(),
        &Duration::from_secs(3)
    );

    let later = reading
        .through_lens()
        .elapsed()
        .modify(|elapsed| elapsed + Duration::from_secs(1));
    assert_eq!(later.elapsed, Duration::from_secs(4));
    assert_eq!(later.temperature, Celsius(21.5));
}

/// Test that derived records are Bindable and root through `bind`
#[test]
fn test_derived_record_is_bindable() {
    fn root<T: Bindable>(value: T) -> T::Bound<T, lensed::optics::IdentityLens<T>> {
        lensed::optics::bind(value)
    }

    let chain = root(Point { x: 1, y: 2 });
    assert_eq!(chain.y().set(5), Point { x: 1, y: 5 });
}

// =============================================================================
// Derived lens laws
// =============================================================================

fn address_strategy() -> impl Strategy<Value = Address> {
    (".*", ".*").prop_map(|(street, city)| Address { street, city })
}

fn person_strategy() -> impl Strategy<Value = Person> {
    (".*", address_strategy()).prop_map(|(name, address)| Person { name, address })
}

proptest! {
    /// GetPut Law for every generated Person lens
    #[test]
    fn prop_derived_get_put_law(person in person_strategy()) {
        let lenses = Person::LENSES;
        let name = lenses.name.get(&person).clone();
        let address = lenses.address.get(&person).clone();

        prop_assert_eq!(lenses.name.set(person.clone(), name), person.clone());
        prop_assert_eq!(lenses.address.set(person.clone(), address), person);
    }

    /// PutGet Law for every generated Person lens
    #[test]
    fn prop_derived_put_get_law(person in person_strategy(), name in ".*", address in address_strategy()) {
        let lenses = Person::LENSES;
        let renamed = lenses.name.set(person.clone(), name.clone());
        let moved = lenses.address.set(person, address.clone());

        prop_assert_eq!(lenses.name.get(&renamed), &name);
        prop_assert_eq!(lenses.address.get(&moved), &address);
    }

    /// PutPut Law for every generated Person lens
    #[test]
    fn prop_derived_put_put_law(
        person in person_strategy(),
        first in address_strategy(),
        second in address_strategy(),
        name1 in ".*",
        name2 in ".*"
    ) {
        let lenses = Person::LENSES;

        prop_assert_eq!(
            lenses.address.set(lenses.address.set(person.clone(), first), second.clone()),
            lenses.address.set(person.clone(), second)
        );
        prop_assert_eq!(
            lenses.name.set(lenses.name.set(person.clone(), name1), name2.clone()),
            lenses.name.set(person, name2)
        );
    }
}
