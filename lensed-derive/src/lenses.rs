//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! For a struct `Person` with named fields this generates:
//!
//! - `PersonLenses`, a table with one `FieldLens` per field, exposed as the
//!   `Person::LENSES` constant, plus a `Person::{field}_lens()` method per field
//! - `PersonBoundLens<LensWhole, LensFocus>`, the bound lens wrapper with one
//!   navigation method per field
//! - `impl Bindable for Person`, so other records can navigate into it
//! - `Person::through_lens` and `Person::into_through_lens`, the roots of a
//!   bound lens chain

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Field, Fields, GenericParam, Generics, Ident, Type, Visibility,
    WherePredicate, parse_macro_input, parse_quote,
};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) if named_fields.named.is_empty() => {
                syn::Error::new_spanned(
                    &input.ident,
                    "Lenses requires at least one named field to focus on.",
                )
                .to_compile_error()
            }
            Fields::Named(named_fields) => match collect_fields(named_fields.named.iter()) {
                Ok(fields) => LensesInput::new(&input, fields).generate(),
                Err(error) => error.to_compile_error(),
            },
            Fields::Unnamed(_) => syn::Error::new_spanned(
                &input.ident,
                "Lenses can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                &input.ident,
                "Lenses cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// One named field of the deriving struct.
struct LensField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    vis: &'a Visibility,
    /// Set by `#[lens(leaf)]`: navigate through `BoundLens` instead of the
    /// field type's `Bindable` wrapper.
    leaf: bool,
}

/// Parses every field, reporting all attribute errors at once.
fn collect_fields<'a>(fields: impl Iterator<Item = &'a Field>) -> syn::Result<Vec<LensField<'a>>> {
    let mut collected = Vec::new();
    let mut errors: Option<syn::Error> = None;

    for field in fields {
        match parse_field(field) {
            Ok(lens_field) => collected.push(lens_field),
            Err(error) => match &mut errors {
                Some(existing) => existing.combine(error),
                None => errors = Some(error),
            },
        }
    }

    errors.map_or(Ok(collected), Err)
}

/// Methods every bound lens wrapper gets from `BoundLensType`. A navigation
/// method with one of these names would shadow it.
const RESERVED_FIELD_NAMES: &[&str] = &[
    "new",
    "from_storage",
    "storage",
    "into_storage",
    "focus",
    "get",
    "set",
    "modify",
];

fn parse_field(field: &Field) -> syn::Result<LensField<'_>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "Lenses requires named fields."))?;

    if RESERVED_FIELD_NAMES.iter().any(|reserved| ident == reserved) {
        return Err(syn::Error::new_spanned(
            ident,
            format!(
                "field `{ident}` would shadow `BoundLensType::{ident}` on the bound lens; rename the field"
            ),
        ));
    }

    let mut leaf = false;
    for attribute in field.attrs.iter().filter(|attribute| attribute.path().is_ident("lens")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("leaf") {
                leaf = true;
                Ok(())
            } else {
                Err(meta.error("unsupported lens attribute, expected `leaf`"))
            }
        })?;
    }

    Ok(LensField {
        ident,
        ty: &field.ty,
        vis: &field.vis,
        leaf,
    })
}

/// Everything the generators need about the deriving struct.
struct LensesInput<'a> {
    name: &'a Ident,
    vis: &'a Visibility,
    generics: &'a Generics,
    /// `generics` followed by the `LensWhole` and `LensFocus` parameters of
    /// the bound wrapper.
    bound_generics: Generics,
    predicates: Vec<&'a WherePredicate>,
    table: Ident,
    bound: Ident,
    fields: Vec<LensField<'a>>,
}

impl<'a> LensesInput<'a> {
    fn new(input: &'a DeriveInput, fields: Vec<LensField<'a>>) -> Self {
        let mut bound_generics = input.generics.clone();
        // Defaults may not precede the appended parameters.
        for param in &mut bound_generics.params {
            match param {
                GenericParam::Type(type_param) => {
                    type_param.eq_token = None;
                    type_param.default = None;
                }
                GenericParam::Const(const_param) => {
                    const_param.eq_token = None;
                    const_param.default = None;
                }
                GenericParam::Lifetime(_) => {}
            }
        }
        bound_generics.params.push(parse_quote!(LensWhole));
        bound_generics.params.push(parse_quote!(LensFocus));

        let predicates = input
            .generics
            .where_clause
            .iter()
            .flat_map(|where_clause| where_clause.predicates.iter())
            .collect();

        Self {
            name: &input.ident,
            vis: &input.vis,
            generics: &input.generics,
            bound_generics,
            predicates,
            table: format_ident!("{}Lenses", input.ident),
            bound: format_ident!("{}BoundLens", input.ident),
            fields,
        }
    }

    fn generate(&self) -> TokenStream2 {
        let table = self.generate_table();
        let record_impl = self.generate_record_impl();
        let bound = self.generate_bound_wrapper();
        let bindable = self.generate_bindable_impl();

        quote! {
            #table
            #record_impl
            #bound
            #bindable
        }
    }

    /// The record type with its generic arguments, e.g. `Container<T>`.
    fn record_type(&self) -> TokenStream2 {
        let name = self.name;
        let (_, type_generics, _) = self.generics.split_for_impl();
        quote!(#name #type_generics)
    }

    /// The record's generic arguments without angle brackets.
    fn generic_arguments(&self) -> Vec<TokenStream2> {
        self.generics
            .params
            .iter()
            .map(|param| match param {
                GenericParam::Lifetime(lifetime_param) => {
                    let lifetime = &lifetime_param.lifetime;
                    quote!(#lifetime)
                }
                GenericParam::Type(type_param) => {
                    let ident = &type_param.ident;
                    quote!(#ident)
                }
                GenericParam::Const(const_param) => {
                    let ident = &const_param.ident;
                    quote!(#ident)
                }
            })
            .collect()
    }

    fn generate_table(&self) -> TokenStream2 {
        let Self {
            name, vis, table, ..
        } = self;
        let record = self.record_type();
        let (impl_generics, type_generics, where_clause) = self.generics.split_for_impl();

        let table_fields = self.fields.iter().map(|field| {
            let LensField { ident, ty, vis, .. } = field;
            let doc = format!("Lens focusing on the `{ident}` field.");
            quote! {
                #[doc = #doc]
                #vis #ident: ::lensed::optics::FieldLens<#record, #ty>,
            }
        });

        let doc = format!("Lens table for [`{name}`], one lens per field.");

        quote! {
            #[doc = #doc]
            #vis struct #table #impl_generics #where_clause {
                #(#table_fields)*
            }

            #[automatically_derived]
            impl #impl_generics ::core::clone::Clone for #table #type_generics #where_clause {
                fn clone(&self) -> Self {
                    *self
                }
            }

            #[automatically_derived]
            impl #impl_generics ::core::marker::Copy for #table #type_generics #where_clause {}
        }
    }

    fn generate_record_impl(&self) -> TokenStream2 {
        let Self {
            name,
            vis,
            table,
            bound,
            ..
        } = self;
        let (impl_generics, type_generics, where_clause) = self.generics.split_for_impl();
        let generic_arguments = self.generic_arguments();

        let table_entries = self.fields.iter().map(|field| {
            let LensField { ident, ty, .. } = field;
            quote! {
                #ident: <::lensed::optics::FieldLens<Self, #ty>>::new(
                    |source: &Self| &source.#ident,
                    |mut source: Self, value: #ty| {
                        source.#ident = value;
                        source
                    },
                ),
            }
        });

        let lens_methods = self.fields.iter().map(|field| {
            let LensField { ident, ty, vis, .. } = field;
            let method_name = format_ident!("{}_lens", ident);
            let doc = format!("Returns a lens focusing on the `{ident}` field.");
            quote! {
                #[doc = #doc]
                #[inline]
                #[must_use]
                #vis fn #method_name() -> ::lensed::optics::FieldLens<Self, #ty> {
                    Self::LENSES.#ident
                }
            }
        });

        let root = quote! {
            #bound<#(#generic_arguments,)* Self, ::lensed::optics::IdentityLens<Self>>
        };

        quote! {
            #[automatically_derived]
            impl #impl_generics #name #type_generics #where_clause {
                /// Lenses for every field of this struct.
                #vis const LENSES: #table #type_generics = #table {
                    #(#table_entries)*
                };

                #(#lens_methods)*

                /// Starts a bound lens chain at a clone of this value.
                ///
                /// `set` at the end of the chain returns an updated copy; `self`
                /// is left untouched.
                #[must_use]
                #vis fn through_lens(&self) -> #root
                where
                    Self: ::core::clone::Clone,
                {
                    ::lensed::optics::bind(::core::clone::Clone::clone(self))
                }

                /// Starts a bound lens chain at this value.
                #[must_use]
                #vis fn into_through_lens(self) -> #root {
                    ::lensed::optics::bind(self)
                }
            }
        }
    }

    fn generate_bound_wrapper(&self) -> TokenStream2 {
        let Self {
            name,
            vis,
            bound,
            predicates,
            ..
        } = self;
        let record = self.record_type();
        let (impl_generics, type_generics, where_clause) = self.bound_generics.split_for_impl();
        let storage = quote! {
            ::lensed::optics::BoundLensStorage<LensWhole, #record, LensFocus>
        };

        let navigation_methods = self.fields.iter().map(|field| {
            let LensField {
                ident,
                ty,
                vis,
                leaf,
            } = field;
            let focus = quote! {
                ::lensed::optics::ComposedLens<
                    LensFocus,
                    ::lensed::optics::FieldLens<#record, #ty>,
                    #record,
                >
            };
            let doc = format!("Focuses the chain on the `{ident}` field.");

            if *leaf {
                quote! {
                    #[doc = #doc]
                    #[must_use]
                    #vis fn #ident(self) -> ::lensed::optics::BoundLens<LensWhole, #ty, #focus> {
                        ::lensed::optics::BoundLensType::focus(self, <#record>::LENSES.#ident)
                    }
                }
            } else {
                quote! {
                    #[doc = #doc]
                    #[must_use]
                    #vis fn #ident(self) -> <#ty as ::lensed::optics::Bindable>::Bound<LensWhole, #focus>
                    where
                        #ty: ::lensed::optics::Bindable,
                    {
                        ::lensed::optics::BoundLensType::focus(self, <#record>::LENSES.#ident)
                    }
                }
            }
        });

        let doc = format!(
            "Bound lens focused on a [`{name}`] inside a `LensWhole` root.\n\n\
             Each method focuses one field deeper; `get`, `set` and `modify` come from \
             `BoundLensType`."
        );
        let debug_name = bound.to_string();

        quote! {
            #[doc = #doc]
            #vis struct #bound #impl_generics #where_clause {
                storage: #storage,
            }

            #[automatically_derived]
            impl #impl_generics ::lensed::optics::BoundLensType for #bound #type_generics
            where
                LensFocus: ::lensed::optics::Lens<LensWhole, #record>,
                #(#predicates,)*
            {
                type Whole = LensWhole;
                type Part = #record;
                type Focus = LensFocus;

                fn from_storage(storage: #storage) -> Self {
                    Self { storage }
                }

                fn storage(&self) -> &#storage {
                    &self.storage
                }

                fn into_storage(self) -> #storage {
                    self.storage
                }
            }

            #[automatically_derived]
            impl #impl_generics #bound #type_generics
            where
                LensFocus: ::lensed::optics::Lens<LensWhole, #record>,
                #record: ::core::clone::Clone + 'static,
                #(#predicates,)*
            {
                #(#navigation_methods)*
            }

            #[automatically_derived]
            impl #impl_generics ::core::clone::Clone for #bound #type_generics
            where
                LensWhole: ::core::clone::Clone,
                LensFocus: ::core::clone::Clone,
                #(#predicates,)*
            {
                fn clone(&self) -> Self {
                    Self {
                        storage: ::core::clone::Clone::clone(&self.storage),
                    }
                }
            }

            #[automatically_derived]
            impl #impl_generics ::core::fmt::Debug for #bound #type_generics
            where
                LensWhole: ::core::fmt::Debug,
                LensFocus: ::core::fmt::Debug,
                #(#predicates,)*
            {
                fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    formatter
                        .debug_struct(#debug_name)
                        .field("storage", &self.storage)
                        .finish()
                }
            }
        }
    }

    fn generate_bindable_impl(&self) -> TokenStream2 {
        let Self { name, bound, .. } = self;
        let (impl_generics, type_generics, where_clause) = self.generics.split_for_impl();
        let (_, bound_type_generics, _) = self.bound_generics.split_for_impl();

        quote! {
            #[automatically_derived]
            impl #impl_generics ::lensed::optics::Bindable for #name #type_generics #where_clause {
                type Bound<LensWhole, LensFocus> = #bound #bound_type_generics
                where
                    LensFocus: ::lensed::optics::Lens<LensWhole, Self>;
            }
        }
    }
}
