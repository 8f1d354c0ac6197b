//! # Shape Generators
//!
//! Rust has no structural mapped types, so derived shapes are generated ahead of time, one
//! record per use, by two declarative macros:
//!
//! - [`graphql_object!`](crate::graphql_object) defines a schema object and its partial
//!   companion, and implements [`GraphQLObject`](crate::GraphQLObject) for it.
//! - [`derive_shape!`](crate::derive_shape) defines a record derived from an object by
//!   giving every kept field exactly one mode.
//!
//! Crates invoking these macros must depend on `serde` with the `derive` feature.
//!
//! ## Example
//!
//! ```rust,ignore
//! graphql_object! {
//!     /// A registered account.
//!     pub struct Account as "Account" {
//!         #[id]
//!         id: Output<ID>,
//!         handle: Output<scalars::String>,
//!         karma: Output<Int>,
//!     }
//! }
//!
//! derive_shape! {
//!     /// `MakeOptional<Account, "karma">` combined with `MakeEmpty<Account, "handle">`.
//!     pub struct AnonymousAccount from Account {
//!         required id: Output<ID>,
//!         empty handle: Output<scalars::String>,
//!         optional karma: Output<Int>,
//!     }
//! }
//! ```
//!
//! ## Field modes
//!
//! | Mode | Transform | Field type |
//! |------|-----------|------------|
//! | `required` | unchanged | `T` |
//! | `optional` | `MakeOptional` | [`Maybe<T>`](crate::Maybe), may be absent or `null` |
//! | `maybe` | `MakeMaybe` | [`Nullable<T>`](crate::Nullable), present, may be `null` |
//! | `empty` | `MakeEmpty` | [`Absent<T>`](crate::Absent), must be absent |
//!
//! Modes on disjoint fields compose freely. Naming the same field twice fails to compile
//! with "field `x` is listed more than once", so two modes can never be merged silently.
//!
//! Every derived record implements `From<&Base>`, which type-checks each listed field,
//! `empty` ones included, against the base object's accessor of the same name. A field the
//! base object does not have is a missing-method error at that field.

/// Defines a schema object, its `<Name>Partial` companion, and the trait impls linking them.
///
/// The first field must be marked `#[id]` and its type must be `AsRef<str>`. Field names are
/// the wire names. The generated struct keeps its fields private and exposes one accessor
/// per field, plus `new` and `with_typename`.
#[macro_export]
macro_rules! graphql_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident as $typename:literal {
            #[id]
            $(#[doc = $id_doc:literal])*
            $id:ident : $id_ty:ty,
            $(
                $(#[doc = $doc:literal])*
                $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            #[serde(deny_unknown_fields)]
            $vis struct $name {
                #[serde(rename = "__typename", default, skip_serializing_if = "Option::is_none")]
                typename: ::core::option::Option<$crate::Typename<$name>>,
                $id: $id_ty,
                $($field: $ty,)+
            }

            impl $name {
                /// Builds the object without a `__typename` discriminator.
                #[allow(clippy::too_many_arguments)]
                pub fn new(
                    $id: impl ::core::convert::Into<$id_ty>,
                    $($field: impl ::core::convert::Into<$ty>,)+
                ) -> Self {
                    Self {
                        typename: ::core::option::Option::None,
                        $id: $id.into(),
                        $($field: $field.into(),)+
                    }
                }

                /// Tags the object with its `__typename` discriminator.
                pub fn with_typename(mut self) -> Self {
                    self.typename = ::core::option::Option::Some($crate::Typename::new());
                    self
                }

                pub fn has_typename(&self) -> bool {
                    self.typename.is_some()
                }

                $(#[doc = $id_doc])*
                pub fn $id(&self) -> &$id_ty {
                    &self.$id
                }

                $(
                    $(#[doc = $doc])*
                    pub fn $field(&self) -> &$ty {
                        &self.$field
                    }
                )+
            }

            impl $crate::Typed for $name {
                const TYPENAME: &'static str = $typename;
            }

            impl $crate::ExactShape for $name {}

            impl $crate::GraphQLObject for $name {
                const FIELDS: &'static [&'static str] = &[stringify!($id), $(stringify!($field)),+];

                type Partial = [<$name Partial>];

                fn entity_id(&self) -> &str {
                    ::core::convert::AsRef::<str>::as_ref(&self.$id)
                }
            }

            /// Partial delivery: any subset of the object's fields plus its metadata keys.
            #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            #[serde(deny_unknown_fields)]
            $vis struct [<$name Partial>] {
                #[serde(rename = "__typename", default, skip_serializing_if = "Option::is_none")]
                pub typename: ::core::option::Option<$crate::Typename<$name>>,
                #[serde(rename = " $fragmentName", default, skip_serializing_if = "Option::is_none")]
                pub fragment_name: ::core::option::Option<::std::string::String>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $id: ::core::option::Option<$id_ty>,
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $field: ::core::option::Option<$ty>,
                )+
            }

            impl $crate::ExactShape for [<$name Partial>] {}

            impl ::core::convert::From<$name> for [<$name Partial>] {
                fn from(full: $name) -> Self {
                    Self {
                        typename: full.typename,
                        fragment_name: ::core::option::Option::None,
                        $id: ::core::option::Option::Some(full.$id),
                        $($field: ::core::option::Option::Some(full.$field),)+
                    }
                }
            }

            impl $crate::PartialObject<$name> for [<$name Partial>] {
                fn is_metadata_only(&self) -> bool {
                    self.$id.is_none() $(&& self.$field.is_none())+
                }

                fn missing_fields(&self) -> ::std::vec::Vec<&'static str> {
                    let mut missing = ::std::vec::Vec::new();
                    if self.$id.is_none() {
                        missing.push(stringify!($id));
                    }
                    $(
                        if self.$field.is_none() {
                            missing.push(stringify!($field));
                        }
                    )+
                    missing
                }

                fn merge(&mut self, newer: Self) {
                    if newer.typename.is_some() {
                        self.typename = newer.typename;
                    }
                    if newer.fragment_name.is_some() {
                        self.fragment_name = newer.fragment_name;
                    }
                    if newer.$id.is_some() {
                        self.$id = newer.$id;
                    }
                    $(
                        if newer.$field.is_some() {
                            self.$field = newer.$field;
                        }
                    )+
                }

                fn complete(self) -> ::core::result::Result<$name, Self> {
                    match self {
                        Self {
                            typename,
                            fragment_name: _,
                            $id: ::core::option::Option::Some($id),
                            $($field: ::core::option::Option::Some($field),)+
                        } => ::core::result::Result::Ok($name { typename, $id, $($field,)+ }),
                        incomplete => ::core::result::Result::Err(incomplete),
                    }
                }
            }
        }
    };
}

/// Defines a record derived from a schema object, one mode keyword per field.
///
/// See the [module documentation](crate::macros) for the modes.
///
/// The duplicate-field check nests one expansion per pair of fields, so shapes listing more
/// than a dozen fields need a higher `#![recursion_limit]` in the invoking crate.
#[macro_export]
macro_rules! derive_shape {
    (@convert required $base:ident $field:ident $ty:ty) => {
        ::core::clone::Clone::clone($base.$field())
    };
    (@convert optional $base:ident $field:ident $ty:ty) => {
        ::core::option::Option::Some(::core::clone::Clone::clone($base.$field()))
    };
    (@convert maybe $base:ident $field:ident $ty:ty) => {
        $crate::Nullable::value(::core::clone::Clone::clone($base.$field()))
    };
    (@convert empty $base:ident $field:ident $ty:ty) => {{
        let $field = ::core::clone::Clone::clone($base.$field());
        let _: $ty = $field;
        $crate::Absent::default()
    }};

    (@emit [$(#[$meta:meta])* ; $vis:vis $name:ident ; $base:ty]
        [$($fields:tt)*]
        [$($cfield:ident $mode:ident $cty:ty,)*]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        $vis struct $name {
            #[serde(rename = "__typename", default, skip_serializing_if = "Option::is_none")]
            pub typename: ::core::option::Option<$crate::Typename<$base>>,
            $($fields)*
        }

        impl ::core::convert::From<&$base> for $name {
            fn from(base: &$base) -> Self {
                Self {
                    typename: ::core::option::Option::None,
                    $($cfield: $crate::derive_shape!(@convert $mode base $cfield $cty),)*
                }
            }
        }

        impl $crate::ExactShape for $name {}
    };

    (@munch [$($head:tt)*] [$($fields:tt)*] [$($convert:tt)*]
        $(#[doc = $doc:literal])* required $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::derive_shape! { @munch [$($head)*]
            [$($fields)* $(#[doc = $doc])* pub $field: $ty,]
            [$($convert)* $field required $ty,]
            $($($rest)*)?
        }
    };
    (@munch [$($head:tt)*] [$($fields:tt)*] [$($convert:tt)*]
        $(#[doc = $doc:literal])* optional $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::derive_shape! { @munch [$($head)*]
            [$($fields)*
                $(#[doc = $doc])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: $crate::Maybe<$ty>,]
            [$($convert)* $field optional $ty,]
            $($($rest)*)?
        }
    };
    (@munch [$($head:tt)*] [$($fields:tt)*] [$($convert:tt)*]
        $(#[doc = $doc:literal])* maybe $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::derive_shape! { @munch [$($head)*]
            [$($fields)* $(#[doc = $doc])* pub $field: $crate::Nullable<$ty>,]
            [$($convert)* $field maybe $ty,]
            $($($rest)*)?
        }
    };
    (@munch [$($head:tt)*] [$($fields:tt)*] [$($convert:tt)*]
        $(#[doc = $doc:literal])* empty $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::derive_shape! { @munch [$($head)*]
            [$($fields)*
                $(#[doc = $doc])*
                #[serde(default, skip_serializing)]
                pub $field: $crate::Absent<$ty>,]
            [$($convert)* $field empty $ty,]
            $($($rest)*)?
        }
    };
    (@munch [$($head:tt)*] [$($fields:tt)*] [$($cfield:ident $mode:ident $cty:ty,)*]) => {
        $crate::__shape_unique! { ($) [$($cfield)*]
            @emit [$($head)*] [$($fields)*] [$($cfield $mode $cty,)*]
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $base:ty { $($body:tt)* }
    ) => {
        $crate::derive_shape! { @munch [$(#[$meta])* ; $vis $name ; $base] [] [] $($body)* }
    };
}

/// Rejects a field list naming the same field twice, then hands the shape back to
/// [`derive_shape!`](crate::derive_shape).
///
/// Each step defines a local matcher for the head field and scans the rest with it.
#[doc(hidden)]
#[macro_export]
macro_rules! __shape_unique {
    (($d:tt) [] $($shape:tt)*) => {
        $crate::derive_shape! { $($shape)* }
    };
    (($d:tt) [$first:ident $($rest:ident)*] $($shape:tt)*) => {
        macro_rules! __shape_seen {
            ([] $d($d shape:tt)*) => {
                $crate::__shape_unique! { ($d) [$($rest)*] $d($d shape)* }
            };
            ([$first $d($d others:ident)*] $d($d shape:tt)*) => {
                ::core::compile_error!(::core::concat!(
                    "field `", ::core::stringify!($first), "` is listed more than once"
                ));
            };
            ([$d other:ident $d($d others:ident)*] $d($d shape:tt)*) => {
                __shape_seen! { [$d($d others)*] $d($d shape)* }
            };
        }
        __shape_seen! { [$($rest)*] $($shape)* }
    };
}
