//! # Type Transforms
//!
//! Building blocks for shapes derived from a base object. Each one changes what a single
//! field position accepts on the wire:
//!
//! | Transform | Field type | Absent | `null` | Value |
//! |-----------|------------|--------|--------|-------|
//! | required | `T` | rejected | rejected | accepted |
//! | `MakeOptional` | [`Maybe<T>`] + `#[serde(default)]` | accepted | accepted | accepted |
//! | `MakeMaybe` | [`Nullable<T>`] | rejected | accepted | accepted |
//! | `MakeEmpty` | [`Absent<T>`] + `#[serde(default)]` | accepted | rejected | rejected |
//!
//! Whole-record transforms are [`Exact`] (no unknown keys) and [`Incremental`] (complete
//! record or partial delivery). Shapes built with
//! [`derive_shape!`](crate::derive_shape) wire these up per field.
//!
//! ## Nested maybes
//!
//! JSON has a single `null`, so `Maybe<Maybe<T>>` encodes and decodes exactly like
//! `Maybe<T>`: a `null` always lands on the outer `None`. In code, [`collapse`] removes
//! the extra layer.

use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::ops::Deref;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ShapeError;
use crate::object::{GraphQLObject, PartialObject};

/// A value or the explicit "no value" marker.
pub type Maybe<T> = Option<T>;

/// [`Maybe`] in argument positions. Same transform, separate name to document intent.
pub type InputMaybe<T> = Maybe<T>;

/// Removes one level of nesting; `Some(None)` and `None` both mean "no value".
pub fn collapse<T>(nested: Maybe<Maybe<T>>) -> Maybe<T> {
    nested.flatten()
}

/// Marker for record types that reject keys they do not declare.
///
/// Implemented by every type generated with [`graphql_object!`](crate::graphql_object)
/// and [`derive_shape!`](crate::derive_shape).
pub trait ExactShape {}

/// An argument object that must carry exactly the keys of `T`.
///
/// Only constructible for [`ExactShape`] types, and decoding fails on any key `T` does not
/// declare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound(deserialize = "T: ExactShape + Deserialize<'de>"))]
pub struct Exact<T>(T);

impl<T: ExactShape> Exact<T> {
    pub const fn new(inner: T) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Exact<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// A field that must be present but may be `null` (the `MakeMaybe` transform).
///
/// Unlike a bare [`Maybe`], a missing key is a decode error.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Nullable<T>(Maybe<T>);

impl<T> Nullable<T> {
    pub const fn null() -> Self {
        Self(None)
    }

    pub const fn value(value: T) -> Self {
        Self(Some(value))
    }

    pub const fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn into_inner(self) -> Maybe<T> {
        self.0
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<Maybe<T>> for Nullable<T> {
    fn from(value: Maybe<T>) -> Self {
        Self(value)
    }
}

impl<T> Deref for Nullable<T> {
    type Target = Maybe<T>;

    fn deref(&self) -> &Maybe<T> {
        &self.0
    }
}

impl<T: Debug> Debug for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing key arrives as `deserialize_any` on serde's missing-field deserializer,
        // which fails. Only `deserialize_option` would turn it into `None`.
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Self::null());
        }
        serde_json::from_value(value)
            .map(Self::value)
            .map_err(D::Error::custom)
    }
}

/// A field that must never be present (the `MakeEmpty` transform).
///
/// Pair it with `#[serde(default, skip_serializing)]`: absence decodes to the default,
/// any presence, `null` included, is a decode error.
pub struct Absent<T>(PhantomData<fn() -> T>);

impl<T> Default for Absent<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for Absent<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Absent<T> {}

impl<T> PartialEq for Absent<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Absent<T> {}

impl<T> Debug for Absent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Absent")
    }
}

impl<T> Serialize for Absent<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_none()
    }
}

impl<'de, T> Deserialize<'de> for Absent<T> {
    fn deserialize<D: Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error> {
        Err(D::Error::custom("field is forbidden in this shape"))
    }
}

/// A complete object, or a partial delivery of it.
///
/// Decoding tries the complete shape first. A partial value may hold any subset of the
/// object's fields plus `__typename` and `" $fragmentName"`, and nothing else. A partial
/// value carrying every field decodes as [`Incremental::Complete`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, bound = "")]
pub enum Incremental<T: GraphQLObject> {
    Complete(T),
    Partial(T::Partial),
}

#[derive(Deserialize)]
#[serde(untagged, bound = "")]
enum Delivery<T: GraphQLObject> {
    Complete(T),
    Partial(T::Partial),
}

impl<'de, T: GraphQLObject> Deserialize<'de> for Incremental<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Delivery::<T>::deserialize(deserializer)? {
            Delivery::Complete(full) => Self::Complete(full),
            Delivery::Partial(partial) => Self::from_partial(partial),
        })
    }
}

impl<T: GraphQLObject> Incremental<T> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The complete object, or the list of fields still missing.
    pub fn into_complete(self) -> Result<T, ShapeError> {
        match self {
            Self::Complete(full) => Ok(full),
            Self::Partial(partial) => partial.complete().map_err(|rest| ShapeError::Incomplete {
                typename: T::TYPENAME,
                missing: rest.missing_fields(),
            }),
        }
    }

    /// Folds a later delivery onto this one.
    ///
    /// A complete `newer` replaces everything. A partial `newer` overlays its fields, and
    /// the result is promoted to [`Incremental::Complete`] once nothing is missing.
    pub fn merge(self, newer: Self) -> Self {
        let patch = match newer {
            Self::Complete(full) => return Self::Complete(full),
            Self::Partial(patch) => patch,
        };
        let mut base = match self {
            Self::Complete(full) => T::Partial::from(full),
            Self::Partial(partial) => partial,
        };
        base.merge(patch);
        Self::from_partial(base)
    }

    fn from_partial(partial: T::Partial) -> Self {
        match partial.complete() {
            Ok(full) => Self::Complete(full),
            Err(partial) => Self::Partial(partial),
        }
    }
}
