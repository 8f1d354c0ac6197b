//! # Object Model
//!
//! The traits every schema object implements. They are normally produced by
//! [`graphql_object!`](crate::graphql_object) rather than written by hand.
//!
//! # Architecture Note
//! A schema object comes with two shapes:
//!
//! 1. **The complete record** (`User`): every field present, fields read-only.
//! 2. **The partial companion** (`UserPartial`): any subset of fields plus the reserved
//!    metadata keys (`__typename`, `" $fragmentName"`). This is what a streamed delivery
//!    looks like before all fields have arrived, see [`Incremental`](crate::Incremental).
//!
//! Both carry an optional [`Typename`] discriminator. When it is present it must spell the
//! object's schema name, so a `Product` payload can never decode as a `User`.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::transform::ExactShape;

/// A type with a fixed schema name.
pub trait Typed {
    const TYPENAME: &'static str;
}

/// Contract that any schema object must satisfy to be fetched through an
/// [`EntitySource`](crate::EntitySource).
pub trait GraphQLObject:
    Typed + ExactShape + Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Wire names of the object's fields, in declaration order. Used as the selection set.
    const FIELDS: &'static [&'static str];

    /// The partial-delivery companion shape.
    type Partial: PartialObject<Self>;

    /// The identifier the object is addressed by.
    fn entity_id(&self) -> &str;

    fn typename(&self) -> &'static str {
        Self::TYPENAME
    }
}

/// The partial-delivery companion of a [`GraphQLObject`].
pub trait PartialObject<T>:
    From<T> + Clone + Debug + Default + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// True when no data field is set (only metadata, if anything).
    fn is_metadata_only(&self) -> bool;

    /// Names of the data fields that have not arrived yet.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Overlays `newer` onto `self`. Fields present in `newer` win.
    fn merge(&mut self, newer: Self);

    /// Builds the complete object, or hands `self` back if any field is missing.
    fn complete(self) -> Result<T, Self>;
}

/// The `__typename` discriminator of `T`.
///
/// Zero-sized: it only ever serializes as `T::TYPENAME`, and decoding any other string fails.
pub struct Typename<T>(PhantomData<fn() -> T>);

impl<T: Typed> Typename<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    pub const fn as_str(&self) -> &'static str {
        T::TYPENAME
    }
}

impl<T> Default for Typename<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for Typename<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Typename<T> {}

impl<T> PartialEq for Typename<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Typename<T> {}

impl<T: Typed> Debug for Typename<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Typename({})", T::TYPENAME)
    }
}

impl<T: Typed> Serialize for Typename<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(T::TYPENAME)
    }
}

impl<'de, T: Typed> Deserialize<'de> for Typename<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == T::TYPENAME {
            Ok(Self::default())
        } else {
            Err(D::Error::invalid_value(Unexpected::Str(&name), &T::TYPENAME))
        }
    }
}

/// Reads the `__typename` of an undecoded object, if it carries one.
///
/// Heterogeneous collections route each element on this before picking a decoder.
pub fn typename_of(value: &serde_json::Value) -> Option<&str> {
    value.get("__typename")?.as_str()
}

/// Decodes `value` as `T` when its discriminator names `T`.
///
/// Returns `None` when the element is tagged with another type or carries no tag.
pub fn decode_tagged<T: GraphQLObject>(
    value: &serde_json::Value,
) -> Option<Result<T, serde_json::Error>> {
    (typename_of(value)? == T::TYPENAME).then(|| T::deserialize(value))
}

/// Builds the selection set for `T`: the discriminator followed by every field.
pub fn selection_set<T: GraphQLObject>() -> String {
    std::iter::once("__typename")
        .chain(T::FIELDS.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
