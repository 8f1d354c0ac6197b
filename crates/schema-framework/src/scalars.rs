//! # Scalar Mapping
//!
//! Every primitive wire type is declared as a pair of representations: the type a client
//! *sends* (input) and the type it *receives* (output). They often coincide, but a schema is
//! free to make them differ, so entity and argument definitions always name the side they
//! mean through [`Input`] and [`Output`]:
//!
//! ```rust,ignore
//! struct QueryUserArgs { id: Input<ID> }        // sent
//! struct User { id: Output<ID>, name: Output<String> } // received
//! ```
//!
//! New scalars are added with [`define_scalar!`](crate::define_scalar). Nothing in the
//! transform layer refers to a specific scalar, so adding one never touches it.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A named primitive wire type.
pub trait Scalar: 'static {
    /// The name the schema uses for this scalar (`"ID"`, `"Int"`, ...).
    const NAME: &'static str;

    /// Representation used when the value is sent (query arguments).
    type Input: Serialize + Clone + Debug + Send + Sync;

    /// Representation used when the value is received (entity fields).
    type Output: DeserializeOwned + Clone + Debug + Send + Sync;
}

/// The representation of `S` used in argument positions.
pub type Input<S> = <S as Scalar>::Input;

/// The representation of `S` used in entity fields.
pub type Output<S> = <S as Scalar>::Output;

/// Declares a scalar marker type and its input/output representations.
///
/// ```rust,ignore
/// define_scalar! {
///     /// RFC 3339 timestamp.
///     pub DateTime => { input: String, output: String }
/// }
/// ```
#[macro_export]
macro_rules! define_scalar {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => { input: $input:ty, output: $output:ty $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::scalars::Scalar for $name {
            const NAME: &'static str = stringify!($name);
            type Input = $input;
            type Output = $output;
        }
    };
}

define_scalar! {
    /// Opaque unique identifier, serialized as a string.
    pub ID => { input: std::string::String, output: std::string::String }
}

define_scalar! {
    /// UTF-8 character sequence.
    pub String => { input: std::string::String, output: std::string::String }
}

define_scalar! {
    pub Boolean => { input: bool, output: bool }
}

define_scalar! {
    /// Signed 32-bit integer.
    pub Int => { input: i32, output: i32 }
}

define_scalar! {
    /// Double-precision floating point value.
    pub Float => { input: f64, output: f64 }
}

/// Names of the built-in scalars.
pub const BUILTIN: &[&str] = &[ID::NAME, String::NAME, Boolean::NAME, Int::NAME, Float::NAME];
