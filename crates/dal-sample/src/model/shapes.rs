//! Shapes derived from [`User`], one per use.

use schema_framework::derive_shape;
use schema_framework::scalars::{self, Output, ID};

use super::user::{User, UserRole};

derive_shape! {
    /// `MakeOptional<User, "email">`: the email may be absent or `null`.
    pub struct UserWithOptionalEmail from User {
        required id: Output<ID>,
        required name: Output<scalars::String>,
        optional email: Output<scalars::String>,
        required role: UserRole,
    }
}

derive_shape! {
    /// `MakeMaybe<User, "name">`: the name must be sent, possibly as `null`.
    pub struct UserWithNullableName from User {
        required id: Output<ID>,
        maybe name: Output<scalars::String>,
        required email: Output<scalars::String>,
        required role: UserRole,
    }
}

derive_shape! {
    /// `MakeEmpty<User, "email">`: the email must not be sent at all.
    pub struct UserWithoutEmail from User {
        required id: Output<ID>,
        required name: Output<scalars::String>,
        empty email: Output<scalars::String>,
        required role: UserRole,
    }
}

derive_shape! {
    /// Directory listing: no email, role only when known.
    pub struct UserDirectoryEntry from User {
        required id: Output<ID>,
        required name: Output<scalars::String>,
        empty email: Output<scalars::String>,
        optional role: UserRole,
    }
}

derive_shape! {
    /// A change set: the id plus any fields being replaced.
    pub struct UserUpdate from User {
        required id: Output<ID>,
        optional name: Output<scalars::String>,
        optional email: Output<scalars::String>,
        optional role: UserRole,
    }
}
