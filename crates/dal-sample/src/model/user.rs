use std::fmt;
use std::str::FromStr;

use schema_framework::graphql_object;
use schema_framework::scalars::{self, Output, ID};
use schema_framework::transport::IdArgs;
use serde::{Deserialize, Serialize};

graphql_object! {
    /// Represents a registered user as the data source exposes it.
    ///
    /// Every field is required and read-only once constructed. Decoding rejects unknown keys,
    /// a role outside [`UserRole`], and any `__typename` other than `"User"`.
    ///
    /// The macro also generates [`UserPartial`], the partial-delivery companion used by
    /// [`Incremental<User>`](schema_framework::Incremental).
    pub struct User as "User" {
        #[id]
        id: Output<ID>,
        name: Output<scalars::String>,
        email: Output<scalars::String>,
        role: UserRole,
    }
}

/// Arguments of the single-user lookup.
pub type QueryUserArgs = IdArgs;

/// Access level of a [`User`]. The wire spelling is upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::User, UserRole::Guest];

    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
            UserRole::Guest => "GUEST",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role spelling outside `ADMIN`, `USER` and `GUEST`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
