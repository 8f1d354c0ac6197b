//! Reference users shared by the demo binary and the tests.

use crate::model::{User, UserRole};

pub fn users() -> Vec<User> {
    vec![
        User::new("1", "John Doe", "john.doe@example.com", UserRole::User),
        User::new("2", "Jane Doe", "jane.doe@example.com", UserRole::Admin),
        User::new("3", "Bob Doe", "bob.doe@example.com", UserRole::Guest),
    ]
}
