use schema_framework::scalars::{self, Boolean, Int, Output, ID};
use schema_framework::{derive_shape, graphql_object};

graphql_object! {
    pub struct Account as "Account" {
        #[id]
        id: Output<ID>,
        handle: Output<scalars::String>,
        karma: Output<Int>,
        verified: Output<Boolean>,
    }
}

derive_shape! {
    /// Every mode at once.
    pub struct Profile from Account {
        required id: Output<ID>,
        optional handle: Output<scalars::String>,
        maybe karma: Output<Int>,
        empty verified: Output<Boolean>,
    }
}

fn main() {
    let account = Account::new("a1", "ferris", 7, true);
    let profile = Profile::from(&account);
    assert_eq!(profile.handle.as_deref(), Some("ferris"));
    assert_eq!(*profile.karma, Some(7));
}
