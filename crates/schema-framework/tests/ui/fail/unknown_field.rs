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
    pub struct Card from Account {
        required id: Output<ID>,
        required nickname: Output<scalars::String>,
    }
}

fn main() {}
