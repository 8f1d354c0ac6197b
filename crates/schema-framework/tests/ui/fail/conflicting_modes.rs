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

derive_shape! { pub struct Ranked from Account { optional karma: Output<Int>, empty karma: Output<Int> } }

fn main() {}
