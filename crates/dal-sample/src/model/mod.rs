//! Entity and role definitions, plus the shapes derived from them.

pub mod shapes;
pub mod user;

pub use shapes::*;
pub use user::*;
