pub mod asserts;
pub mod fixtures;
pub mod invokers;

pub use asserts::*;
pub use fixtures::*;
pub use invokers::*;
