//! Shared fixtures and mock servers for integration tests

pub mod fixtures;
pub mod servers;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use servers::*;
