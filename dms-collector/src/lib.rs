pub mod client;
pub mod collector;
pub mod error;
pub mod statistics;
pub mod tasks;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;
